//! Result pane layout selection.

/// Viewport width, in pixels, above which the wide layout is used.
pub const WIDE_LAYOUT_MIN_WIDTH: u32 = 880;

/// How much the result pane shows per line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `name=value`, with error and warning markers.
    #[default]
    Wide,
    /// The bare value only.
    Narrow,
}

impl Layout {
    /// Pick the layout for a viewport `width` pixels wide.
    pub fn for_viewport(width: u32) -> Self {
        if width > WIDE_LAYOUT_MIN_WIDTH {
            Layout::Wide
        } else {
            Layout::Narrow
        }
    }

    pub fn is_wide(self) -> bool {
        self == Layout::Wide
    }
}
