//! Per-pass render configuration.

use mp_diagnostic::SourceRegistry;
use mp_fmt::Layout;

/// Display options chosen by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DisplayOptions {
    /// Prefix result lines with their first error or warning.
    pub show_errors: bool,
    pub layout: Layout,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            show_errors: true,
            layout: Layout::Wide,
        }
    }
}

impl DisplayOptions {
    /// Options for a result pane in a viewport `width` pixels wide.
    pub fn for_viewport(width: u32, show_errors: bool) -> Self {
        DisplayOptions {
            show_errors,
            layout: Layout::for_viewport(width),
        }
    }
}

/// Everything one render pass needs besides the payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Source shown in the editor.
    pub active_source: u32,
    /// Source names, for prefixing diagnostics from other sources.
    pub sources: SourceRegistry,
    pub options: DisplayOptions,
}

impl RenderContext {
    pub fn new(active_source: u32) -> Self {
        RenderContext {
            active_source,
            ..RenderContext::default()
        }
    }

    #[must_use]
    pub fn with_sources(mut self, sources: SourceRegistry) -> Self {
        self.sources = sources;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }
}
