//! Math Parser Playground WASM Bindings
//!
//! Exposes the result rendering pipeline to the browser editor. Everything
//! crosses the boundary as JSON strings.

use mp_diagnostic::{LineOffsetTable, SourceRegistry};
use mp_fmt::WIDE_LAYOUT_MIN_WIDTH;
use mp_render::{render, Annotation, DisplayOptions, RenderContext};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Import console.log from JavaScript
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Result of a render pass, serialized as JSON for JavaScript.
#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RenderResult {
    pub success: bool,
    pub output_text: String,
    pub result_text: String,
    pub annotations: Vec<Annotation>,
    pub error: Option<String>,
}

/// Initialize the WASM module (called once on load).
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook to log to console
    std::panic::set_hook(Box::new(console_error_panic_hook));
}

fn console_error_panic_hook(info: &std::panic::PanicHookInfo) {
    log(&info.to_string());
}

/// Render an engine result for the source being edited.
///
/// Parameters:
/// - `payload`: the engine's result JSON
/// - `source_index`: index of the source shown in the editor
/// - `show_errors`: prefix result lines with error/warning markers
/// - `viewport_width`: width of the browser viewport in pixels
/// - `document`: current text of the edited source
/// - `source_names`: JSON array of source names, in engine order
///
/// Returns a JSON object with:
/// - `success`: false when the result does not fit `document`
/// - `outputText`, `resultText`: the two transcripts
/// - `annotations`: `[{message, severity, from, to}]` for the lint layer
/// - `error`: why the pass failed (if it did)
#[wasm_bindgen]
pub fn render_result(
    payload: &str,
    source_index: u32,
    show_errors: bool,
    viewport_width: u32,
    document: &str,
    source_names: &str,
) -> String {
    let result = render_result_internal(
        payload,
        source_index,
        DisplayOptions::for_viewport(viewport_width, show_errors),
        document,
        source_names,
    );
    serde_json::to_string(&result).unwrap_or_else(|e| {
        format!(r#"{{"success":false,"error":"Serialization error: {e}"}}"#)
    })
}

/// Viewport width above which the wide layout is used.
#[wasm_bindgen]
pub fn wide_layout_min_width() -> u32 {
    WIDE_LAYOUT_MIN_WIDTH
}

fn render_result_internal(
    payload: &str,
    source_index: u32,
    options: DisplayOptions,
    document: &str,
    source_names: &str,
) -> RenderResult {
    let names: Vec<String> = match serde_json::from_str(source_names) {
        Ok(names) => names,
        Err(e) => {
            return RenderResult {
                error: Some(format!("Invalid source names: {e}")),
                ..RenderResult::default()
            };
        }
    };
    let ctx = RenderContext::new(source_index)
        .with_sources(SourceRegistry::from_names(names))
        .with_options(options);

    match render(payload, &ctx, &LineOffsetTable::build(document)) {
        Ok(rendered) => RenderResult {
            success: true,
            output_text: rendered.output_text,
            result_text: rendered.result_text,
            annotations: rendered.annotations,
            error: None,
        },
        Err(e) => RenderResult {
            error: Some(e.to_string()),
            ..RenderResult::default()
        },
    }
}
