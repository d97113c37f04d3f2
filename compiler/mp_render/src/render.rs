//! The render pass.

use mp_diagnostic::{to_annotations, Annotation, PositionError, PositionResolver};
use mp_fmt::build_transcripts;
use mp_results::{PayloadError, ResultPayload};
use serde::Serialize;

use crate::context::RenderContext;
use crate::sink::DisplaySink;

/// Everything one render pass produces.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rendered {
    /// Verbose transcript, one line per result line.
    pub output_text: String,
    /// Transcript aligned to the lines of the active source.
    pub result_text: String,
    /// Diagnostics placed in the active document.
    pub annotations: Vec<Annotation>,
}

impl Rendered {
    /// Output for a payload that could not be decoded.
    ///
    /// The failure is spelled out in both panes so it is not mistaken for
    /// an empty result.
    pub fn degraded(err: &PayloadError) -> Self {
        let message = err.to_string();
        Rendered {
            output_text: format!("{message}\n{}\n{err:?}\n", err.name()),
            result_text: format!("{message}\n"),
            annotations: Vec::new(),
        }
    }

    /// Write both transcripts to `sink`.
    pub fn write_to<S: DisplaySink + ?Sized>(&self, sink: &mut S) {
        sink.write_output(&self.output_text);
        sink.write_result(&self.result_text);
    }
}

/// Render one evaluation result for `ctx.active_source`.
///
/// `resolver` maps lines of the active document to offsets. An
/// undecodable payload yields [`Rendered::degraded`]; a diagnostic outside
/// the document fails the pass.
#[tracing::instrument(level = "debug", skip_all, fields(source = ctx.active_source))]
pub fn render<'a, P, R>(
    payload: P,
    ctx: &RenderContext,
    resolver: &R,
) -> Result<Rendered, PositionError>
where
    P: Into<ResultPayload<'a>>,
    R: PositionResolver + ?Sized,
{
    let results = match payload.into().decode() {
        Ok(results) => results,
        Err(err) => {
            let (line, column) = err.location();
            tracing::warn!(%err, line, column, "result payload could not be interpreted");
            return Ok(Rendered::degraded(&err));
        }
    };

    let transcripts = build_transcripts(
        &results,
        ctx.active_source,
        ctx.options.show_errors,
        ctx.options.layout,
    );
    let annotations = to_annotations(&results.errors, ctx.active_source, &ctx.sources, resolver)?;

    tracing::debug!(
        lines = results.result.len(),
        errors = results.errors.len(),
        annotations = annotations.len(),
        "render pass complete"
    );
    Ok(Rendered {
        output_text: transcripts.output_text,
        result_text: transcripts.result_text,
        annotations,
    })
}

/// Render and write both transcripts into `sink`, returning the
/// annotations for the host's decoration system.
///
/// Nothing is written when the pass fails.
pub fn render_into<'a, P, R, S>(
    payload: P,
    ctx: &RenderContext,
    resolver: &R,
    sink: &mut S,
) -> Result<Vec<Annotation>, PositionError>
where
    P: Into<ResultPayload<'a>>,
    R: PositionResolver + ?Sized,
    S: DisplaySink + ?Sized,
{
    let rendered = render(payload, ctx, resolver)?;
    rendered.write_to(sink);
    Ok(rendered.annotations)
}
