//! Flattening of engine diagnostics into editor annotations.

use mp_results::{ErrorResult, MAX_NESTING_DEPTH};

use crate::{Annotation, PositionError, PositionResolver, SourceRegistry};

/// Convert `errors` into annotations for the buffer of `active_source`.
///
/// Each diagnostic is followed by the annotations of its stack trace,
/// depth first, before its next sibling. Ranges in the active source are
/// mapped through `resolver`; ranges in other sources become a zero-width
/// marker at the start of the first line, with the source name prefixed
/// to the message.
///
/// A range the resolver cannot place fails the whole conversion.
#[tracing::instrument(level = "debug", skip_all, fields(source = active_source, count = errors.len()))]
pub fn to_annotations<R>(
    errors: &[ErrorResult],
    active_source: u32,
    sources: &SourceRegistry,
    resolver: &R,
) -> Result<Vec<Annotation>, PositionError>
where
    R: PositionResolver + ?Sized,
{
    let mapper = Mapper {
        active_source,
        sources,
        resolver,
    };
    let mut annotations = Vec::with_capacity(errors.len());
    mapper.collect(errors, 0, &mut annotations)?;
    tracing::debug!(annotations = annotations.len(), "diagnostics mapped");
    Ok(annotations)
}

struct Mapper<'a, R: ?Sized> {
    active_source: u32,
    sources: &'a SourceRegistry,
    resolver: &'a R,
}

impl<R> Mapper<'_, R>
where
    R: PositionResolver + ?Sized,
{
    fn collect(
        &self,
        errors: &[ErrorResult],
        depth: usize,
        out: &mut Vec<Annotation>,
    ) -> Result<(), PositionError> {
        for error in errors {
            out.push(self.annotate(error)?);
            if error.stack_trace.is_empty() {
                continue;
            }
            if depth + 1 >= MAX_NESTING_DEPTH {
                tracing::warn!(
                    depth,
                    msg = %error.msg,
                    "stack trace nested too deeply, remaining entries skipped"
                );
                continue;
            }
            self.collect(&error.stack_trace, depth + 1, out)?;
        }
        Ok(())
    }

    fn annotate(&self, error: &ErrorResult) -> Result<Annotation, PositionError> {
        let range = &error.range;
        let local = range.source_index == self.active_source;

        let placed = if local {
            self.offset(range.start_line, range.start_pos).and_then(|from| {
                let to = self.offset(range.end_line, range.end_pos)?;
                Ok((from, to))
            })
        } else {
            self.resolver.line_start(1).map(|start| (start, start))
        };
        let (from, to) = placed.inspect_err(|err| {
            tracing::error!(?error, %err, "diagnostic does not fit the active document");
        })?;

        let message = if local {
            error.msg.clone()
        } else {
            self.sources.prefix_message(range.source_index, &error.msg)
        };

        Ok(Annotation {
            message,
            severity: error.kind.into(),
            from,
            to,
        })
    }

    /// Flat offset of a zero-based `(line, pos)` pair.
    fn offset(&self, line: u32, pos: u32) -> Result<usize, PositionError> {
        let start = self.resolver.line_start(line.saturating_add(1))?;
        Ok(start + pos as usize)
    }
}
