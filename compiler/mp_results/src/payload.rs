//! Decoding of the engine's result payload.

use serde_json::error::Category;

use crate::Results;

/// A result payload as handed over by the host.
#[derive(Clone, Debug)]
pub enum ResultPayload<'a> {
    /// Raw JSON text straight from the engine.
    Json(&'a str),
    /// JSON the host already parsed.
    Value(serde_json::Value),
    /// An already typed result.
    Parsed(Results),
}

impl ResultPayload<'_> {
    /// Decode into [`Results`].
    pub fn decode(self) -> Result<Results, PayloadError> {
        match self {
            ResultPayload::Json(text) => serde_json::from_str(text).map_err(PayloadError::from_json),
            ResultPayload::Value(value) => {
                serde_json::from_value(value).map_err(PayloadError::Structure)
            }
            ResultPayload::Parsed(results) => Ok(results),
        }
    }
}

impl<'a> From<&'a str> for ResultPayload<'a> {
    fn from(text: &'a str) -> Self {
        ResultPayload::Json(text)
    }
}

impl<'a> From<&'a String> for ResultPayload<'a> {
    fn from(text: &'a String) -> Self {
        ResultPayload::Json(text)
    }
}

impl From<serde_json::Value> for ResultPayload<'_> {
    fn from(value: serde_json::Value) -> Self {
        ResultPayload::Value(value)
    }
}

impl From<Results> for ResultPayload<'_> {
    fn from(results: Results) -> Self {
        ResultPayload::Parsed(results)
    }
}

/// A payload that could not be interpreted as [`Results`].
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// Not JSON at all, or truncated.
    #[error("result payload is not valid JSON: {0}")]
    Syntax(serde_json::Error),
    /// Valid JSON with the wrong shape, e.g. no `result` field.
    #[error("result payload has an unexpected shape: {0}")]
    Structure(serde_json::Error),
}

impl PayloadError {
    fn from_json(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => PayloadError::Structure(err),
            Category::Syntax | Category::Eof | Category::Io => PayloadError::Syntax(err),
        }
    }

    /// Short name of the failure class.
    pub fn name(&self) -> &'static str {
        match self {
            PayloadError::Syntax(_) => "SyntaxError",
            PayloadError::Structure(_) => "StructureError",
        }
    }

    /// Location of the failure in the JSON text, as (line, column).
    pub fn location(&self) -> (usize, usize) {
        let (PayloadError::Syntax(err) | PayloadError::Structure(err)) = self;
        (err.line(), err.column())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
