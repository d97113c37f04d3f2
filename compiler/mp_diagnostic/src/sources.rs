//! Display names of the sources known to the engine.

/// Ordered source names, index-aligned with the engine's source indices.
///
/// The host registers sources in the same order it hands them to the
/// engine, typically a shared `start` script followed by `main`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceRegistry {
    names: Vec<String>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SourceRegistry {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Register the next source and return its index.
    pub fn register(&mut self, name: impl Into<String>) -> u32 {
        self.names.push(name.into());
        u32::try_from(self.names.len() - 1).unwrap_or(u32::MAX)
    }

    pub fn name(&self, index: u32) -> Option<&str> {
        self.names
            .get(usize::try_from(index).ok()?)
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Prefix `message` with the name of the source it came from.
    ///
    /// Unregistered indices are shown as `#<index>`.
    pub fn prefix_message(&self, index: u32, message: &str) -> String {
        match self.name(index) {
            Some(name) => format!("[{name}]: {message}"),
            None => format!("[#{index}]: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_returns_sequential_indices() {
        let mut sources = SourceRegistry::new();

        assert_eq!(sources.register("start"), 0);
        assert_eq!(sources.register("main"), 1);
        assert_eq!(sources.name(1), Some("main"));
        assert_eq!(sources.len(), 2);
    }

    #[test]
    fn prefix_uses_registered_name() {
        let sources = SourceRegistry::from_names(["start", "main"]);

        assert_eq!(sources.prefix_message(0, "oops"), "[start]: oops");
    }

    #[test]
    fn prefix_falls_back_to_index() {
        let sources = SourceRegistry::new();

        assert!(sources.is_empty());
        assert_eq!(sources.prefix_message(3, "oops"), "[#3]: oops");
    }
}
