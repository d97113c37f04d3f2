//! Display surfaces for the rendered transcripts.

/// Where a render pass writes its transcripts.
///
/// Each call replaces the whole content of the corresponding pane.
pub trait DisplaySink {
    fn write_output(&mut self, text: &str);

    fn write_result(&mut self, text: &str);
}

/// In-memory sink holding the last written transcripts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringSink {
    pub output: String,
    pub result: String,
}

impl StringSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for StringSink {
    fn write_output(&mut self, text: &str) {
        text.clone_into(&mut self.output);
    }

    fn write_result(&mut self, text: &str) {
        text.clone_into(&mut self.result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_replace_previous_content() {
        let mut sink = StringSink::new();
        sink.write_output("first");
        sink.write_output("second");
        sink.write_result("r");

        assert_eq!(sink.output, "second");
        assert_eq!(sink.result, "r");
    }
}
