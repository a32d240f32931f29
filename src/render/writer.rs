//! Line-oriented output buffer for the rendering walks.

/// Accumulates emitted lines, separating them with single newlines.
///
/// Nodes that have already emitted contribute nothing, so the separator is
/// written only when a new line actually lands; the finished text never
/// carries blank lines or a trailing newline.
#[derive(Debug, Default)]
pub(crate) struct CodeWriter {
    output: String,
}

impl CodeWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append one line of output
    pub(crate) fn line(&mut self, line: &str) {
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output.push_str(line);
    }

    /// Consume the writer and return the accumulated text
    pub(crate) fn finish(self) -> String {
        self.output
    }
}
