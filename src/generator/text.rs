/// Append-only buffer the changelog is accumulated in
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogBuilder {
    buf: String,
}

impl LogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    pub fn push_line(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self.buf.push('\n');
        self
    }

    /// Drop every occurrence of `marker` from what has been written so far
    pub fn remove_all(&mut self, marker: &str) -> &mut Self {
        if !marker.is_empty() && self.buf.contains(marker) {
            self.buf = self.buf.replace(marker, "");
        }
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_finish() {
        let mut log = LogBuilder::new();
        log.push("# Title").push_line("").push_line("- item");
        assert_eq!(log.finish(), "# Title\n- item\n");
    }

    #[test]
    fn test_remove_all() {
        let mut log = LogBuilder::new();
        log.push("a*credit*b*credit*c");
        log.remove_all("*credit*");
        assert_eq!(log.finish(), "abc");
    }
}
