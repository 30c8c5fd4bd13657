//! Emission context: the text buffer declarations are written into

/// Indentation unit for one nesting level
const INDENT: &str = "  ";

/// Growing text buffer with indentation tracking
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeContext {
    code: String,
    indent_level: usize,
}

impl TypeContext {
    /// Create an empty context at indentation level 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text verbatim
    pub fn push(&mut self, code: &str) {
        self.code.push_str(code);
    }

    /// Append a newline followed by the current indentation
    pub fn newline(&mut self) {
        self.code.push('\n');
        for _ in 0..self.indent_level {
            self.code.push_str(INDENT);
        }
    }

    /// Go one level deeper and start a new line there
    pub fn indent(&mut self) {
        self.indent_level += 1;
        self.newline();
    }

    /// Go one level shallower and start a new line there
    pub fn deindent(&mut self) {
        debug_assert!(self.indent_level > 0, "deindent without matching indent");
        self.indent_level = self.indent_level.saturating_sub(1);
        self.newline();
    }

    /// Text accumulated so far
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Current indentation level
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Consume the context, returning its text
    pub fn into_code(self) -> String {
        self.code
    }
}
