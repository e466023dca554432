use xgbgen_resolve::TypeResolver;
use xgbgen_syntax::Document;

/// State shared by every emitter during one run.
///
/// Gives read access to the resolved document and the type engine, and
/// collects output lines in the order they are written.
pub struct EmitContext<'a> {
    types: TypeResolver<'a>,
    lines: Vec<String>,
}

impl<'a> EmitContext<'a> {
    pub fn new(types: TypeResolver<'a>) -> Self {
        Self {
            types,
            lines: Vec::new(),
        }
    }

    pub fn document(&self) -> &'a Document {
        self.types.document()
    }

    pub fn types(&self) -> &TypeResolver<'a> {
        &self.types
    }

    /// Appends one output line.
    pub fn putln(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The collected output, one line per `putln`, newline terminated.
    pub fn output(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
