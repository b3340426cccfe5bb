//! Indented writer and the sink abstraction it targets.
//!
//! [`CodeWriter`] is the thin adapter between the generator and the output
//! sink: it interpolates `{N}` templates, splits multi-line results on line
//! boundaries, and forwards each line to an indentation-tracking sink. The
//! sink owns the indent counter and prefixes every non-empty line with the
//! current indentation.

use super::template::{self, TemplateError};

/// Indentation-tracking line sink the writer forwards into.
///
/// The surrounding tool may supply its own implementation (e.g. one that
/// streams to a file); [`TextSink`] is the default in-memory buffer.
pub trait IndentSink {
    /// Write a fragment without terminating the line. A subsequent call
    /// continues on the same line.
    fn write(&mut self, fragment: &str);
    /// Write one full line, indented, followed by a line break.
    fn write_line(&mut self, line: &str);
    /// Current indent level, in indent units.
    fn indent(&self) -> usize;
    /// Set the indent level.
    fn set_indent(&mut self, level: usize);
}

/// Default in-memory sink: a string buffer with 4-space indent units.
#[derive(Debug)]
pub struct TextSink {
    output: String,
    indent_level: usize,
    indent_width: usize,
    at_line_start: bool,
}

impl Default for TextSink {
    fn default() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width: 4,
            at_line_start: true,
        }
    }
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of spaces per indent unit.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Consume the sink and return the accumulated text.
    pub fn finish(self) -> String {
        self.output
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            let indent = " ".repeat(self.indent_level * self.indent_width);
            self.output.push_str(&indent);
            self.at_line_start = false;
        }
    }
}

impl IndentSink for TextSink {
    fn write(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(fragment);
    }

    fn write_line(&mut self, line: &str) {
        // Blank lines carry no indentation padding.
        if !line.is_empty() {
            self.write_indent();
            self.output.push_str(line);
        }
        self.output.push('\n');
        self.at_line_start = true;
    }

    fn indent(&self) -> usize {
        self.indent_level
    }

    fn set_indent(&mut self, level: usize) {
        self.indent_level = level;
    }
}

/// Template-aware writer over an [`IndentSink`].
///
/// When `args` is empty the template is forwarded verbatim, unformatted, so
/// literal braces in emitted code do not need escaping. With arguments, the
/// template goes through [`template::expand`] first.
pub struct CodeWriter<'a> {
    sink: &'a mut dyn IndentSink,
}

impl<'a> CodeWriter<'a> {
    pub fn new(sink: &'a mut dyn IndentSink) -> Self {
        Self { sink }
    }

    /// Interpolate and write without terminating the final line.
    ///
    /// Multi-line results are split on line boundaries; every line but the
    /// last is emitted as a full line, the last fragment stays open so a
    /// subsequent `write`/`write_line` continues on the same line.
    pub fn write(&mut self, template: &str, args: &[&str]) -> Result<(), TemplateError> {
        let text = self.interpolate(template, args)?;
        let lines: Vec<&str> = split_lines(&text);
        let last = lines.len() - 1;
        for (i, line) in lines.iter().enumerate() {
            if i == last {
                self.sink.write(line);
            } else {
                self.sink.write_line(line);
            }
        }
        Ok(())
    }

    /// Interpolate and write, terminating every resulting line.
    pub fn write_line(&mut self, template: &str, args: &[&str]) -> Result<(), TemplateError> {
        let text = self.interpolate(template, args)?;
        for line in split_lines(&text) {
            self.sink.write_line(line);
        }
        Ok(())
    }

    /// Terminate the current line (or emit a blank one).
    pub fn newline(&mut self) {
        self.sink.write_line("");
    }

    /// Current indent level of the underlying sink.
    pub fn indent(&self) -> usize {
        self.sink.indent()
    }

    /// Set the indent level of the underlying sink.
    pub fn set_indent(&mut self, level: usize) {
        self.sink.set_indent(level);
    }

    /// Run `f` with the indent level raised by one unit.
    ///
    /// The previous level is restored afterwards even when `f` fails, so a
    /// nested emission error cannot leave the sink mis-indented. Emission
    /// failures are all template failures at this layer; callers with richer
    /// error types convert at their own boundary.
    pub fn indented<F>(&mut self, f: F) -> Result<(), TemplateError>
    where
        F: FnOnce(&mut Self) -> Result<(), TemplateError>,
    {
        let saved = self.sink.indent();
        self.sink.set_indent(saved + 1);
        let result = f(self);
        self.sink.set_indent(saved);
        result
    }

    fn interpolate(&self, template: &str, args: &[&str]) -> Result<String, TemplateError> {
        if args.is_empty() {
            Ok(template.to_string())
        } else {
            template::expand(template, args)
        }
    }
}

fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
