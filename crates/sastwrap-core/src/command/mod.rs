//! Typed command-line construction.
//!
//! Child processes are always created from an ordered token list, never from
//! a shell string, so values with embedded whitespace need no escaping on the
//! way to the OS. A token may still be marked *quoted*: the quotes show up in
//! the rendered form, which is what gets logged and what the reporting CLI's
//! list syntax is built from.

pub mod mapping;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    text: String,
    quoted: bool,
}

/// One external process invocation: a program plus ordered argument tokens.
///
/// Built once by the dispatcher, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<Token>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a plain token.
    pub fn arg(&mut self, text: impl Into<String>) -> &mut Self {
        self.args.push(Token {
            text: text.into(),
            quoted: false,
        });
        self
    }

    /// Append a token rendered inside double quotes.
    ///
    /// The quotes exist only in the rendered form; the argv handed to the OS
    /// carries the raw text.
    pub fn quoted_arg(&mut self, text: impl Into<String>) -> &mut Self {
        self.args.push(Token {
            text: text.into(),
            quoted: true,
        });
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Raw argument values in order, for process creation.
    pub fn arg_values(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(|t| t.text.as_str())
    }

    /// Space-joined textual form, with quoted tokens wrapped in double quotes.
    pub fn render(&self) -> String {
        let mut out = self.program.clone();
        for token in &self.args {
            out.push(' ');
            if token.quoted {
                out.push('"');
                out.push_str(&token.text);
                out.push('"');
            } else {
                out.push_str(&token.text);
            }
        }
        out
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_wraps_quoted_tokens_only() {
        let mut cmd = CommandLine::new("node");
        cmd.arg("--projectName").quoted_arg("My App").arg("--sarif");

        assert_eq!(cmd.render(), "node --projectName \"My App\" --sarif");
    }

    #[test]
    fn arg_values_never_carry_quotes() {
        let mut cmd = CommandLine::new("node");
        cmd.quoted_arg("My App");

        let values: Vec<&str> = cmd.arg_values().collect();
        assert_eq!(values, vec!["My App"]);
    }

    #[test]
    fn display_matches_render() {
        let mut cmd = CommandLine::new("./gitleaks");
        cmd.arg("dir").arg("--exit-code").arg("0");

        assert_eq!(format!("{cmd}"), cmd.render());
    }
}
