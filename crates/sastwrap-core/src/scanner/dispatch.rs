//! Expansion of scanner descriptors into concrete command lines.

use crate::command::CommandLine;
use crate::config::{LogLevel, ScanConfiguration};
use crate::constants;
use crate::scanner::catalog::{OutputPathStyle, Piece, ScannerDescriptor};

/// Split a pass-through option string into tokens.
///
/// Whitespace separates tokens; double-quoted substrings keep their embedded
/// whitespace and lose the quotes. No other shell syntax is honored because
/// no shell is ever involved.
pub fn split_options(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut token_open = false;

    for ch in input.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                token_open = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if token_open {
                    tokens.push(std::mem::take(&mut current));
                    token_open = false;
                }
            }
            c => {
                current.push(c);
                token_open = true;
            }
        }
    }
    if token_open {
        tokens.push(current);
    }
    tokens
}

/// Expand a descriptor's template into the scanner invocation.
///
/// Verbose arguments appear exactly when the configured log level is debug;
/// non-blank user pass-through options replace the descriptor defaults.
pub fn build_scanner_command(
    descriptor: &ScannerDescriptor,
    config: &ScanConfiguration,
) -> CommandLine {
    let sarif_out = constants::sarif_output_file();
    let user_options: Vec<String> = config
        .other_options
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(split_options)
        .unwrap_or_default();

    let mut cmd = CommandLine::new(descriptor.binary);
    for piece in descriptor.template {
        match piece {
            Piece::Lit(token) => {
                cmd.arg(*token);
            }
            Piece::Verbose => {
                if config.log_level == LogLevel::Debug {
                    for token in descriptor.verbose_args {
                        cmd.arg(*token);
                    }
                }
            }
            Piece::Options => {
                if user_options.is_empty() {
                    for token in descriptor.default_options {
                        cmd.arg(*token);
                    }
                } else {
                    for token in &user_options {
                        cmd.arg(token.clone());
                    }
                }
            }
            Piece::OutputPath(OutputPathStyle::Separate) => {
                cmd.arg(sarif_out.clone());
            }
            Piece::OutputPath(OutputPathStyle::Assigned(prefix)) => {
                cmd.arg(format!("{prefix}{sarif_out}"));
            }
            Piece::WorkingDir => {
                cmd.arg(constants::WORKING_DIRECTORY);
            }
        }
    }
    cmd
}
