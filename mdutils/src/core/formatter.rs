// src/core/formatter.rs
pub mod markdown;
pub mod rules;

use clap::ValueEnum;
use serde::Deserialize;

/// Output of one formatter run over a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub output: String,
    /// The input holds content the rules may mishandle (code spans or
    /// fences), so the result deserves a look.
    pub questionable: bool,
}

impl Formatted {
    #[must_use]
    pub const fn plain(output: String) -> Self {
        Self {
            output,
            questionable: false,
        }
    }
}

/// A whole-document text transform.
///
/// Any `Fn(&str) -> String` is a formatter, so callers can pass a closure
/// wherever the built-ins are accepted.
pub trait Formatter {
    fn format(&self, raw: &str) -> Formatted;
}

impl<F> Formatter for F
where
    F: Fn(&str) -> String,
{
    fn format(&self, raw: &str) -> Formatted {
        Formatted::plain(self(raw))
    }
}

/// The formatters selectable by name from the command line and config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinFormatter {
    /// Full markdown normalization
    #[default]
    Markdown,
    /// Line endings and trailing whitespace only
    Whitespace,
    /// Collapse runs of blank lines, nothing else
    BlankLines,
}

impl BuiltinFormatter {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Whitespace => "whitespace",
            Self::BlankLines => "blank-lines",
        }
    }
}

impl Formatter for BuiltinFormatter {
    fn format(&self, raw: &str) -> Formatted {
        match self {
            Self::Markdown => markdown::MarkdownFormatter.format(raw),
            Self::Whitespace => Formatted::plain(rules::strip_whitespace(raw)),
            Self::BlankLines => Formatted::plain(rules::collapse_newlines(raw)),
        }
    }
}
