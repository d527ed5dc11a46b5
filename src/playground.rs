//! Code playground: per-language starter samples, canned outputs for the
//! languages the page cannot run, and a pluggable evaluator for the one it
//! can.

use thiserror::Error;

use crate::samples;

pub const NO_OUTPUT_MESSAGE: &str = "Code executed successfully (no output).";
pub const FALLBACK_OUTPUT: &str = "Code compiled and executed successfully!";
pub const EMPTY_SOURCE_MESSAGE: &str = "Please enter some code to execute.";
pub const CLEARED_MESSAGE: &str = "Code cleared. Ready for new input...";
pub const EXECUTING_HTML: &str = r#"<div class="loading">Executing code...</div>"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    Java,
    Python,
    Html,
    Css,
    C,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::JavaScript,
        Language::Java,
        Language::Python,
        Language::Html,
        Language::Css,
        Language::C,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.tag() == tag)
    }

    /// Value of the tab's `data-lang` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Java => "java",
            Self::Python => "python",
            Self::Html => "html",
            Self::Css => "css",
            Self::C => "c",
        }
    }

    pub fn sample(self) -> &'static str {
        match self {
            Self::JavaScript => samples::JAVASCRIPT,
            Self::Java => samples::JAVA,
            Self::Python => samples::PYTHON,
            Self::Html => samples::HTML,
            Self::Css => samples::CSS,
            Self::C => samples::C,
        }
    }

    /// Fixed output for languages that are not evaluated.
    pub fn canned_output(self) -> Option<&'static str> {
        match self {
            Self::JavaScript => None,
            Self::Java => Some(samples::JAVA_OUTPUT),
            Self::Python => Some(samples::PYTHON_OUTPUT),
            Self::Html => Some(samples::HTML_OUTPUT),
            Self::Css => Some(samples::CSS_OUTPUT),
            Self::C => Some(samples::C_OUTPUT),
        }
    }

    /// Whether source in this language is really evaluated.
    pub fn is_native(self) -> bool {
        matches!(self, Self::JavaScript)
    }
}

/// Source for `tag`, or an empty string for an unknown tag.
pub fn load_sample(tag: &str) -> &'static str {
    Language::from_tag(tag).map(Language::sample).unwrap_or("")
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EvalError {
    pub message: String,
}

impl EvalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Runs native-language source and returns every line it logged, in order.
///
/// Implementations must restore whatever output sink they hijack before
/// returning, on success and on failure alike.
pub trait Evaluator {
    fn evaluate(&self, source: &str) -> Result<Vec<String>, EvalError>;
}

/// Evaluator for targets without a script engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledEvaluator;

impl Evaluator for DisabledEvaluator {
    fn evaluate(&self, _source: &str) -> Result<Vec<String>, EvalError> {
        Err(EvalError::new("code evaluation is not available here"))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutput {
    /// One rendered line per entry.
    Lines(Vec<String>),
    /// Plain status text.
    Message(String),
    Error(String),
}

impl RunOutput {
    fn from_text(text: &str) -> Self {
        RunOutput::Lines(text.split('\n').map(str::to_string).collect())
    }

    pub fn to_html(&self) -> String {
        match self {
            RunOutput::Lines(lines) => lines
                .iter()
                .map(|line| format!(r#"<div class="output-line">{}</div>"#, escape_html(line)))
                .collect(),
            RunOutput::Message(text) => escape_html(text),
            RunOutput::Error(message) => {
                format!(r#"<div class="error">Error: {}</div>"#, escape_html(message))
            }
        }
    }
}

/// What pressing Run does with the editor text: the trimmed source to run,
/// or the message to show instead when there is nothing to run.
pub fn prepare_run(source: &str) -> Result<&str, &'static str> {
    let source = source.trim();
    if source.is_empty() {
        Err(EMPTY_SOURCE_MESSAGE)
    } else {
        Ok(source)
    }
}

/// Run `source` as language `tag`.
///
/// Only the native language looks at `source`; every other known language
/// answers with its canned output, and unknown tags with a generic success
/// line.
pub fn run<E: Evaluator + ?Sized>(tag: &str, source: &str, evaluator: &E) -> RunOutput {
    let Some(lang) = Language::from_tag(tag) else {
        return RunOutput::from_text(FALLBACK_OUTPUT);
    };
    if !lang.is_native() {
        return RunOutput::from_text(lang.canned_output().unwrap_or(FALLBACK_OUTPUT));
    }
    match evaluator.evaluate(source) {
        Ok(lines) if lines.is_empty() => RunOutput::Message(NO_OUTPUT_MESSAGE.to_string()),
        Ok(lines) => RunOutput::Lines(lines),
        Err(err) => {
            log::warn!("{} evaluation failed: {err}", lang.tag());
            RunOutput::Error(err.message)
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
