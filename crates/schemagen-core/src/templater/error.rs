//! Error types for the templating module.

use std::fmt;
use thiserror::Error;

/// Where in the template an error was raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLocation {
    pub name: Option<String>,
    /// 1-indexed line number.
    pub line: Option<usize>,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, self.line) {
            (Some(name), Some(line)) => write!(f, "{name}:{line}"),
            (Some(name), None) => write!(f, "{name}"),
            (None, Some(line)) => write!(f, "line {line}"),
            (None, None) => write!(f, "<unknown>"),
        }
    }
}

/// Errors that can occur while parsing or rendering a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template syntax is invalid (unclosed tags, unknown block tags).
    /// Raised before anything is written.
    #[error("template syntax error at {location}: {message}")]
    Syntax {
        message: String,
        location: SourceLocation,
    },

    /// Evaluation failed: a helper got a value it cannot handle, or the
    /// template referenced an attribute or variable that does not exist.
    /// Output written before the failure is not retracted.
    #[error("template execution error at {location}: {message}")]
    Execution {
        message: String,
        location: SourceLocation,
    },

    /// The output sink refused a write.
    #[error("failed to write template output: {0}")]
    Write(String),
}

impl TemplateError {
    /// Location of the failure in the template, when known.
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::Syntax { location, .. } | Self::Execution { location, .. } => Some(location),
            Self::Write(_) => None,
        }
    }
}

#[cfg(feature = "templating")]
impl From<minijinja::Error> for TemplateError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        let message = match err.detail() {
            Some(detail) => format!("{}: {detail}", err.kind()),
            None => err.kind().to_string(),
        };
        let location = SourceLocation {
            name: err.name().map(str::to_owned),
            line: err.line(),
        };

        match err.kind() {
            ErrorKind::SyntaxError => Self::Syntax { message, location },
            ErrorKind::WriteFailure => Self::Write(message),
            _ => Self::Execution { message, location },
        }
    }
}
