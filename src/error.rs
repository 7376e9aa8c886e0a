// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

/// The main error type for INI scanning, parsing, building and access.
///
/// Lexical, parse and build errors render as `"<message> (line <line>)"`.
#[derive(Debug, Clone, PartialEq)]
pub enum IniError {
    /// Raised by the scanner, e.g. for a string literal that is not closed.
    LexError {
        message: String,
        line: u32,
        column: u32,
        hint: Option<String>,
        code: Option<u32>,
    },
    ParseError {
        message: String,
        line: u32,
        column: u32,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised only under `DuplicatePolicy::Reject`.
    BuildError {
        message: String,
        line: u32,
        hint: Option<String>,
        code: Option<u32>,
    },
    NotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        line: u32,
        hint: Option<String>,
        code: Option<u32>,
    },
    ValidationError {
        message: String,
        line: u32,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when an in-memory buffer or reader cannot be turned into text.
    ReadError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ExportError {
        message: String,
        code: Option<u32>,
    },
}

impl IniError {
    /// Source line the error points at, if it has one.
    pub fn line(&self) -> Option<u32> {
        match self {
            IniError::LexError { line, .. }
            | IniError::ParseError { line, .. }
            | IniError::BuildError { line, .. } => Some(*line),
            IniError::TypeError { line, .. } | IniError::ValidationError { line, .. } if *line > 0 => {
                Some(*line)
            }
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            IniError::LexError { message, .. }
            | IniError::ParseError { message, .. }
            | IniError::BuildError { message, .. }
            | IniError::TypeError { message, .. }
            | IniError::ValidationError { message, .. }
            | IniError::FileError { message, .. }
            | IniError::ReadError { message, .. }
            | IniError::ExportError { message, .. } => message.clone(),
            IniError::NotFound { path, .. } => format!("Path '{}' not found in configuration", path),
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            IniError::LexError { hint, .. }
            | IniError::ParseError { hint, .. }
            | IniError::BuildError { hint, .. }
            | IniError::NotFound { hint, .. }
            | IniError::TypeError { hint, .. }
            | IniError::ValidationError { hint, .. }
            | IniError::FileError { hint, .. }
            | IniError::ReadError { hint, .. } => hint.as_deref(),
            IniError::ExportError { .. } => None,
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            IniError::LexError { code, .. }
            | IniError::ParseError { code, .. }
            | IniError::BuildError { code, .. }
            | IniError::NotFound { code, .. }
            | IniError::TypeError { code, .. }
            | IniError::ValidationError { code, .. }
            | IniError::FileError { code, .. }
            | IniError::ReadError { code, .. }
            | IniError::ExportError { code, .. } => *code,
        }
    }
}

fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
}

impl fmt::Display for IniError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniError::LexError { message, line, hint, .. }
            | IniError::ParseError { message, line, hint, .. }
            | IniError::BuildError { message, line, hint, .. } =>
                write!(f, "{} (line {}){}", message, line, hint_suffix(hint)),
            IniError::NotFound { path, hint, .. } =>
                write!(f, "Path '{}' not found in configuration{}", path, hint_suffix(hint)),
            IniError::TypeError { message, line, hint, .. }
            | IniError::ValidationError { message, line, hint, .. } => {
                if *line > 0 {
                    write!(f, "{} (line {}){}", message, line, hint_suffix(hint))
                } else {
                    write!(f, "{}{}", message, hint_suffix(hint))
                }
            }
            IniError::FileError { message, path, hint, .. } =>
                write!(f, "File error '{}': {}{}", path, message, hint_suffix(hint)),
            IniError::ReadError { message, hint, .. } =>
                write!(f, "Read error: {}{}", message, hint_suffix(hint)),
            IniError::ExportError { message, .. } =>
                write!(f, "Export error: {}", message),
        }
    }
}

impl std::error::Error for IniError {}
