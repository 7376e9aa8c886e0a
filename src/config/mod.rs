// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::ast::{Document, Section, Value};
use crate::builder::DuplicatePolicy;
use crate::parser;
use crate::IniError;

mod access;
mod validation;
mod conversion;
mod helpers;

/// A parsed INI configuration together with its source text.
///
/// Every loader reads the whole input up front and hands it to the parser in
/// one piece; failures come back as the same error list that
/// [`crate::parse`] returns.
#[derive(Debug, Clone)]
pub struct IniConfig {
    document: Document,
    raw_content: String, // Store for error reporting
}

impl IniConfig {
    /// Parse an INI config from a string (no file I/O)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, Vec<IniError>> {
        Self::from_str_with_policy(content, DuplicatePolicy::default())
    }

    pub fn from_str_with_policy(content: &str, policy: DuplicatePolicy) -> Result<Self, Vec<IniError>> {
        let document = parser::parse_document(content, policy)?;
        Ok(Self {
            document,
            raw_content: content.to_string(),
        })
    }

    /// Parse a UTF-8 byte buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Vec<IniError>> {
        let content = std::str::from_utf8(bytes).map_err(|e| {
            vec![IniError::ReadError {
                message: format!("Input is not valid UTF-8: {}", e),
                hint: Some("Save the file with UTF-8 encoding".into()),
                code: Some(302),
            }]
        })?;
        Self::from_str(content)
    }

    /// Read everything from `reader`, then parse it.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, Vec<IniError>> {
        let mut content = String::new();
        reader.read_to_string(&mut content).map_err(|e| {
            vec![IniError::ReadError {
                message: format!("Failed to read input: {}", e),
                hint: None,
                code: Some(302),
            }]
        })?;
        Self::from_str(&content)
    }

    /// Load an INI file. A leading `~/` expands to the home directory.
    ///
    /// # Example
    /// ```ignore
    /// let config = IniConfig::from_file("~/.config/app/settings.ini")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Vec<IniError>> {
        Self::from_file_with_policy(path, DuplicatePolicy::default())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file_with_policy<P: AsRef<Path>>(path: P, policy: DuplicatePolicy) -> Result<Self, Vec<IniError>> {
        let resolved = helpers::resolve_path(path.as_ref());

        let content = fs::read_to_string(&resolved).map_err(|e| {
            vec![IniError::FileError {
                message: format!("Failed to read file: {}", e),
                path: resolved.to_string_lossy().to_string(),
                hint: Some("Check that the file exists and is readable".into()),
                code: Some(301),
            }]
        })?;

        Self::from_str_with_policy(&content, policy)
    }

    /// Load an INI file with fallback support
    ///
    /// Tries to load from the primary path first. If that file cannot be read,
    /// attempts to load from the fallback path. Parse errors in the primary
    /// file are returned as they are.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, Vec<IniError>> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(errors) if matches!(errors.as_slice(), [IniError::FileError { .. }]) => {
                tracing::debug!(
                    primary = %primary.as_ref().display(),
                    fallback = %fallback.as_ref().display(),
                    "primary config unreadable, trying fallback"
                );
                Self::from_file(&fallback).map_err(|errors| {
                    errors
                        .into_iter()
                        .map(|e| match e {
                            IniError::FileError { message, .. } => IniError::FileError {
                                message: format!(
                                    "Failed to load config from primary path '{}' or fallback path '{}': {}",
                                    primary.as_ref().display(),
                                    fallback.as_ref().display(),
                                    message
                                ),
                                path: format!(
                                    "{} (fallback: {})",
                                    primary.as_ref().display(),
                                    fallback.as_ref().display()
                                ),
                                hint: Some("Check that at least one of the config files exists".into()),
                                code: Some(301),
                            },
                            other => other,
                        })
                        .collect()
                })
            }
            Err(errors) => Err(errors),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.document.section(name)
    }

    /// Section names in the order they first appeared.
    pub fn sections(&self) -> Vec<String> {
        self.document.section_names().map(String::from).collect()
    }
}

#[cfg(test)]
mod tests;
