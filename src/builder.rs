// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashSet;

use crate::ast::{Document, Expression};
use crate::IniError;

/// How the builder treats a section header or a key that appears twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Re-declared sections are reused and later assignments overwrite
    /// earlier ones.
    #[default]
    Merge,
    /// Re-declared sections and re-assigned keys are build errors.
    Reject,
}

/// Folds the parser's expressions, in source order, into a `Document`.
pub struct DocumentBuilder {
    policy: DuplicatePolicy,
    document: Document,
    declared: HashSet<String>,
    errors: Vec<IniError>,
}

impl DocumentBuilder {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            document: Document::new(),
            declared: HashSet::new(),
            errors: Vec::new(),
        }
    }

    pub fn build<I>(policy: DuplicatePolicy, expressions: I) -> Result<Document, Vec<IniError>>
    where
        I: IntoIterator<Item = Expression>,
    {
        let mut builder = Self::new(policy);
        for expression in expressions {
            builder.apply(expression);
        }
        builder.finish()
    }

    pub fn apply(&mut self, expression: Expression) {
        match expression {
            Expression::SectionHeader { name, line } => self.declare_section(name, line),
            Expression::Assignment { section, key, value, line } => {
                let target = self.document.section_mut(&section);
                if target.contains_key(&key) {
                    match self.policy {
                        DuplicatePolicy::Merge => {
                            tracing::debug!(section = %section, key = %key, line, "overwriting duplicate key");
                        }
                        DuplicatePolicy::Reject => {
                            self.errors.push(IniError::BuildError {
                                message: format!("Duplicate key '{}' in section '{}'", key, section),
                                line,
                                hint: Some("Each key may be assigned once per section".into()),
                                code: Some(252),
                            });
                            return;
                        }
                    }
                }
                target.insert(key, value);
            }
        }
    }

    fn declare_section(&mut self, name: String, line: u32) {
        if !self.declared.insert(name.clone()) {
            match self.policy {
                DuplicatePolicy::Merge => {
                    tracing::debug!(section = %name, line, "reusing re-declared section");
                }
                DuplicatePolicy::Reject => {
                    self.errors.push(IniError::BuildError {
                        message: format!("Duplicate section '{}'", name),
                        line,
                        hint: Some("Merge the two sections into one".into()),
                        code: Some(251),
                    });
                    return;
                }
            }
        }
        // headers create their section so that empty sections survive
        self.document.section_mut(&name);
    }

    pub fn finish(self) -> Result<Document, Vec<IniError>> {
        if self.errors.is_empty() {
            Ok(self.document)
        } else {
            Err(self.errors)
        }
    }
}
