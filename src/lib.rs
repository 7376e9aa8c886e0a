pub mod ast;
pub mod builder;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod config;

pub use ast::{Document, Section, Value};
pub use builder::DuplicatePolicy;
pub use error::IniError;
pub use config::IniConfig;

/// Parse INI text into a document, merging duplicate sections and keys.
///
/// On failure every lexical and syntactic error is returned, ordered by line,
/// and no document is produced.
pub fn parse(input: &str) -> Result<Document, Vec<IniError>> {
    parser::parse_document(input, DuplicatePolicy::default())
}

/// Like [`parse`], with an explicit policy for duplicate sections and keys.
pub fn parse_with_policy(input: &str, policy: DuplicatePolicy) -> Result<Document, Vec<IniError>> {
    parser::parse_document(input, policy)
}
