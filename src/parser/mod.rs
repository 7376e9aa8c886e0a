// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashSet;

use crate::ast::{Document, Expression};
use crate::builder::{DocumentBuilder, DuplicatePolicy};
use crate::lexer::{self, Token, TokenKind};
use crate::IniError;

mod lines;
mod section;
mod value;

pub use lines::{split_lines, Line};

/// Line-oriented recursive-descent parser.
///
/// One `Parser` lives for one document parse: it carries the current-section
/// register from line to line, so every assignment binds to the most recent
/// header (`""` before the first one).
pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    line: u32,
    current_section: String,
}

impl Default for Parser<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Parser<'t> {
    pub fn new() -> Self {
        Self {
            tokens: &[],
            pos: 0,
            line: 0,
            current_section: String::new(),
        }
    }

    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    /// Parse one line into at most one expression. Comment-only lines yield `None`.
    pub fn parse_line(&mut self, line: &'t Line) -> Result<Option<Expression>, IniError> {
        self.tokens = &line.tokens;
        self.pos = 0;
        self.line = line.number;
        program(self)
    }

    pub(crate) fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    pub(crate) fn bump(&mut self) -> Option<&'t Token> {
        let tok = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(tok)
    }

    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    pub(crate) fn set_section(&mut self, name: &str) {
        self.current_section = name.to_string();
    }

    /// Build a parse error pointing at the token under the cursor, or at the
    /// last token of the line when the cursor ran off its end.
    pub(crate) fn error(&self, message: &str, hint: Option<&str>, code: u32) -> IniError {
        let column = self
            .peek()
            .or_else(|| self.tokens.last())
            .map_or(0, |t| t.column);

        IniError::ParseError {
            message: message.into(),
            line: self.line,
            column,
            hint: hint.map(String::from),
            code: Some(code),
        }
    }

    /// Only a trailing comment may follow a complete statement.
    pub(crate) fn expect_line_end(&mut self, message: &str, code: u32) -> Result<(), IniError> {
        match self.peek_kind() {
            None => Ok(()),
            Some(TokenKind::Comment) => {
                self.bump();
                Ok(())
            }
            Some(_) => Err(self.error(message, Some("Put one statement per line"), code)),
        }
    }
}

fn program(parser: &mut Parser) -> Result<Option<Expression>, IniError> {
    match parser.peek_kind() {
        Some(TokenKind::OpenBrace) => section::parse_section(parser).map(Some),
        Some(TokenKind::Comment) | Some(TokenKind::LineBreak) | None => Ok(None),
        Some(_) => value::parse_statement(parser).map(Some),
    }
}

/// Parse every line, accumulating errors instead of stopping at the first.
pub fn parse_lines(lines: &[Line]) -> (Vec<Expression>, Vec<IniError>) {
    let mut parser = Parser::new();
    let mut expressions = Vec::new();
    let mut errors = Vec::new();

    for line in lines {
        match parser.parse_line(line) {
            Ok(Some(expression)) => expressions.push(expression),
            Ok(None) => {}
            Err(e) => errors.push(e),
        }
    }

    (expressions, errors)
}

/// Run the whole pipeline: scan, split into lines, parse, build.
///
/// Returns either a complete document or every diagnostic found, ordered by
/// line. Lines that failed to scan are not parsed, so each defect is reported
/// once.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len(), policy = ?policy))]
pub fn parse_document(input: &str, policy: DuplicatePolicy) -> Result<Document, Vec<IniError>> {
    let (tokens, mut errors) = lexer::scan(input);

    let broken: HashSet<u32> = errors.iter().filter_map(IniError::line).collect();
    let lines: Vec<Line> = split_lines(tokens)
        .into_iter()
        .filter(|l| !broken.contains(&l.number))
        .collect();

    let (expressions, parse_errors) = parse_lines(&lines);
    errors.extend(parse_errors);

    tracing::debug!(
        lines = lines.len(),
        expressions = expressions.len(),
        errors = errors.len(),
        "parsed lines"
    );

    if !errors.is_empty() {
        errors.sort_by_key(|e| e.line());
        return Err(errors);
    }

    DocumentBuilder::build(policy, expressions)
}
