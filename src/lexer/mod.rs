// Author: Dustin Pilgrim
// License: MIT

use std::str::Chars;
use crate::IniError;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // --- names & literals ---
    Identifier,
    StringLiteral,
    NumberLiteral,
    FloatLiteral,

    // --- structure ---
    Assign,
    OpenBrace,
    CloseBrace,

    // --- layout ---
    LineBreak,
    Comment,

    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based source line.
    pub line: u32,
    /// 0-based character offset of the token start within its line.
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self { kind, text: text.into(), line, column }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

pub struct Lexer<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    line: u32,
    column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars(),
            peek: None,
            line: 1,
            column: 0,
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

/// Yields tokens until the input is exhausted. Lexical errors are yielded in
/// place of the broken token and scanning carries on with the next character.
impl Iterator for Lexer<'_> {
    type Item = Result<Token, IniError>;

    fn next(&mut self) -> Option<Self::Item> {
        tokenizer::next_token(self)
    }
}

/// Tokenizes the whole input, collecting lexical errors separately.
pub fn scan(input: &str) -> (Vec<Token>, Vec<IniError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for item in Lexer::new(input) {
        match item {
            Ok(token) => tokens.push(token),
            Err(e) => errors.push(e),
        }
    }

    tracing::debug!(tokens = tokens.len(), errors = errors.len(), "scanned input");
    (tokens, errors)
}
