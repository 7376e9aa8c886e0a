use crate::lexer::{Token, TokenKind};

/// The tokens of one source line, without its line break.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub number: u32,
    pub tokens: Vec<Token>,
}

/// Split a token stream at line breaks. Blank lines are dropped; a final line
/// without a trailing newline is kept.
pub fn split_lines(tokens: Vec<Token>) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current: Vec<Token> = Vec::new();

    for token in tokens {
        if token.is(TokenKind::LineBreak) {
            push_line(&mut lines, std::mem::take(&mut current));
        } else {
            current.push(token);
        }
    }
    push_line(&mut lines, current);

    lines
}

fn push_line(lines: &mut Vec<Line>, tokens: Vec<Token>) {
    if let Some(first) = tokens.first() {
        lines.push(Line { number: first.line, tokens });
    }
}
