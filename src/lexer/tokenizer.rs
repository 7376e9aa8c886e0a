use super::*;
use super::scanner::{bump, skip_whitespace, take_while};

pub(super) fn next_token(lexer: &mut Lexer) -> Option<Result<Token, IniError>> {
    skip_whitespace(lexer);

    let line = lexer.line;
    let column = lexer.column;

    let result = match lexer.peek? {
        '\n' => tokenize_symbol(lexer, TokenKind::LineBreak),
        '[' => tokenize_symbol(lexer, TokenKind::OpenBrace),
        ']' => tokenize_symbol(lexer, TokenKind::CloseBrace),
        '=' => tokenize_symbol(lexer, TokenKind::Assign),
        c if c.is_alphabetic() || c == '_' => tokenize_identifier(lexer),
        c if c.is_numeric() || c == '-' => tokenize_number(lexer),
        '"' => tokenize_string(lexer, line, column),
        '#' | ';' => tokenize_comment(lexer),
        _ => tokenize_symbol(lexer, TokenKind::Unknown),
    };

    Some(result.map(|(kind, text)| Token::new(kind, text, line, column)))
}

fn tokenize_symbol(lexer: &mut Lexer, kind: TokenKind) -> Result<(TokenKind, String), IniError> {
    let text = bump(lexer).map(String::from).unwrap_or_default();
    Ok((kind, text))
}

/// Identifiers may hold interior spaces (`my key`); trailing ones are dropped.
fn tokenize_identifier(lexer: &mut Lexer) -> Result<(TokenKind, String), IniError> {
    let mut ident = String::new();
    take_while(lexer, &mut ident, |ch| ch.is_alphanumeric() || ch == '_' || ch == ' ');

    let trimmed = ident.trim_end().len();
    ident.truncate(trimmed);

    Ok((TokenKind::Identifier, ident))
}

/// A `.` anywhere in the run makes the literal a float. The text is converted
/// by the parser, so `1.2.3` or a lone `-` surface there as invalid literals.
fn tokenize_number(lexer: &mut Lexer) -> Result<(TokenKind, String), IniError> {
    let mut num = String::new();
    if lexer.peek == Some('-') {
        num.push('-');
        bump(lexer);
    }
    take_while(lexer, &mut num, |ch| ch.is_numeric() || ch == '.');

    let kind = if num.contains('.') {
        TokenKind::FloatLiteral
    } else {
        TokenKind::NumberLiteral
    };

    Ok((kind, num))
}

fn tokenize_string(lexer: &mut Lexer, line: u32, column: u32) -> Result<(TokenKind, String), IniError> {
    bump(lexer); // opening quote

    let mut content = String::new();
    loop {
        match lexer.peek {
            Some('"') => {
                bump(lexer);
                return Ok((TokenKind::StringLiteral, content));
            }
            // the line break is left for its own token
            Some('\n') | None => {
                return Err(IniError::LexError {
                    message: "Unterminated string".into(),
                    line,
                    column,
                    hint: Some("Close the string with '\"' before the end of the line".into()),
                    code: Some(101),
                });
            }
            Some(ch) => {
                content.push(ch);
                bump(lexer);
            }
        }
    }
}

fn tokenize_comment(lexer: &mut Lexer) -> Result<(TokenKind, String), IniError> {
    let mut discarded = String::new();
    take_while(lexer, &mut discarded, |ch| ch != '\n');
    Ok((TokenKind::Comment, String::new()))
}
