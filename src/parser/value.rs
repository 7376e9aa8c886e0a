use super::*;
use crate::ast::Value;

/// A line that is not a header or a comment must be `identifier "=" value`.
pub(super) fn parse_statement(parser: &mut Parser) -> Result<Expression, IniError> {
    let key = match parser.peek() {
        Some(tok) if tok.is(TokenKind::Identifier) => tok,
        _ => {
            return Err(parser.error(
                "Unexpected token",
                Some("Lines hold a [section] header or a key=value assignment"),
                206,
            ));
        }
    };
    parser.bump();

    match parser.peek_kind() {
        Some(TokenKind::Assign) => parse_assignment(parser, key.text.clone()),
        None | Some(TokenKind::Comment) => Err(parser.error(
            "Unexpected identifier",
            Some("A key needs '=' and a value"),
            204,
        )),
        Some(_) => Err(parser.error("Invalid identifier", None, 205)),
    }
}

fn parse_assignment(parser: &mut Parser, key: String) -> Result<Expression, IniError> {
    parser.bump(); // consume =

    let value = parse_value(parser)?;
    parser.expect_line_end("Unexpected token after value", 210)?;

    Ok(Expression::Assignment {
        section: parser.current_section().to_string(),
        key,
        value,
        line: parser.line(),
    })
}

pub(super) fn parse_value(parser: &mut Parser) -> Result<Value, IniError> {
    match parser.peek_kind() {
        Some(TokenKind::Identifier) => parse_word_value(parser),
        Some(TokenKind::StringLiteral) => parse_string_value(parser),
        Some(TokenKind::NumberLiteral) => parse_int_value(parser),
        Some(TokenKind::FloatLiteral) => parse_float_value(parser),
        _ => Err(parser.error(
            "Expecting value on key",
            Some("Use a word, a \"string\", a number or true/false"),
            207,
        )),
    }
}

/// Bare words are strings, except the exact words `true` and `false`.
fn parse_word_value(parser: &mut Parser) -> Result<Value, IniError> {
    let Some(tok) = parser.bump() else { unreachable!() };

    Ok(match tok.text.as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        text => Value::String(text.to_string()),
    })
}

fn parse_string_value(parser: &mut Parser) -> Result<Value, IniError> {
    let Some(tok) = parser.bump() else { unreachable!() };
    Ok(Value::String(tok.text.clone()))
}

fn parse_int_value(parser: &mut Parser) -> Result<Value, IniError> {
    let Some(tok) = parser.peek() else { unreachable!() };
    let number = tok
        .text
        .parse::<i64>()
        .map_err(|_| parser.error("Invalid int literal", Some("Integers are base-10 and must fit in 64 bits"), 208))?;
    parser.bump();
    Ok(Value::Int(number))
}

fn parse_float_value(parser: &mut Parser) -> Result<Value, IniError> {
    let Some(tok) = parser.peek() else { unreachable!() };
    let number = tok
        .text
        .parse::<f64>()
        .map_err(|_| parser.error("Invalid float literal", Some("Floats take a single '.'"), 209))?;
    parser.bump();
    Ok(Value::Float(number))
}
