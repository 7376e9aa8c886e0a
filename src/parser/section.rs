use super::*;

/// `"[" identifier "]"`
pub(super) fn parse_section(parser: &mut Parser) -> Result<Expression, IniError> {
    parser.bump(); // consume [

    let name = match parser.peek() {
        Some(tok) if tok.is(TokenKind::Identifier) => {
            parser.bump();
            tok.text.clone()
        }
        _ => {
            return Err(parser.error(
                "Expected identifier on section header",
                Some("Section headers look like [name]"),
                201,
            ));
        }
    };

    if parser.peek_kind() != Some(TokenKind::CloseBrace) {
        return Err(parser.error(
            "Expected close brace in section declaration",
            Some("Close the header with ']'"),
            202,
        ));
    }
    parser.bump();

    parser.expect_line_end("Unexpected token after section header", 203)?;

    parser.set_section(&name);
    Ok(Expression::SectionHeader { name, line: parser.line() })
}
