use super::*;

/// Advance the character iterator and update line/column tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.peek;
    if let Some(c) = curr {
        if c == '\n' {
            lexer.line += 1;
            lexer.column = 0;
        } else {
            lexer.column += 1;
        }
    }
    lexer.peek = lexer.input.next();
    curr
}

/// Skip spaces, tabs and carriage returns. Newlines are tokens.
pub(super) fn skip_whitespace(lexer: &mut Lexer) {
    while let Some(' ' | '\t' | '\r') = lexer.peek {
        bump(lexer);
    }
}

/// Consume characters while `pred` holds, appending them to `buf`.
pub(super) fn take_while(lexer: &mut Lexer, buf: &mut String, pred: impl Fn(char) -> bool) {
    while let Some(ch) = lexer.peek {
        if !pred(ch) {
            break;
        }
        buf.push(ch);
        bump(lexer);
    }
}
