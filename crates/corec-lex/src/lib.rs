//! Source buffer to token stream: the first pipeline stage.

mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Lexes the whole source into a `Vec<Token>` ending with `Eof`, stopping
/// at the first lex error. Comments are never included.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token()?;
        let is_eof = tok.is_eof();
        tokens.push(tok);
        if is_eof {
            break;
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_ends_with_eof() {
        let tokens = tokenize("x: i32;").unwrap();
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn tokenize_stops_at_first_error() {
        assert!(tokenize("x: i32; @").is_err());
    }
}
