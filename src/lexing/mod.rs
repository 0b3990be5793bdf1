pub mod cursor;
pub mod lexer;
pub mod stream;
pub mod token;

pub use lexer::{Lexer, LEFT_DELIMITER, RIGHT_DELIMITER};
pub use stream::TokenStream;
pub use token::{Token, TokenKind, TokenString};

/// Starts a pull-based session over `text`; `name` labels error locations.
pub fn lex(name: &str, text: &str) -> Lexer {
    Lexer::new(crate::source::named(name, text))
}

/// Starts a session that scans on its own thread.
pub fn spawn(name: &str, text: &str) -> std::io::Result<TokenStream> {
    TokenStream::spawn(crate::source::named(name, text))
}
