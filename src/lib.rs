pub mod diagnostic;
pub mod lexing;
pub mod source;

use diagnostic::*;
use lexing::*;
use log::debug;
pub use source::*;
use std::io;
use std::rc::Rc;

/// Prints every token of `source` and reports a lexical error if one stops
/// the session. Returns whether the source lexed cleanly.
pub fn run(source: Source, threaded: bool, reporter: Rc<dyn Reporter>) -> io::Result<bool> {
    let tokens: Box<dyn Iterator<Item = Token>> = if threaded {
        Box::new(TokenStream::spawn(source)?)
    } else {
        Box::new(Lexer::new(source))
    };

    let mut count = 0;
    for token in tokens {
        count += 1;
        println!("{}", token);
        if token.kind == TokenKind::Error {
            reporter.report(Diagnostic::from_token(&token));
            return Ok(false);
        }
    }
    debug!(target: "lexer", "Session finished after {} tokens", count);

    Ok(true)
}
