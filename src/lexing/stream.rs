use super::lexer::Lexer;
use super::token::*;
use crate::source::*;
use crossbeam_channel::{bounded, never, Receiver};
use log::{trace, warn};
use std::io;
use std::thread::{self, JoinHandle};

/// Tokens from a lexer running on its own thread, handed over one at a time.
pub struct TokenStream {
    receiver: Receiver<Token>,
    producer: Option<JoinHandle<()>>,
}

impl TokenStream {
    pub fn spawn(source: Source) -> io::Result<Self> {
        let (sender, receiver) = bounded(0);
        let name = format!("lexer:{}", source.name.replace('\0', ""));
        let producer = thread::Builder::new().name(name).spawn(move || {
            for token in Lexer::new(source) {
                if sender.send(token).is_err() {
                    trace!(target: "lexer", "Consumer went away, abandoning session");
                    return;
                }
            }
        })?;
        Ok(TokenStream {
            receiver,
            producer: Some(producer),
        })
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.receiver.recv().ok()
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        // Disconnect first so a producer blocked on `send` wakes up.
        self.receiver = never();
        if let Some(producer) = self.producer.take() {
            if producer.join().is_err() {
                warn!(target: "lexer", "Lexer thread panicked");
            }
        }
    }
}
