use super::token::*;
use crate::diagnostic::LexError;
use crate::source::*;
use log::trace;
use std::collections::VecDeque;

pub struct Cursor {
    source: Source,
    start: usize,
    position: usize,
    last_width: usize,
    line: usize,
    emitted: VecDeque<Token>,
}

impl Cursor {
    pub fn new(source: Source) -> Self {
        Cursor {
            source,
            start: 0,
            position: 0,
            last_width: 0,
            line: 1,
            emitted: VecDeque::new(),
        }
    }

    pub fn advance(&mut self) -> Option<char> {
        match self.rest().chars().next() {
            Some(character) => {
                self.last_width = character.len_utf8();
                self.position += self.last_width;
                Some(character)
            }
            None => {
                self.last_width = 0;
                None
            }
        }
    }

    pub fn lookahead(&mut self) -> Option<char> {
        let character = self.advance();
        self.backup();
        character
    }

    pub fn backup(&mut self) {
        self.position -= self.last_width;
        self.last_width = 0;
    }

    pub fn ignore(&mut self) {
        self.commit();
    }

    pub fn accept(&mut self, valid: &str) -> bool {
        match self.advance() {
            Some(character) if valid.contains(character) => true,
            _ => {
                self.backup();
                false
            }
        }
    }

    pub fn accept_run(&mut self, valid: &str) {
        while self.accept(valid) {}
    }

    pub fn at(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Moves past a fixed sequence already confirmed with `at`.
    pub fn skip(&mut self, sequence: &str) {
        self.position += sequence.len();
        self.last_width = 0;
    }

    pub fn has_pending(&self) -> bool {
        self.position > self.start
    }

    pub fn emit(&mut self, kind: TokenKind) {
        let span = self.pending_span();
        let value = String::from(span.lexeme());
        let token = Token::new(kind, &value, span);
        trace!(target: "lexer", "Emitting {}", token);
        self.emitted.push_back(token);
        self.commit();
    }

    pub fn error(&mut self, error: LexError) {
        let token = Token::new(TokenKind::Error, &error.to_string(), self.pending_span());
        trace!(target: "lexer", "Emitting {}", token);
        self.emitted.push_back(token);
    }

    pub fn take_emitted(&mut self) -> Option<Token> {
        self.emitted.pop_front()
    }

    fn rest(&self) -> &str {
        &self.source.content[self.position..]
    }

    fn pending_span(&self) -> Span {
        Span::new(
            &self.source,
            self.start,
            self.position - self.start,
            self.line,
        )
    }

    fn commit(&mut self) {
        let consumed = &self.source.content[self.start..self.position];
        self.line += consumed.matches('\n').count();
        self.start = self.position;
    }
}
