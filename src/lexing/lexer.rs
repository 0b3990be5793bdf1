use super::cursor::*;
use super::token::*;
use crate::diagnostic::LexError;
use crate::source::*;
use log::trace;
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

pub const LEFT_DELIMITER: &str = "{{";
pub const RIGHT_DELIMITER: &str = "}}";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    OutsideAction,
    LeftDelimiter,
    InsideAction,
    RightDelimiter,
    Identifier,
}

pub struct Lexer {
    cursor: Cursor,
    state: Option<State>,
}

impl Lexer {
    pub fn new(source: Source) -> Self {
        trace!(target: "lexer", "Starting session for {}", source.name);
        Lexer {
            cursor: Cursor::new(source),
            state: Some(State::OutsideAction),
        }
    }

    pub fn lex(self) -> Vec<Token> {
        self.collect()
    }

    fn step(&mut self, state: State) -> Option<State> {
        let next = match state {
            State::OutsideAction => self.outside_action(),
            State::LeftDelimiter => self.left_delimiter(),
            State::InsideAction => self.inside_action(),
            State::RightDelimiter => self.right_delimiter(),
            State::Identifier => self.identifier(),
        };
        trace!(target: "lexer", "{:?} -> {:?}", state, next);
        next
    }

    fn outside_action(&mut self) -> Option<State> {
        loop {
            if self.cursor.at(LEFT_DELIMITER) {
                if self.cursor.has_pending() {
                    self.cursor.emit(TokenKind::Text);
                }
                return Some(State::LeftDelimiter);
            }
            if self.cursor.advance().is_none() {
                break;
            }
        }
        if self.cursor.has_pending() {
            self.cursor.emit(TokenKind::Text);
        }
        self.cursor.emit(TokenKind::EOF);
        None
    }

    fn left_delimiter(&mut self) -> Option<State> {
        self.cursor.skip(LEFT_DELIMITER);
        self.cursor.emit(TokenKind::LeftDelimiter);
        Some(State::InsideAction)
    }

    fn right_delimiter(&mut self) -> Option<State> {
        self.cursor.skip(RIGHT_DELIMITER);
        self.cursor.emit(TokenKind::RightDelimiter);
        Some(State::OutsideAction)
    }

    fn inside_action(&mut self) -> Option<State> {
        loop {
            if self.cursor.at(RIGHT_DELIMITER) {
                return Some(State::RightDelimiter);
            }
            match self.cursor.advance() {
                None | Some('\n') => {
                    self.cursor.error(LexError::UnclosedAction);
                    return None;
                }
                Some(c) if c.is_whitespace() => self.cursor.ignore(),
                Some(c) if is_letter(c) => {
                    self.cursor.backup();
                    return Some(State::Identifier);
                }
                Some(c) => {
                    self.cursor.error(LexError::UnexpectedSymbol(c));
                    return None;
                }
            }
        }
    }

    // Only entered from `inside_action` with a letter up next.
    fn identifier(&mut self) -> Option<State> {
        self.cursor.advance();
        while let Some(c) = self.cursor.advance() {
            if !is_identifier_continue(c) {
                break;
            }
        }
        self.cursor.backup();
        self.cursor.emit(TokenKind::Identifier);
        Some(State::InsideAction)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.cursor.take_emitted() {
                return Some(token);
            }
            let state = self.state?;
            self.state = self.step(state);
        }
    }
}

fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

fn is_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

fn is_identifier_continue(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '_'
}
