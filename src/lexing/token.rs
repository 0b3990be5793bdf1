use crate::source::*;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Error,
    EOF,
    // Anything outside the delimiters
    Text,
    LeftDelimiter,
    RightDelimiter,
    Identifier,
}

#[derive(Clone, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: &str, span: Span) -> Self {
        Token {
            kind,
            value: String::from(value),
            span,
        }
    }

    pub fn lexeme(&self) -> &str {
        self.span.lexeme()
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == TokenKind::EOF || self.kind == TokenKind::Error
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Token) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prefix = match self.kind {
            TokenKind::EOF => return write!(f, "t: EOF"),
            TokenKind::Error => return write!(f, "t: Error; v: {}", self.value),
            TokenKind::Text => "t: Text; ",
            TokenKind::LeftDelimiter => "t: LeftDelimiter; ",
            TokenKind::RightDelimiter => "t: RightDelimiter; ",
            TokenKind::Identifier => "t: Identifier; ",
        };
        if self.value.len() > 10 {
            let head: String = self.value.chars().take(10).collect();
            write!(f, "{} v: {:?}...", prefix, head)
        } else {
            write!(f, "{} v: {:?}", prefix, self.value)
        }
    }
}

pub trait TokenString {
    fn token_string(&self) -> String;
}

impl TokenString for [Token] {
    fn token_string(&self) -> String {
        let toks = self
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        String::from("Vec(") + &toks + ")"
    }
}
