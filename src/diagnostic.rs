use crate::lexing::token::*;
use crate::source::Span;
use colored::*;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexError {
    #[error("unclosed action")]
    UnclosedAction,

    #[error("unexpected symbol {0:?}")]
    UnexpectedSymbol(char),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Severity {
    Error,
}

#[derive(Debug, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    pub fn error(span: &Span, message: &str) -> Self {
        Diagnostic {
            severity: Severity::Error,
            span: span.clone(),
            message: String::from(message),
        }
    }

    /// Turns an `Error` token into a diagnostic pointing at the failure.
    pub fn from_token(token: &Token) -> Self {
        Diagnostic::error(&token.span, &token.value)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.span.location())
    }
}

pub trait DiagnosticString {
    fn diagnostic_string(&self) -> String;
}

impl DiagnosticString for [Diagnostic] {
    fn diagnostic_string(&self) -> String {
        self.iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub trait Reporter {
    fn report(&self, diagnostic: Diagnostic);
}

pub struct DefaultReporter {}

impl DefaultReporter {
    pub fn new() -> Rc<Self> {
        Rc::new(DefaultReporter {})
    }
}

impl Reporter for DefaultReporter {
    fn report(&self, diagnostic: Diagnostic) {
        let header = match diagnostic.severity {
            Severity::Error => "• Error:".red().bold(),
        };
        eprintln!("\n{} {}\n", header, diagnostic.message);
        let (line, offset) = diagnostic.span.entire_line();
        eprintln!("  {}", line);

        let offset = line[..offset]
            .chars()
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect::<String>();
        let width = diagnostic.span.lexeme().chars().count().max(1);
        let underline = (0..width).map(|_| "^").collect::<String>();
        eprintln!("  {}{}", offset, underline);
        eprintln!("  {}\n", diagnostic.span.location());
    }
}
