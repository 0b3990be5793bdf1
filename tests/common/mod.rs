pub use metalex::diagnostic::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type TestResult = std::result::Result<(), String>;

#[allow(dead_code)]
pub mod test_span {

    use metalex::source::*;

    pub fn new(index: usize, length: usize) -> Span {
        Span::new(&text(""), index, length, 1)
    }
}

#[allow(dead_code)]
pub mod test_token {

    use metalex::lexing::*;
    use metalex::source::Span;

    pub fn test(kind: TokenKind, value: &str) -> Token {
        let span = Span::new(&metalex::source::text(value), 0, value.len(), 1);
        Token::new(kind, value, span)
    }

    pub fn text(value: &str) -> Token {
        test(TokenKind::Text, value)
    }

    pub fn identifier(value: &str) -> Token {
        test(TokenKind::Identifier, value)
    }

    pub fn error(message: &str) -> Token {
        test(TokenKind::Error, message)
    }

    pub fn left() -> Token {
        test(TokenKind::LeftDelimiter, "{{")
    }

    pub fn right() -> Token {
        test(TokenKind::RightDelimiter, "}}")
    }

    pub fn eof() -> Token {
        test(TokenKind::EOF, "")
    }
}

#[allow(dead_code)]
pub struct DiagnosticCapture {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticCapture {
    pub fn unwrap(&mut self) -> Vec<Diagnostic> {
        let captured = RefCell::new(Vec::new());
        self.diagnostics.swap(&captured);
        captured.into_inner()
    }
}

pub struct TestReporter {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl TestReporter {
    pub fn new() -> (Rc<dyn Reporter>, DiagnosticCapture) {
        let diagnostics = Rc::new(RefCell::new(Vec::new()));
        (
            Rc::new(TestReporter {
                diagnostics: Rc::clone(&diagnostics),
            }),
            DiagnosticCapture { diagnostics },
        )
    }
}

impl Reporter for TestReporter {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

pub fn assert_slices_equal<T, U>(
    kind: &str,
    got: &[T],
    expected: &[T],
    test: U,
    list: &str,
) -> TestResult
where
    T: std::fmt::Display,
    U: Fn(&T, &T) -> bool,
{
    if got.len() != expected.len() {
        let one_line = format!(
            "Expected {} {}, got {}",
            expected.len(),
            kind,
            got.len(),
        );
        println!("{}\n{}", &one_line, list);
        return Err(one_line);
    }

    for (lhs, rhs) in got.iter().zip(expected) {
        if !test(lhs, rhs) {
            println!("Expected:\n  {}\nGot:\n  {}", rhs, lhs);
            return Err(String::from("Unexpected item"));
        }
    }

    Ok(())
}
