use std::fs;
use std::io;
use std::sync::Arc;

pub type Source = Arc<SourceImpl>;

pub struct SourceImpl {
    pub name: String,
    pub content: String,
}

pub fn load(file: &str) -> io::Result<Source> {
    let content = fs::read_to_string(file)?;
    Ok(named(file, &content))
}

pub fn text(text: &str) -> Source {
    named("<input>", text)
}

pub fn named(name: &str, text: &str) -> Source {
    Arc::new(SourceImpl {
        name: String::from(name),
        content: String::from(text),
    })
}

#[derive(Clone)]
pub struct Span {
    pub source: Source,
    pub index: usize,
    pub length: usize,
    pub line: usize,
}

impl Span {
    pub fn new(source: &Source, index: usize, length: usize, line: usize) -> Self {
        Span {
            source: Arc::clone(source),
            index,
            length,
            line,
        }
    }

    pub fn lexeme(&self) -> &str {
        let end = self.index + self.length;
        &self.source.content[self.index..end]
    }

    /// The full line this span starts on, and the span's byte offset into it.
    pub fn entire_line(&self) -> (&str, usize) {
        let content = &self.source.content;
        let line_start = content[..self.index].rfind('\n').map_or(0, |i| i + 1);
        let line_end = content[self.index..]
            .find('\n')
            .map_or(content.len(), |i| self.index + i);
        (&content[line_start..line_end], self.index - line_start)
    }

    pub fn location(&self) -> String {
        let (line, offset) = self.entire_line();
        let column = line[..offset].chars().count() + 1;
        format!("{}:{}:{}", self.source.name, self.line, column)
    }
}

impl std::fmt::Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Span({}..{})", self.index, self.index + self.length)
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Span) -> bool {
        self.index == other.index && self.length == other.length && self.line == other.line
    }
}
