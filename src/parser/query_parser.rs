use crate::parser::Keywords;

/// Clause currently being parsed. Clauses only advance, never go back,
/// which is what rejects e.g. a WHERE appearing after ORDER BY.
#[derive(Debug, Default, PartialEq, PartialOrd)]
pub enum Phase {
    #[default]
    Projection = 0,
    Source = 1,
    Criteria = 2,
    OrderBy = 3,
    Limit = 4,
    EOF = 5,
}

/// Character cursor over one query text, shared by every parse function.
#[derive(Debug, Default)]
pub struct QueryParser {
    pub position: usize,
    pub length: usize,
    pub text_v: Vec<char>,
    pub phase: Phase,
    pub keywords: Keywords,
}

impl QueryParser {
    pub fn new(query: &str) -> Self {
        let text_v: Vec<char> = query.chars().collect();
        Self {
            position: 0,
            length: text_v.len(),
            text_v,
            keywords: Keywords::new(),
            ..Default::default()
        }
    }

    pub fn eof(&self) -> bool {
        self.position >= self.length
    }

    pub fn current(&self) -> char {
        if self.position < self.length {
            return self.text_v[self.position];
        }

        '\0'
    }

    pub fn peek(&self, ahead: usize) -> char {
        if self.position + ahead < self.length {
            return self.text_v[self.position + ahead];
        }

        '\0'
    }

    pub fn next(&mut self) {
        self.position += 1;
    }

    pub fn next_non_whitespace(&mut self) {
        while self.current().is_whitespace() {
            self.next();
        }
    }

    pub fn jump(&mut self, ahead: usize) {
        if self.position + ahead < self.length {
            self.position += ahead;
        } else {
            self.position = self.length;
        }
    }

    pub fn text_from_range(&self, start: usize, end: usize) -> String {
        let mut end = end;
        if end > self.length {
            end = self.length;
        }
        self.text_v[start..end].iter().collect()
    }

    pub fn text_from_pivot(&self, pivot: usize) -> String {
        self.text_from_range(pivot, self.position)
    }

    /// Advance the phase if the cursor sits on the keyword that opens a later
    /// clause. Returns true when the phase changed (or EOF was reached).
    pub fn check_next_phase(&mut self) -> bool {
        self.next_non_whitespace();

        if self.eof() {
            self.phase = Phase::EOF;
            return true;
        }

        if self.phase < Phase::Limit && self.keywords.limit.matches(self) {
            self.phase = Phase::Limit;
            return true;
        }

        if self.phase < Phase::OrderBy && self.keywords.order_by.matches(self) {
            self.phase = Phase::OrderBy;
            return true;
        }

        if self.phase < Phase::Criteria && self.keywords.r#where.matches(self) {
            self.phase = Phase::Criteria;
            return true;
        }

        if self.phase < Phase::Source && self.keywords.from.matches(self) {
            self.phase = Phase::Source;
            return true;
        }

        false
    }
}
