use crate::parser::Keyword;

/// The full keyword inventory of the logical query grammar.
#[derive(Debug)]
pub struct Keywords {
    pub select: Keyword,
    pub from: Keyword,
    pub r#where: Keyword,
    pub order_by: Keyword,
    pub limit: Keyword,
    pub alias: Keyword,
    pub asc: Keyword,
    pub desc: Keyword,
    pub and: Keyword,
    pub or: Keyword,
    pub not: Keyword,
    pub like: Keyword,
    pub glob: Keyword,
    pub between: Keyword,
    pub r#in: Keyword,
    pub b_true: Keyword,
    pub b_false: Keyword,
    pub null: Keyword,
    pub now: Keyword,
}

impl Default for Keywords {
    fn default() -> Self {
        Self::new()
    }
}

impl Keywords {
    pub fn new() -> Self {
        Self {
            select: Keyword::new("SELECT").with_whitespace_postfix(),
            from: Keyword::new("FROM").with_whitespace_postfix(),
            r#where: Keyword::new("WHERE").with_whitespace_postfix(),
            order_by: Keyword::new("ORDER BY").with_whitespace_postfix(),
            limit: Keyword::new("LIMIT").with_whitespace_postfix(),
            alias: Keyword::new("AS").with_whitespace_postfix(),
            asc: Keyword::new("ASC").with_whitespace_postfix().with_eof().with_optional_postfix(','),
            desc: Keyword::new("DESC").with_whitespace_postfix().with_eof().with_optional_postfix(','),
            and: Keyword::new("AND").with_whitespace_postfix(),
            or: Keyword::new("OR").with_whitespace_postfix(),
            not: Keyword::new("NOT").with_whitespace_postfix(),
            like: Keyword::new("LIKE").with_whitespace_postfix(),
            glob: Keyword::new("GLOB").with_whitespace_postfix(),
            between: Keyword::new("BETWEEN").with_whitespace_postfix(),
            r#in: Keyword::new("IN").with_whitespace_postfix().with_delimiter('('),
            b_true: Keyword::new("TRUE").with_any_delimiter_postfix().with_eof(),
            b_false: Keyword::new("FALSE").with_any_delimiter_postfix().with_eof(),
            null: Keyword::new("NULL").with_any_delimiter_postfix().with_eof(),
            now: Keyword::new("NOW").with_any_delimiter_postfix().with_eof(),
        }
    }
}
