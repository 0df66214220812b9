use super::{lex, token::*, Error, LineNumber};

/// A tokenized source line.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    tokens: Vec<Positioned>,
}

impl Line {
    pub fn new(number: LineNumber, tokens: Vec<Positioned>) -> Line {
        Line { number, tokens }
    }

    pub fn from_str(s: &str) -> Result<Line, Error> {
        let (number, tokens) = lex(s)?;
        Ok(Line { number, tokens })
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn tokens(&self) -> &[Positioned] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.number)?;
        for p in &self.tokens {
            match &p.token {
                Token::Comment(s) => write!(f, "{}", s)?,
                t => write!(f, " {}", t)?,
            }
        }
        Ok(())
    }
}
