use super::{token::*, Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

pub fn lex(s: &str) -> Result<(LineNumber, Vec<Positioned>)> {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(ch) if ch.is_alphabetic() || ch == '_' => {
            chars.all(|ch| ch.is_alphanumeric() || ch == '_')
        }
        _ => false,
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    col: usize,
    prev_is_value: bool,
    remark: bool,
    done: bool,
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> Result<(LineNumber, Vec<Positioned>)> {
        let mut lexer = BasicLexer {
            chars: s.chars().peekable(),
            col: 0,
            prev_is_value: false,
            remark: false,
            done: false,
        };
        let line_number = lexer.line_number()?;
        let tokens = lexer
            .collect::<Result<Vec<Positioned>>>()
            .map_err(|e| e.in_line_number(line_number))?;
        Ok((line_number, tokens))
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.col += 1;
        Some(ch)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn line_number(&mut self) -> Result<LineNumber> {
        let msg = "missing or invalid leading line number";
        let mut s = String::new();
        while let Some(ch) = self.advance() {
            if is_basic_whitespace(ch) {
                break;
            }
            s.push(ch);
        }
        let column = 0..s.chars().count();
        match s.chars().next() {
            Some(ch) if is_basic_digit(ch) => {}
            _ => return Err(error!(LexError, ..&column; msg)),
        }
        s.parse::<LineNumber>()
            .map_err(|_| error!(LexError, ..&column; msg))
    }

    fn string(&mut self) -> Token {
        let mut s = String::new();
        self.advance();
        while let Some(ch) = self.advance() {
            if ch == '"' {
                break;
            }
            s.push(ch);
        }
        Token::String(s)
    }

    fn minus(&mut self) -> Token {
        self.advance();
        if self.prev_is_value {
            Token::Subtract
        } else {
            Token::UnaryMinus
        }
    }

    fn word(&mut self) -> Result<Token> {
        let start = self.col;
        let mut s = String::new();
        while let Some(ch) = self.peek() {
            if is_basic_whitespace(ch) || ch == ')' {
                break;
            }
            s.push(ch);
            self.advance();
        }
        let column = start..self.col;
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Token::Number(n));
        }
        if let Some(token) = Token::from_string(&s) {
            if token == Token::Rem {
                self.remark = true;
            }
            return Ok(token);
        }
        if is_identifier(&s) {
            return Ok(Token::Variable(s));
        }
        if s.chars().all(is_basic_digit) {
            return Err(error!(LexError, ..&column; "number out of range"));
        }
        Err(error!(LexError, ..&column; "unrecognized token"))
    }

    fn comment(&mut self) -> Positioned {
        let start = self.col;
        let s: String = self.chars.by_ref().collect();
        self.col += s.chars().count();
        self.done = true;
        Positioned::new(Token::Comment(s), start..self.col)
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Result<Positioned>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.remark {
            return Some(Ok(self.comment()));
        }
        while is_basic_whitespace(self.peek()?) {
            self.advance();
        }
        let start = self.col;
        let token = match self.peek()? {
            '"' => self.string(),
            '-' => self.minus(),
            '!' => {
                self.advance();
                Token::LogicalNot
            }
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            _ => match self.word() {
                Ok(token) => token,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            },
        };
        self.prev_is_value = token.is_value();
        Some(Ok(Positioned::new(token, start..self.col)))
    }
}
