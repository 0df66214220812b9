use super::Column;
use std::collections::HashMap;

thread_local!(
    static STRING_TO_TOKEN: HashMap<String, Token> = Token::field_less()
        .drain(..)
        .map(|t| (t.to_string(), t))
        .collect();
);

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Comment(String),
    Variable(String),
    Number(i64),
    String(String),
    UnaryMinus,
    LogicalNot,
    Equals,
    LessThan,
    GreaterThan,
    LessOrEqual,
    GreaterOrEqual,
    NotEqual,
    Multiply,
    Divide,
    Subtract,
    Add,
    LeftParen,
    RightParen,
    Goto,
    If,
    Input,
    Let,
    Print,
    Rem,
    Then,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Associativity {
    Left,
    Right,
}

impl Token {
    /// Every token that carries no payload, i.e. the fixed string table.
    /// `UnaryMinus` is omitted; it shares `-` with `Subtract` and only
    /// the lexer's lookbehind can produce it.
    fn field_less() -> Vec<Token> {
        use Token::*;
        vec![
            Equals,
            LessThan,
            GreaterThan,
            LessOrEqual,
            GreaterOrEqual,
            NotEqual,
            Multiply,
            Divide,
            Subtract,
            Add,
            LeftParen,
            RightParen,
            LogicalNot,
            Goto,
            If,
            Input,
            Let,
            Print,
            Rem,
            Then,
        ]
    }

    pub fn from_string(s: &str) -> Option<Token> {
        STRING_TO_TOKEN.with(|stt| stt.get(s).cloned())
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Token::Variable(_) | Token::Number(_) | Token::String(_))
    }

    pub fn is_unary_operator(&self) -> bool {
        matches!(self, Token::UnaryMinus | Token::LogicalNot)
    }

    pub fn is_binary_operator(&self) -> bool {
        use Token::*;
        matches!(
            self,
            Equals
                | LessThan
                | GreaterThan
                | LessOrEqual
                | GreaterOrEqual
                | NotEqual
                | Multiply
                | Divide
                | Subtract
                | Add
        )
    }

    pub fn is_operator(&self) -> bool {
        self.is_unary_operator() || self.is_binary_operator()
    }

    /// Number of operands the operator consumes, `None` for non-operators.
    pub fn arity(&self) -> Option<usize> {
        if self.is_unary_operator() {
            Some(1)
        } else if self.is_binary_operator() {
            Some(2)
        } else {
            None
        }
    }

    /// Higher binds tighter.
    pub fn precedence(&self) -> Option<u8> {
        use Token::*;
        match self {
            UnaryMinus | LogicalNot => Some(12),
            Multiply | Divide => Some(10),
            Add | Subtract => Some(8),
            Equals | LessThan | GreaterThan | LessOrEqual | GreaterOrEqual | NotEqual => Some(4),
            _ => None,
        }
    }

    pub fn associativity(&self) -> Option<Associativity> {
        if self.is_unary_operator() {
            Some(Associativity::Right)
        } else if self.is_binary_operator() {
            Some(Associativity::Left)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Comment(s) => write!(f, "{}", s),
            Variable(s) => write!(f, "{}", s),
            Number(n) => write!(f, "{}", n),
            String(s) => write!(f, "\"{}\"", s),
            UnaryMinus => write!(f, "-"),
            LogicalNot => write!(f, "!"),
            Equals => write!(f, "="),
            LessThan => write!(f, "<"),
            GreaterThan => write!(f, ">"),
            LessOrEqual => write!(f, "<="),
            GreaterOrEqual => write!(f, ">="),
            NotEqual => write!(f, "<>"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Subtract => write!(f, "-"),
            Add => write!(f, "+"),
            LeftParen => write!(f, "("),
            RightParen => write!(f, ")"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            Print => write!(f, "PRINT"),
            Rem => write!(f, "REM"),
            Then => write!(f, "THEN"),
        }
    }
}

/// A token and where it came from in the source line.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Positioned {
    pub token: Token,
    pub column: Column,
}

impl Positioned {
    pub fn new(token: Token, column: Column) -> Positioned {
        Positioned { token, column }
    }

    pub fn offset(&self) -> usize {
        self.column.start
    }
}
