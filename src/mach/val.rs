use std::rc::Rc;

/// A runtime value. Booleans only come out of comparisons and `!`.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    String(Rc<str>),
    Boolean(bool),
}

impl Val {
    pub fn is_truthy(&self) -> bool {
        match self {
            Val::Boolean(b) => *b,
            Val::Integer(n) => *n != 0,
            Val::String(s) => !s.is_empty(),
        }
    }
}

impl From<i64> for Val {
    fn from(n: i64) -> Val {
        Val::Integer(n)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::String(s.into())
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Val {
        Val::Boolean(b)
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            String(s) => write!(f, "{}", s),
            Boolean(true) => write!(f, "TRUE"),
            Boolean(false) => write!(f, "FALSE"),
        }
    }
}
