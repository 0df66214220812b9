use super::Val;
use crate::error;
use crate::lang::{Error, Token};
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn unary(token: &Token, val: Val) -> Result<Val> {
        use Token::*;
        match token {
            UnaryMinus => Operation::negate(val),
            LogicalNot => Operation::not(val),
            _ => Err(error!(ExpressionError; "not a unary operator")),
        }
    }

    pub fn binary(token: &Token, lhs: Val, rhs: Val) -> Result<Val> {
        use Token::*;
        match token {
            Add => Operation::sum(lhs, rhs),
            Subtract => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
            Equals => Operation::compare(lhs, rhs, |o| o == Ordering::Equal),
            NotEqual => Operation::compare(lhs, rhs, |o| o != Ordering::Equal),
            LessThan => Operation::compare(lhs, rhs, |o| o == Ordering::Less),
            GreaterThan => Operation::compare(lhs, rhs, |o| o == Ordering::Greater),
            LessOrEqual => Operation::compare(lhs, rhs, |o| o != Ordering::Greater),
            GreaterOrEqual => Operation::compare(lhs, rhs, |o| o != Ordering::Less),
            _ => Err(error!(ExpressionError; "not a binary operator")),
        }
    }

    pub fn negate(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Integer(n) => match n.checked_neg() {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(ExpressionError; "overflow")),
            },
            String(_) | Boolean(_) => Err(error!(ExpressionError; "type mismatch")),
        }
    }

    pub fn not(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Boolean(b) => Ok(Boolean(!b)),
            Integer(_) | String(_) => Err(error!(ExpressionError; "type mismatch")),
        }
    }

    fn integers(lhs: Val, rhs: Val) -> Result<(i64, i64)> {
        match (lhs, rhs) {
            (Val::Integer(l), Val::Integer(r)) => Ok((l, r)),
            _ => Err(error!(ExpressionError; "type mismatch")),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        match l.checked_add(r) {
            Some(i) => Ok(Val::Integer(i)),
            None => Err(error!(ExpressionError; "overflow")),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        match l.checked_sub(r) {
            Some(i) => Ok(Val::Integer(i)),
            None => Err(error!(ExpressionError; "overflow")),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        match l.checked_mul(r) {
            Some(i) => Ok(Val::Integer(i)),
            None => Err(error!(ExpressionError; "overflow")),
        }
    }

    /// Integer division, truncating toward zero.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        match l.checked_div(r) {
            Some(i) => Ok(Val::Integer(i)),
            None => {
                if r == 0 {
                    Err(error!(ExpressionError; "division by zero"))
                } else {
                    Err(error!(ExpressionError; "overflow"))
                }
            }
        }
    }

    fn compare<F>(lhs: Val, rhs: Val, test: F) -> Result<Val>
    where
        F: Fn(Ordering) -> bool,
    {
        use Val::*;
        let ordering = match (&lhs, &rhs) {
            (Integer(l), Integer(r)) => l.cmp(r),
            (String(l), String(r)) => l.cmp(r),
            (Boolean(l), Boolean(r)) => l.cmp(r),
            _ => return Err(error!(ExpressionError; "type mismatch")),
        };
        Ok(Boolean(test(ordering)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_truncates() {
        assert_eq!(Operation::divide(Val::Integer(7), Val::Integer(2)), Ok(Val::Integer(3)));
        assert_eq!(Operation::divide(Val::Integer(-7), Val::Integer(2)), Ok(Val::Integer(-3)));
    }

    #[test]
    fn test_divide_by_zero() {
        let e = Operation::divide(Val::Integer(1), Val::Integer(0)).unwrap_err();
        assert_eq!(e.text(), "division by zero");
    }

    #[test]
    fn test_multiply_is_not_divide() {
        assert_eq!(Operation::multiply(Val::Integer(6), Val::Integer(3)), Ok(Val::Integer(18)));
    }

    #[test]
    fn test_overflow() {
        let e = Operation::sum(i64::max_value().into(), Val::Integer(1)).unwrap_err();
        assert_eq!(e.text(), "overflow");
    }

    #[test]
    fn test_compare_strings() {
        let r = Operation::binary(&Token::LessThan, "ABC".into(), "ABD".into());
        assert_eq!(r, Ok(Val::Boolean(true)));
        let r = Operation::binary(&Token::Equals, "A".into(), "A".into());
        assert_eq!(r, Ok(Val::Boolean(true)));
    }

    #[test]
    fn test_compare_mixed_types() {
        let e = Operation::binary(&Token::Equals, Val::Integer(1), "1".into()).unwrap_err();
        assert_eq!(e.text(), "type mismatch");
    }

    #[test]
    fn test_not_requires_boolean() {
        assert_eq!(Operation::not(false.into()), Ok(Val::Boolean(true)));
        assert!(Operation::not(Val::Integer(1)).is_err());
    }
}
