use super::{Operation, Stack, Val, Var};
use crate::error;
use crate::lang::{Error, Positioned, Token};

type Result<T> = std::result::Result<T, Error>;

/// Evaluates a postfix token sequence against the variable context.
pub fn evaluate(postfix: &[&Positioned], vars: &Var) -> Result<Val> {
    let mut stack: Stack<Val> = Stack::new("EXPRESSION TOO COMPLEX");
    for p in postfix {
        let val = match &p.token {
            Token::Number(n) => Val::Integer(*n),
            Token::String(s) => Val::String(s.as_str().into()),
            Token::Variable(name) => match vars.fetch(name) {
                Some(val) => val.clone(),
                None => return Err(error!(ExpressionError, ..&p.column; "undefined variable")),
            },
            t if t.is_unary_operator() => {
                let operand = match stack.pop() {
                    Some(val) => val,
                    None => {
                        return Err(
                            error!(ExpressionError, ..&p.column; "unary operator missing operand"),
                        )
                    }
                };
                Operation::unary(t, operand).map_err(|e| e.in_column(&p.column))?
            }
            t if t.is_binary_operator() => {
                let (lhs, rhs) = match stack.pop_2() {
                    Some(pair) => pair,
                    None => {
                        return Err(
                            error!(ExpressionError, ..&p.column; "binary operator missing operand"),
                        )
                    }
                };
                Operation::binary(t, lhs, rhs).map_err(|e| e.in_column(&p.column))?
            }
            _ => return Err(error!(ExpressionError, ..&p.column; "unexpected token in expression")),
        };
        stack.push(val)?;
    }
    match (stack.pop(), stack.is_empty()) {
        (Some(val), true) => Ok(val),
        _ => Err(error!(ExpressionError; "malformed expression")),
    }
}
