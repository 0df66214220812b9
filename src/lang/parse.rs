use super::{token::*, Error};
use std::iter::Peekable;

type Result<T> = std::result::Result<T, Error>;

/// Converts infix tokens into postfix order with the shunting-yard algorithm.
///
/// Consumes tokens up to, but not including, a `THEN` or the end of the
/// stream. The returned tokens borrow from the line they came from.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> Result<Vec<&'a Positioned>>
where
    I: Iterator<Item = &'a Positioned>,
{
    let mut output: Vec<&'a Positioned> = vec![];
    let mut operators: Vec<&'a Positioned> = vec![];
    loop {
        match tokens.peek() {
            None => break,
            Some(p) if p.token == Token::Then => break,
            _ => {}
        }
        let p = match tokens.next() {
            Some(p) => p,
            None => break,
        };
        match &p.token {
            t if t.is_value() => output.push(p),
            t if t.is_operator() => {
                while let Some(top) = operators.last() {
                    if !binds_no_tighter(t, &top.token) {
                        break;
                    }
                    if let Some(top) = operators.pop() {
                        output.push(top);
                    }
                }
                operators.push(p);
            }
            Token::LeftParen => operators.push(p),
            Token::RightParen => loop {
                match operators.pop() {
                    Some(top) if top.token == Token::LeftParen => break,
                    Some(top) => output.push(top),
                    None => return Err(error!(ExpressionError, ..&p.column; "mismatched parenthesis")),
                }
            },
            _ => {
                return Err(error!(ExpressionError, ..&p.column; "unexpected token in expression"))
            }
        }
    }
    while let Some(top) = operators.pop() {
        if let Token::LeftParen | Token::RightParen = top.token {
            return Err(error!(ExpressionError, ..&top.column; "mismatched parenthesis"));
        }
        output.push(top);
    }
    Ok(output)
}

/// Whether `top` should be popped before pushing `incoming`.
fn binds_no_tighter(incoming: &Token, top: &Token) -> bool {
    let (incoming_precedence, top_precedence) = match (incoming.precedence(), top.precedence()) {
        (Some(i), Some(t)) => (i, t),
        _ => return false,
    };
    match incoming.associativity() {
        Some(Associativity::Left) => incoming_precedence <= top_precedence,
        Some(Associativity::Right) => incoming_precedence < top_precedence,
        None => false,
    }
}
