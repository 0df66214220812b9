use basic::lang::{lex, ErrorCode, Line, Token};

fn tokens(s: &str) -> Vec<Token> {
    let (_, v) = lex(s).unwrap();
    v.into_iter().map(|p| p.token).collect()
}

#[test]
fn test_line_number() {
    let (ln, v) = lex("10 PRINT 1").unwrap();
    assert_eq!(ln, 10);
    assert_eq!(v.len(), 2);
    let (ln, v) = lex("65535").unwrap();
    assert_eq!(ln, 65535);
    assert!(v.is_empty());
}

#[test]
fn test_missing_line_number() {
    for s in &["PRINT 1", " 10 PRINT 1", "10X PRINT 1", ""] {
        let e = lex(s).unwrap_err();
        assert_eq!(e.code(), ErrorCode::LexError);
        assert_eq!(e.text(), "missing or invalid leading line number");
    }
}

#[test]
fn test_unary_minus() {
    assert_eq!(
        tokens("10 PRINT -5"),
        vec![Token::Print, Token::UnaryMinus, Token::Number(5)]
    );
}

#[test]
fn test_binary_minus() {
    assert_eq!(
        tokens("10 LET X = 3 - 5"),
        vec![
            Token::Let,
            Token::Variable("X".into()),
            Token::Equals,
            Token::Number(3),
            Token::Subtract,
            Token::Number(5)
        ]
    );
}

#[test]
fn test_minus_after_paren_is_unary() {
    assert_eq!(
        tokens("10 PRINT (1) -2"),
        vec![
            Token::Print,
            Token::LeftParen,
            Token::Number(1),
            Token::RightParen,
            Token::UnaryMinus,
            Token::Number(2)
        ]
    );
}

#[test]
fn test_minus_after_string_and_variable() {
    assert_eq!(tokens("10 \"A\" - X - 1")[1], Token::Subtract);
    assert_eq!(tokens("10 \"A\" - X - 1")[3], Token::Subtract);
}

#[test]
fn test_relational() {
    assert_eq!(
        tokens("10 = < > <= >= <>"),
        vec![
            Token::Equals,
            Token::LessThan,
            Token::GreaterThan,
            Token::LessOrEqual,
            Token::GreaterOrEqual,
            Token::NotEqual
        ]
    );
}

#[test]
fn test_string() {
    assert_eq!(
        tokens("10 PRINT \"HELLO, WORLD\""),
        vec![Token::Print, Token::String("HELLO, WORLD".into())]
    );
}

#[test]
fn test_unterminated_string() {
    assert_eq!(
        tokens("10 PRINT \"OPEN ENDED"),
        vec![Token::Print, Token::String("OPEN ENDED".into())]
    );
}

#[test]
fn test_rem() {
    assert_eq!(
        tokens("10 REM GOTO 20 \"not a string"),
        vec![Token::Rem, Token::Comment(" GOTO 20 \"not a string".into())]
    );
}

#[test]
fn test_not_and_parens() {
    assert_eq!(
        tokens("10 IF !(X = 1) THEN 30"),
        vec![
            Token::If,
            Token::LogicalNot,
            Token::LeftParen,
            Token::Variable("X".into()),
            Token::Equals,
            Token::Number(1),
            Token::RightParen,
            Token::Then,
            Token::Number(30)
        ]
    );
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(tokens("10 print"), vec![Token::Variable("print".into())]);
}

#[test]
fn test_unrecognized_token() {
    let e = lex("20 LET X = 1+2").unwrap_err();
    assert_eq!(e.code(), ErrorCode::LexError);
    assert_eq!(e.text(), "unrecognized token");
    assert_eq!(e.line_number(), Some(20));
    assert_eq!(e.column(), 11..14);
}

#[test]
fn test_number_out_of_range() {
    let e = lex("10 PRINT 99999999999999999999").unwrap_err();
    assert_eq!(e.text(), "number out of range");
}

#[test]
fn test_offsets() {
    let (_, v) = lex("10 PRINT -X").unwrap();
    let offsets: Vec<_> = v.iter().map(|p| p.offset()).collect();
    assert_eq!(offsets, vec![3, 9, 10]);
}

#[test]
fn test_keywords_round_trip() {
    let l = Line::from_str("40 IF X <> 2 THEN 10").unwrap();
    assert_eq!(l.to_string(), "40 IF X <> 2 THEN 10");
    let l = Line::from_str("50 INPUT NAME").unwrap();
    assert_eq!(l.to_string(), "50 INPUT NAME");
    let l = Line::from_str("60 GOTO 10").unwrap();
    assert_eq!(l.to_string(), "60 GOTO 10");
}
