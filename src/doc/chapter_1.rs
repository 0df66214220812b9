/*!
# Chapter 1: The Language

A program is a collection of lines. Each line starts with a line number
followed by whitespace. Line numbers don't need to be contiguous and may
be entered in any order; the program always runs in ascending line
number order. A line with only a line number does nothing.

```text
30 PRINT "LAST"
10 PRINT "FIRST"
20 REM NOTHING TO SEE HERE
```

Tokens are separated by whitespace. Parentheses and the characters `-`,
`!` and `"` also end a token when they begin one, so `(X)` and `-5` need
no spaces. Everything else must be spaced: `X+1` is an error, `X + 1`
is not. Keywords are written in upper case.

## Values

There are three kinds of value.

| Kind | Example | Comes from |
|-|-|-|
| Integer | `42` | number literals and arithmetic |
| String | `"HELLO"` | string literals and `INPUT` |
| Boolean | `TRUE` | comparisons and `!` |

Values are never converted from one kind to another. `"1" = 1` is a
`TYPE MISMATCH` and so is `-"A"`. A string literal without a closing quote
runs to the end of the line.

Variable names start with a letter or underscore and continue with
letters, digits or underscores. Using a variable before a `LET` or
`INPUT` gives it a value is an error.

## Operators

| Precedence | Operator | Meaning |
|-|-|-|
| 12 | - ! | Negation and logical not, unary |
| 10 | * / | Multiplication and division |
| 8 | + - | Addition and subtraction |
| 4 | = <> < <= > >= | Relational |

Unary operators group right to left. Everything else groups left to
right, so `2 - 3 - 4` is `-5`. A `-` directly after a number, string or
variable is subtraction, otherwise it is negation.

Division is integer division truncating toward zero. Arithmetic is
checked for overflow and division by zero.

```text
10 PRINT 7 / 2
20 PRINT -7 / 2
30 PRINT 7 / 0
RUN
3
-3
EXPRESSION ERROR IN 30 (11..12); division by zero
```

Relational operators compare two values of the same kind and produce a
Boolean. Strings compare by character.

*/
