/*!
# `IF <expression> THEN <line number>`

## Purpose
Jump to a line contingent on a predicate.

## Remarks
Booleans are taken as they are. Integers are true when not zero and
strings are true when not empty. When the predicate is false execution
continues with the next line. The line number is only looked up when
the jump is taken.

## Example
```text
10 LET A = 10
20 PRINT A
30 LET A = A + 10
40 IF A < 30 THEN 20
RUN
10
20
```

*/
