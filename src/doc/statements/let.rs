/*!
# `LET <variable> = <expression>`

## Purpose
Assign a value to the variable.

## Remarks
The word `LET` is required. Assigning replaces any earlier value,
even one of a different kind.

## Example
```text
10 LET A = 10
20 PRINT A
30 LET A = "TWENTY"
40 PRINT A
RUN
10
TWENTY
```

*/
