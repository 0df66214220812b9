/*!
# `PRINT <expression>`

## Purpose
Output a value to the terminal for the operator.

## Remarks
Each `PRINT` outputs exactly one value followed by a newline.
Booleans print as `TRUE` or `FALSE`.

## Example
```text
10 PRINT 6 * 7
20 PRINT "DONE"
30 PRINT 1 < 2
RUN
42
DONE
TRUE
```

*/
