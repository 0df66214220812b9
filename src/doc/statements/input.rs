/*!
# `INPUT <variable>`

## Purpose
Suspends execution and awaits a response from the terminal.

## Remarks
The response is stored as a string with surrounding whitespace removed.
It is never converted to a number.

## Example
```text
10 INPUT NAME
20 PRINT NAME
RUN
? ZAPHOD
ZAPHOD
```

*/
