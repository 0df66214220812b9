/*!
# `REM <anything>`

## Purpose
Embeds non-executing remarks into the program source code.

## Remarks
Remarks do nothing. Everything after `REM` is kept exactly as written.

## Example
```text
10 REM Authored by Zaphod
20 PRINT 42
RUN
42
```

*/
