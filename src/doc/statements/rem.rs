/*!
# `REM <anything>`

## Purpose
Embeds non-executing remarks into the program source code.

## Remarks
Everything through the end of the line is discarded, including colons,
so a remark cannot be followed by more statements.

## Example
```text
10 REM AUTHORED BY ZAPHOD
20 PRINT 42
RUN
42
```

*/
