/*!
# `RESTORE [<line number>]`

## Purpose
Changes the `DATA` pointer to a different location.

## Remarks
Without a line number the pointer rewinds to the very first constant.
With one, it moves to the first `DATA` statement on or after that
line; if no `DATA` follows, an `UNDEFINED LINE` error occurs.

## Example
```text
10 FOR I=1 TO 3
20 READ A$:PRINT A$;:RESTORE 110
30 NEXT I
40 PRINT
100 DATA "HELLO"
110 DATA "."
RUN
HELLO..
```

*/
