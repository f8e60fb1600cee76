/*!
# `STOP`

## Purpose
Halt the program.

## Remarks
Halting by `STOP` and running past the last line are the same, normal
ending. There is no error and nothing to resume.

## Example
```text
10 PRINT "ONE"
20 STOP
30 PRINT "NEVER"
RUN
ONE
```

*/
