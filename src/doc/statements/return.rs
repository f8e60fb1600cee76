/*!
# `RETURN`

## Purpose
`RETURN` is used at the end of a subroutine.

## Remarks
Resumes at the statement after the most recent `GO SUB`. With nothing
on the return stack, a `RETURN WITHOUT GOSUB` error occurs. See
`GO SUB`.

## Example
```text
10 GO SUB 100
20 PRINT "WORLD"
30 STOP
100 PRINT "HELLO"
110 RETURN
RUN
HELLO
WORLD
```

*/
