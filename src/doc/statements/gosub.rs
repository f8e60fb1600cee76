/*!
# `GO SUB <expression>`

## Purpose
Save the return address on the stack and move execution to the line the
expression names.

## Remarks
`GO` and `SUB` are two words in this dialect. The target is an
expression, evaluated at run time, and resolves like `GO TO`.
`RETURN` resumes at the statement after the `GO SUB`.

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
