/*!
# `GO TO <expression>`

## Purpose
Immediately and unconditionally move execution to the line the
expression names.

## Remarks
`GO` and `TO` are two words in this dialect; `GOTO` run together is an
ordinary variable name. The target is an expression, evaluated at run
time, and execution lands on the first line numbered at or past it, so
`GO TO 25` reaches line 30 when 25 does not exist. Only when no such
line exists does an `UNDEFINED LINE` error occur.

## Example
```text
10 GO TO 30
20 PRINT "THIS WILL NOT PRINT"
30 PRINT "THIS WILL PRINT"
RUN
THIS WILL PRINT
```

*/
