/*!
# `LET <variable>=<expression>`

## Purpose
Assign a value to the variable.

## Remarks
The word `LET` is required in this dialect; `A=1` alone is a syntax
error. The target may be a scalar or an array element. Assigning into
a string-array element stores the first character of the value.

## Example
```text
10 LET A=10
20 PRINT A
30 LET A=A+10
40 PRINT A
RUN
10
20
```

*/
