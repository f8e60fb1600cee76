/*!
# `DIM <variable>(<size>[,<size>...])`

## Purpose
Prepare an array by defining its dimensions and size.

## Remarks
Arrays must be dimensioned before use and may not be dimensioned twice;
a second `DIM` of the same name is a `REDIMENSIONED ARRAY` error.
Subscripts count from 1, so `DIM X(10)` allows `X(1)` through `X(10)`.
Storage is sparse; numeric cells read as `0` until written. Cells of a
string array hold a single character each and read as a space, and a
one-dimensional string array can be read whole or sliced like a string.

## Example
```text
10 DIM X(10,10)
20 LET X(4,2)=7
30 PRINT X(4,2)
RUN
7
```

*/
