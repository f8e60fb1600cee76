/*!
# `NEXT <variable>`
Also see `FOR`.

## Purpose
Used to indicate the end of a `FOR` loop.

## Remarks
The variable is required and names which loop to advance. `NEXT`
without a matching `FOR` is a `NEXT WITHOUT FOR` error. Once a loop
has landed on its limit, any further `NEXT` over that variable falls
through without looping.

## Example
```text
10 FOR I=1 TO 2
20 FOR J=1 TO 2
30 PRINT I*10+J
40 NEXT J
50 NEXT I
RUN
11
12
21
22
```

*/
