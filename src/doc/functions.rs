/*!
# Built-in Functions

A name followed by an argument list resolves as a function only when
no variable or array of that name exists; functions are not reserved
words. All of these take exactly one argument.

## ABS(X)
Absolute value of X.

## INT(X)
X rounded down to the nearest whole number. This is a floor, so
`INT(-1.5)` is `-2`.

## LEN(X$)
Number of characters in X$.

## SGN(X)
The sign of X: `-1`, `0`, or `1`.

## SQR(X)
Square root of X. A negative X is an `ILLEGAL FUNCTION CALL`.

## RND(X)
A number at least 0 and less than 1. `RND(1)` (any positive X) draws
the next number from the sequence. `RND(0)` repeats the last draw.
A negative X reseeds the sequence from X, so `RND(-7)` then `RND(1)`
always produces the same pair.

The generator starts from the same state on every run, so a program
that takes no input replays exactly. To vary a game between plays, ask
the operator for a seed:

```text
10 INPUT "SEED? ";S
20 LET R=RND(-ABS(S))
30 PRINT RND(1)
```

*/
