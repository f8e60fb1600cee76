/*!
# Expressions and Types

There are two types of data: numbers and strings. All numbers are
64-bit floating point, written as digits with an optional fraction,
like `42` or `3.14`. There are no negative literals; a leading minus
is the negation operator. Strings are double-quoted and may contain
anything except a double quote.

Variable names for numbers are a letter followed by letters or digits,
as long as you like. String variables are exactly one letter followed
by `$`, so `A$` works and `AB$` does not. Names are case-sensitive and
so are keywords, which are always upper-case: `print` is a variable
name, not a statement.

A value is assigned with the `LET` statement, and the word `LET` is
never optional.

```text
10 LET PI=3.14
20 LET A$="HELLO"
```

## Operators

`+ - * /` operate on numbers, and `+` also joins two strings. Mixing a
number and a string in one operation is a `TYPE MISMATCH`. There are
no parentheses for grouping; parentheses always mean a subscript,
slice, or function argument.

Multiplication and division group to the left as usual. Addition and
subtraction group to the *right* in this dialect, which matters for
subtraction:

```text
10 PRINT 5-2+1
RUN
2
```

The `5-2+1` reads as `5-(2+1)`. Old habits from other BASICs will
betray you here; break the expression across `LET` statements when in
doubt.

Comparisons (`= <> < <= > >=`) are not expressions. They appear in one
place only, between `IF` and `THEN`.

## Slicing

Strings are sliced with `(start TO finish)`, counting from 1 with both
ends included, and either bound may be omitted. A bare subscript takes
one character. Slicing works on any string value, including a quoted
literal, and on one-dimensional string arrays.

```text
10 LET A$="HELLO WORLD"
20 PRINT A$(7 TO)
30 PRINT A$(5)
40 PRINT "ABCDEF"(2 TO 4)
RUN
WORLD
O
BCD
```

*/
