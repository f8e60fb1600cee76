/*!
# `DATA <literal>[,<literal>...]`

## Purpose
`DATA` defines a list of constants to be read in sequentially.

## Remarks
Literals are unsigned numbers or quoted strings; expressions and signs
are not allowed here. All `DATA` in the program forms one queue, in line
order, no matter where the statements sit. The `READ` statement loads
the next constant into a variable and an `OUT OF DATA` error occurs
when reading past the end.

## Example
```text
10 READ A$,A
20 PRINT A$;A
30 DATA "NUGGET",3
RUN
NUGGET3
```

*/
