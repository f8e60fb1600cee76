/*!
# `IF <comparison> THEN <statement>`

## Purpose
Do something contingent on a comparison.

## Remarks
The condition is always a single comparison (`= <> < <= > >=`) between
two expressions; there is no `ELSE`. Strings compare alphabetically.
When the comparison is false, execution skips to the next program
line, so everything after the `IF` on the same line belongs to the
true branch.

## Example
```text
10 LET A=10
20 IF A<30 THEN PRINT "SMALL":PRINT "DONE"
30 IF A>30 THEN PRINT "BIG"
RUN
SMALL
DONE
```

*/
