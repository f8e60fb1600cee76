/*!
# `PRINT [<list of expressions>]`

## Purpose
Output information to the terminal for the operator.

## Remarks
A `PRINT` by itself outputs a newline. An expression followed by a
semicolon (;) prints with nothing after it; any other expression ends
its output line. Numbers print without a decimal point when they have
no fraction.

## Example
```text
10 PRINT "HELLO ";"WORLD"
20 PRINT 1+1,4/2
30 PRINT
40 PRINT "DONE"
RUN
HELLO WORLD
2
2

DONE
```

*/
