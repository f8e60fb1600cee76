/*!
# `INPUT ["<prompt>";]<variable>[,<variable>...]`

## Purpose
Suspends execution and awaits a response from the terminal.

## Remarks
One console line is read for each variable. The prompt (or `? ` when
none is given) shows before the first read and `? ` before each
following one. A response for a numeric variable must parse as a
number; a response for a string variable is taken verbatim. Running
out of console input is an `INPUT PAST END` error.

## Example
```text
10 INPUT "NAME? ";N$
20 PRINT "HELLO ";N$
RUN
NAME? ADA
HELLO ADA
```

*/
