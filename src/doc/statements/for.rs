/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.

## Purpose
Used with `NEXT` to repeat execution of statements while iterating
over a sequence of numbers.

## Remarks
On the first iteration, x is assigned to the variable. Each `NEXT` adds
the step (1 when `STEP` is omitted) and jumps back to the statement
after the `FOR`. The loop exits when the variable lands exactly on y;
a step that jumps over y never exits.

Each control variable has exactly one loop context; a second `FOR`
over the same variable replaces the first. Loops over distinct
variables nest in the usual way.

The first iteration always executes, even when starting past the end.

## Example
```text
10 FOR I=1 TO 3
20 PRINT I
30 NEXT I
RUN
1
2
3
```

*/
