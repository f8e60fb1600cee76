/*!
# `READ <variable>[,<variable>...]`

## Purpose
Reads the information defined in `DATA` statements.

## Remarks
Each variable takes the next constant from the program's data queue.
The constant's type must match the variable. An `OUT OF DATA` error
occurs when reading past the end; see `RESTORE` to rewind.

## Example
```text
10 READ A$,A
20 PRINT A$;A
30 DATA "NUGGET",3
RUN
NUGGET3
```

*/
