/*!
# An Introductory Tutorial

A program is a plain text file of numbered lines. Every line starts
with its line number, a whole number from 0 to 65535, and holds one or
more statements separated by colons. The file order does not matter;
lines run in line-number order. Put this in `hello.bas`:

```text
20 PRINT "WORLD"
10 PRINT "HELLO"
```

and run it:

```text
$ minibasic hello.bas
HELLO
WORLD
```

The program ends when it runs past the last line, or sooner at a
`STOP`. Anything that goes wrong, from a typo to reading past the end
of your data, stops the run and reports one error with the line it
happened on:

```text
?UNDEFINED VARIABLE IN 10; X
```

Because errors name the line, sprinkling line numbers 10 apart (the
custom since 1964) leaves room to insert lines later without
renumbering everything.

Keywords must be upper-case. The lower-case `print` names a variable,
which is why the classic `GOTO` spelled as one word does not jump
anywhere in this dialect; the keyword is two words, `GO TO`.

Stop a runaway program with CTRL-C. It halts with `?BREAK IN` and the
line it was on, which is the polite way to ask an infinite loop to
give your terminal back.

From here, read the chapter on expressions and types, then the
statement pages. Each page gives the syntax, the rules, and a worked
example.

*/
