/*!
# `NAME = VALUE [OP VALUE]`

## Purpose
Assign a whole number to a variable.

## Remarks
OP is one of `+`, `-`, `*` or `/`. Division truncates toward zero.
Dividing by zero or leaving the 32-bit range stops the program.
Inside a method, assigning to a parameter changes only the parameter.

## Example
```text
width = 40
area = width * 3
half = area / 7
WRITE half
```

*/
