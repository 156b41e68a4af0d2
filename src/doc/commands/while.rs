/*!
# `WHILE A OP B` ... `ENDWHILE`

## Purpose
Repeat the enclosed lines while the comparison holds.

## Remarks
The comparison is evaluated again each time `ENDWHILE` is reached.
A loop that never ends can be stopped with CTRL-C.

## Example
```text
r = 10
WHILE r < 60
CIRCLE r
r = r + 10
ENDWHILE
```

*/
