/*!
# `IF A OP B` ... `ENDIF`

## Purpose
Run the enclosed lines only when the comparison holds.

## Remarks
OP is one of `>`, `<`, `==`, `!=`, `>=` or `<=`. There is no `ELSE`.
The lines of a skipped block are not examined at all, so they may refer
to variables that don't exist yet.

## Example
```text
size = 30
IF size > 20
COLOR RED
ENDIF
CIRCLE size
```

*/
