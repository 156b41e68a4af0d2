/*!
# `METHOD NAME(P1,P2,...)` ... `ENDMETHOD`

## Purpose
Define a method which can be called by name.

## Remarks
Defining a method does not run it. Call it with `NAME(A1,A2,...)`
where each argument is a number or a variable. There must be no
spaces inside the parentheses. Parameters hide variables of the same
name until the method returns. Methods may call themselves.
A METHOD written directly inside another method's body is defined
when the outer method runs, and its ENDMETHOD also returns from the
outer method.

## Example
```text
METHOD Rings(r)
IF r > 0
CIRCLE r
r = r - 10
Rings(r)
ENDIF
ENDMETHOD
MOVE 100 100
Rings(50)
```

*/
