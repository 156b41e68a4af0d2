/*!
# Error Messages

Errors name the problem, then the line number and line when known,
then any detail.

```text
ILLEGAL FUNCTION CALL IN 3: CIRCLE 0; RADIUS MUST BE POSITIVE
```

| Code | Message | Cause |
|---:|---|---|
| 2 | SYNTAX ERROR | Wrong number of arguments, bad name, lower case command, unknown color. |
| 5 | ILLEGAL FUNCTION CALL | Size not positive, or a method called with the wrong number of arguments. |
| 6 | OVERFLOW | Arithmetic left the 32-bit range. |
| 7 | OUT OF MEMORY | Methods called themselves too deeply. |
| 10 | DUPLICATE DEFINITION | Two different `METHOD` lines with the same name. |
| 11 | DIVISION BY ZERO | Division by zero in an assignment. |
| 13 | TYPE MISMATCH | A whole number was expected. |
| 18 | UNDEFINED METHOD | A call to a method that has not been defined. |
| 22 | MISSING OPERAND | An assignment ending in an operator. |
| 24 | UNSUPPORTED COMMAND | The first word is not a command. |
| 25 | UNDEFINED VARIABLE | A name that has not been assigned. |
| 51 | INTERNAL ERROR | Usually a file that could not be read or written. |
| 53 | FILE NOT FOUND | `LOAD` could not find the file. |

## Checking versus running

`CHECK` and `boose --check` read every line once, top to bottom, and never
skip anything. A variable is known from its first assignment onward and a
method from its `METHOD` line onward, whatever path a run would take.
Because of that, a program that passes the check can still stop with
`UNDEFINED VARIABLE` when run if a name is only assigned inside a loop
that never executes.

*/
