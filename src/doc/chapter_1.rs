/*!
# Drawing Commands

Drawing commands take whole numbers. Any argument may be a variable,
except for `COLOR` and `FILL` which take words. Sizes must be greater
than zero.
*/

pub mod MOVE {
    /*!
    ## `MOVE X Y` Moves the pen to X,Y without drawing.
    */
}

pub mod DRAW {
    /*!
    ## `DRAW X [Y]` Draws a line from the pen to X,Y.
    When Y is left out the line is horizontal. The pen ends up at the
    end of the line.
    ```text
    MOVE 10 10
    DRAW 90
    DRAW 90 90
    ```
    */
}

pub mod CIRCLE {
    /*!
    ## `CIRCLE R` Draws a circle of radius R centred on the pen.
    */
}

pub mod RECTANGLE {
    /*!
    ## `RECTANGLE W H` Draws a rectangle with its top left corner at the pen.
    */
}

pub mod TRIANGLE {
    /*!
    ## `TRIANGLE B H` Draws a triangle standing on the pen.
    The base runs B to the right of the pen and the apex is H above
    the middle of the base.
    */
}

pub mod COLOR {
    /*!
    ## `COLOR C` Sets the pen color.
    One of `BLACK`, `BLUE`, `RED` or `GREEN`, in any case.
    */
}

pub mod FILL {
    /*!
    ## `FILL ON` or `FILL OFF`
    Shapes drawn while fill is on are solid.
    */
}

pub mod WRITE {
    /*!
    ## `WRITE [SIZE] "TEXT"` Writes text at the pen.
    The default size is 12. A lone number, or a variable, is written as
    its value.
    ```text
    WRITE "hello world"
    WRITE 30 "BIG"
    WRITE count
    ```
    */
}

pub mod CLEAR {
    /*!
    ## `CLEAR` Erases the drawing. The pen is not changed.
    */
}

pub mod RESET {
    /*!
    ## `RESET` Returns the pen to 0,0, black, fill off.
    The drawing is not erased.
    */
}
