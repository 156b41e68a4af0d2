/*!
# Introductory Tutorial for BOOSE

Begin by opening a terminal and running the executable with no arguments.
If you get the following, you are ready for this tutorial.
Type CTRL-D to exit.
<pre><code>&nbsp;  BOOSE
&nbsp;  READY.
&nbsp;> █
</code></pre>

 Stop a running program with CTRL-C.

Every line you type is a command for the drawing pen. The pen has a
position, a color and a fill setting. It starts at the top left corner,
which is `0,0`, drawing in black with fill turned off. For this tutorial,
lines that you type are marked with a "`>`". Shapes are reported as the
primitives they would draw.

<pre><code>&nbsp;> MOVE 100 100
&nbsp;  MOVE 100,100
&nbsp;> CIRCLE 50
&nbsp;  ELLIPSE 50,50 100x100 Black
&nbsp;> STATUS
&nbsp;  Position: {X=100, Y=100}
&nbsp;  Fill: OFF
&nbsp;  Color: Black
</code></pre>

Commands must be typed in upper case. `circle 50` is a syntax error
rather than a circle.

Lines typed directly are executed immediately. Methods of a program
that has been run can be called this way too. To build a program,
write it in a file with any text editor and load it.

<pre><code>&nbsp;> LOAD "house.boose"
&nbsp;> LIST
&nbsp;  MOVE 50 150
&nbsp;  RECTANGLE 100 80
&nbsp;  TRIANGLE 100 60
&nbsp;> CHECK
&nbsp;  OK
&nbsp;> RUN
&nbsp;  MOVE 50,150
&nbsp;  RECTANGLE 50,150 100x80 Black
&nbsp;  POLYGON 50,150 150,150 100,90 Black
</code></pre>

`CHECK` reads the whole program without drawing anything and reports
the first problem it finds, with the line number where it occurs.
`RUN` checks nothing in advance: it executes lines from the top and
stops at the first error. Use `NEW` to forget the program, `SAVE`
to write it back out and `VARS` to see the variables a run left behind.

A program can also be run from the command line.

```text
boose house.boose
boose --check house.boose
```

Set `RUST_LOG=debug`, or pass `--trace`, to watch method calls, returns
and loop iterations on standard error.

*/
