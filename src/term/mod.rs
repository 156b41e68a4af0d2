extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use boose::error;
use boose::lang::{Error, Line, Program};
use boose::mach::{Address, Engine};
use linefeed::{Interface, ReadResult};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
    }
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

/// Runs a program file once and prints what it drew.
pub fn batch(path: &Path, check_only: bool) -> i32 {
    let program = match load(&path.to_string_lossy()) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            return 1;
        }
    };
    let mut engine = Engine::new();
    if let Err(error) = engine.validate(&program) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        return 1;
    }
    if check_only {
        println!("OK");
        return 0;
    }
    info!(file = %path.display(), lines = program.len(), "run");
    let result = engine.run(&program);
    for primitive in engine.surface_mut().take() {
        println!("{}", primitive);
    }
    match result {
        Ok(()) => {
            info!("finished");
            0
        }
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            1
        }
    }
}

enum Directive {
    Load(String),
    Save(String),
    List,
    New,
    Check,
    Run,
    Status,
    Vars,
    Direct(Line),
}

impl Directive {
    fn from_input(input: &str) -> Directive {
        let line = Line::new(input);
        let tokens = line.tokens();
        let arg = || tokens.get(1).map(|s| s.trim_matches('"').to_string());
        match (tokens.first().map(String::as_str), tokens.len()) {
            (Some("LOAD"), 2) => arg().map_or(Directive::Direct(line.clone()), Directive::Load),
            (Some("SAVE"), 2) => arg().map_or(Directive::Direct(line.clone()), Directive::Save),
            (Some("LIST"), 1) => Directive::List,
            (Some("NEW"), 1) => Directive::New,
            (Some("CHECK"), 1) => Directive::Check,
            (Some("RUN"), 1) => Directive::Run,
            (Some("STATUS"), 1) => Directive::Status,
            (Some("VARS"), 1) => Directive::Vars,
            _ => Directive::Direct(line.clone()),
        }
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let interface = Interface::new("BOOSE")?;
    interface.set_prompt("> ")?;
    let mut engine = Engine::new();
    let mut program = Program::default();
    let mut print_ready = true;
    interface.write_fmt(format_args!("BOOSE\n"))?;

    loop {
        if print_ready {
            print_ready = false;
            interface.write_fmt(format_args!("READY.\n"))?;
        }
        let input = match interface.read_line()? {
            ReadResult::Input(input) => input,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if input.trim().is_empty() {
            continue;
        }
        interface.add_history_unique(input.clone());
        let result = match Directive::from_input(&input) {
            Directive::Load(filename) => load(&filename).map(|loaded| {
                program = loaded;
                vec![]
            }),
            Directive::Save(filename) => save(&program, &filename).map(|_| vec![]),
            Directive::List => Ok(program.lines().map(|l| l.text().to_string()).collect()),
            Directive::New => {
                program.clear();
                engine.start();
                Ok(vec![])
            }
            Directive::Check => engine.validate(&program).map(|_| vec!["OK".to_string()]),
            Directive::Run => run(&mut engine, &program, &interrupted),
            Directive::Status => Ok(engine.status().to_string().lines().map(String::from).collect()),
            Directive::Vars => Ok(vars(&engine)),
            Directive::Direct(line) => direct(&mut engine, &program, &line, &interrupted),
        };
        for primitive in engine.surface_mut().take() {
            interface.write_fmt(format_args!("{}\n", primitive))?;
        }
        match result {
            Ok(output) => {
                for s in output {
                    interface.write_fmt(format_args!("{}\n", s))?;
                }
            }
            Err(error) => {
                interface.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
                print_ready = true;
            }
        }
    }
    Ok(())
}

/// Drives the engine a line at a time so CTRL-C can break in.
fn run(
    engine: &mut Engine,
    program: &Program,
    interrupted: &AtomicBool,
) -> Result<Vec<String>, Error> {
    engine.start();
    interrupted.store(false, Ordering::SeqCst);
    let mut cursor: Address = 0;
    while let Some(line) = program.get(cursor) {
        if interrupted.swap(false, Ordering::SeqCst) {
            return Ok(vec![format!("BREAK IN {}", cursor + 1)]);
        }
        let index = cursor;
        if let Err(error) = engine.execute_line(line, &mut cursor) {
            return Err(error
                .in_line_number(Some(index + 1))
                .in_line(line.text()));
        }
        cursor = cursor.wrapping_add(1);
    }
    Ok(vec![])
}

fn direct(
    engine: &mut Engine,
    program: &Program,
    line: &Line,
    interrupted: &AtomicBool,
) -> Result<Vec<String>, Error> {
    engine.validate_line(line)?;
    interrupted.store(false, Ordering::SeqCst);
    match engine.execute_direct(line, program, || interrupted.swap(false, Ordering::SeqCst))? {
        Some(index) => Ok(vec![format!("BREAK IN {}", index + 1)]),
        None => Ok(vec![]),
    }
}

fn vars(engine: &Engine) -> Vec<String> {
    let mut out: Vec<String> = engine
        .variables()
        .iter()
        .map(|(name, value)| format!("{} = {}", name, value))
        .collect();
    for name in engine.methods() {
        if let Some(method) = engine.method(name) {
            out.push(format!("METHOD {}({})", name, method.params.join(",")));
        }
    }
    out
}

fn load(filename: &str) -> Result<Program, Error> {
    let mut program = Program::default();
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg.as_str())),
                _ => return Err(error!(InternalError; msg.as_str())),
            }
        }
    };
    for line in reader.lines() {
        match line {
            Err(error) => return Err(error!(InternalError; error.to_string().as_str())),
            Ok(line) => program.push(Line::new(&line)),
        }
    }
    Ok(program)
}

fn save(program: &Program, filename: &str) -> Result<(), Error> {
    if program.is_empty() {
        return Err(error!(InternalError; "NOTHING TO SAVE"));
    }
    let mut file = match File::create(filename) {
        Ok(file) => file,
        Err(error) => return Err(error!(InternalError; error.to_string().as_str())),
    };
    if let Err(error) = write!(file, "{}", program) {
        return Err(error!(InternalError; error.to_string().as_str()));
    }
    Ok(())
}
