/*!
## Terminal front end

Loads a program from a file and runs it against the console.
`PRINT` writes one value per line and `INPUT` prompts with `? `.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::{Column, Error, Line, LineNumber};
use crate::mach::{Console, Event, Program, Runtime, Val};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

pub fn main(path: &Path, list: bool) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!(
                "{}",
                Style::new()
                    .bold()
                    .paint(format!("{}: {}", path.display(), error))
            );
            return 1;
        }
    };
    let listing = match load(&source) {
        Ok(listing) => listing,
        Err((index, text, error)) => {
            report(&error, Some(text));
            eprintln!("In line {} of the file. (Not BASIC line number)", index + 1);
            return 1;
        }
    };
    let program = match Program::new(listing.lines) {
        Ok(program) => program,
        Err(error) => {
            report(&error, None);
            return 1;
        }
    };
    debug!(path = %path.display(), lines = program.len(), "program loaded");
    if list {
        for line in program.listing() {
            println!("{}", line);
        }
        return 0;
    }
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "unable to install Ctrl-C handler");
    }
    let mut console = TermConsole::new(interrupted.clone());
    let mut runtime = Runtime::new(program);
    loop {
        if interrupted.load(Ordering::SeqCst) {
            if let Some(line) = runtime.current_line() {
                eprintln!("{}", Style::new().bold().paint(format!("BREAK IN {}", line.number())));
            }
            return 130;
        }
        match runtime.step(&mut console) {
            Ok(Event::Running) => {}
            Ok(Event::Stopped) => return 0,
            Err(error) => {
                let listing_text = &listing.text;
                let text = error
                    .line_number()
                    .and_then(|number| listing_text.get(&number))
                    .map(|s| s.as_str());
                report(&error, text);
                return 1;
            }
        }
    }
}

/// Tokenized lines plus the text they came from, for error display.
#[derive(Debug)]
struct Listing {
    lines: Vec<Line>,
    text: HashMap<LineNumber, String>,
}

fn load(source: &str) -> Result<Listing, (usize, &str, Error)> {
    let mut listing = Listing {
        lines: vec![],
        text: HashMap::new(),
    };
    for (index, text) in source.lines().enumerate() {
        if text.trim().is_empty() {
            continue;
        }
        match Line::from_str(text) {
            Ok(line) => {
                listing.text.insert(line.number(), text.to_string());
                listing.lines.push(line);
            }
            Err(error) => return Err((index, text, error)),
        }
    }
    Ok(listing)
}

fn report(error: &Error, text: Option<&str>) {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
    if let Some(text) = text {
        eprintln!("{}", decorate(text, &error.column()));
    }
}

/// Underlines the columns of `ins` an error points at.
fn decorate(ins: &str, column: &Column) -> String {
    let mut under_on = false;
    let mut out = String::new();
    let style = Style::new().underline();
    let prefix = format!("{}", style.prefix());
    let suffix = format!("{}", style.suffix());
    for (index, ch) in ins.chars().enumerate() {
        let do_under = column.contains(&index);
        if under_on {
            if !do_under {
                out.push_str(&suffix);
            }
        } else if do_under {
            out.push_str(&prefix);
        }
        under_on = do_under;
        out.push(ch);
    }
    if under_on {
        out.push_str(&suffix);
    }
    out
}

struct TermConsole {
    interface: Option<Interface<DefaultTerminal>>,
    interrupted: Arc<AtomicBool>,
}

impl TermConsole {
    fn new(interrupted: Arc<AtomicBool>) -> TermConsole {
        let interface = match Interface::new("INPUT") {
            Ok(interface) => {
                interface.set_report_signal(Signal::Interrupt, true);
                if let Err(error) = interface.set_prompt("? ") {
                    warn!(%error, "unable to set prompt");
                }
                Some(interface)
            }
            Err(error) => {
                debug!(%error, "no terminal, reading standard input");
                None
            }
        };
        TermConsole {
            interface,
            interrupted,
        }
    }
}

impl Console for TermConsole {
    fn write(&mut self, val: &Val) {
        let result = match &self.interface {
            Some(interface) => interface.write_fmt(format_args!("{}\n", val)),
            None => writeln!(std::io::stdout(), "{}", val),
        };
        if let Err(error) = result {
            warn!(%error, "write failed");
        }
    }

    fn read_line(&mut self) -> String {
        match &self.interface {
            Some(interface) => match interface.read_line() {
                Ok(ReadResult::Input(s)) => s,
                Ok(ReadResult::Signal(Signal::Interrupt)) => {
                    self.interrupted.store(true, Ordering::SeqCst);
                    String::new()
                }
                Ok(_) => String::new(),
                Err(error) => {
                    warn!(%error, "read failed");
                    String::new()
                }
            },
            None => {
                let mut s = String::new();
                if let Err(error) = std::io::stdin().lock().read_line(&mut s) {
                    warn!(%error, "read failed");
                }
                s
            }
        }
    }
}
