#![allow(dead_code)]
use basic::lang::Error;
use basic::mach::{Console, Program, Runtime, Val};
use std::collections::VecDeque;

/// A console fed from queued lines that records everything written.
#[derive(Default)]
pub struct Script {
    pub input: VecDeque<String>,
    pub output: Vec<Val>,
    pub reads: usize,
}

impl Script {
    pub fn with_input(lines: &[&str]) -> Script {
        Script {
            input: lines.iter().map(|s| s.to_string()).collect(),
            ..Script::default()
        }
    }
}

impl Console for Script {
    fn write(&mut self, val: &Val) {
        self.output.push(val.clone());
    }

    fn read_line(&mut self) -> String {
        self.reads += 1;
        self.input.pop_front().unwrap_or_default()
    }
}

pub fn run(lines: &[&str]) -> Result<Vec<Val>, Error> {
    run_with_input(lines, &[])
}

pub fn run_with_input(lines: &[&str], input: &[&str]) -> Result<Vec<Val>, Error> {
    let mut script = Script::with_input(input);
    let program = Program::from_source(lines)?;
    Runtime::new(program).run(&mut script)?;
    Ok(script.output)
}

/// Everything the program printed, one value per line, followed by
/// the error that stopped it if there was one.
pub fn exec(lines: &[&str]) -> String {
    exec_with_input(lines, &[])
}

pub fn exec_with_input(lines: &[&str], input: &[&str]) -> String {
    let mut script = Script::with_input(input);
    let mut s = String::new();
    let result = Program::from_source(lines).and_then(|program| Runtime::new(program).run(&mut script));
    for val in &script.output {
        s.push_str(&format!("{}\n", val));
    }
    if let Err(error) = result {
        s.push_str(&format!("{}\n", error));
    }
    s
}
