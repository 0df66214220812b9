use super::{evaluate, Program, Val, Var};
use crate::error;
use crate::lang::{parse_expression, Error, Line, Positioned, Token};
use std::iter::Peekable;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;
type Tokens<'a> = Peekable<std::slice::Iter<'a, Positioned>>;

/// Where `PRINT` output goes and `INPUT` text comes from.
pub trait Console {
    fn write(&mut self, val: &Val);
    fn read_line(&mut self) -> String;
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Event {
    Running,
    Stopped,
}

/// Everything that changes while a program runs.
#[derive(Debug, Default, Clone)]
pub struct State {
    vars: Var,
    cursor: usize,
}

impl State {
    pub fn new() -> State {
        State::default()
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Executes the line under the cursor and moves the cursor.
pub fn step(program: &Program, state: &mut State, console: &mut dyn Console) -> Result<Event> {
    let line = match program.line(state.cursor) {
        Some(line) => line,
        None => return Ok(Event::Stopped),
    };
    trace!(line = line.number(), "execute");
    let jump = execute_line(program, line, &mut state.vars, console)
        .map_err(|e| e.in_line_number(line.number()))?;
    match jump {
        Some(index) => {
            trace!(from = line.number(), to = index, "jump");
            state.cursor = index;
        }
        None => state.cursor += 1,
    }
    if state.cursor >= program.len() {
        Ok(Event::Stopped)
    } else {
        Ok(Event::Running)
    }
}

pub struct Runtime {
    program: Program,
    state: State,
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime {
            program,
            state: State::new(),
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn vars(&self) -> &Var {
        &self.state.vars
    }

    /// The line the next `step` will execute.
    pub fn current_line(&self) -> Option<&Line> {
        self.program.line(self.state.cursor)
    }

    pub fn reset(&mut self) {
        self.state = State::new();
    }

    pub fn step(&mut self, console: &mut dyn Console) -> Result<Event> {
        step(&self.program, &mut self.state, console)
    }

    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        debug!(lines = self.program.len(), "run started");
        while self.step(console)? == Event::Running {}
        debug!(vars = self.state.vars.len(), "run finished");
        Ok(())
    }
}

/// Returns the line index to jump to, if any.
fn execute_line(
    program: &Program,
    line: &Line,
    vars: &mut Var,
    console: &mut dyn Console,
) -> Result<Option<usize>> {
    let mut tokens = line.tokens().iter().peekable();
    let keyword = match tokens.next() {
        Some(keyword) => keyword,
        None => return Ok(None),
    };
    match keyword.token {
        Token::Rem => Ok(None),
        Token::Goto => exec_goto(program, keyword, &mut tokens).map(Some),
        Token::Let => exec_let(keyword, &mut tokens, vars).map(|_| None),
        Token::Print => exec_print(keyword, &mut tokens, vars, console).map(|_| None),
        Token::Input => exec_input(keyword, &mut tokens, vars, console).map(|_| None),
        Token::If => exec_if(program, keyword, &mut tokens, vars),
        _ => Err(error!(RuntimeError, ..&keyword.column; "unrecognized statement")),
    }
}

fn exec_goto(program: &Program, keyword: &Positioned, tokens: &mut Tokens) -> Result<usize> {
    let msg = "invalid GOTO target";
    let target = match tokens.next() {
        Some(target) => target,
        None => return Err(error!(RuntimeError, ..&keyword.column; msg)),
    };
    if let Some(extra) = tokens.next() {
        return Err(error!(RuntimeError, ..&extra.column; msg));
    }
    let index = match target.token {
        Token::Number(n) => program.resolve(n),
        _ => None,
    };
    match index {
        Some(index) => Ok(index),
        None => Err(error!(RuntimeError, ..&target.column; msg)),
    }
}

fn exec_let(keyword: &Positioned, tokens: &mut Tokens, vars: &mut Var) -> Result<()> {
    let msg = "invalid LET syntax";
    let name = match tokens.next() {
        Some(Positioned {
            token: Token::Variable(name),
            ..
        }) => name,
        Some(p) => return Err(error!(RuntimeError, ..&p.column; msg)),
        None => return Err(error!(RuntimeError, ..&keyword.column; msg)),
    };
    match tokens.next() {
        Some(p) if p.token == Token::Equals => {}
        Some(p) => return Err(error!(RuntimeError, ..&p.column; msg)),
        None => return Err(error!(RuntimeError, ..&keyword.column; msg)),
    }
    let val = expression(keyword, tokens, vars, msg)?;
    vars.store(name, val);
    Ok(())
}

fn exec_print(
    keyword: &Positioned,
    tokens: &mut Tokens,
    vars: &Var,
    console: &mut dyn Console,
) -> Result<()> {
    let val = expression(keyword, tokens, vars, "invalid PRINT expression")?;
    console.write(&val);
    Ok(())
}

fn exec_input(
    keyword: &Positioned,
    tokens: &mut Tokens,
    vars: &mut Var,
    console: &mut dyn Console,
) -> Result<()> {
    let msg = "invalid INPUT syntax";
    let name = match tokens.next() {
        Some(Positioned {
            token: Token::Variable(name),
            ..
        }) => name,
        Some(p) => return Err(error!(RuntimeError, ..&p.column; msg)),
        None => return Err(error!(RuntimeError, ..&keyword.column; msg)),
    };
    if let Some(extra) = tokens.next() {
        return Err(error!(RuntimeError, ..&extra.column; msg));
    }
    let text = console.read_line();
    vars.store(name, Val::String(text.trim().into()));
    Ok(())
}

fn exec_if(
    program: &Program,
    keyword: &Positioned,
    tokens: &mut Tokens,
    vars: &Var,
) -> Result<Option<usize>> {
    let msg = "malformed IF/THEN";
    match tokens.peek() {
        None => return Err(error!(RuntimeError, ..&keyword.column; msg)),
        Some(p) if p.token == Token::Then => return Err(error!(RuntimeError, ..&p.column; msg)),
        _ => {}
    }
    let postfix = parse_expression(tokens)?;
    let then = match tokens.next() {
        Some(p) if p.token == Token::Then => p,
        _ => return Err(error!(RuntimeError, ..&keyword.column; msg)),
    };
    let target = match tokens.next() {
        Some(target) => target,
        None => return Err(error!(RuntimeError, ..&then.column; msg)),
    };
    let number = match target.token {
        Token::Number(n) => n,
        _ => return Err(error!(RuntimeError, ..&target.column; msg)),
    };
    if let Some(extra) = tokens.next() {
        return Err(error!(RuntimeError, ..&extra.column; msg));
    }
    if !evaluate(&postfix, vars)?.is_truthy() {
        return Ok(None);
    }
    match program.resolve(number) {
        Some(index) => Ok(Some(index)),
        None => Err(error!(RuntimeError, ..&target.column; msg)),
    }
}

/// The rest of the line as a single expression; `THEN` may not appear.
fn expression(
    keyword: &Positioned,
    tokens: &mut Tokens,
    vars: &Var,
    msg: &'static str,
) -> Result<Val> {
    if tokens.peek().is_none() {
        return Err(error!(RuntimeError, ..&keyword.column; msg));
    }
    let postfix = parse_expression(tokens)?;
    if let Some(p) = tokens.peek() {
        return Err(error!(RuntimeError, ..&p.column; msg));
    }
    evaluate(&postfix, vars)
}
