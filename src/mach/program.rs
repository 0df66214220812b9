use crate::error;
use crate::lang::{Error, Line, LineNumber};
use std::collections::{BTreeMap, HashMap};
use std::convert::TryFrom;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Tokenized lines in execution order
///
/// Lines are sorted by line number. Control flow works on line
/// indexes, the rank of a line number in that order.

#[derive(Debug, Default, Clone)]
pub struct Program {
    lines: Vec<Line>,
    indexes: HashMap<LineNumber, usize>,
}

impl Program {
    pub fn new<I>(lines: I) -> Result<Program>
    where
        I: IntoIterator<Item = Line>,
    {
        let mut source: BTreeMap<LineNumber, Line> = BTreeMap::new();
        for line in lines {
            let number = line.number();
            if source.insert(number, line).is_some() {
                return Err(error!(RuntimeError, number; "duplicate line number"));
            }
        }
        let lines: Vec<Line> = source.into_iter().map(|(_, line)| line).collect();
        let indexes = lines
            .iter()
            .enumerate()
            .map(|(index, line)| (line.number(), index))
            .collect();
        debug!(lines = lines.len(), "program indexed");
        Ok(Program { lines, indexes })
    }

    /// Tokenizes every line. Input order doesn't matter.
    pub fn from_source<I, S>(source: I) -> Result<Program>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = source
            .into_iter()
            .map(|s| Line::from_str(s.as_ref()))
            .collect::<Result<Vec<Line>>>()?;
        Program::new(lines)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn index_of(&self, number: LineNumber) -> Option<usize> {
        self.indexes.get(&number).copied()
    }

    /// Jump targets arrive as `Number` tokens which may be negative or too large.
    pub fn resolve(&self, target: i64) -> Option<usize> {
        LineNumber::try_from(target)
            .ok()
            .and_then(|number| self.index_of(number))
    }

    /// Every line re-serialized, in execution order.
    pub fn listing(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.to_string()).collect()
    }
}
