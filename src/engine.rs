use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::Settings;
use crate::construct::{listing, Relation, Set, Workspace};
use crate::error::{Result, SetcalError};
use crate::parse::{describe, parse_command, parse_relation, parse_set};
use crate::stream::CharStream;

/// Totals for a run that completed without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub rows: usize,
    pub commands: usize,
}

pub struct Engine {
    settings: Settings,
}

impl Engine {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Runs a script, writing each output line to `output` as soon as it is known.
    /// Lines written before a failure stay written.
    pub fn execute<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<Report> {
        let mut stream = CharStream::new(input);
        let mut workspace = Workspace::new();
        // line of the most recent row, 0 while nothing has been read
        let mut line = 0;
        loop {
            let row_line = stream.line();
            let Some(marker) = stream.read()? else {
                break;
            };
            line = row_line;
            let text = match marker {
                'U' | 'S' => self.declare_set(&mut workspace, &mut stream, line, marker)?,
                'R' => self.declare_relation(&mut workspace, &mut stream, line)?,
                'C' => self.run_command(&mut workspace, &mut stream, line)?,
                '\n' => return Err(SetcalError::format("empty line", line)),
                c => {
                    return Err(SetcalError::format(
                        format!("unknown row marker {:?}", c),
                        line,
                    ));
                }
            };
            writeln!(output, "{}", text)?;
        }
        self.finish(&workspace, line)?;
        let report = Report {
            rows: workspace.declarations(),
            commands: workspace.commands(),
        };
        info!(rows = report.rows, commands = report.commands, "script complete");
        Ok(report)
    }

    pub fn execute_str<W: Write>(&self, script: &str, output: &mut W) -> Result<Report> {
        self.execute(script.as_bytes(), output)
    }

    /// Runs a script and returns its output lines. Output produced before an
    /// error is discarded; use [`Engine::execute`] to keep it.
    pub fn execute_collect(&self, script: &str) -> Result<Vec<String>> {
        let mut buffer: Vec<u8> = Vec::new();
        self.execute_str(script, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer)
            .lines()
            .map(String::from)
            .collect())
    }

    // Consumes the separator after a row marker. Returns false when the row
    // has no body, i.e. the marker is followed by a newline or end of input.
    fn begin_body<R: BufRead>(stream: &mut CharStream<R>, line: usize, marker: char) -> Result<bool> {
        match stream.read()? {
            Some(' ') => Ok(true),
            Some('\n') | None => Ok(false),
            Some(c) => Err(SetcalError::format(
                format!("expected a blank after '{}' but found {:?}", marker, c),
                line,
            )),
        }
    }

    fn check_declaration(&self, workspace: &Workspace, line: usize) -> Result<()> {
        if workspace.commands() > 0 {
            return Err(SetcalError::format(
                "declarations must precede all commands",
                line,
            ));
        }
        if workspace.declarations() >= self.settings.max_rows {
            return Err(SetcalError::format(
                format!(
                    "too many rows, at most {} declarations are allowed",
                    self.settings.max_rows
                ),
                line,
            ));
        }
        Ok(())
    }

    fn declare_set<R: BufRead>(
        &self,
        workspace: &mut Workspace,
        stream: &mut CharStream<R>,
        line: usize,
        marker: char,
    ) -> Result<String> {
        self.check_declaration(workspace, line)?;
        let is_universe = marker == 'U';
        match (is_universe, workspace.universe().is_some()) {
            (true, true) => return Err(SetcalError::format("a second universe was declared", line)),
            (false, false) => {
                return Err(SetcalError::format(
                    "the universe must be declared first",
                    line,
                ));
            }
            _ => (),
        }
        let row = workspace.rows.generate();
        let set = if Self::begin_body(stream, line, marker)? {
            parse_set(stream, line, row, workspace.universe())?
        } else {
            Set::new(row, Default::default())
        };
        let text = listing(marker, set.elements());
        let elements = set.len();
        workspace.sets.keep(set)?;
        if is_universe {
            workspace.set_universe(row);
        }
        debug!(row, line, elements, universe = is_universe, "declared set");
        Ok(text)
    }

    fn declare_relation<R: BufRead>(
        &self,
        workspace: &mut Workspace,
        stream: &mut CharStream<R>,
        line: usize,
    ) -> Result<String> {
        self.check_declaration(workspace, line)?;
        let row = workspace.rows.generate();
        let universe = workspace
            .universe()
            .ok_or_else(|| SetcalError::format("the universe must be declared first", line))?;
        let relation = if Self::begin_body(stream, line, 'R')? {
            parse_relation(stream, line, row, universe)?
        } else {
            Relation::new(row, Default::default())
        };
        let text = relation.to_string();
        let pairs = relation.len();
        workspace.relations.keep(relation)?;
        debug!(row, line, pairs, "declared relation");
        Ok(text)
    }

    fn run_command<R: BufRead>(
        &self,
        workspace: &mut Workspace,
        stream: &mut CharStream<R>,
        line: usize,
    ) -> Result<String> {
        if workspace.universe().is_none() {
            return Err(SetcalError::format(
                "the universe must be declared before any command",
                line,
            ));
        }
        if workspace.declarations() < 2 {
            return Err(SetcalError::format(
                "at least one set or relation must be declared before any command",
                line,
            ));
        }
        match stream.read()? {
            Some(' ') => (),
            c => {
                return Err(SetcalError::format(
                    format!("expected a blank after 'C' but found {}", describe(c)),
                    line,
                ));
            }
        }
        workspace.count_command();
        let command = parse_command(stream, line)?;
        let outcome = command.evaluate(workspace, line)?;
        debug!(keyword = %command.keyword(), rows = ?command.rows(), line, "evaluated command");
        Ok(outcome.to_string())
    }

    fn finish(&self, workspace: &Workspace, line: usize) -> Result<()> {
        let line = line.max(1);
        if workspace.universe().is_none() {
            return Err(SetcalError::format("no universe was declared", line));
        }
        if workspace.declarations() < 2 {
            return Err(SetcalError::format(
                "no set or relation was declared",
                line,
            ));
        }
        if workspace.commands() == 0 {
            return Err(SetcalError::format("no command was given", line));
        }
        Ok(())
    }
}
