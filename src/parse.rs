//! Line parsers for set, relation and command rows.
//!
//! Each parser is handed the stream positioned right after the row's marker
//! and the blank that follows it, and consumes the rest of the line including
//! its newline. Errors are raised as soon as the offending character is read.

use std::io::BufRead;

use crate::command::{Command, Keyword};
use crate::construct::{Element, Pair, Relation, Row, Set};
use crate::error::{Result, SetcalError};
use crate::store::Store;
use crate::stream::CharStream;
use crate::validate::{self, MAX_ELEMENT_LEN};

pub(crate) fn describe(c: Option<char>) -> String {
    match c {
        Some('\n') => String::from("end of line"),
        Some(' ') => String::from("blank"),
        Some(c) => format!("{:?}", c),
        None => String::from("end of input"),
    }
}

/// Reads one element token. The token ends at any of `ends` (returned as
/// `Some`), or at end of input when `eof_ends` is set (returned as `None`).
/// Letters beyond the length limit and illegal characters fail immediately.
fn read_element<R: BufRead>(
    stream: &mut CharStream<R>,
    line: usize,
    ends: &[char],
    eof_ends: bool,
) -> Result<(String, Option<char>)> {
    let mut token = String::new();
    loop {
        let c = stream.read()?;
        match c {
            Some(c) if ends.contains(&c) => return Ok((token, Some(c))),
            None if eof_ends => return Ok((token, None)),
            Some(c) if c.is_ascii_alphabetic() => {
                token.push(c);
                if token.len() > MAX_ELEMENT_LEN {
                    return Err(SetcalError::syntax(
                        format!(
                            "element '{}...' is longer than {} characters",
                            token, MAX_ELEMENT_LEN
                        ),
                        line,
                    ));
                }
            }
            Some(' ') | Some('\n') | None => {
                return Err(SetcalError::format(
                    format!("unexpected {} in element '{}'", describe(c), token),
                    line,
                ));
            }
            Some(c) => validate::check_char(c, line)?,
        }
    }
}

/// Parses the elements of a `U` or `S` row. `universe` is `None` for the universe itself.
pub fn parse_set<R: BufRead>(
    stream: &mut CharStream<R>,
    line: usize,
    row: Row,
    universe: Option<&Set>,
) -> Result<Set> {
    let mut elements: Store<Element> = Store::new();
    loop {
        let (token, end) = read_element(stream, line, &[' ', '\n'], true)?;
        let element = validate::validate(&token, universe, line)?;
        if elements.contains(&element) {
            return Err(SetcalError::duplicate(
                format!("element '{}' appears more than once", element),
                line,
            ));
        }
        elements.push(element)?;
        if end != Some(' ') {
            break;
        }
    }
    Ok(Set::new(row, elements))
}

/// Parses the `(first second)` groups of an `R` row.
pub fn parse_relation<R: BufRead>(
    stream: &mut CharStream<R>,
    line: usize,
    row: Row,
    universe: &Set,
) -> Result<Relation> {
    let mut pairs: Store<Pair> = Store::new();
    loop {
        match stream.read()? {
            Some('(') => (),
            c => {
                return Err(SetcalError::format(
                    format!("expected '(' but found {}", describe(c)),
                    line,
                ));
            }
        }
        let (first, _) = read_element(stream, line, &[' '], false)?;
        let first = validate::validate_member(&first, universe, line)?;
        let (second, _) = read_element(stream, line, &[')'], false)?;
        let second = validate::validate_member(&second, universe, line)?;
        let pair = Pair::new(first, second);
        if pairs.contains(&pair) {
            return Err(SetcalError::duplicate(
                format!("pair {} appears more than once", pair),
                line,
            ));
        }
        pairs.push(pair)?;
        match stream.read()? {
            Some(' ') => (),
            Some('\n') | None => break,
            c => {
                return Err(SetcalError::format(
                    format!("expected a blank or end of line after ')' but found {}", describe(c)),
                    line,
                ));
            }
        }
    }
    Ok(Relation::new(row, pairs))
}

fn read_keyword<R: BufRead>(stream: &mut CharStream<R>, line: usize) -> Result<Keyword> {
    let mut name = String::new();
    while let Some(c) = stream.read()? {
        if c == ' ' || c == '\n' {
            // the arguments start (or the line ends) right here
            stream.unread(c);
            break;
        }
        name.push(c);
        if name.len() > Keyword::MAX_LEN {
            return Err(SetcalError::UnknownCommand {
                command: format!("{}...", name),
                line,
            });
        }
    }
    if name.is_empty() {
        return Err(SetcalError::format("missing command keyword", line));
    }
    Keyword::lookup(&name).ok_or(SetcalError::UnknownCommand {
        command: name,
        line,
    })
}

fn read_argument<R: BufRead>(stream: &mut CharStream<R>, line: usize) -> Result<String> {
    let mut digits = String::new();
    loop {
        match stream.peek()? {
            Some(' ') | Some('\n') | None => break,
            Some(c) if c.is_ascii_digit() => {
                digits.push(c);
                stream.read()?;
            }
            Some(c) => {
                return Err(SetcalError::format(
                    format!("illegal character {:?} in row number", c),
                    line,
                ));
            }
        }
    }
    if digits.is_empty() {
        return Err(SetcalError::format("missing row number", line));
    }
    Ok(digits)
}

/// Parses the body of a `C` row: a keyword and exactly as many row numbers as it takes.
pub fn parse_command<R: BufRead>(stream: &mut CharStream<R>, line: usize) -> Result<Command> {
    let keyword = read_keyword(stream, line)?;
    let signature = keyword.signature();
    let mut rows: Vec<Row> = Vec::with_capacity(signature.len());
    while stream.peek()? == Some(' ') {
        stream.read()?;
        let digits = read_argument(stream, line)?;
        let Some(operand) = signature.get(rows.len()) else {
            return Err(SetcalError::Arity {
                command: keyword.name(),
                problem: "many",
                line,
            });
        };
        let row = digits.parse::<Row>().map_err(|_| SetcalError::Reference {
            kind: operand.name(),
            row: digits.clone(),
            line,
        })?;
        rows.push(row);
    }
    // whatever stopped the loop is a newline or the end of input
    stream.read()?;
    Command::new(keyword, rows, line)
}
