// used for the reserved word lookup
use core::hash::BuildHasherDefault;
use seahash::SeaHasher;

// used to print out readable forms of a construct
use std::fmt;

use tracing::debug;

// our own stuff that we need
use crate::error::Result;
use crate::store::Store;

pub type OtherHasher = BuildHasherDefault<SeaHasher>;

// ------------- Row -------------
pub type Row = usize;

pub const GENESIS: Row = 0;

/// Hands out logical row numbers to declarations. Rows start at 1 and are never reused.
#[derive(Debug)]
pub struct RowGenerator {
    lower_bound: Row,
}

impl RowGenerator {
    pub fn new() -> Self {
        Self {
            lower_bound: GENESIS,
        }
    }
    pub fn generate(&mut self) -> Row {
        self.lower_bound += 1;
        self.lower_bound
    }
    /// The most recently generated row, or `GENESIS` if nothing was declared.
    pub fn current(&self) -> Row {
        self.lower_bound
    }
}

impl Default for RowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ------------- Element -------------
/// A validated token. Ordering is byte-lexicographic, which is what sets are sorted by.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Element(String);

impl Element {
    // Only the validator creates elements, see `validate::validate`.
    pub(crate) fn new(token: String) -> Self {
        Self(token)
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ------------- Pair -------------
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Pair {
    first: Element,
    second: Element,
}

impl Pair {
    pub fn new(first: Element, second: Element) -> Self {
        Self { first, second }
    }
    pub fn first(&self) -> &Element {
        &self.first
    }
    pub fn second(&self) -> &Element {
        &self.second
    }
}
impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {})", self.first, self.second)
    }
}

/// Renders a tag followed by its items, each preceded by a single blank.
pub fn listing<T: fmt::Display>(tag: char, items: &[T]) -> String {
    let mut s = String::from(tag);
    for item in items {
        s += &format!(" {}", item);
    }
    s
}

// ------------- Set -------------
#[derive(Debug)]
pub struct Set {
    row: Row,
    elements: Store<Element>,
}

impl Set {
    /// Sorts the elements. Uniqueness is the parser's job and is only checked in debug builds.
    pub fn new(row: Row, mut elements: Store<Element>) -> Self {
        elements.sort();
        debug_assert!(elements.windows(2).all(|x| x[0] < x[1]));
        Self { row, elements }
    }
    pub fn row(&self) -> Row {
        self.row
    }
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    pub fn contains(&self, token: &str) -> bool {
        self.elements.iter().any(|e| e.as_str() == token)
    }
}

// ------------- Relation -------------
#[derive(Debug)]
pub struct Relation {
    row: Row,
    pairs: Store<Pair>,
}

impl Relation {
    pub fn new(row: Row, pairs: Store<Pair>) -> Self {
        Self { row, pairs }
    }
    pub fn row(&self) -> Row {
        self.row
    }
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }
    pub fn len(&self) -> usize {
        self.pairs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&listing('R', self.pairs()))
    }
}

// ------------- Keepers -------------
// Keepers own the declared constructs. Lookups go through the row stored
// on each construct, never through the storage index.
#[derive(Debug, Default)]
pub struct SetKeeper {
    kept: Store<Set>,
}
impl SetKeeper {
    pub fn new() -> Self {
        Self { kept: Store::new() }
    }
    pub fn keep(&mut self, set: Set) -> Result<()> {
        debug!(row = set.row(), elements = set.len(), "keeping set");
        self.kept.push(set)
    }
    pub fn find(&self, row: Row) -> Option<&Set> {
        self.kept.iter().find(|s| s.row() == row)
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct RelationKeeper {
    kept: Store<Relation>,
}
impl RelationKeeper {
    pub fn new() -> Self {
        Self { kept: Store::new() }
    }
    pub fn keep(&mut self, relation: Relation) -> Result<()> {
        debug!(row = relation.row(), pairs = relation.len(), "keeping relation");
        self.kept.push(relation)
    }
    pub fn find(&self, row: Row) -> Option<&Relation> {
        self.kept.iter().find(|r| r.row() == row)
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}

// ------------- Workspace -------------
// Everything a single run mutates: the row counter, the keepers and the
// file-level flags. The engine owns one of these per execution.
#[derive(Debug, Default)]
pub struct Workspace {
    pub rows: RowGenerator,
    pub sets: SetKeeper,
    pub relations: RelationKeeper,
    universe: Option<Row>,
    commands: usize,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn universe(&self) -> Option<&Set> {
        self.universe.and_then(|row| self.sets.find(row))
    }
    pub fn set_universe(&mut self, row: Row) {
        self.universe = Some(row);
    }
    /// Number of U/S/R rows declared so far.
    pub fn declarations(&self) -> usize {
        self.rows.current()
    }
    pub fn commands(&self) -> usize {
        self.commands
    }
    pub fn count_command(&mut self) {
        self.commands += 1;
    }
}
