//! Command keywords, their signatures, and dispatch to the evaluators.

use std::fmt;

use crate::algebra;
use crate::construct::{listing, Element, Relation, Row, Set, Workspace};
use crate::error::{Result, SetcalError};
use crate::predicate;

/// What kind of declaration a command argument must name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Set,
    Relation,
}

impl Operand {
    pub fn name(self) -> &'static str {
        match self {
            Operand::Set => "set",
            Operand::Relation => "relation",
        }
    }
}

use self::Operand::{Relation as R, Set as S};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Empty,
    Card,
    Complement,
    Union,
    Intersect,
    Minus,
    Subseteq,
    Subset,
    Equals,
    Reflexive,
    Symmetric,
    Antisymmetric,
    Transitive,
    Function,
    Domain,
    Codomain,
    Injective,
    Surjective,
    Bijective,
}

impl Keyword {
    pub const ALL: [Keyword; 19] = [
        Keyword::Empty,
        Keyword::Card,
        Keyword::Complement,
        Keyword::Union,
        Keyword::Intersect,
        Keyword::Minus,
        Keyword::Subseteq,
        Keyword::Subset,
        Keyword::Equals,
        Keyword::Reflexive,
        Keyword::Symmetric,
        Keyword::Antisymmetric,
        Keyword::Transitive,
        Keyword::Function,
        Keyword::Domain,
        Keyword::Codomain,
        Keyword::Injective,
        Keyword::Surjective,
        Keyword::Bijective,
    ];

    /// Keyword tokens longer than this are rejected before the blank is reached.
    pub const MAX_LEN: usize = 14;

    pub fn name(self) -> &'static str {
        match self {
            Keyword::Empty => "empty",
            Keyword::Card => "card",
            Keyword::Complement => "complement",
            Keyword::Union => "union",
            Keyword::Intersect => "intersect",
            Keyword::Minus => "minus",
            Keyword::Subseteq => "subseteq",
            Keyword::Subset => "subset",
            Keyword::Equals => "equals",
            Keyword::Reflexive => "reflexive",
            Keyword::Symmetric => "symmetric",
            Keyword::Antisymmetric => "antisymmetric",
            Keyword::Transitive => "transitive",
            Keyword::Function => "function",
            Keyword::Domain => "domain",
            Keyword::Codomain => "codomain",
            Keyword::Injective => "injective",
            Keyword::Surjective => "surjective",
            Keyword::Bijective => "bijective",
        }
    }

    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// The kinds of the arguments, in order. Its length is the arity.
    pub fn signature(self) -> &'static [Operand] {
        match self {
            Keyword::Empty | Keyword::Card | Keyword::Complement => &[S],
            Keyword::Union
            | Keyword::Intersect
            | Keyword::Minus
            | Keyword::Subseteq
            | Keyword::Subset
            | Keyword::Equals => &[S, S],
            Keyword::Reflexive
            | Keyword::Symmetric
            | Keyword::Antisymmetric
            | Keyword::Transitive
            | Keyword::Function
            | Keyword::Domain
            | Keyword::Codomain => &[R],
            Keyword::Injective | Keyword::Surjective | Keyword::Bijective => &[R, S, S],
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The textual result of one evaluated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Bool(bool),
    Count(usize),
    Set(Vec<Element>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Bool(b) => write!(f, "{}", b),
            Outcome::Count(n) => write!(f, "{}", n),
            Outcome::Set(elements) => f.write_str(&listing('S', elements)),
        }
    }
}

/// A parsed command line: a keyword and as many rows as its signature asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    keyword: Keyword,
    rows: Vec<Row>,
}

impl Command {
    /// Fails with an arity error unless `rows` matches the keyword's signature.
    pub fn new(keyword: Keyword, rows: Vec<Row>, line: usize) -> Result<Self> {
        let expected = keyword.signature().len();
        if rows.len() != expected {
            return Err(SetcalError::Arity {
                command: keyword.name(),
                problem: if rows.len() < expected { "few" } else { "many" },
                line,
            });
        }
        Ok(Self { keyword, rows })
    }
    pub fn keyword(&self) -> Keyword {
        self.keyword
    }
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    // Rows are resolved against the keeper the signature names. A row that
    // holds the other kind of declaration is simply not found there.
    fn row(&self, index: usize, line: usize) -> Result<Row> {
        self.rows.get(index).copied().ok_or(SetcalError::Arity {
            command: self.keyword.name(),
            problem: "few",
            line,
        })
    }
    fn set<'w>(&self, workspace: &'w Workspace, index: usize, line: usize) -> Result<&'w Set> {
        let row = self.row(index, line)?;
        workspace
            .sets
            .find(row)
            .ok_or_else(|| SetcalError::reference(Operand::Set.name(), row, line))
    }
    fn relation<'w>(
        &self,
        workspace: &'w Workspace,
        index: usize,
        line: usize,
    ) -> Result<&'w Relation> {
        let row = self.row(index, line)?;
        workspace
            .relations
            .find(row)
            .ok_or_else(|| SetcalError::reference(Operand::Relation.name(), row, line))
    }

    pub fn evaluate(&self, workspace: &Workspace, line: usize) -> Result<Outcome> {
        let universe = workspace
            .universe()
            .ok_or_else(|| SetcalError::format("no universe has been declared", line))?
            .elements();
        let set = |i: usize| self.set(workspace, i, line).map(Set::elements);
        let relation = |i: usize| self.relation(workspace, i, line).map(Relation::pairs);
        let outcome = match self.keyword {
            Keyword::Empty => Outcome::Bool(algebra::empty(set(0)?)),
            Keyword::Card => Outcome::Count(algebra::card(set(0)?)),
            Keyword::Complement => Outcome::Set(algebra::complement(universe, set(0)?)),
            Keyword::Union => Outcome::Set(algebra::union(set(0)?, set(1)?)),
            Keyword::Intersect => Outcome::Set(algebra::intersect(set(0)?, set(1)?)),
            Keyword::Minus => Outcome::Set(algebra::minus(set(0)?, set(1)?)),
            Keyword::Subseteq => Outcome::Bool(algebra::subseteq(set(0)?, set(1)?)),
            Keyword::Subset => Outcome::Bool(algebra::subset(set(0)?, set(1)?)),
            Keyword::Equals => Outcome::Bool(algebra::equals(set(0)?, set(1)?)),
            Keyword::Reflexive => Outcome::Bool(predicate::reflexive(relation(0)?, universe)),
            Keyword::Symmetric => Outcome::Bool(predicate::symmetric(relation(0)?)),
            Keyword::Antisymmetric => Outcome::Bool(predicate::antisymmetric(relation(0)?)),
            Keyword::Transitive => Outcome::Bool(predicate::transitive(relation(0)?)),
            Keyword::Function => Outcome::Bool(predicate::function(relation(0)?)),
            Keyword::Domain => Outcome::Set(predicate::domain(relation(0)?)),
            Keyword::Codomain => Outcome::Set(predicate::codomain(relation(0)?)),
            Keyword::Injective => {
                Outcome::Bool(predicate::injective(relation(0)?, set(1)?, set(2)?))
            }
            Keyword::Surjective => {
                Outcome::Bool(predicate::surjective(relation(0)?, set(1)?, set(2)?))
            }
            Keyword::Bijective => {
                Outcome::Bool(predicate::bijective(relation(0)?, set(1)?, set(2)?))
            }
        };
        Ok(outcome)
    }
}
