//! Setcal – a calculator for finite sets and binary relations.
//!
//! A setcal script is a line-oriented text file. It declares a *universe*,
//! then sets and relations over that universe, then commands that are
//! evaluated against them:
//!
//! ```text
//! U a b c d
//! S a b
//! S b c d
//! R (a b) (b a)
//! C union 2 3
//! C symmetric 4
//! ```
//!
//! Every declaration is echoed as soon as it is parsed (sets sorted), and every
//! command prints its result as soon as it is evaluated:
//!
//! ```text
//! U a b c d
//! S a b
//! S b c d
//! R (a b) (b a)
//! S a b c d
//! true
//! ```
//!
//! ## Rows
//! Each `U`, `S` and `R` line gets the next logical row number, starting with
//! the universe on row 1. Commands name their operands by row. The universe
//! is a set too, so `C complement 1` is legal (and prints `S`).
//!
//! ## Modules
//! * [`construct`] – elements, pairs, sets, relations, their keepers and the
//!   per-run [`construct::Workspace`].
//! * [`store`] – the growable [`store::Store`] every collection is built on.
//! * [`validate`] – element rules: letters only, 1–30 characters, not a
//!   keyword, member of the universe.
//! * [`stream`] – a character reader with one character of pushback.
//! * [`parse`] – parsers for set, relation and command lines.
//! * [`command`] – the nineteen keywords, their signatures and dispatch.
//! * [`algebra`] and [`predicate`] – the evaluators.
//! * [`engine`] – the [`engine::Engine`] driving a whole script.
//! * [`config`] – [`config::Settings`] loaded from file and environment.
//! * [`error`] – [`error::SetcalError`], the single error type.
//!
//! ## Errors
//! The first error aborts the run. Output already written is kept, and the
//! error carries the input line it was raised on.
//!
//! ## Quick Start
//! ```
//! use setcal::{config::Settings, engine::Engine};
//! let engine = Engine::new(Settings::default());
//! let lines = engine.execute_collect("U b a c\nS a b\nC card 2\n").unwrap();
//! assert_eq!(lines, vec!["U a b c", "S a b", "2"]);
//! ```

pub mod algebra;
pub mod command;
pub mod config;
pub mod construct;
pub mod engine;
pub mod error;
pub mod parse;
pub mod predicate;
pub mod store;
pub mod stream;
pub mod validate;
