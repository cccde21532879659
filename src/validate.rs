//! Element validation: characters, length, reserved words and universe membership.

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::command::Keyword;
use crate::construct::{Element, OtherHasher, Set};
use crate::error::{Result, SetcalError};

pub const MAX_ELEMENT_LEN: usize = 30;

lazy_static! {
    // command keywords and the two boolean literals can never be elements
    static ref RESERVED: HashSet<&'static str, OtherHasher> = {
        let mut reserved = HashSet::default();
        reserved.extend(Keyword::ALL.iter().map(|k| k.name()));
        reserved.insert("true");
        reserved.insert("false");
        reserved
    };
}

pub fn is_reserved(token: &str) -> bool {
    RESERVED.contains(token)
}

/// Rejects a single character that cannot be part of an element.
pub fn check_char(c: char, line: usize) -> Result<()> {
    if c.is_ascii_alphabetic() {
        Ok(())
    } else {
        Err(SetcalError::syntax(
            format!("illegal character {:?} in element", c),
            line,
        ))
    }
}

fn check_syntax(token: &str, line: usize) -> Result<()> {
    for c in token.chars() {
        check_char(c, line)?;
    }
    if token.is_empty() {
        return Err(SetcalError::syntax("empty element", line));
    }
    if token.len() > MAX_ELEMENT_LEN {
        return Err(SetcalError::syntax(
            format!(
                "element '{}' is longer than {} characters",
                token, MAX_ELEMENT_LEN
            ),
            line,
        ));
    }
    Ok(())
}

fn check_membership(token: &str, universe: &Set, line: usize) -> Result<()> {
    if universe.contains(token) {
        Ok(())
    } else {
        Err(SetcalError::Membership {
            token: token.to_owned(),
            line,
        })
    }
}

/// Validates a set element. Pass `None` while the universe itself is being declared.
pub fn validate(token: &str, universe: Option<&Set>, line: usize) -> Result<Element> {
    check_syntax(token, line)?;
    if is_reserved(token) {
        return Err(SetcalError::ReservedWord {
            token: token.to_owned(),
            line,
        });
    }
    if let Some(universe) = universe {
        check_membership(token, universe, line)?;
    }
    Ok(Element::new(token.to_owned()))
}

/// Validates one component of a relation pair. The reserved word rule does not
/// apply here; membership in the universe already excludes those words.
pub fn validate_member(token: &str, universe: &Set, line: usize) -> Result<Element> {
    check_syntax(token, line)?;
    check_membership(token, universe, line)?;
    Ok(Element::new(token.to_owned()))
}
