//! Set algebra over sorted, duplicate-free element slices.
//!
//! Operands come straight out of a [`Set`](crate::construct::Set), so they are
//! sorted ascending and unique. `minus` and `subset` rely on that and walk both
//! operands with a pair of monotonic cursors. `union`, `intersect` and
//! `subseteq` scan the second operand in full for every element of the first
//! and do not depend on order. Both families are kept as they are: they accept
//! the same sets today, but only because of the sortedness invariant.

use crate::construct::Element;

pub fn empty(a: &[Element]) -> bool {
    a.is_empty()
}

pub fn card(a: &[Element]) -> usize {
    a.len()
}

/// Universe minus `a`, by co-scanning both sorted sequences.
pub fn complement(universe: &[Element], a: &[Element]) -> Vec<Element> {
    let mut result = Vec::new();
    let mut j = 0;
    for e in universe {
        if j < a.len() && a[j] == *e {
            j += 1;
        } else {
            result.push(e.clone());
        }
    }
    result
}

/// All of `a`, then whatever of `b` is not in `a`. Not a merge, so the result
/// is not necessarily sorted.
pub fn union(a: &[Element], b: &[Element]) -> Vec<Element> {
    let mut result = a.to_vec();
    for e in b {
        if !a.contains(e) {
            result.push(e.clone());
        }
    }
    result
}

pub fn intersect(a: &[Element], b: &[Element]) -> Vec<Element> {
    // `any` stops at the first match, so each element of `a` is emitted once
    a.iter()
        .filter(|e| b.iter().any(|x| x == *e))
        .cloned()
        .collect()
}

pub fn minus(a: &[Element], b: &[Element]) -> Vec<Element> {
    let mut result = Vec::new();
    let mut j = 0;
    for e in a {
        while j < b.len() && b[j] < *e {
            j += 1;
        }
        if j < b.len() && b[j] == *e {
            j += 1;
        } else {
            result.push(e.clone());
        }
    }
    result
}

/// Proper subset.
pub fn subset(a: &[Element], b: &[Element]) -> bool {
    if a.len() >= b.len() {
        return false;
    }
    let mut j = 0;
    for e in a {
        while j < b.len() && b[j] < *e {
            j += 1;
        }
        if j == b.len() || b[j] != *e {
            return false;
        }
        j += 1;
    }
    true
}

pub fn subseteq(a: &[Element], b: &[Element]) -> bool {
    if a.len() > b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    a.iter().all(|e| b.iter().any(|x| x == e))
}

pub fn equals(a: &[Element], b: &[Element]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    a.iter().zip(b).all(|(x, y)| x == y)
}
