//! Predicates over relations, plus the `domain` and `codomain` projections.
//!
//! A relation's pairs are kept in declaration order, so every check here either
//! scans the pairs directly or works on a sorted copy of one projection.

use crate::construct::{Element, Pair};

fn contains(pairs: &[Pair], first: &Element, second: &Element) -> bool {
    pairs
        .iter()
        .any(|p| p.first() == first && p.second() == second)
}

fn sorted_projection<'a>(pairs: &'a [Pair], component: fn(&Pair) -> &Element) -> Vec<&'a Element> {
    let mut projection: Vec<&Element> = pairs.iter().map(component).collect();
    projection.sort_unstable();
    projection
}

fn has_adjacent_duplicates(sorted: &[&Element]) -> bool {
    sorted.windows(2).any(|x| x[0] == x[1])
}

fn all_in(values: &[&Element], set: &[Element]) -> bool {
    values.iter().all(|v| set.contains(*v))
}

pub fn reflexive(pairs: &[Pair], universe: &[Element]) -> bool {
    universe.iter().all(|e| contains(pairs, e, e))
}

pub fn symmetric(pairs: &[Pair]) -> bool {
    pairs.iter().all(|p| contains(pairs, p.second(), p.first()))
}

pub fn antisymmetric(pairs: &[Pair]) -> bool {
    pairs
        .iter()
        .filter(|p| p.first() != p.second())
        .all(|p| !contains(pairs, p.second(), p.first()))
}

pub fn transitive(pairs: &[Pair]) -> bool {
    pairs.iter().all(|xy| {
        pairs
            .iter()
            .filter(|yz| yz.first() == xy.second())
            .all(|yz| contains(pairs, xy.first(), yz.second()))
    })
}

pub fn function(pairs: &[Pair]) -> bool {
    !has_adjacent_duplicates(&sorted_projection(pairs, Pair::first))
}

pub fn domain(pairs: &[Pair]) -> Vec<Element> {
    let mut firsts = sorted_projection(pairs, Pair::first);
    firsts.dedup();
    firsts.into_iter().cloned().collect()
}

pub fn codomain(pairs: &[Pair]) -> Vec<Element> {
    let mut seconds = sorted_projection(pairs, Pair::second);
    seconds.dedup();
    seconds.into_iter().cloned().collect()
}

// Shared by `injective` and `bijective` once the cardinality gates have passed.
fn injective_checks(pairs: &[Pair], a: &[Element], b: &[Element]) -> bool {
    let firsts = sorted_projection(pairs, Pair::first);
    let seconds = sorted_projection(pairs, Pair::second);
    firsts.iter().copied().eq(a.iter())
        && all_in(&seconds, b)
        && !has_adjacent_duplicates(&firsts)
        && !has_adjacent_duplicates(&seconds)
}

pub fn injective(pairs: &[Pair], a: &[Element], b: &[Element]) -> bool {
    if pairs.len() != a.len() || b.len() < a.len() {
        return false;
    }
    injective_checks(pairs, a, b)
}

pub fn surjective(pairs: &[Pair], a: &[Element], b: &[Element]) -> bool {
    if pairs.len() != a.len() || b.len() > a.len() {
        return false;
    }
    let firsts = sorted_projection(pairs, Pair::first);
    let mut seconds = sorted_projection(pairs, Pair::second);
    if !all_in(&seconds, b) || has_adjacent_duplicates(&firsts) {
        return false;
    }
    seconds.dedup();
    seconds.iter().copied().eq(b.iter())
}

pub fn bijective(pairs: &[Pair], a: &[Element], b: &[Element]) -> bool {
    if a.len() != b.len() || a.len() != pairs.len() {
        return false;
    }
    if pairs.is_empty() {
        return true;
    }
    injective_checks(pairs, a, b)
}
