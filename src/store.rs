//! A growable, append-only container shared by every collection in the calculator.
//!
//! Elements of a set, pairs of a relation, and the keepers of sets and relations
//! all live in a [`Store`]. Capacity doubles whenever the store is full, so pushing
//! is amortized constant time. A failed allocation is reported as
//! [`SetcalError::Allocation`] instead of aborting the process.

use std::ops::Deref;

use tracing::trace;

use crate::error::{Result, SetcalError};

const MIN_CAPACITY: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store<T> {
    items: Vec<T>,
}

impl<T> Store<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.items.len() == self.items.capacity() {
            self.grow()?;
        }
        self.items.push(item);
        Ok(())
    }
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }
    fn grow(&mut self) -> Result<()> {
        let capacity = self.items.capacity();
        // reserving the current capacity again doubles it
        let additional = capacity.max(MIN_CAPACITY);
        self.items.try_reserve_exact(additional).map_err(|e| {
            SetcalError::Allocation(format!(
                "cannot grow store from {} to {} items: {}",
                capacity,
                capacity + additional,
                e
            ))
        })?;
        trace!(from = capacity, to = self.items.capacity(), "store grown");
        Ok(())
    }
}

impl<T: Ord> Store<T> {
    pub fn sort(&mut self) {
        self.items.sort_unstable();
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Store<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a Store<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
