//! Scratch storage for a single parse call.
//!
//! Every decoder stages its output on one of three stacks and either compacts
//! the staged run into an exact-size owned allocation (`take_from`) or
//! discards it (`rollback`). Stacks only grow while a parse is running.

use std::mem::size_of;
use std::vec::Drain;

use crate::constants::SCRATCH_INITIAL_BYTES;
use crate::types::{Member, Value};

/// A recorded stack top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mark(usize);

#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
    high_water: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            high_water: 0,
        }
    }

    pub fn top(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Largest top observed since construction.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    pub fn mark(&self) -> Mark {
        Mark(self.items.len())
    }

    pub fn push(&mut self, item: T) {
        self.reserve_for(1);
        self.items.push(item);
        self.record_top();
    }

    /// Releases the top `n` entries and yields them in stack order.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` entries are on the stack.
    pub fn pop(&mut self, n: usize) -> Drain<'_, T> {
        let top = self.items.len();
        assert!(n <= top, "cannot pop {n} entries from a stack of {top}");
        self.items.drain(top - n..)
    }

    /// Drops everything pushed after `mark`.
    pub fn rollback(&mut self, mark: Mark) {
        self.items.truncate(mark.0);
    }

    /// Moves everything pushed after `mark` into one exact-size allocation.
    pub fn take_from(&mut self, mark: Mark) -> Box<[T]> {
        let n = self.items.len().saturating_sub(mark.0);
        self.pop(n).collect()
    }

    fn reserve_for(&mut self, additional: usize) {
        let needed = self.items.len().saturating_add(additional);
        let capacity = self.items.capacity();
        if needed <= capacity {
            return;
        }
        let mut target = if capacity == 0 {
            initial_capacity::<T>()
        } else {
            capacity
        };
        while target < needed {
            target = target.saturating_add((target / 2).max(1));
        }
        self.items.reserve_exact(target - self.items.len());
    }

    fn record_top(&mut self) {
        self.high_water = self.high_water.max(self.items.len());
    }
}

impl<T: Copy + Default> Stack<T> {
    /// Reserves `n` entries at the top and hands them out for writing.
    pub fn push_slot(&mut self, n: usize) -> &mut [T] {
        self.reserve_for(n);
        let start = self.items.len();
        self.items.resize(start + n, T::default());
        self.record_top();
        &mut self.items[start..]
    }

    pub fn extend_from_slice(&mut self, items: &[T]) {
        if items.is_empty() {
            return;
        }
        self.push_slot(items.len()).copy_from_slice(items);
    }
}

fn initial_capacity<T>() -> usize {
    (SCRATCH_INITIAL_BYTES / size_of::<T>().max(1)).max(1)
}

/// The three stacks shared by every decoder within one parse call.
#[derive(Debug, Default)]
pub struct ScratchBuffer {
    pub bytes: Stack<u8>,
    pub values: Stack<Value>,
    pub members: Stack<Member>,
}

impl ScratchBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drained(&self) -> bool {
        self.bytes.is_empty() && self.values.is_empty() && self.members.is_empty()
    }
}
