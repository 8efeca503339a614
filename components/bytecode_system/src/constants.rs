//! Constant pool
//!
//! Numeric literals are stored once per chunk and referenced from the code by
//! index. Indices are handed out in insertion order and never change.

use core_types::Value;

use crate::memory::{grow_capacity, reserve_to};

/// Append-only array of constants referenced by instruction operands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstantPool {
    values: Vec<Value>,
    capacity: usize,
}

impl ConstantPool {
    /// Create an empty pool with no storage reserved
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value and return its index
    pub fn push(&mut self, value: Value) -> usize {
        if self.values.len() == self.capacity {
            self.capacity = grow_capacity(self.capacity);
            reserve_to(&mut self.values, self.capacity);
        }
        self.values.push(value);
        self.values.len() - 1
    }

    /// Value stored at `index`
    pub fn get(&self, index: usize) -> Option<Value> {
        self.values.get(index).copied()
    }

    /// Number of stored constants
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the pool holds no constants
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Logical capacity under the shared growth policy
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All constants in index order
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}
