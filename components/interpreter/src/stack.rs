//! Value stack for the virtual machine
//!
//! Slots are addressed by index, so growing the storage never invalidates a
//! position the VM holds on to. Storage follows the shared growth policy and
//! is kept between runs.

use bytecode_system::memory::grow_capacity;
use core_types::Value;

/// Growable LIFO stack of runtime values
#[derive(Debug, Clone, Default)]
pub struct ValueStack {
    slots: Vec<Value>,
    top: usize,
}

impl ValueStack {
    /// Create an empty stack with no storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a value, growing the storage when every slot is in use
    pub fn push(&mut self, value: Value) {
        if self.top == self.slots.len() {
            let capacity = grow_capacity(self.slots.len());
            self.slots.resize(capacity, Value::default());
        }
        self.slots[self.top] = value;
        self.top += 1;
    }

    /// Pop the top value
    pub fn pop(&mut self) -> Option<Value> {
        if self.top == 0 {
            return None;
        }
        self.top -= 1;
        Some(self.slots[self.top])
    }

    /// Mutable access to the top value
    pub fn peek_mut(&mut self) -> Option<&mut Value> {
        let index = self.top.checked_sub(1)?;
        self.slots.get_mut(index)
    }

    /// Drop every live value; storage is kept
    pub fn reset(&mut self) {
        self.top = 0;
    }

    /// Number of live values
    pub fn len(&self) -> usize {
        self.top
    }

    /// Check if no values are live
    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Live values, bottom first
    pub fn as_slice(&self) -> &[Value] {
        &self.slots[..self.top]
    }
}
