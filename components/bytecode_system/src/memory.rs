//! Growth policy shared by every growable buffer in the pipeline.
//!
//! Buffers start empty, jump to [`MIN_CAPACITY`] on the first write, and
//! double from then on. The chunk's code and line arrays, the constant pool
//! and the VM value stack all follow it.

/// Capacity allocated on the first growth.
pub const MIN_CAPACITY: usize = 8;

/// Next capacity for a full buffer of `capacity` slots.
///
/// ```
/// use bytecode_system::memory::grow_capacity;
///
/// assert_eq!(grow_capacity(0), 8);
/// assert_eq!(grow_capacity(8), 16);
/// assert_eq!(grow_capacity(16), 32);
/// ```
pub const fn grow_capacity(capacity: usize) -> usize {
    if capacity < MIN_CAPACITY {
        MIN_CAPACITY
    } else {
        capacity * 2
    }
}

/// Reserve storage so `storage` can hold `capacity` elements without
/// reallocating again.
pub fn reserve_to<T>(storage: &mut Vec<T>, capacity: usize) {
    storage.reserve_exact(capacity.saturating_sub(storage.len()));
}
