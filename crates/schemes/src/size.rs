// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Shallow in-memory size measurement.
//!
//! These helpers report the memory directly owned by a value: the header
//! plus the backing buffer for a `Vec`, the value itself for anything
//! else. Heap allocations behind the elements are NOT followed, so this is
//! a representation-overhead figure, not a serialized size.

use std::mem;

/// Shallow size of a vector: header plus capacity × element size.
pub fn shallow_size_of_vec<T>(v: &Vec<T>) -> usize {
    mem::size_of::<Vec<T>>() + v.capacity() * mem::size_of::<T>()
}

/// Shallow size of a single value.
pub fn shallow_size_of_val<T>(v: &T) -> usize {
    mem::size_of_val(v)
}
