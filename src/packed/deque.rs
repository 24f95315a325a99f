//! Double-ended packed integer array.
//!
//! A ring buffer laid over a [`PackedVec`]. Both ends grow in amortized
//! O(1); a full buffer is re-laid into one twice the size with the logical
//! front at physical slot 0. Logical positions are stable relative to the
//! front, so prepending shifts every logical index by one.

use super::vector::PackedVec;

#[derive(Debug, Clone, Default)]
pub struct PackedDeque {
    buf: PackedVec,
    begin: usize,
    len: usize,
}

impl PackedDeque {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn width(&self) -> u32 {
        self.buf.width()
    }

    pub fn heap_bytes(&self) -> usize {
        self.buf.heap_bytes()
    }

    fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn physical(&self, index: usize) -> usize {
        (self.begin + index) % self.capacity()
    }

    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get(&self, index: usize) -> u64 {
        assert!(
            index < self.len,
            "PackedDeque index {} out of bounds (len {})",
            index,
            self.len
        );
        self.buf.get(self.physical(index))
    }

    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, value: u64) {
        assert!(
            index < self.len,
            "PackedDeque index {} out of bounds (len {})",
            index,
            self.len
        );
        let slot = self.physical(index);
        self.buf.set(slot, value);
    }

    pub fn push_back(&mut self, value: u64) {
        if self.len == self.capacity() {
            self.grow();
        }
        let slot = self.physical(self.len);
        self.buf.set(slot, value);
        self.len += 1;
    }

    pub fn push_front(&mut self, value: u64) {
        if self.len == self.capacity() {
            self.grow();
        }
        let cap = self.capacity();
        self.begin = (self.begin + cap - 1) % cap;
        self.buf.set(self.begin, value);
        self.len += 1;
    }

    pub fn clear(&mut self) {
        self.buf.clear(1);
        self.begin = 0;
        self.len = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }

    fn grow(&mut self) {
        let new_cap = (self.capacity() * 2).max(1);
        let mut buf = PackedVec::with_width(self.buf.width());
        buf.resize(new_cap);
        for i in 0..self.len {
            buf.set(i, self.get(i));
        }
        self.buf = buf;
        self.begin = 0;
    }
}
