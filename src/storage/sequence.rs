//! Packed sequence store.
//!
//! Every node's forward sequence lives back-to-back in one packed array of
//! codec codes. A parallel bit array flags the first position of each node
//! interval; division sets a new flag at every interval it introduces.
//! The store only grows.

use crate::packed::{BitVec, PackedVec};

use super::codec::{self, CODE_WIDTH};

#[derive(Debug, Clone)]
pub struct SequenceStore {
    codes: PackedVec,
    boundaries: BitVec,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self {
            codes: PackedVec::with_width(CODE_WIDTH),
            boundaries: BitVec::new(),
        }
    }

    pub fn with_capacity(bases: usize) -> Self {
        let mut store = Self::new();
        store.codes.reserve(bases);
        store.boundaries.reserve(bases);
        store
    }

    /// Total codes stored.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Append a single code. Not an interval start.
    pub fn append(&mut self, code: u64) {
        self.codes.push(code);
        self.boundaries.push(false);
    }

    /// Encode and append a whole sequence as a new interval.
    ///
    /// Returns the offset of its first code. An empty sequence gets an
    /// empty interval at the current end and no boundary marker.
    pub fn append_sequence(&mut self, seq: &[u8]) -> usize {
        let start = self.len();
        for &base in seq {
            self.append(codec::encode(base));
        }
        if !seq.is_empty() {
            self.boundaries.set(start, true);
        }
        start
    }

    pub fn get(&self, offset: usize) -> u64 {
        self.codes.get(offset)
    }

    pub fn set(&mut self, offset: usize, code: u64) {
        self.codes.set(offset, code);
    }

    pub fn mark_boundary(&mut self, offset: usize) {
        self.boundaries.set(offset, true);
    }

    pub fn is_boundary(&self, offset: usize) -> bool {
        self.boundaries.get(offset)
    }

    /// Number of interval starts recorded.
    pub fn boundary_count(&self) -> usize {
        self.boundaries.count_ones()
    }

    /// Decode `[start, start + len)` in forward orientation.
    pub fn decode(&self, start: usize, len: usize) -> Vec<u8> {
        (start..start + len)
            .map(|i| codec::decode(self.codes.get(i)))
            .collect()
    }

    /// Decode `[start, start + len)` as its reverse complement.
    pub fn decode_reverse_complement(&self, start: usize, len: usize) -> Vec<u8> {
        (start..start + len)
            .rev()
            .map(|i| codec::decode(codec::complement(self.codes.get(i))))
            .collect()
    }

    /// Reverse-complement `[start, start + len)` in place.
    pub fn reverse_complement_in_place(&mut self, start: usize, len: usize) {
        for i in 0..len / 2 {
            let k = start + i;
            let j = start + len - i - 1;
            let front = self.codes.get(k);
            let back = self.codes.get(j);
            self.codes.set(k, codec::complement(back));
            self.codes.set(j, codec::complement(front));
        }
        if len % 2 == 1 {
            let mid = start + len / 2;
            let code = self.codes.get(mid);
            self.codes.set(mid, codec::complement(code));
        }
    }

    pub fn heap_bytes(&self) -> usize {
        self.codes.heap_bytes() + self.boundaries.heap_bytes()
    }

    pub fn width(&self) -> u32 {
        self.codes.width()
    }

    pub fn clear(&mut self) {
        self.codes.clear(CODE_WIDTH);
        self.boundaries.clear();
    }
}

impl Default for SequenceStore {
    fn default() -> Self {
        Self::new()
    }
}
