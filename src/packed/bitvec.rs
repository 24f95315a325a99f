//! Growable bit array backed by 64-bit words.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitVec {
    bits: Vec<u64>,
    len: usize,
}

impl BitVec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn heap_bytes(&self) -> usize {
        self.bits.capacity() * std::mem::size_of::<u64>()
    }

    pub fn reserve(&mut self, additional: usize) {
        let needed = (self.len + additional + 63) / 64;
        self.bits.reserve(needed.saturating_sub(self.bits.len()));
    }

    pub fn push(&mut self, bit: bool) {
        if self.len % 64 == 0 {
            self.bits.push(0);
        }
        self.len += 1;
        self.set(self.len - 1, bit);
    }

    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "BitVec index {} out of bounds (len {})", index, self.len);
        self.bits[index / 64] & (1u64 << (index % 64)) != 0
    }

    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, bit: bool) {
        assert!(index < self.len, "BitVec index {} out of bounds (len {})", index, self.len);
        let word = index / 64;
        let mask = 1u64 << (index % 64);
        if bit {
            self.bits[word] |= mask;
        } else {
            self.bits[word] &= !mask;
        }
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn clear(&mut self) {
        self.bits.clear();
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_get_set() {
        let mut bv = BitVec::new();
        for i in 0..130 {
            bv.push(i % 3 == 0);
        }
        assert_eq!(bv.len(), 130);
        assert!(bv.get(0));
        assert!(!bv.get(1));
        assert!(bv.get(129));

        bv.set(1, true);
        bv.set(129, false);
        assert!(bv.get(1));
        assert!(!bv.get(129));
        assert_eq!(bv.count_ones(), 44);
    }

    #[test]
    fn test_clear() {
        let mut bv = BitVec::new();
        bv.push(true);
        bv.clear();
        assert!(bv.is_empty());
        assert_eq!(bv.count_ones(), 0);
    }
}
