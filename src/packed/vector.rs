//! Growable bit-packed integer vector.
//!
//! Values are stored back-to-back at a fixed bit width inside a `Vec<u64>`.
//! The width starts small and widens on demand: writing a value that does
//! not fit re-packs the whole vector at the wider width. Widths never shrink.
//!
//! Layout for width `w`: element `i` occupies bits `[i*w, (i+1)*w)` of the
//! word array, least significant bit first, possibly straddling two words.

const WORD_BITS: usize = 64;

/// Bits needed to represent `value` (at least 1).
pub(crate) fn bits_needed(value: u64) -> u32 {
    (u64::BITS - value.leading_zeros()).max(1)
}

fn mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

fn words_for(len: usize, width: u32) -> usize {
    (len * width as usize + WORD_BITS - 1) / WORD_BITS
}

/// Fixed-width packed integer array with amortized O(1) `push`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedVec {
    words: Vec<u64>,
    width: u32,
    len: usize,
}

impl PackedVec {
    /// Empty vector with 1-bit width.
    pub fn new() -> Self {
        Self::with_width(1)
    }

    /// Empty vector starting at the given width (clamped to 1..=64).
    pub fn with_width(width: u32) -> Self {
        Self {
            words: Vec::new(),
            width: width.clamp(1, u64::BITS),
            len: 0,
        }
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current bit width of each element.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Bytes held by the word buffer.
    pub fn heap_bytes(&self) -> usize {
        self.words.capacity() * std::mem::size_of::<u64>()
    }

    /// Reserve room for `additional` more elements at the current width.
    pub fn reserve(&mut self, additional: usize) {
        let needed = words_for(self.len + additional, self.width);
        self.words.reserve(needed.saturating_sub(self.words.len()));
    }

    /// Read element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get(&self, index: usize) -> u64 {
        assert!(
            index < self.len,
            "PackedVec index {} out of bounds (len {})",
            index,
            self.len
        );
        self.read_raw(index)
    }

    /// Overwrite element `index`, widening the vector if `value` does not fit.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, value: u64) {
        assert!(
            index < self.len,
            "PackedVec index {} out of bounds (len {})",
            index,
            self.len
        );
        self.ensure_width(bits_needed(value));
        self.write_raw(index, value);
    }

    /// Append one element.
    pub fn push(&mut self, value: u64) {
        self.ensure_width(bits_needed(value));
        self.len += 1;
        let needed = words_for(self.len, self.width);
        if self.words.len() < needed {
            self.words.resize(needed, 0);
        }
        self.write_raw(self.len - 1, value);
    }

    /// Grow with zeros or truncate to `new_len` elements.
    pub fn resize(&mut self, new_len: usize) {
        if new_len < self.len {
            // zero the dropped tail so a later grow reads zeros
            for i in new_len..self.len {
                self.write_raw(i, 0);
            }
        }
        self.len = new_len;
        self.words.resize(words_for(new_len, self.width), 0);
    }

    /// Exchange two elements.
    pub fn swap(&mut self, a: usize, b: usize) {
        let va = self.get(a);
        let vb = self.get(b);
        self.write_raw(a, vb);
        self.write_raw(b, va);
    }

    /// Drop all elements and reset to the given width.
    pub fn clear(&mut self, width: u32) {
        self.words.clear();
        self.len = 0;
        self.width = width.clamp(1, u64::BITS);
    }

    /// Iterate elements in order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.len).map(move |i| self.read_raw(i))
    }

    // -- Internals ------------------------------------------------------------

    fn ensure_width(&mut self, width: u32) {
        if width <= self.width {
            return;
        }
        let mut wider = Self::with_width(width);
        wider.words = vec![0; words_for(self.len, width)];
        wider.len = self.len;
        for i in 0..self.len {
            wider.write_raw(i, self.read_raw(i));
        }
        *self = wider;
    }

    fn read_raw(&self, index: usize) -> u64 {
        let width = self.width as usize;
        let bit = index * width;
        let word = bit / WORD_BITS;
        let offset = bit % WORD_BITS;
        let m = mask(self.width);

        if offset + width <= WORD_BITS {
            (self.words[word] >> offset) & m
        } else {
            let low = self.words[word] >> offset;
            let high = self.words[word + 1] << (WORD_BITS - offset);
            (low | high) & m
        }
    }

    fn write_raw(&mut self, index: usize, value: u64) {
        let width = self.width as usize;
        let bit = index * width;
        let word = bit / WORD_BITS;
        let offset = bit % WORD_BITS;
        let m = mask(self.width);
        let value = value & m;

        self.words[word] &= !(m << offset);
        self.words[word] |= value << offset;

        if offset + width > WORD_BITS {
            let spill = WORD_BITS - offset;
            self.words[word + 1] &= !(m >> spill);
            self.words[word + 1] |= value >> spill;
        }
    }
}

impl Default for PackedVec {
    fn default() -> Self {
        Self::new()
    }
}
