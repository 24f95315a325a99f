//! Bit-packed containers underlying every graph store.

pub mod bitvec;
pub mod deque;
pub mod vector;

pub use bitvec::BitVec;
pub use deque::PackedDeque;
pub use vector::PackedVec;
