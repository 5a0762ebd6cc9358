use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

const WORD_BITS: usize = 64;

/// Fixed-size vector of flags, packed 64 per word.
///
/// Every word is an `AtomicU64`, so a `BitVector` can be shared between
/// request handlers (e.g. in an `Arc`) and mutated through `&self`. Toggling
/// is a single `fetch_xor`, which means concurrent toggles never get lost,
/// not even for neighbouring flags living in the same word.
///
/// Readers (`count_checked`, `snapshot`) see every word atomically, but not
/// the whole vector at one point in time.
pub struct BitVector {
	storage: Box<[AtomicU64]>,
	capacity: usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
	pub index: usize,
	pub capacity: usize
}

impl fmt::Display for OutOfRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "index {} is out of range for {} checkboxes", self.index, self.capacity)
	}
}

impl std::error::Error for OutOfRange {}

impl BitVector {
	pub fn new(capacity: usize) -> BitVector {
		let n_words = (capacity + WORD_BITS - 1) / WORD_BITS;
		BitVector {
			storage: (0..n_words).map(|_| AtomicU64::new(0)).collect(),
			capacity
		}
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	fn storidx_and_mask(&self, idx: usize) -> Result<(usize, u64), OutOfRange> {
		if idx >= self.capacity {
			return Err(OutOfRange { index: idx, capacity: self.capacity });
		}
		let storidx = idx / WORD_BITS;
		let bitidx = idx % WORD_BITS;
		let mask = 1 << bitidx;
		return Ok((storidx, mask));
	}

	/// Flips the flag at `idx` and returns its new value.
	pub fn toggle(&self, idx: usize) -> Result<bool, OutOfRange> {
		let (storidx, mask) = self.storidx_and_mask(idx)?;
		let previous = self.storage[storidx].fetch_xor(mask, Ordering::AcqRel);
		Ok(previous & mask == 0)
	}

	pub fn is_checked(&self, idx: usize) -> Result<bool, OutOfRange> {
		let (storidx, mask) = self.storidx_and_mask(idx)?;
		Ok(self.storage[storidx].load(Ordering::Acquire) & mask != 0)
	}

	/// Number of set flags. Only bits below `capacity` are ever set, so the
	/// tail of the last word does not need masking.
	pub fn count_checked(&self) -> usize {
		self.storage.iter()
			.map(|word| word.load(Ordering::Acquire).count_ones() as usize)
			.sum()
	}

	/// Copies out all flags in index order.
	pub fn snapshot(&self) -> Vec<bool> {
		let mut result = Vec::with_capacity(self.capacity);
		for word in self.storage.iter() {
			let bits = word.load(Ordering::Acquire);
			let remaining = (self.capacity - result.len()).min(WORD_BITS);
			result.extend((0..remaining).map(|bitidx| bits & (1 << bitidx) != 0));
		}
		result
	}
}
