//! Bounded response accumulator.
//!
//! Layout (capacity `N`):
//! ```text
//! [0 .. offset)   received body bytes
//! [offset]        0x00 terminator (always present)
//! (offset .. N)   unused
//! ```
//!
//! One byte is always reserved for the terminator, so at most `N - 1` body
//! bytes are kept.  Bytes beyond that are dropped and the truncation flag
//! is raised; the prefix already received stays usable.

/// Fixed-capacity buffer assembling a response body from transport fragments.
pub struct FetchBuffer<const N: usize> {
    data: [u8; N],
    /// Number of body bytes stored.  Invariant: `offset < N`.
    offset: usize,
    /// Set once any fragment could not be stored in full.
    truncated: bool,
}

impl<const N: usize> FetchBuffer<N> {
    const NON_ZERO: () = assert!(N > 0, "FetchBuffer needs room for the terminator");

    /// Create an empty, terminated buffer.
    pub const fn new() -> Self {
        let () = Self::NON_ZERO;
        Self {
            data: [0; N],
            offset: 0,
            truncated: false,
        }
    }

    /// Append one fragment.  Returns the number of bytes actually copied.
    ///
    /// A fragment that exactly fills the remaining space is accepted in
    /// full; anything past that is dropped.
    pub fn accumulate(&mut self, fragment: &[u8]) -> usize {
        let remaining = self.remaining();
        let to_copy = if fragment.len() > remaining {
            self.truncated = true;
            remaining
        } else {
            fragment.len()
        };

        self.data[self.offset..self.offset + to_copy].copy_from_slice(&fragment[..to_copy]);
        self.offset += to_copy;
        self.data[self.offset] = 0;
        to_copy
    }

    /// The body received so far, without the terminator.
    pub fn finalize(&self) -> &[u8] {
        &self.data[..self.offset]
    }

    /// The body received so far, including the trailing `0x00`.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data[..=self.offset]
    }

    /// Number of body bytes stored.
    pub fn len(&self) -> usize {
        self.offset
    }

    /// Returns `true` if no body byte has been stored.
    pub fn is_empty(&self) -> bool {
        self.offset == 0
    }

    /// Declared capacity, terminator included.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Body bytes that still fit before the terminator slot.
    pub fn remaining(&self) -> usize {
        N - self.offset - 1
    }

    /// Returns `true` if any received byte had to be dropped.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl<const N: usize> Default for FetchBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
