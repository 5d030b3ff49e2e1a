//! Limb sequences.
//!
//! [`LimbSeq`] holds the unsigned magnitude of an integer as base-2^32
//! limbs, least significant first. A normalized sequence has at least one
//! limb and no high-order zero limbs, except the single-limb zero `[0]`.

use smallvec::SmallVec;
use std::fmt;
use std::ops::Index;

use crate::{AllocError, DoubleLimb, Limb, LIMB_BITS};

/// Limbs stored inline before spilling to the heap.
pub const INLINE_LIMBS: usize = 4;

/// An ordered, growable sequence of limbs.
///
/// Builders may temporarily leave high-order zero limbs in place (for
/// example after filling a zeroed result buffer); [`LimbSeq::normalize`]
/// restores the canonical form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LimbSeq {
    limbs: SmallVec<[Limb; INLINE_LIMBS]>,
}

impl LimbSeq {
    /// Returns the zero magnitude `[0]`.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_limb(0)
    }

    /// Returns a single-limb magnitude.
    #[must_use]
    pub fn from_limb(limb: Limb) -> Self {
        let mut limbs = SmallVec::new();
        limbs.push(limb);
        Self { limbs }
    }

    /// Returns the magnitude of a `u64`, using one limb when it fits and two otherwise.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        let low = value as Limb;
        let high = (value >> LIMB_BITS) as Limb;
        let mut limbs = SmallVec::new();
        limbs.push(low);
        if high != 0 {
            limbs.push(high);
        }
        Self { limbs }
    }

    /// Returns the zero magnitude with room for `hint` limbs.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity cannot be reserved.
    pub fn with_capacity(hint: usize) -> Result<Self, AllocError> {
        let mut limbs = SmallVec::new();
        limbs.try_reserve_exact(hint.max(1))?;
        limbs.push(0);
        Ok(Self { limbs })
    }

    /// Returns `len` zero limbs (at least one), ready to be filled with [`LimbSeq::set`].
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot be allocated.
    pub fn zeroed(len: usize) -> Result<Self, AllocError> {
        let len = len.max(1);
        let mut limbs = SmallVec::new();
        limbs.try_reserve_exact(len)?;
        limbs.resize(len, 0);
        Ok(Self { limbs })
    }

    /// Copies `limbs` (least significant first) into a normalized sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot be allocated.
    pub fn from_slice(limbs: &[Limb]) -> Result<Self, AllocError> {
        let mut seq = Self::zeroed(limbs.len())?;
        seq.limbs[..limbs.len()].copy_from_slice(limbs);
        seq.normalize();
        Ok(seq)
    }

    /// Returns the number of limbs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    /// Always false for a normalized sequence; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Returns the number of limbs the buffer holds without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.limbs.capacity()
    }

    /// Returns true if the storage has moved to the heap.
    #[must_use]
    pub fn spilled(&self) -> bool {
        self.limbs.spilled()
    }

    /// Returns the limb at `index`, or zero past the end.
    #[must_use]
    pub fn limb(&self, index: usize) -> Limb {
        self.limbs.get(index).copied().unwrap_or(0)
    }

    /// Returns the most significant limb.
    #[must_use]
    pub fn high_limb(&self) -> Limb {
        self.limbs.last().copied().unwrap_or(0)
    }

    /// Overwrites the limb at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, limb: Limb) {
        self.limbs[index] = limb;
    }

    /// Appends a new most significant limb.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot grow.
    pub fn push(&mut self, limb: Limb) -> Result<(), AllocError> {
        self.limbs.try_reserve(1)?;
        self.limbs.push(limb);
        Ok(())
    }

    /// Reserves room for at least `additional` more limbs.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot grow.
    pub fn reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        self.limbs.try_reserve(additional)?;
        Ok(())
    }

    /// Returns the limbs, least significant first.
    #[must_use]
    pub fn as_slice(&self) -> &[Limb] {
        &self.limbs
    }

    /// Returns the limbs mutably, least significant first.
    pub fn as_mut_slice(&mut self) -> &mut [Limb] {
        &mut self.limbs
    }

    /// Iterates over the limbs, least significant first.
    pub fn iter(&self) -> std::slice::Iter<'_, Limb> {
        self.limbs.iter()
    }

    /// Returns true if this is the zero magnitude.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    /// Returns true if this is the magnitude one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 1
    }

    /// Drops high-order zero limbs, keeping at least one limb.
    pub fn normalize(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
    }

    /// Returns true if the sequence is in canonical form.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        match self.limbs.len() {
            0 => false,
            1 => true,
            _ => self.high_limb() != 0,
        }
    }

    /// Converts to a `u64` if the magnitude fits.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        match self.limbs.len() {
            1 => Some(DoubleLimb::from(self.limbs[0])),
            2 => Some((DoubleLimb::from(self.limbs[1]) << LIMB_BITS) | DoubleLimb::from(self.limbs[0])),
            _ => None,
        }
    }
}

impl Default for LimbSeq {
    fn default() -> Self {
        Self::zero()
    }
}

impl Index<usize> for LimbSeq {
    type Output = Limb;

    fn index(&self, index: usize) -> &Self::Output {
        &self.limbs[index]
    }
}

impl<'a> IntoIterator for &'a LimbSeq {
    type Item = &'a Limb;
    type IntoIter = std::slice::Iter<'a, Limb>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for LimbSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.limbs.iter().copied().map(HexLimb))
            .finish()
    }
}

struct HexLimb(Limb);

impl fmt::Debug for HexLimb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let zero = LimbSeq::zero();
        assert_eq!(zero.as_slice(), &[0]);
        assert!(zero.is_zero());
        assert!(zero.is_normalized());
        assert_eq!(LimbSeq::default(), zero);
    }

    #[test]
    fn test_from_u64() {
        assert_eq!(LimbSeq::from_u64(7).as_slice(), &[7]);
        assert_eq!(LimbSeq::from_u64(u64::from(u32::MAX)).as_slice(), &[u32::MAX]);
        assert_eq!(LimbSeq::from_u64(1 << 32).as_slice(), &[0, 1]);
        assert_eq!(LimbSeq::from_u64(u64::MAX).as_slice(), &[u32::MAX, u32::MAX]);
        assert_eq!(LimbSeq::from_u64(u64::MAX).to_u64(), Some(u64::MAX));
    }

    #[test]
    fn test_limb_past_end_is_zero() {
        let seq = LimbSeq::from_u64(5);
        assert_eq!(seq.limb(0), 5);
        assert_eq!(seq.limb(1), 0);
        assert_eq!(seq.limb(100), 0);
        assert_eq!(seq[0], 5);
    }

    #[test]
    fn test_normalize() {
        let mut seq = LimbSeq::zeroed(4).unwrap();
        assert!(!seq.is_normalized());
        seq.set(1, 9);
        seq.normalize();
        assert_eq!(seq.as_slice(), &[0, 9]);

        let mut all_zero = LimbSeq::zeroed(3).unwrap();
        all_zero.normalize();
        assert_eq!(all_zero, LimbSeq::zero());
    }

    #[test]
    fn test_from_slice_trims() {
        let seq = LimbSeq::from_slice(&[1, 2, 0, 0]).unwrap();
        assert_eq!(seq.as_slice(), &[1, 2]);
        assert_eq!(LimbSeq::from_slice(&[]).unwrap(), LimbSeq::zero());
    }

    #[test]
    fn test_push_grows_past_inline() {
        let mut seq = LimbSeq::with_capacity(1).unwrap();
        for i in 1..=10 {
            seq.push(i).unwrap();
        }
        assert_eq!(seq.len(), 11);
        assert!(seq.spilled());
        assert_eq!(seq.high_limb(), 10);
        assert!(seq.capacity() >= 11);
    }

    #[test]
    fn test_with_capacity_reserves() {
        let seq = LimbSeq::with_capacity(32).unwrap();
        assert_eq!(seq.as_slice(), &[0]);
        assert!(seq.capacity() >= 32);
    }

    #[test]
    fn test_debug_format() {
        let seq = LimbSeq::from_u64(1 << 32 | 0xff);
        assert_eq!(format!("{seq:?}"), "[0x000000ff, 0x00000001]");
    }
}
