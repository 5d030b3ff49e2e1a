//! # arbint-limbs
//!
//! Limb sequence storage for arbint magnitudes.
//!
//! A magnitude is stored as base-2^32 digits ("limbs"), least significant
//! first. This crate only owns the storage: indexed access, growth and
//! normalization. All arithmetic lives in `arbint-integers`.
//!
//! ## Performance Notes
//!
//! - Values of up to [`INLINE_LIMBS`] limbs are stored inline, without a heap allocation
//! - Larger values spill to a contiguous buffer with amortized doubling growth
//! - Growth is fallible: exhausting memory yields an [`AllocError`] rather than an abort

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod limbs;

#[cfg(test)]
mod proptests;

pub use error::AllocError;
pub use limbs::{LimbSeq, INLINE_LIMBS};

/// A single base-2^32 digit.
pub type Limb = u32;

/// Wide enough to hold a limb product plus two limbs of carry.
pub type DoubleLimb = u64;

/// Number of bits in a [`Limb`].
pub const LIMB_BITS: u32 = Limb::BITS;
