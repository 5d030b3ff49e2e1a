//! Magnitude-level arithmetic shared by the signed operations.
//!
//! Every function here treats its [`LimbSeq`] arguments as unsigned values
//! and returns normalized sequences. Sign handling lives in [`crate::arith`]
//! and [`crate::division`].

use std::cmp::Ordering;

use arbint_limbs::{AllocError, DoubleLimb, Limb, LimbSeq, LIMB_BITS};

const LIMB_BASE: DoubleLimb = 1 << LIMB_BITS;

/// Compares two magnitudes, ignoring sign.
///
/// Both inputs must be normalized so that a longer sequence is a larger value.
#[must_use]
pub fn compare_magnitude(a: &LimbSeq, b: &LimbSeq) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Computes `a + b` with a carry chain.
///
/// # Errors
///
/// Returns an error if the result buffer cannot be allocated.
pub fn add_magnitude(a: &LimbSeq, b: &LimbSeq) -> Result<LimbSeq, AllocError> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut sum = LimbSeq::zeroed(long.len() + 1)?;
    let mut carry: DoubleLimb = 0;
    for (i, &limb) in long.iter().enumerate() {
        let total = DoubleLimb::from(limb) + DoubleLimb::from(short.limb(i)) + carry;
        sum.set(i, total as Limb);
        carry = total >> LIMB_BITS;
    }
    sum.set(long.len(), carry as Limb);
    sum.normalize();
    Ok(sum)
}

/// Computes `larger - smaller` with borrow propagation.
///
/// The caller guarantees `larger >= smaller`.
///
/// # Errors
///
/// Returns an error if the result buffer cannot be allocated.
pub fn sub_magnitude(larger: &LimbSeq, smaller: &LimbSeq) -> Result<LimbSeq, AllocError> {
    debug_assert_ne!(compare_magnitude(larger, smaller), Ordering::Less);

    let mut diff = LimbSeq::zeroed(larger.len())?;
    let mut borrow: DoubleLimb = 0;
    for (i, &limb) in larger.iter().enumerate() {
        let minuend = DoubleLimb::from(limb);
        let subtrahend = DoubleLimb::from(smaller.limb(i)) + borrow;
        let out = if minuend >= subtrahend {
            borrow = 0;
            minuend - subtrahend
        } else {
            borrow = 1;
            LIMB_BASE + minuend - subtrahend
        };
        diff.set(i, out as Limb);
    }
    debug_assert_eq!(borrow, 0);
    diff.normalize();
    Ok(diff)
}

/// Computes `a * b` by schoolbook multiplication.
///
/// # Errors
///
/// Returns an error if the result buffer cannot be allocated.
pub fn mul_magnitude(a: &LimbSeq, b: &LimbSeq) -> Result<LimbSeq, AllocError> {
    if a.is_zero() || b.is_zero() {
        return Ok(LimbSeq::zero());
    }

    let mut product = LimbSeq::zeroed(a.len() + b.len())?;
    for (i, &a_limb) in a.iter().enumerate() {
        let a_limb = DoubleLimb::from(a_limb);
        let mut carry: DoubleLimb = 0;
        let mut j = 0;
        // (2^32-1)^2 + 2 * (2^32-1) == 2^64 - 1, so the accumulator never overflows.
        while j < b.len() || carry != 0 {
            let acc = a_limb * DoubleLimb::from(b.limb(j)) + DoubleLimb::from(product[i + j]) + carry;
            product.set(i + j, acc as Limb);
            carry = acc >> LIMB_BITS;
            j += 1;
        }
    }
    product.normalize();
    Ok(product)
}

/// Replaces `mag` with `mag * multiplier + addend`, growing by one limb on overflow.
///
/// # Errors
///
/// Returns an error if the extra limb cannot be allocated.
pub fn mul_small_add_in_place(
    mag: &mut LimbSeq,
    multiplier: Limb,
    addend: Limb,
) -> Result<(), AllocError> {
    let multiplier = DoubleLimb::from(multiplier);
    let mut carry = DoubleLimb::from(addend);
    for limb in mag.as_mut_slice() {
        let acc = DoubleLimb::from(*limb) * multiplier + carry;
        *limb = acc as Limb;
        carry = acc >> LIMB_BITS;
    }
    if carry != 0 {
        mag.push(carry as Limb)?;
    }
    mag.normalize();
    Ok(())
}

/// Divides `mag` in place by a single nonzero limb and returns the remainder.
///
/// Walks from the most significant limb down, carrying the running remainder.
pub fn div_small_in_place(mag: &mut LimbSeq, divisor: Limb) -> Limb {
    debug_assert_ne!(divisor, 0);

    let divisor = DoubleLimb::from(divisor);
    let mut rem: DoubleLimb = 0;
    for limb in mag.as_mut_slice().iter_mut().rev() {
        let acc = (rem << LIMB_BITS) | DoubleLimb::from(*limb);
        *limb = (acc / divisor) as Limb;
        rem = acc % divisor;
    }
    mag.normalize();
    rem as Limb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(limbs: &[Limb]) -> LimbSeq {
        LimbSeq::from_slice(limbs).unwrap()
    }

    #[test]
    fn test_compare_magnitude() {
        assert_eq!(compare_magnitude(&seq(&[1, 1]), &seq(&[u32::MAX])), Ordering::Greater);
        assert_eq!(compare_magnitude(&seq(&[5, 2]), &seq(&[4, 3])), Ordering::Less);
        assert_eq!(compare_magnitude(&seq(&[7, 3]), &seq(&[7, 3])), Ordering::Equal);
        assert_eq!(compare_magnitude(&seq(&[0]), &seq(&[0])), Ordering::Equal);
    }

    #[test]
    fn test_add_carry_across_limbs() {
        let a = seq(&[u32::MAX, u32::MAX, u32::MAX]);
        let b = seq(&[1]);
        assert_eq!(add_magnitude(&a, &b).unwrap().as_slice(), &[0, 0, 0, 1]);
        assert_eq!(add_magnitude(&b, &a).unwrap().as_slice(), &[0, 0, 0, 1]);
    }

    #[test]
    fn test_add_without_final_carry() {
        let sum = add_magnitude(&seq(&[1, 2]), &seq(&[3])).unwrap();
        assert_eq!(sum.as_slice(), &[4, 2]);
        assert!(sum.is_normalized());
    }

    #[test]
    fn test_sub_borrow_across_limbs() {
        let a = seq(&[0, 0, 1]);
        let b = seq(&[1]);
        assert_eq!(sub_magnitude(&a, &b).unwrap().as_slice(), &[u32::MAX, u32::MAX]);
    }

    #[test]
    fn test_sub_to_zero() {
        let a = seq(&[9, 9]);
        assert_eq!(sub_magnitude(&a, &a).unwrap(), LimbSeq::zero());
    }

    #[test]
    fn test_mul_full_width() {
        let max = seq(&[u32::MAX]);
        // (2^32 - 1)^2 = 2^64 - 2^33 + 1
        assert_eq!(mul_magnitude(&max, &max).unwrap().as_slice(), &[1, u32::MAX - 1]);

        let big = seq(&[u32::MAX, u32::MAX]);
        let product = mul_magnitude(&big, &big).unwrap();
        // (2^64 - 1)^2 = 2^128 - 2^65 + 1
        assert_eq!(product.as_slice(), &[1, 0, u32::MAX - 1, u32::MAX]);
    }

    #[test]
    fn test_mul_by_zero() {
        let a = seq(&[3, 4, 5]);
        assert_eq!(mul_magnitude(&a, &LimbSeq::zero()).unwrap(), LimbSeq::zero());
        assert_eq!(mul_magnitude(&LimbSeq::zero(), &a).unwrap(), LimbSeq::zero());
    }

    #[test]
    fn test_mul_small_add_grows() {
        let mut mag = seq(&[u32::MAX]);
        mul_small_add_in_place(&mut mag, 10, 9).unwrap();
        // (2^32 - 1) * 10 + 9 = 10 * 2^32 - 1
        assert_eq!(mag.as_slice(), &[u32::MAX, 9]);

        let mut zero = LimbSeq::zero();
        mul_small_add_in_place(&mut zero, 10, 0).unwrap();
        assert_eq!(zero, LimbSeq::zero());
    }

    #[test]
    fn test_div_small() {
        let mut mag = seq(&[0, 1]);
        let rem = div_small_in_place(&mut mag, 10);
        // 2^32 = 429496729 * 10 + 6
        assert_eq!(rem, 6);
        assert_eq!(mag.as_slice(), &[429_496_729]);

        let mut small = seq(&[7]);
        assert_eq!(div_small_in_place(&mut small, 9), 7);
        assert_eq!(small, LimbSeq::zero());
    }
}
