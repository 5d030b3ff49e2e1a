//! Property-based tests for limb storage.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::LimbSeq;

    // Strategy for raw limb vectors, biased towards high-order zeros
    fn raw_limbs() -> impl Strategy<Value = Vec<u32>> {
        proptest::collection::vec(prop_oneof![Just(0u32), any::<u32>()], 0..12)
    }

    proptest! {
        #[test]
        fn from_slice_is_normalized(limbs in raw_limbs()) {
            let seq = LimbSeq::from_slice(&limbs).unwrap();
            prop_assert!(seq.is_normalized());
            prop_assert!(!seq.is_empty());
        }

        #[test]
        fn normalize_is_idempotent(limbs in raw_limbs()) {
            let mut seq = LimbSeq::from_slice(&limbs).unwrap();
            let before = seq.clone();
            seq.normalize();
            prop_assert_eq!(seq, before);
        }

        #[test]
        fn normalize_keeps_low_limbs(limbs in raw_limbs()) {
            let seq = LimbSeq::from_slice(&limbs).unwrap();
            for (i, &limb) in limbs.iter().enumerate() {
                prop_assert_eq!(seq.limb(i), limb);
            }
        }

        #[test]
        fn u64_round_trip(value in any::<u64>()) {
            let seq = LimbSeq::from_u64(value);
            prop_assert!(seq.is_normalized());
            prop_assert_eq!(seq.to_u64(), Some(value));
        }

        #[test]
        fn push_preserves_prefix(limbs in raw_limbs(), extra in 1u32..) {
            let mut seq = LimbSeq::from_slice(&limbs).unwrap();
            let before = seq.clone();
            seq.push(extra).unwrap();
            prop_assert_eq!(seq.len(), before.len() + 1);
            prop_assert_eq!(&seq.as_slice()[..before.len()], before.as_slice());
            prop_assert_eq!(seq.high_limb(), extra);
        }
    }
}
