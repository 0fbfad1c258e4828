use num_bigint::BigUint;

/// Exact integer square root
///
/// Returns the largest `r` such that `r * r <= n`. Delegates to the integer
/// Newton iteration of `num-bigint`, no floating point is involved so the
/// result stays exact far beyond 2^53.
///
pub fn isqrt(n: &BigUint) -> BigUint {
    n.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    fn check_root(n: &BigUint) -> bool {
        let r = isqrt(n);
        let next = &r + 1u32;
        &r * &r <= *n && *n < &next * &next
    }

    #[test]
    fn small_values() {
        let expected = [0u32, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 4];
        for (n, root) in expected.iter().enumerate() {
            assert_eq!(isqrt(&BigUint::from(n)), BigUint::from(*root), "isqrt({})", n);
        }
    }

    #[test]
    fn zero_and_one() {
        assert!(isqrt(&BigUint::zero()).is_zero());
        assert_eq!(isqrt(&BigUint::one()), BigUint::one());
    }

    #[test]
    fn power_of_two_192() {
        // sqrt(2^192) is exactly 2^96
        let n = BigUint::one() << 192u32;
        assert_eq!(isqrt(&n), BigUint::from(crate::libraries::Q96));
    }

    #[test]
    fn around_perfect_squares() {
        let root = BigUint::from(u128::MAX) * 7u32 + 3u32;
        let square = &root * &root;
        assert_eq!(isqrt(&square), root);
        assert_eq!(isqrt(&(&square - 1u32)), &root - 1u32);
        assert_eq!(isqrt(&(&square + &root * 2u32)), root);
    }

    #[test]
    fn beyond_f64_precision() {
        // 10^80 + 1 rounds to 10^80 in f64
        let n = BigUint::from(10u32).pow(80) + 1u32;
        assert_eq!(isqrt(&n), BigUint::from(10u32).pow(40));
        assert!(check_root(&n));
    }

    mod fuzz_tests {
        use super::*;
        use quickcheck::quickcheck;

        quickcheck! {
            fn isqrt_u64_test(n: u64) -> bool {
                check_root(&BigUint::from(n))
            }
        }

        quickcheck! {
            fn isqrt_wide_test(hi: u128, lo: u128, shift: u8) -> bool {
                let n = ((BigUint::from(hi) << 128u32) + lo) << shift;
                check_root(&n)
            }
        }

        quickcheck! {
            fn isqrt_perfect_square_test(hi: u64, lo: u128) -> bool {
                let root = (BigUint::from(hi) << 128u32) + lo;
                isqrt(&(&root * &root)) == root
            }
        }
    }
}
