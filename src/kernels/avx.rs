use std::arch::x86_64::{
    __m256i,

    _mm256_loadu_si256,
    _mm256_or_si256,
    _mm256_storeu_si256
};

use crate::aligned::{is_aligned, ALIGNMENT};

/// Number of 32 bit lanes in a 256 bit register
pub const LANES: usize = 8;

/// AVX2 body. Ors eight lanes per iteration, then finishes the remaining `num_points % 8`
/// elements with a scalar tail
///
/// # Remarks
/// A 16 byte aligned buffer is not necessarily 32 byte aligned so the main loop uses
/// unaligned loads and stores
///
/// # Safety
/// - `out`, `a` and `b` must be aligned to 16 bytes
/// - `a`, `b` must be readable and `out` writable for `num_points` elements
/// - `out` must not overlap `a` or `b`
/// - The CPU must support avx2
#[target_feature(enable = "avx2")]
pub unsafe fn i32_or_a16_avx2(out: *mut i32, a: *const i32, b: *const i32, num_points: usize) {
    debug_assert!(num_points == 0 || is_aligned(out, ALIGNMENT));
    debug_assert!(num_points == 0 || is_aligned(a, ALIGNMENT));
    debug_assert!(num_points == 0 || is_aligned(b, ALIGNMENT));

    let eighth_points = num_points / LANES;

    let mut ptr_a = a as *const __m256i;
    let mut ptr_b = b as *const __m256i;
    let mut ptr_out = out as *mut __m256i;

    for _ in 0..eighth_points {
        let va = _mm256_loadu_si256(ptr_a);
        let vb = _mm256_loadu_si256(ptr_b);
        _mm256_storeu_si256(ptr_out, _mm256_or_si256(va, vb));

        ptr_a = ptr_a.add(1);
        ptr_b = ptr_b.add(1);
        ptr_out = ptr_out.add(1);
    }

    // Scalar tail
    for i in (eighth_points * LANES)..num_points {
        *(out.add(i)) = *(a.add(i)) | *(b.add(i));
    }
}

#[cfg(test)]
mod test {
    use crate::test::*;

    fn has_avx2() -> bool {
        is_x86_feature_detected!("avx2")
    }

    #[test]
    fn or() {
        if !has_avx2() {
            return;
        }

        run_test(super::i32_or_a16_avx2, 1024);
    }

    #[test]
    fn tail_lengths() {
        if !has_avx2() {
            return;
        }

        for k in 1..6 {
            for n in [super::LANES * k - 1, super::LANES * k, super::LANES * k + 1].iter() {
                run_test(super::i32_or_a16_avx2, *n);
            }
        }
    }

    #[test]
    fn matches_generic() {
        if !has_avx2() {
            return;
        }

        for n in 0..67 {
            assert_matches_generic(super::i32_or_a16_avx2, n);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn misaligned_input_asserts() {
        if !has_avx2() {
            panic!("avx2 unavailable");
        }

        call_misaligned(super::i32_or_a16_avx2, 16);
    }

    #[test]
    fn misaligned_empty_is_accepted() {
        if !has_avx2() {
            return;
        }

        call_misaligned(super::i32_or_a16_avx2, 0);
    }
}
