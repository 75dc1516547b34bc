#[cfg(target_arch = "x86")]
use std::arch::x86::{
    __m128i,

    _mm_load_si128,
    _mm_or_si128,
    _mm_store_si128
};
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::{
    __m128i,

    _mm_load_si128,
    _mm_or_si128,
    _mm_store_si128
};

use crate::aligned::{is_aligned, ALIGNMENT};

/// Number of 32 bit lanes in a 128 bit register
pub const LANES: usize = 4;

/// SSE2 body. Ors four lanes per iteration with aligned loads and stores, then finishes the
/// remaining `num_points % 4` elements with a scalar tail
///
/// # Safety
/// - `out`, `a` and `b` must be aligned to 16 bytes
/// - `a`, `b` must be readable and `out` writable for `num_points` elements
/// - `out` must not overlap `a` or `b`
/// - The CPU must support sse2
#[target_feature(enable = "sse2")]
pub unsafe fn i32_or_a16_sse(out: *mut i32, a: *const i32, b: *const i32, num_points: usize) {
    debug_assert!(num_points == 0 || is_aligned(out, ALIGNMENT));
    debug_assert!(num_points == 0 || is_aligned(a, ALIGNMENT));
    debug_assert!(num_points == 0 || is_aligned(b, ALIGNMENT));

    let quarter_points = num_points / LANES;

    let mut ptr_a = a as *const __m128i;
    let mut ptr_b = b as *const __m128i;
    let mut ptr_out = out as *mut __m128i;

    for _ in 0..quarter_points {
        let va = _mm_load_si128(ptr_a);
        let vb = _mm_load_si128(ptr_b);
        _mm_store_si128(ptr_out, _mm_or_si128(va, vb));

        ptr_a = ptr_a.add(1);
        ptr_b = ptr_b.add(1);
        ptr_out = ptr_out.add(1);
    }

    // Scalar tail
    for i in (quarter_points * LANES)..num_points {
        *(out.add(i)) = *(a.add(i)) | *(b.add(i));
    }
}
