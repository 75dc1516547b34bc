use std::arch::aarch64::{
    vld1q_s32,
    vorrq_s32,
    vst1q_s32
};

use crate::aligned::{is_aligned, ALIGNMENT};

/// Number of 32 bit lanes in a 128 bit register
pub const LANES: usize = 4;

/// NEON body. Ors four lanes per iteration, then finishes the remaining `num_points % 4`
/// elements with a scalar tail
///
/// # Safety
/// - `out`, `a` and `b` must be aligned to 16 bytes
/// - `a`, `b` must be readable and `out` writable for `num_points` elements
/// - `out` must not overlap `a` or `b`
#[target_feature(enable = "neon")]
pub unsafe fn i32_or_a16_neon(out: *mut i32, a: *const i32, b: *const i32, num_points: usize) {
    debug_assert!(num_points == 0 || is_aligned(out, ALIGNMENT));
    debug_assert!(num_points == 0 || is_aligned(a, ALIGNMENT));
    debug_assert!(num_points == 0 || is_aligned(b, ALIGNMENT));

    let quarter_points = num_points / LANES;

    let mut i = 0;
    for _ in 0..quarter_points {
        let va = vld1q_s32(a.add(i));
        let vb = vld1q_s32(b.add(i));
        vst1q_s32(out.add(i), vorrq_s32(va, vb));

        i += LANES;
    }

    // Scalar tail
    while i < num_points {
        *(out.add(i)) = *(a.add(i)) | *(b.add(i));
        i += 1;
    }
}
