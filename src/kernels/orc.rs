use libc::size_t;

extern "C" {
    // Produced by the external kernel toolchain and linked by build.rs
    fn i32_or_a16_orc_impl(out: *mut i32, a: *const i32, b: *const i32, num_points: size_t);
}

/// Externally compiled body. Forwards to the linked implementation unchanged
///
/// # Safety
/// - `out`, `a` and `b` must be aligned to 16 bytes
/// - `a`, `b` must be readable and `out` writable for `num_points` elements
/// - `out` must not overlap `a` or `b`
#[inline]
pub unsafe fn i32_or_a16_orc(out: *mut i32, a: *const i32, b: *const i32, num_points: usize) {
    i32_or_a16_orc_impl(out, a, b, num_points as size_t);
}
