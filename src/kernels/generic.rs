/// Portable body. Ors one element at a time and defines the reference result for every other body
///
/// # Safety
/// - `a`, `b` must be readable and `out` writable for `num_points` elements
/// - `out` must not overlap `a` or `b`
pub unsafe fn i32_or_a16_generic(out: *mut i32, a: *const i32, b: *const i32, num_points: usize) {
    debug_assert!(num_points == 0 || !(out.is_null() || a.is_null() || b.is_null()));

    for i in 0..num_points {
        *(out.add(i)) = *(a.add(i)) | *(b.add(i));
    }
}
