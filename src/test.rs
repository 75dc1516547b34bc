#![cfg(test)]

use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::aligned::AlignedVec;
use crate::kernels::{i32_or_a16_generic, OrFn};

const SEED: u64 = 0x0306_0803_0906_0401;

/// Written past the end of every output buffer to catch overruns
const SENTINEL: i32 = 0x5a5a_5a5a;

/// Number of sentinel elements following the output
const GUARD: usize = 8;

/// Generates `count` random elements covering the full bit range, reproducible for a given seed
pub(crate) fn generate_data(count: usize, seed: u64) -> AlignedVec {
    let mut rng = SmallRng::seed_from_u64(seed);
    let data: Vec<i32> = (0..count).map(|_| rng.gen()).collect();

    AlignedVec::from(data)
}

/// Compute the expected result using the language's own or
pub(crate) fn compute_result(a: &[i32], b: &[i32]) -> Vec<i32> {
    a.iter()
        .zip(b.iter())
        .map(|(a, b)| std::ops::BitOr::bitor(*a, *b))
        .collect()
}

/// Run `f` over `n` random elements twice and compare against the precomputed result
pub(crate) fn run_test(f: OrFn, n: usize) {
    let a = generate_data(n, SEED);
    let b = generate_data(n, SEED.wrapping_add(1));
    let e = compute_result(&a, &b);

    let mut out = AlignedVec::from(vec![SENTINEL; n + GUARD]);

    for pass in 0..2 {
        unsafe { f(out.as_mut_ptr(), a.as_ptr(), b.as_ptr(), n) };

        for (i, (found, expected)) in out[..n].iter().zip(e.iter()).enumerate() {
            assert_eq!(
                *found,
                *expected,
                "n = {}, pass {}: mismatch at {}. found {:#x}, expected {:#x}",
                n,
                pass,
                i,
                found,
                expected
            );
        }

        assert!(
            out[n..].iter().all(|x| *x == SENTINEL),
            "n = {}: wrote past the end of the output",
            n
        );
    }

    // Inputs are untouched
    assert_eq!(a, generate_data(n, SEED));
    assert_eq!(b, generate_data(n, SEED.wrapping_add(1)));
}

/// Compare the output of `f` with the portable body for `n` random elements
pub(crate) fn assert_matches_generic(f: OrFn, n: usize) {
    let a = generate_data(n, SEED ^ n as u64);
    let b = generate_data(n, !(SEED ^ n as u64));

    let mut expected = AlignedVec::zeroed(n);
    let mut found = AlignedVec::zeroed(n);

    unsafe {
        i32_or_a16_generic(expected.as_mut_ptr(), a.as_ptr(), b.as_ptr(), n);
        f(found.as_mut_ptr(), a.as_ptr(), b.as_ptr(), n);
    }

    assert_eq!(found, expected, "n = {}", n);
}

/// Call `f` with `a` offset by one element so it sits 4 bytes past a 16 byte boundary
pub(crate) fn call_misaligned(f: OrFn, n: usize) {
    let a = generate_data(n + 1, SEED);
    let b = generate_data(n, SEED.wrapping_add(1));
    let mut out = AlignedVec::zeroed(n);

    unsafe { f(out.as_mut_ptr(), a[1..].as_ptr(), b.as_ptr(), n) };
}
