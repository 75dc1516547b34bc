//! Convenience macros to simplify backend cfg declarations

/// Items compiled only when the sse body is built
macro_rules! cfg_sse {
    ($($t:item)*) => {
        $(
            #[cfg(all(feature = "sse", any(target_arch = "x86", target_arch = "x86_64")))]
            $t
        )*
    };
}

/// Items compiled only when the avx2 body is built
macro_rules! cfg_avx {
    ($($t:item)*) => {
        $(
            #[cfg(all(feature = "avx", target_arch = "x86_64"))]
            $t
        )*
    };
}

/// Items compiled only when the neon body is built
macro_rules! cfg_neon {
    ($($t:item)*) => {
        $(
            #[cfg(all(feature = "neon", target_arch = "aarch64"))]
            $t
        )*
    };
}

/// Items compiled only when the external body is linked
macro_rules! cfg_orc {
    ($($t:item)*) => {
        $(
            #[cfg(feature = "orc")]
            $t
        )*
    };
}
