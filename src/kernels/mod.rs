//! This module exposes every body of the `i32` OR kernel behind one signature. Which bodies exist
//! depends on the target and the enabled features; choosing between them is left to the caller.
//!
//! # Contract
//! For every body, after `body(out, a, b, n)` returns, `out[i] == a[i] | b[i]` for all `i < n`.
//! Nothing outside `out[0..n)` is written and nothing outside `a[0..n)`, `b[0..n)` is read.
//! The bodies report no errors: misaligned, overlapping or short buffers are undefined behavior.
//! [`Kernel::run`] is the checked entry point for callers that cannot uphold this themselves.

mod generic;

cfg_sse! {
    mod sse;
    pub use self::sse::i32_or_a16_sse;
}

cfg_avx! {
    mod avx;
    pub use self::avx::i32_or_a16_avx2;
}

cfg_neon! {
    mod neon;
    pub use self::neon::i32_or_a16_neon;
}

cfg_orc! {
    mod orc;
    pub use self::orc::i32_or_a16_orc;
}

pub use self::generic::i32_or_a16_generic;

use std::fmt;
use std::mem;
use std::str::FromStr;

use log::{debug, trace, warn};

use crate::aligned::{is_aligned, ALIGNMENT};
use crate::error::{KernelError, Result};

/// Signature shared by every body of the kernel
///
/// # Safety
/// See the module level contract
pub type OrFn = unsafe fn(out: *mut i32, a: *const i32, b: *const i32, num_points: usize);

/// The execution strategy behind a body
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Portable scalar loop
    Generic,

    /// 128 bit SSE2 registers
    Sse,

    /// 256 bit AVX2 registers
    Avx2,

    /// 128 bit NEON registers
    Neon,

    /// Externally compiled and linked implementation
    Orc
}

impl Backend {
    pub const ALL: [Backend; 5] = [
        Backend::Generic,
        Backend::Sse,
        Backend::Avx2,
        Backend::Neon,
        Backend::Orc
    ];

    /// Name used in kernel symbols
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Generic => "generic",
            Backend::Sse => "sse",
            Backend::Avx2 => "avx2",
            Backend::Neon => "neon",
            Backend::Orc => "orc"
        }
    }

    /// Returns true if a body for this backend is compiled in and the host can execute it
    ///
    /// # Remarks
    /// This only reports capability. Picking a backend is up to the caller
    pub fn is_supported(self) -> bool {
        let supported = match self {
            Backend::Generic => true,
            Backend::Sse => sse_supported(),
            Backend::Avx2 => avx2_supported(),
            Backend::Neon => cfg!(all(feature = "neon", target_arch = "aarch64")),
            Backend::Orc => cfg!(feature = "orc")
        };

        if !supported {
            debug!("backend {} unsupported on this host", self);
        }

        supported
    }
}

#[cfg(all(feature = "sse", any(target_arch = "x86", target_arch = "x86_64")))]
fn sse_supported() -> bool {
    is_x86_feature_detected!("sse2")
}

#[cfg(not(all(feature = "sse", any(target_arch = "x86", target_arch = "x86_64"))))]
fn sse_supported() -> bool {
    false
}

#[cfg(all(feature = "avx", target_arch = "x86_64"))]
fn avx2_supported() -> bool {
    is_x86_feature_detected!("avx2")
}

#[cfg(not(all(feature = "avx", target_arch = "x86_64")))]
fn avx2_supported() -> bool {
    false
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self> {
        Backend::ALL.iter()
            .copied()
            .find(|backend| backend.as_str() == s)
            .ok_or_else(|| KernelError::InvalidName(s.to_string()))
    }
}

/// Descriptor for one compiled body
#[derive(Clone, Copy, Debug)]
pub struct Kernel {
    /// Stable symbol name, see [`KernelName`](crate::KernelName)
    pub name: &'static str,

    pub backend: Backend,

    /// Elements processed per main loop iteration
    pub lanes: usize,

    /// Byte alignment the body itself requires of all three buffers. The portable body only
    /// needs natural `i32` alignment even though it carries the family's `a16` name
    pub alignment: usize,

    pub body: OrFn
}

/// Every body compiled into this build, portable body first
pub static KERNELS: &[Kernel] = &[
    Kernel {
        name: "i32_or_a16_generic",
        backend: Backend::Generic,
        lanes: 1,
        alignment: mem::align_of::<i32>(),
        body: i32_or_a16_generic
    },
    #[cfg(all(feature = "sse", any(target_arch = "x86", target_arch = "x86_64")))]
    Kernel {
        name: "i32_or_a16_sse",
        backend: Backend::Sse,
        lanes: 4,
        alignment: ALIGNMENT,
        body: i32_or_a16_sse
    },
    #[cfg(all(feature = "avx", target_arch = "x86_64"))]
    Kernel {
        name: "i32_or_a16_avx2",
        backend: Backend::Avx2,
        lanes: 8,
        alignment: ALIGNMENT,
        body: i32_or_a16_avx2
    },
    #[cfg(all(feature = "neon", target_arch = "aarch64"))]
    Kernel {
        name: "i32_or_a16_neon",
        backend: Backend::Neon,
        lanes: 4,
        alignment: ALIGNMENT,
        body: i32_or_a16_neon
    },
    #[cfg(feature = "orc")]
    Kernel {
        name: "i32_or_a16_orc",
        backend: Backend::Orc,
        lanes: 1,
        alignment: ALIGNMENT,
        body: i32_or_a16_orc
    }
];

/// Look up a compiled body by its symbol name
pub fn kernel(name: &str) -> Option<&'static Kernel> {
    KERNELS.iter().find(|k| k.name == name)
}

impl Kernel {
    /// Iterate over the compiled bodies the host can execute
    pub fn supported() -> impl Iterator<Item = &'static Kernel> {
        KERNELS.iter().filter(|k| k.backend.is_supported())
    }

    /// Checked call. Validates lengths, host support and alignment before running the body
    ///
    /// # Remarks
    /// Empty inputs are always accepted since the body touches no memory
    pub fn run(&self, out: &mut [i32], a: &[i32], b: &[i32]) -> Result<()> {
        let num_points = out.len();

        if a.len() != num_points || b.len() != num_points {
            let err = KernelError::LengthMismatch { out: num_points, a: a.len(), b: b.len() };
            warn!("{} rejected: {}", self.name, err);

            return Err(err);
        }

        if !self.backend.is_supported() {
            warn!("{} rejected: backend {} unsupported", self.name, self.backend);

            return Err(KernelError::Unsupported(self.backend));
        }

        if num_points > 0 {
            let operands = [
                ("out", out.as_ptr()),
                ("a", a.as_ptr()),
                ("b", b.as_ptr())
            ];

            for (operand, ptr) in operands.iter() {
                if !is_aligned(*ptr, self.alignment) {
                    let err = KernelError::Misaligned {
                        operand: *operand,
                        addr: *ptr as usize,
                        required: self.alignment
                    };
                    warn!("{} rejected: {}", self.name, err);

                    return Err(err);
                }
            }
        }

        trace!("I32_OR DISPATCH: kernel={} num_points={}", self.name, num_points);

        // Lengths, alignment and host support are checked above; &mut guarantees no overlap
        unsafe { (self.body)(out.as_mut_ptr(), a.as_ptr(), b.as_ptr(), num_points) };

        Ok(())
    }
}
