use thiserror::Error;

use crate::kernels::Backend;

/// Errors reported by the checked call layer. The kernel bodies themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("length mismatch: out has {out} elements, a has {a}, b has {b}")]
    LengthMismatch { out: usize, a: usize, b: usize },

    #[error("{operand} at {addr:#x} is not aligned to {required} bytes")]
    Misaligned {
        operand: &'static str,
        addr: usize,
        required: usize,
    },

    #[error("backend {0} is not supported on this host")]
    Unsupported(Backend),

    #[error("invalid kernel name: {0}")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, KernelError>;
