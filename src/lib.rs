#![deny(bare_trait_objects)]

//! Element-wise bitwise OR over `i32` sequences, implemented by several interchangeable bodies
//!
//! - A portable scalar body that defines the reference result
//! - SSE2, AVX2 and NEON bodies, each a vector main loop followed by a scalar tail
//! - An optional externally compiled body linked over FFI (`orc` feature)
//!
//! Every body shares the [`OrFn`] signature and is listed in [`KERNELS`] under a stable
//! [`KernelName`]. Choosing a body is left to the caller; [`Kernel::run`] validates the
//! preconditions for callers that want a safe entry point.
//!
//! ```
//! use vector_or::{AlignedVec, KERNELS};
//!
//! let a = AlignedVec::from_slice(&[0b0001, 0b0010, 0b0100, 0b1000, 0b1111]);
//! let b = AlignedVec::from_slice(&[0b1000, 0b0010, 0b0000, 0b0001, 0b0000]);
//! let mut out = AlignedVec::zeroed(5);
//!
//! KERNELS[0].run(&mut out, &a, &b).unwrap();
//! assert_eq!(&*out, &[0b1001, 0b0010, 0b0100, 0b1001, 0b1111]);
//! ```

#[macro_use]
mod macros;

mod aligned;
mod error;
mod name;
mod test;

pub mod kernels;

pub use aligned::{AlignedVec, ALIGNMENT};
pub use error::{KernelError, Result};
pub use kernels::{kernel, Backend, Kernel, OrFn, KERNELS};
pub use name::KernelName;
