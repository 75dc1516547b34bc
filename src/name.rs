use std::fmt;
use std::str::FromStr;

use crate::error::{KernelError, Result};
use crate::kernels::Backend;

/// A kernel symbol split into its parts: `<element>_<op>_a<alignment>_<backend>`
///
/// ```
/// use vector_or::{Backend, KernelName};
///
/// let name: KernelName = "i32_or_a16_sse".parse().unwrap();
/// assert_eq!(name.element, "i32");
/// assert_eq!(name.op, "or");
/// assert_eq!(name.alignment, 16);
/// assert_eq!(name.backend, Backend::Sse);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KernelName {
    /// Element type, `[iuf]<bits>`
    pub element: String,

    pub op: String,

    /// Required byte alignment of the buffers
    pub alignment: usize,

    pub backend: Backend
}

impl FromStr for KernelName {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || KernelError::InvalidName(s.to_string());

        let mut parts = s.splitn(4, '_');
        let element = parts.next().ok_or_else(invalid)?;
        let op = parts.next().ok_or_else(invalid)?;
        let alignment = parts.next().ok_or_else(invalid)?;
        let backend = parts.next().ok_or_else(invalid)?;

        if !is_element(element) || op.is_empty() || !op.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(invalid());
        }

        let alignment = alignment.strip_prefix('a')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|c| c.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .ok_or_else(invalid)?;

        let backend = backend.parse().map_err(|_| invalid())?;

        Ok(Self {
            element: element.to_string(),
            op: op.to_string(),
            alignment,
            backend
        })
    }
}

impl fmt::Display for KernelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_a{}_{}", self.element, self.op, self.alignment, self.backend)
    }
}

fn is_element(s: &str) -> bool {
    let mut chars = s.chars();

    match chars.next() {
        Some('i') | Some('u') | Some('f') => {},
        _ => return false
    }

    let bits = chars.as_str();
    !bits.is_empty() && bits.bytes().all(|c| c.is_ascii_digit())
}
