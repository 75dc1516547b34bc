use std::fmt;
use std::ops::{Deref, DerefMut};
use std::slice;

/// Byte alignment required by the accelerated bodies
pub const ALIGNMENT: usize = 16;

const LANES: usize = ALIGNMENT / 4;

/// One register's worth of elements. Only exists to force the alignment of the backing storage
#[derive(Clone, Copy, Default)]
#[repr(C, align(16))]
struct Block([i32; LANES]);

/// Owned `i32` storage whose first element always starts on a 16 byte boundary
///
/// # Remarks
/// The backing storage is rounded up to a whole number of blocks; the padding is zeroed and
/// never exposed through the slice views
#[derive(Clone, Default)]
pub struct AlignedVec {
    blocks: Vec<Block>,
    len: usize
}

impl AlignedVec {
    /// Create a buffer of `len` zeroed elements
    pub fn zeroed(len: usize) -> Self {
        let blocks = (len + LANES - 1) / LANES;

        Self {
            blocks: vec![Block::default(); blocks],
            len
        }
    }

    /// Create a buffer holding a copy of `data`
    pub fn from_slice(data: &[i32]) -> Self {
        let mut result = Self::zeroed(data.len());
        result.copy_from_slice(data);

        result
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pointer to the first element. Aligned even when the buffer is empty
    #[inline]
    pub fn as_ptr(&self) -> *const i32 {
        self.blocks.as_ptr() as *const i32
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut i32 {
        self.blocks.as_mut_ptr() as *mut i32
    }
}

impl Deref for AlignedVec {
    type Target = [i32];

    #[inline]
    fn deref(&self) -> &[i32] {
        // Blocks are `repr(C)` arrays of i32 so the storage is a contiguous run of at least `len` elements
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }
}

impl DerefMut for AlignedVec {
    #[inline]
    fn deref_mut(&mut self) -> &mut [i32] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }
}

impl From<&[i32]> for AlignedVec {
    fn from(data: &[i32]) -> Self {
        Self::from_slice(data)
    }
}

impl From<Vec<i32>> for AlignedVec {
    fn from(data: Vec<i32>) -> Self {
        Self::from_slice(&data)
    }
}

impl PartialEq for AlignedVec {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl Eq for AlignedVec {}

impl fmt::Debug for AlignedVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Returns true if `ptr` sits on an `align` byte boundary
#[inline]
pub(crate) fn is_aligned<T>(ptr: *const T, align: usize) -> bool {
    (ptr as usize) % align == 0
}
