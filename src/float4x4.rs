//! 4x4 matrices built from four SIMD columns.
//!
//! A [`Float4x4`] is column-major: `cols[i]` holds the i-th column of the
//! matrix. Loading a flat buffer therefore reads column 0 from floats 0..4,
//! column 1 from 4..8 and so on. A buffer that actually holds rows comes
//! out transposed, and [`Float4x4::transpose`] turns it back into the
//! matrix it describes.

use crate::backend::{Float4Ops, Native};
use crate::simd_float4::SimdFloat4;
use serde::{Deserialize, Serialize};

/// Storage convention of a flat 16-float matrix buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixLayout {
    /// Floats `4*i .. 4*i + 4` are column `i`.
    #[default]
    ColumnMajor,
    /// Floats `4*i .. 4*i + 4` are row `i`.
    RowMajor,
}

/// A column-major 4x4 matrix of SIMD columns.
#[derive(Copy, Clone, Debug, Default)]
pub struct Float4x4 {
    /// Columns 0 to 3.
    pub cols: [SimdFloat4; 4],
}

impl Float4x4 {
    /// Builds a matrix whose column `i` is `ci`. Values are taken as-is.
    #[inline(always)]
    pub fn from_columns(c0: SimdFloat4, c1: SimdFloat4, c2: SimdFloat4, c3: SimdFloat4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Loads 16 column-major floats starting at `ptr`.
    ///
    /// Column `i` receives floats `4*i .. 4*i + 4`, in increasing offset
    /// order.
    ///
    /// # Safety
    /// `ptr` must be readable for 16 floats. It does not need to be aligned.
    #[inline(always)]
    pub unsafe fn load_ptr_u(ptr: *const f32) -> Self {
        unsafe {
            Self::from_columns(
                SimdFloat4::load_ptr_u(ptr),
                SimdFloat4::load_ptr_u(ptr.add(4)),
                SimdFloat4::load_ptr_u(ptr.add(8)),
                SimdFloat4::load_ptr_u(ptr.add(12)),
            )
        }
    }

    /// Loads a column-major buffer.
    #[inline(always)]
    pub fn from_cols_array(af: &[f32; 16]) -> Self {
        // SAFETY: the array is 16 readable floats.
        unsafe { Self::load_ptr_u(af.as_ptr()) }
    }

    /// Loads a row-major buffer: a column load followed by a transpose.
    #[inline(always)]
    pub fn from_rows_array(af: &[f32; 16]) -> Self {
        Self::from_cols_array(af).transpose()
    }

    /// Loads a buffer stored in `layout`.
    #[inline(always)]
    pub fn from_array(af: &[f32; 16], layout: MatrixLayout) -> Self {
        match layout {
            MatrixLayout::ColumnMajor => Self::from_cols_array(af),
            MatrixLayout::RowMajor => Self::from_rows_array(af),
        }
    }

    /// Returns the transpose: output column `i` lane `j` is column `j`
    /// lane `i` of `self`.
    ///
    /// Works on all four columns at once with register shuffles.
    #[inline(always)]
    pub fn transpose(&self) -> Self {
        let t = Native::transpose4x4(self.cols.map(|c| c.0));
        Self {
            cols: t.map(SimdFloat4),
        }
    }

    /// Writes the 16 floats column-major starting at `ptr`.
    ///
    /// # Safety
    /// `ptr` must be writable for 16 floats. It does not need to be aligned.
    #[inline(always)]
    pub unsafe fn store_ptr_u(&self, ptr: *mut f32) {
        for (i, col) in self.cols.iter().enumerate() {
            unsafe { col.store_ptr_u(ptr.add(4 * i)) };
        }
    }

    /// Column-major floats.
    #[inline(always)]
    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut out = [0.0f32; 16];
        // SAFETY: `out` is 16 writable floats.
        unsafe { self.store_ptr_u(out.as_mut_ptr()) };
        out
    }

    /// Row-major floats.
    #[inline(always)]
    pub fn to_rows_array(&self) -> [f32; 16] {
        self.transpose().to_cols_array()
    }

    /// Element at `col`, `row`.
    ///
    /// # Panics
    /// If either index is 4 or more.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.cols[col].to_array()[row]
    }
}

/// Free-function form of [`Float4x4::transpose`].
#[inline(always)]
pub fn transpose(m: &Float4x4) -> Float4x4 {
    m.transpose()
}
