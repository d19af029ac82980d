//! Loading scalar floats into 4-lane SIMD vectors, and storing them back.
//!
//! [`SimdFloat4`] is the register-shaped value; its lanes are x, y, z, w.
//! The byte layout is whatever the target's backend uses, so the only way
//! in is through the constructors below and the only way out is through the
//! lane accessors and stores.
//!
//! ## Lane fill rules
//!
//! | loader          | x      | y      | z      | w      |
//! |-----------------|--------|--------|--------|--------|
//! | `splat(v)`      | v      | v      | v      | v      |
//! | `load1_ptr_u`   | p[0]   | p[0]   | p[0]   | p[0]   |
//! | `load_ptr_u`    | p[0]   | p[1]   | p[2]   | p[3]   |
//! | `load3_ptr_u`   | p[0]   | p[1]   | p[2]   | 0.0    |
//! | `load2_ptr_u`   | p[0]   | p[1]   | 0.0    | 0.0    |
//!
//! ## Unaligned memory
//!
//! The `_ptr_u` family never assumes alignment. Scalar data (struct fields,
//! arrays read from files) rarely sits on the 16-byte boundary an aligned
//! vector load needs, so every backend reads through an unaligned path.
//!
//! ## Bounds
//!
//! The `_ptr_u` functions are `unsafe` and unchecked. The safe constructors
//! (`from_array`, `from_slice`, `From<Float2>` ...) carry their length in the
//! type or check it.

use crate::backend::{Float4Ops, Native};
use crate::vec_float::{Float2, Float3, Float4};
use core::fmt::{Debug, Formatter};

/// A 4-lane f32 vector in a native SIMD register.
#[derive(Copy, Clone, Default)]
#[repr(transparent)]
pub struct SimdFloat4(pub(crate) Native);

impl Debug for SimdFloat4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let [x, y, z, w] = self.to_array();
        write!(f, "SimdFloat4({:?}, {:?}, {:?}, {:?})", x, y, z, w)
    }
}

impl SimdFloat4 {
    /// Number of lanes.
    pub const LANES: usize = 4;

    // ========================================================================
    // Immediate values
    // ========================================================================

    /// Loads `val` into every lane.
    #[inline(always)]
    pub fn splat(val: f32) -> Self {
        Self(Native::splat(val))
    }

    /// Loads `x`, `y`, `z`, `w` into the matching lanes.
    #[inline(always)]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(Native::new(x, y, z, w))
    }

    /// All lanes zero.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::splat(0.0)
    }

    // ========================================================================
    // Unchecked memory loads
    // ========================================================================

    /// Reads the float at `ptr` and loads it into every lane.
    ///
    /// Gives the same value as `SimdFloat4::splat(*ptr)`.
    ///
    /// # Safety
    /// `ptr` must be readable for 1 float. It does not need to be aligned.
    #[inline(always)]
    pub unsafe fn load1_ptr_u(ptr: *const f32) -> Self {
        Self(unsafe { Native::load1_ptr_u(ptr) })
    }

    /// Reads 4 consecutive floats at `ptr` into x, y, z, w.
    ///
    /// # Safety
    /// `ptr` must be readable for 4 floats. It does not need to be aligned.
    #[inline(always)]
    pub unsafe fn load_ptr_u(ptr: *const f32) -> Self {
        Self(unsafe { Native::load_ptr_u(ptr) })
    }

    /// Reads 2 consecutive floats at `ptr` into x, y. z and w are 0.0.
    ///
    /// # Safety
    /// `ptr` must be readable for 2 floats. It does not need to be aligned.
    #[inline(always)]
    pub unsafe fn load2_ptr_u(ptr: *const f32) -> Self {
        Self(unsafe { Native::load2_ptr_u(ptr) })
    }

    /// Reads 3 consecutive floats at `ptr` into x, y, z. w is 0.0.
    ///
    /// # Safety
    /// `ptr` must be readable for 3 floats. It does not need to be aligned.
    #[inline(always)]
    pub unsafe fn load3_ptr_u(ptr: *const f32) -> Self {
        Self(unsafe { Native::load3_ptr_u(ptr) })
    }

    // ========================================================================
    // Checked loads
    // ========================================================================

    /// Loads the 4 floats of `arr` into x, y, z, w.
    #[inline(always)]
    pub fn from_array(arr: &[f32; 4]) -> Self {
        // SAFETY: the array is 4 readable floats.
        unsafe { Self::load_ptr_u(arr.as_ptr()) }
    }

    /// Loads the first 4 floats of `slice` into x, y, z, w.
    ///
    /// # Panics
    /// If `slice` holds fewer than 4 floats.
    #[inline(always)]
    pub fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() >= Self::LANES);
        // SAFETY: length checked above.
        unsafe { Self::load_ptr_u(slice.as_ptr()) }
    }

    // ========================================================================
    // Lane access
    // ========================================================================

    /// Lanes in x, y, z, w order.
    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        self.0.to_array()
    }

    /// The x lane.
    #[inline(always)]
    pub fn x(self) -> f32 {
        self.to_array()[0]
    }

    /// The y lane.
    #[inline(always)]
    pub fn y(self) -> f32 {
        self.to_array()[1]
    }

    /// The z lane.
    #[inline(always)]
    pub fn z(self) -> f32 {
        self.to_array()[2]
    }

    /// The w lane.
    #[inline(always)]
    pub fn w(self) -> f32 {
        self.to_array()[3]
    }

    // ========================================================================
    // Unchecked memory stores
    // ========================================================================

    /// Writes x to `ptr`.
    ///
    /// # Safety
    /// `ptr` must be writable for 1 float. It does not need to be aligned.
    #[inline(always)]
    pub unsafe fn store1_ptr_u(self, ptr: *mut f32) {
        unsafe { self.0.store1_ptr_u(ptr) }
    }

    /// Writes x, y to `ptr`. The floats after them are left untouched.
    ///
    /// # Safety
    /// `ptr` must be writable for 2 floats. It does not need to be aligned.
    #[inline(always)]
    pub unsafe fn store2_ptr_u(self, ptr: *mut f32) {
        unsafe { self.0.store2_ptr_u(ptr) }
    }

    /// Writes x, y, z to `ptr`. The float after them is left untouched.
    ///
    /// # Safety
    /// `ptr` must be writable for 3 floats. It does not need to be aligned.
    #[inline(always)]
    pub unsafe fn store3_ptr_u(self, ptr: *mut f32) {
        unsafe { self.0.store3_ptr_u(ptr) }
    }

    /// Writes x, y, z, w to `ptr`.
    ///
    /// # Safety
    /// `ptr` must be writable for 4 floats. It does not need to be aligned.
    #[inline(always)]
    pub unsafe fn store_ptr_u(self, ptr: *mut f32) {
        unsafe { self.0.store_ptr_u(ptr) }
    }
}

// ============================================================================
// Scalar tuple conversions
// ============================================================================

impl From<&Float2> for SimdFloat4 {
    /// x, y from the tuple; z and w are 0.0.
    #[inline(always)]
    fn from(v: &Float2) -> Self {
        // SAFETY: Float2 is 2 contiguous floats.
        unsafe { Self::load2_ptr_u(v.as_ptr()) }
    }
}

impl From<&Float3> for SimdFloat4 {
    /// x, y, z from the tuple; w is 0.0.
    #[inline(always)]
    fn from(v: &Float3) -> Self {
        // SAFETY: Float3 is 3 contiguous floats.
        unsafe { Self::load3_ptr_u(v.as_ptr()) }
    }
}

impl From<&Float4> for SimdFloat4 {
    #[inline(always)]
    fn from(v: &Float4) -> Self {
        // SAFETY: Float4 is 4 contiguous floats.
        unsafe { Self::load_ptr_u(v.as_ptr()) }
    }
}

macro_rules! impl_by_value {
    ($($t:ty),+) => {$(
        impl From<$t> for SimdFloat4 {
            #[inline(always)]
            fn from(v: $t) -> Self {
                Self::from(&v)
            }
        }
    )+};
}

impl_by_value!(Float2, Float3, Float4);

impl From<SimdFloat4> for Float2 {
    /// Keeps x, y.
    #[inline(always)]
    fn from(v: SimdFloat4) -> Self {
        let mut out = Float2::default();
        // SAFETY: Float2 is 2 contiguous writable floats.
        unsafe { v.store2_ptr_u(out.as_mut_ptr()) };
        out
    }
}

impl From<SimdFloat4> for Float3 {
    /// Keeps x, y, z.
    #[inline(always)]
    fn from(v: SimdFloat4) -> Self {
        let mut out = Float3::default();
        // SAFETY: Float3 is 3 contiguous writable floats.
        unsafe { v.store3_ptr_u(out.as_mut_ptr()) };
        out
    }
}

impl From<SimdFloat4> for Float4 {
    #[inline(always)]
    fn from(v: SimdFloat4) -> Self {
        let mut out = Float4::default();
        // SAFETY: Float4 is 4 contiguous writable floats.
        unsafe { v.store_ptr_u(out.as_mut_ptr()) };
        out
    }
}
