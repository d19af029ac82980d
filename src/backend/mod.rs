//! Platform-specific 4-lane f32 backends.
//!
//! Each backend wraps the native 128-bit register of its target and
//! implements [`Float4Ops`]. The backend used by [`SimdFloat4`] is picked at
//! compile time through [`Native`]:
//!
//! - `x86_64`: SSE2 `__m128` (SSE2 is part of the x86_64 baseline).
//! - `aarch64`: NEON `float32x4_t`.
//! - anything else: a 16-byte aligned `[f32; 4]`.
//!
//! The scalar backend is always compiled so the native backends can be
//! checked against it.
//!
//! [`SimdFloat4`]: crate::SimdFloat4

use core::fmt::Debug;

#[cfg(target_arch = "x86_64")]
pub mod x86;

#[cfg(target_arch = "aarch64")]
pub mod arm;

pub mod scalar;

/// The register type for the current target.
#[cfg(target_arch = "x86_64")]
pub type Native = x86::F32x4;

/// The register type for the current target.
#[cfg(target_arch = "aarch64")]
pub type Native = arm::F32x4;

/// The register type for the current target.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub type Native = scalar::F32x4;

/// Lane-level operations every backend provides.
///
/// Lanes are named x, y, z, w in that order. Every operation is bit-exact:
/// values are moved, never converted, so NaN payloads and signed zeros come
/// out where they went in.
///
/// # Safety of the `*_ptr_u` functions
///
/// The pointer never needs to be aligned, not even to `align_of::<f32>()`.
/// Implementations must read and write through an unaligned access path.
/// No bounds checking is done: the caller guarantees the pointer is valid
/// for the number of floats the function names.
pub trait Float4Ops: Copy + Clone + Debug + Default + Send + Sync {
    /// Broadcasts `val` to all four lanes.
    fn splat(val: f32) -> Self;

    /// Sets each lane from the matching argument.
    fn new(x: f32, y: f32, z: f32, w: f32) -> Self;

    /// Reads one float and broadcasts it to all four lanes.
    ///
    /// # Safety
    /// `ptr` must be readable for 1 float.
    unsafe fn load1_ptr_u(ptr: *const f32) -> Self;

    /// Reads 4 floats into x, y, z, w.
    ///
    /// # Safety
    /// `ptr` must be readable for 4 floats.
    unsafe fn load_ptr_u(ptr: *const f32) -> Self;

    /// Reads 2 floats into x, y. z and w are set to 0.
    ///
    /// # Safety
    /// `ptr` must be readable for 2 floats.
    unsafe fn load2_ptr_u(ptr: *const f32) -> Self;

    /// Reads 3 floats into x, y, z. w is set to 0.
    ///
    /// # Safety
    /// `ptr` must be readable for 3 floats.
    unsafe fn load3_ptr_u(ptr: *const f32) -> Self;

    /// Writes x, y, z, w.
    ///
    /// # Safety
    /// `ptr` must be writable for 4 floats.
    unsafe fn store_ptr_u(self, ptr: *mut f32);

    /// Writes x.
    ///
    /// # Safety
    /// `ptr` must be writable for 1 float.
    unsafe fn store1_ptr_u(self, ptr: *mut f32);

    /// Writes x, y.
    ///
    /// # Safety
    /// `ptr` must be writable for 2 floats.
    unsafe fn store2_ptr_u(self, ptr: *mut f32);

    /// Writes x, y, z.
    ///
    /// # Safety
    /// `ptr` must be writable for 3 floats.
    unsafe fn store3_ptr_u(self, ptr: *mut f32);

    /// Copies the lanes out in x, y, z, w order.
    fn to_array(self) -> [f32; 4];

    /// Transposes four columns: output `i` lane `j` is input `j` lane `i`.
    fn transpose4x4(cols: [Self; 4]) -> [Self; 4];
}
