//! ARM NEON backend (4 lanes for f32).
//!
//! AArch64 tolerates unaligned vector loads in hardware, but `vld1q_f32`
//! still takes a `*const f32` that Rust assumes is `f32`-aligned. Pointer
//! loads therefore go through `read_unaligned` into a stack array first.

use super::Float4Ops;
use core::arch::aarch64::*;
use core::fmt::{Debug, Formatter};

/// 4-lane f32 vector held in a NEON `float32x4_t` register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x4(float32x4_t);

impl Default for F32x4 {
    fn default() -> Self {
        unsafe { Self(vdupq_n_f32(0.0)) }
    }
}

impl Debug for F32x4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "F32x4({:?})", self.to_array())
    }
}

impl F32x4 {
    #[inline(always)]
    fn from_array(arr: [f32; 4]) -> Self {
        // SAFETY: `arr` is a live, aligned stack array of 4 floats.
        unsafe { Self(vld1q_f32(arr.as_ptr())) }
    }
}

impl Float4Ops for F32x4 {
    #[inline(always)]
    fn splat(val: f32) -> Self {
        // SAFETY: vdupq_n_f32 is always safe
        unsafe { Self(vdupq_n_f32(val)) }
    }

    #[inline(always)]
    fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_array([x, y, z, w])
    }

    #[inline(always)]
    unsafe fn load1_ptr_u(ptr: *const f32) -> Self {
        // SAFETY: caller guarantees 1 readable float.
        unsafe { Self(vdupq_n_f32(ptr.read_unaligned())) }
    }

    #[inline(always)]
    unsafe fn load_ptr_u(ptr: *const f32) -> Self {
        // SAFETY: caller guarantees 4 readable floats.
        Self::from_array(unsafe { (ptr as *const [f32; 4]).read_unaligned() })
    }

    #[inline(always)]
    unsafe fn load2_ptr_u(ptr: *const f32) -> Self {
        // SAFETY: caller guarantees 2 readable floats.
        let [x, y] = unsafe { (ptr as *const [f32; 2]).read_unaligned() };
        unsafe { Self(vcombine_f32(vld1_f32([x, y].as_ptr()), vdup_n_f32(0.0))) }
    }

    #[inline(always)]
    unsafe fn load3_ptr_u(ptr: *const f32) -> Self {
        // SAFETY: caller guarantees 3 readable floats.
        let [x, y, z] = unsafe { (ptr as *const [f32; 3]).read_unaligned() };
        Self::from_array([x, y, z, 0.0])
    }

    #[inline(always)]
    unsafe fn store_ptr_u(self, ptr: *mut f32) {
        // SAFETY: caller guarantees 4 writable floats.
        unsafe { (ptr as *mut [f32; 4]).write_unaligned(self.to_array()) }
    }

    #[inline(always)]
    unsafe fn store1_ptr_u(self, ptr: *mut f32) {
        // SAFETY: caller guarantees 1 writable float.
        unsafe { ptr.write_unaligned(self.to_array()[0]) }
    }

    #[inline(always)]
    unsafe fn store2_ptr_u(self, ptr: *mut f32) {
        let [x, y, _, _] = self.to_array();
        // SAFETY: caller guarantees 2 writable floats.
        unsafe { (ptr as *mut [f32; 2]).write_unaligned([x, y]) }
    }

    #[inline(always)]
    unsafe fn store3_ptr_u(self, ptr: *mut f32) {
        let [x, y, z, _] = self.to_array();
        // SAFETY: caller guarantees 3 writable floats.
        unsafe { (ptr as *mut [f32; 3]).write_unaligned([x, y, z]) }
    }

    #[inline(always)]
    fn to_array(self) -> [f32; 4] {
        let mut arr = [0.0f32; 4];
        unsafe { vst1q_f32(arr.as_mut_ptr(), self.0) };
        arr
    }

    #[inline(always)]
    fn transpose4x4(cols: [Self; 4]) -> [Self; 4] {
        let [c0, c1, c2, c3] = cols;
        unsafe {
            // [c0.x, c2.x, c0.y, c2.y] / [c1.x, c3.x, c1.y, c3.y]
            let xy02 = vzip1q_f32(c0.0, c2.0);
            let xy13 = vzip1q_f32(c1.0, c3.0);
            // [c0.z, c2.z, c0.w, c2.w] / [c1.z, c3.z, c1.w, c3.w]
            let zw02 = vzip2q_f32(c0.0, c2.0);
            let zw13 = vzip2q_f32(c1.0, c3.0);
            [
                Self(vzip1q_f32(xy02, xy13)),
                Self(vzip2q_f32(xy02, xy13)),
                Self(vzip1q_f32(zw02, zw13)),
                Self(vzip2q_f32(zw02, zw13)),
            ]
        }
    }
}
