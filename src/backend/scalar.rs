//! Scalar backend (`[f32; 4]`, no intrinsics).
//!
//! Used on targets without a supported vector unit, and as the reference the
//! native backends are tested against.

use super::Float4Ops;

/// Four floats in a 16-byte aligned slot, the same footprint as a register.
#[derive(Copy, Clone, Debug, Default)]
#[repr(C, align(16))]
pub struct F32x4(pub [f32; 4]);

impl Float4Ops for F32x4 {
    #[inline(always)]
    fn splat(val: f32) -> Self {
        F32x4([val; 4])
    }

    #[inline(always)]
    fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        F32x4([x, y, z, w])
    }

    #[inline(always)]
    unsafe fn load1_ptr_u(ptr: *const f32) -> Self {
        // SAFETY: caller guarantees 1 readable float.
        Self::splat(unsafe { ptr.read_unaligned() })
    }

    #[inline(always)]
    unsafe fn load_ptr_u(ptr: *const f32) -> Self {
        // SAFETY: caller guarantees 4 readable floats.
        F32x4(unsafe { (ptr as *const [f32; 4]).read_unaligned() })
    }

    #[inline(always)]
    unsafe fn load2_ptr_u(ptr: *const f32) -> Self {
        // SAFETY: caller guarantees 2 readable floats.
        let [x, y] = unsafe { (ptr as *const [f32; 2]).read_unaligned() };
        F32x4([x, y, 0.0, 0.0])
    }

    #[inline(always)]
    unsafe fn load3_ptr_u(ptr: *const f32) -> Self {
        // SAFETY: caller guarantees 3 readable floats.
        let [x, y, z] = unsafe { (ptr as *const [f32; 3]).read_unaligned() };
        F32x4([x, y, z, 0.0])
    }

    #[inline(always)]
    unsafe fn store_ptr_u(self, ptr: *mut f32) {
        // SAFETY: caller guarantees 4 writable floats.
        unsafe { (ptr as *mut [f32; 4]).write_unaligned(self.0) }
    }

    #[inline(always)]
    unsafe fn store1_ptr_u(self, ptr: *mut f32) {
        // SAFETY: caller guarantees 1 writable float.
        unsafe { ptr.write_unaligned(self.0[0]) }
    }

    #[inline(always)]
    unsafe fn store2_ptr_u(self, ptr: *mut f32) {
        let [x, y, _, _] = self.0;
        // SAFETY: caller guarantees 2 writable floats.
        unsafe { (ptr as *mut [f32; 2]).write_unaligned([x, y]) }
    }

    #[inline(always)]
    unsafe fn store3_ptr_u(self, ptr: *mut f32) {
        let [x, y, z, _] = self.0;
        // SAFETY: caller guarantees 3 writable floats.
        unsafe { (ptr as *mut [f32; 3]).write_unaligned([x, y, z]) }
    }

    #[inline(always)]
    fn to_array(self) -> [f32; 4] {
        self.0
    }

    #[inline(always)]
    fn transpose4x4(cols: [Self; 4]) -> [Self; 4] {
        let m = cols.map(|c| c.0);
        [0usize, 1, 2, 3].map(|i| F32x4([m[0][i], m[1][i], m[2][i], m[3][i]]))
    }
}
