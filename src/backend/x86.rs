//! x86_64 backend (SSE2, 4 lanes).

use super::Float4Ops;
use core::arch::x86_64::*;
use core::fmt::{Debug, Formatter};

/// 4-lane f32 vector held in an SSE `__m128` register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x4(__m128);

impl Default for F32x4 {
    fn default() -> Self {
        unsafe { Self(_mm_setzero_ps()) }
    }
}

impl Debug for F32x4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "F32x4({:?})", self.to_array())
    }
}

impl Float4Ops for F32x4 {
    #[inline(always)]
    fn splat(val: f32) -> Self {
        unsafe { Self(_mm_set1_ps(val)) }
    }

    #[inline(always)]
    fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        // _mm_setr_ps takes lanes in memory order, _mm_set_ps would reverse them
        unsafe { Self(_mm_setr_ps(x, y, z, w)) }
    }

    #[inline(always)]
    unsafe fn load1_ptr_u(ptr: *const f32) -> Self {
        // SAFETY: caller guarantees 1 readable float; read_unaligned drops the
        // alignment requirement _mm_load1_ps would put on `ptr`.
        unsafe { Self(_mm_set1_ps(ptr.read_unaligned())) }
    }

    #[inline(always)]
    unsafe fn load_ptr_u(ptr: *const f32) -> Self {
        // SAFETY: caller guarantees 4 readable floats; loadu has no alignment
        // requirement.
        unsafe { Self(_mm_loadu_ps(ptr)) }
    }

    #[inline(always)]
    unsafe fn load2_ptr_u(ptr: *const f32) -> Self {
        // SAFETY: caller guarantees 2 readable floats. movq reads 8 bytes
        // without alignment and zeroes the upper 64 bits.
        unsafe { Self(_mm_castsi128_ps(_mm_loadl_epi64(ptr as *const __m128i))) }
    }

    #[inline(always)]
    unsafe fn load3_ptr_u(ptr: *const f32) -> Self {
        // SAFETY: caller guarantees 3 readable floats.
        unsafe {
            let xy = _mm_castsi128_ps(_mm_loadl_epi64(ptr as *const __m128i));
            let z0 = _mm_set_ss(ptr.add(2).read_unaligned());
            Self(_mm_movelh_ps(xy, z0))
        }
    }

    #[inline(always)]
    unsafe fn store_ptr_u(self, ptr: *mut f32) {
        // SAFETY: caller guarantees 4 writable floats.
        unsafe { _mm_storeu_ps(ptr, self.0) }
    }

    #[inline(always)]
    unsafe fn store1_ptr_u(self, ptr: *mut f32) {
        // SAFETY: caller guarantees 1 writable float.
        unsafe { ptr.write_unaligned(_mm_cvtss_f32(self.0)) }
    }

    #[inline(always)]
    unsafe fn store2_ptr_u(self, ptr: *mut f32) {
        // SAFETY: caller guarantees 2 writable floats. movq writes exactly
        // the low 8 bytes.
        unsafe { _mm_storel_epi64(ptr as *mut __m128i, _mm_castps_si128(self.0)) }
    }

    #[inline(always)]
    unsafe fn store3_ptr_u(self, ptr: *mut f32) {
        // SAFETY: caller guarantees 3 writable floats.
        unsafe {
            _mm_storel_epi64(ptr as *mut __m128i, _mm_castps_si128(self.0));
            ptr.add(2)
                .write_unaligned(_mm_cvtss_f32(_mm_movehl_ps(self.0, self.0)));
        }
    }

    #[inline(always)]
    fn to_array(self) -> [f32; 4] {
        let mut arr = [0.0f32; 4];
        unsafe { _mm_storeu_ps(arr.as_mut_ptr(), self.0) };
        arr
    }

    #[inline(always)]
    fn transpose4x4(cols: [Self; 4]) -> [Self; 4] {
        let [c0, c1, c2, c3] = cols;
        unsafe {
            // [c0.x, c1.x, c0.y, c1.y] / [c2.x, c3.x, c2.y, c3.y]
            let xy01 = _mm_unpacklo_ps(c0.0, c1.0);
            let xy23 = _mm_unpacklo_ps(c2.0, c3.0);
            // [c0.z, c1.z, c0.w, c1.w] / [c2.z, c3.z, c2.w, c3.w]
            let zw01 = _mm_unpackhi_ps(c0.0, c1.0);
            let zw23 = _mm_unpackhi_ps(c2.0, c3.0);
            [
                Self(_mm_movelh_ps(xy01, xy23)),
                Self(_mm_movehl_ps(xy23, xy01)),
                Self(_mm_movelh_ps(zw01, zw23)),
                Self(_mm_movehl_ps(zw23, zw01)),
            ]
        }
    }
}
