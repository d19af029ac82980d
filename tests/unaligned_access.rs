//! Tests for loads and stores at every byte misalignment.
//!
//! Source and destination floats are placed at offsets 0..16 from a 16-byte
//! boundary inside a byte buffer, so most pointers handed to the `_ptr_u`
//! functions are not even `f32` aligned. Results must not depend on the
//! offset, and stores must leave the guard bytes around their target alone.

use simd_conv::SimdFloat4;

const GUARD: u8 = 0xAA;

#[repr(C, align(16))]
struct Aligned([u8; 64]);

impl Aligned {
    fn guarded() -> Self {
        Aligned([GUARD; 64])
    }

    fn put(&mut self, offset: usize, vals: &[f32]) {
        for (i, v) in vals.iter().enumerate() {
            let at = offset + 4 * i;
            self.0[at..at + 4].copy_from_slice(&v.to_ne_bytes());
        }
    }

    fn get(&self, offset: usize, count: usize) -> Vec<f32> {
        (0..count)
            .map(|i| {
                let at = offset + 4 * i;
                f32::from_ne_bytes(self.0[at..at + 4].try_into().unwrap())
            })
            .collect()
    }

    fn ptr(&self, offset: usize) -> *const f32 {
        unsafe { self.0.as_ptr().add(offset) as *const f32 }
    }

    fn mut_ptr(&mut self, offset: usize) -> *mut f32 {
        unsafe { self.0.as_mut_ptr().add(offset) as *mut f32 }
    }

    fn assert_guards(&self, offset: usize, written: usize) {
        for (i, b) in self.0.iter().enumerate() {
            if i < offset || i >= offset + 4 * written {
                assert_eq!(
                    *b, GUARD,
                    "Guard byte {} was overwritten (offset {}, {} floats written)",
                    i, offset, written
                );
            }
        }
    }
}

const SRC: [f32; 4] = [1.25, -2.5, 3.75, -4.0];

#[test]
fn load_is_alignment_independent() {
    for offset in 0..16 {
        let mut buf = Aligned::guarded();
        buf.put(offset, &SRC);
        let v = unsafe { SimdFloat4::load_ptr_u(buf.ptr(offset)) };
        assert_eq!(v.to_array(), SRC, "offset {}", offset);
    }
}

#[test]
fn load1_is_alignment_independent() {
    for offset in 0..16 {
        let mut buf = Aligned::guarded();
        buf.put(offset, &SRC[..1]);
        let v = unsafe { SimdFloat4::load1_ptr_u(buf.ptr(offset)) };
        assert_eq!(v.to_array(), [SRC[0]; 4], "offset {}", offset);
    }
}

#[test]
fn load2_is_alignment_independent_and_zero_fills() {
    for offset in 0..16 {
        let mut buf = Aligned::guarded();
        buf.put(offset, &SRC[..2]);
        let v = unsafe { SimdFloat4::load2_ptr_u(buf.ptr(offset)) };
        assert_eq!(v.to_array(), [SRC[0], SRC[1], 0.0, 0.0], "offset {}", offset);
    }
}

#[test]
fn load3_is_alignment_independent_and_zero_fills() {
    for offset in 0..16 {
        let mut buf = Aligned::guarded();
        buf.put(offset, &SRC[..3]);
        let v = unsafe { SimdFloat4::load3_ptr_u(buf.ptr(offset)) };
        assert_eq!(v.to_array(), [SRC[0], SRC[1], SRC[2], 0.0], "offset {}", offset);
    }
}

#[test]
fn short_loads_ignore_trailing_memory() {
    // The guard bytes after the 2 or 3 loaded floats must not leak into z/w.
    let mut buf = Aligned::guarded();
    buf.put(4, &[7.0, 8.0, 9.0, 10.0]);
    let v2 = unsafe { SimdFloat4::load2_ptr_u(buf.ptr(4)) };
    let v3 = unsafe { SimdFloat4::load3_ptr_u(buf.ptr(4)) };
    assert_eq!(v2.to_array(), [7.0, 8.0, 0.0, 0.0]);
    assert_eq!(v3.to_array(), [7.0, 8.0, 9.0, 0.0]);
}

#[test]
fn stores_write_exactly_their_width() {
    let v = SimdFloat4::from_array(&SRC);
    let stores: [(usize, unsafe fn(SimdFloat4, *mut f32)); 4] = [
        (1, SimdFloat4::store1_ptr_u),
        (2, SimdFloat4::store2_ptr_u),
        (3, SimdFloat4::store3_ptr_u),
        (4, SimdFloat4::store_ptr_u),
    ];
    for (width, store) in stores {
        for offset in 0..16 {
            let mut buf = Aligned::guarded();
            unsafe { store(v, buf.mut_ptr(offset)) };
            assert_eq!(buf.get(offset, width), &SRC[..width], "width {} offset {}", width, offset);
            buf.assert_guards(offset, width);
        }
    }
}

#[test]
fn store_inverts_load() {
    for offset in 0..16 {
        let mut src = Aligned::guarded();
        src.put(offset, &SRC);
        let v = unsafe { SimdFloat4::load_ptr_u(src.ptr(offset)) };

        let mut dst = Aligned::guarded();
        let out_offset = 15 - offset;
        unsafe { v.store_ptr_u(dst.mut_ptr(out_offset)) };
        assert_eq!(dst.get(out_offset, 4), SRC);
    }
}
