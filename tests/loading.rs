use simd_conv::{Float2, Float3, Float4, SimdFloat4};

fn bits(v: SimdFloat4) -> [u32; 4] {
    v.to_array().map(f32::to_bits)
}

/// A spread of f32 bit patterns: specials, subnormals and a stride through
/// the whole 32-bit space.
fn sample_floats() -> Vec<f32> {
    let mut out = vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        46.0,
        f32::MIN,
        f32::MAX,
        f32::MIN_POSITIVE,
        f32::EPSILON,
        f32::from_bits(1), // smallest subnormal
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
    ];
    out.extend((0..64u32).map(|i| f32::from_bits(i.wrapping_mul(0x0402_1A7B) ^ 0x3F80_0000)));
    out
}

#[test]
fn splat_sets_every_lane_bit_exact() {
    for v in sample_floats() {
        assert_eq!(bits(SimdFloat4::splat(v)), [v.to_bits(); 4], "{:?}", v);
    }
}

#[test]
fn new_sets_lanes_in_order_bit_exact() {
    let samples = sample_floats();
    for w in samples.windows(4) {
        let v = SimdFloat4::new(w[0], w[1], w[2], w[3]);
        assert_eq!(bits(v), [w[0], w[1], w[2], w[3]].map(f32::to_bits));
    }
}

#[test]
fn load1_equals_splat_of_pointee() {
    for v in sample_floats() {
        let loaded = unsafe { SimdFloat4::load1_ptr_u(&v) };
        assert_eq!(bits(loaded), bits(SimdFloat4::splat(v)));
    }
}

#[test]
fn load2_sets_xy_and_zeroes_zw() {
    let samples = sample_floats();
    for w in samples.windows(2) {
        let pair = [w[0], w[1]];
        let v = unsafe { SimdFloat4::load2_ptr_u(pair.as_ptr()) };
        assert_eq!(bits(v), [w[0].to_bits(), w[1].to_bits(), 0, 0]);
    }
}

#[test]
fn load3_sets_xyz_and_zeroes_w() {
    let samples = sample_floats();
    for w in samples.windows(3) {
        let triple = [w[0], w[1], w[2]];
        let v = unsafe { SimdFloat4::load3_ptr_u(triple.as_ptr()) };
        assert_eq!(bits(v), [w[0].to_bits(), w[1].to_bits(), w[2].to_bits(), 0]);
    }
}

#[test]
fn tuple_conversions_follow_pointer_loads() {
    let f2 = Float2::new(0.0, 1.0);
    let f3 = Float3::new(0.0, 1.0, 2.0);
    let f4 = Float4::new(0.0, 1.0, 2.0, 3.0);
    unsafe {
        assert_eq!(bits(SimdFloat4::from(f2)), bits(SimdFloat4::load2_ptr_u(f2.as_ptr())));
        assert_eq!(bits(SimdFloat4::from(f3)), bits(SimdFloat4::load3_ptr_u(f3.as_ptr())));
        assert_eq!(bits(SimdFloat4::from(f4)), bits(SimdFloat4::load_ptr_u(f4.as_ptr())));
    }
    assert_eq!(SimdFloat4::from(f2).to_array(), [0.0, 1.0, 0.0, 0.0]);
}

#[test]
fn non_finite_values_keep_their_lane() {
    let v = SimdFloat4::new(f32::NAN, f32::INFINITY, 1.0, f32::NEG_INFINITY);
    let [x, y, z, w] = v.to_array();
    assert!(x.is_nan());
    assert_eq!(y, f32::INFINITY);
    assert_eq!(z, 1.0);
    assert_eq!(w, f32::NEG_INFINITY);
}

#[test]
fn nan_payload_survives_load_and_store() {
    let payload = f32::from_bits(0x7FC0_1234);
    let src = [payload, -payload, 0.0, 1.0];
    let v = SimdFloat4::from_array(&src);
    let mut out = [0.0f32; 4];
    unsafe { v.store_ptr_u(out.as_mut_ptr()) };
    assert_eq!(out.map(f32::to_bits), src.map(f32::to_bits));
}
