//! Plain scalar float tuples.
//!
//! These are the application-side types SIMD values are loaded from and
//! stored to. They are `#[repr(C)]` runs of `f32` with no padding and only
//! `f32` alignment, so a pointer to `x` is a valid source for the matching
//! `*_ptr_u` loader.

use serde::{Deserialize, Serialize};

/// Two floats, x and y.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Float2 {
    /// x component.
    pub x: f32,
    /// y component.
    pub y: f32,
}

/// Three floats, x, y and z.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Float3 {
    /// x component.
    pub x: f32,
    /// y component.
    pub y: f32,
    /// z component.
    pub z: f32,
}

/// Four floats, x, y, z and w.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Float4 {
    /// x component.
    pub x: f32,
    /// y component.
    pub y: f32,
    /// z component.
    pub z: f32,
    /// w component.
    pub w: f32,
}

macro_rules! impl_scalar_tuple {
    ($name:ident, $n:literal, [$($field:ident),+]) => {
        impl $name {
            /// Creates the tuple from its components.
            #[inline]
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            /// Pointer to the first component, for the `*_ptr_u` loaders.
            ///
            /// Derived from the whole tuple so it covers every component.
            #[inline]
            pub fn as_ptr(&self) -> *const f32 {
                self as *const Self as *const f32
            }

            /// Mutable pointer to the first component, for the `*_ptr_u` stores.
            #[inline]
            pub fn as_mut_ptr(&mut self) -> *mut f32 {
                self as *mut Self as *mut f32
            }

            /// Components in declaration order.
            #[inline]
            pub const fn to_array(self) -> [f32; $n] {
                [$(self.$field),+]
            }
        }

        impl From<[f32; $n]> for $name {
            #[inline]
            fn from([$($field),+]: [f32; $n]) -> Self {
                Self { $($field),+ }
            }
        }

        impl From<$name> for [f32; $n] {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }
    };
}

impl_scalar_tuple!(Float2, 2, [x, y]);
impl_scalar_tuple!(Float3, 3, [x, y, z]);
impl_scalar_tuple!(Float4, 4, [x, y, z, w]);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, size_of};

    #[test]
    fn layout_is_packed_floats() {
        assert_eq!(size_of::<Float2>(), 8);
        assert_eq!(size_of::<Float3>(), 12);
        assert_eq!(size_of::<Float4>(), 16);
        assert_eq!(align_of::<Float4>(), align_of::<f32>());
    }

    #[test]
    fn components_follow_the_pointer() {
        let f3 = Float3::new(1.0, 2.0, 3.0);
        let p = f3.as_ptr();
        unsafe {
            assert_eq!(*p.add(1), 2.0);
            assert_eq!(*p.add(2), 3.0);
        }
    }

    #[test]
    fn deserializes_from_json_object() {
        let f4: Float4 = serde_json::from_str(r#"{"x":0.0,"y":1.0,"z":2.0,"w":3.0}"#).unwrap();
        assert_eq!(f4, Float4::new(0.0, 1.0, 2.0, 3.0));
        assert_eq!(<[f32; 4]>::from(f4), [0.0, 1.0, 2.0, 3.0]);
    }
}
