//! Axis remap between authoring space and runtime space.
//!
//! The authoring environment is Z-up, the target runtime is Y-up with the
//! depth axis flipped. The two functions are exact algebraic inverses:
//! both round-trips restore every component bit-for-bit, because the only
//! operation involved is a sign flip.

use crate::Vec3;

/// Convert an authoring-space position into runtime space: `(x, z, -y)`.
pub fn to_runtime(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, -v.y)
}

/// Convert a runtime-space position into authoring space: `(x, -z, y)`.
pub fn to_authoring(v: Vec3) -> Vec3 {
    Vec3::new(v.x, -v.z, v.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(v: Vec3) -> [u32; 3] {
        [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()]
    }

    #[test]
    fn round_trip_is_bit_exact() {
        let cases = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.5, -2.25, 3.75),
            Vec3::new(-0.0, 0.0, -0.0),
            Vec3::new(f32::MAX, f32::MIN_POSITIVE, -f32::MAX),
            Vec3::new(0.1, 0.2, 0.3),
        ];
        for v in cases {
            assert_eq!(bits(to_authoring(to_runtime(v))), bits(v));
            assert_eq!(bits(to_runtime(to_authoring(v))), bits(v));
        }
    }

    #[test]
    fn remap_swaps_depth_and_height() {
        let v = to_runtime(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v, Vec3::new(1.0, 3.0, -2.0));

        let w = to_authoring(Vec3::new(1.0, 3.0, -2.0));
        assert_eq!(w, Vec3::new(1.0, 2.0, 3.0));
    }
}
