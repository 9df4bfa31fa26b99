//! Three-component vector value type.

use crate::float::Float;
use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

/// 3D vector used for positions, previous positions and forces.
///
/// Component-wise `+ - * /` work against another `Vec3`; for `f32` and `f64`
/// the same operators also accept a plain scalar on the right-hand side.
/// Generic code uses [`Vec3::scale`] for scalar multiplication.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// Zero vector.
    pub fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }

    /// Vector with all components set to the same value.
    pub fn splat(value: F) -> Self { Vec3 { x: value, y: value, z: value } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// 3D cross product.
    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A vector whose magnitude is exactly zero is returned unchanged.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == F::zero() {
            self
        } else {
            self.scale(F::one() / len)
        }
    }

    /// Scale all components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self).scale(t)
    }

    /// True when no component is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Mul for Vec3<F> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Vec3 { x: self.x * rhs.x, y: self.y * rhs.y, z: self.z * rhs.z }
    }
}

impl<F: Float> Div for Vec3<F> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Vec3 { x: self.x / rhs.x, y: self.y / rhs.y, z: self.z / rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> AddAssign for Vec3<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> SubAssign for Vec3<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> Index<usize> for Vec3<F> {
    type Output = F;
    fn index(&self, axis: usize) -> &F {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 axis {} out of range", axis),
        }
    }
}

impl<F: Float> IndexMut<usize> for Vec3<F> {
    fn index_mut(&mut self, axis: usize) -> &mut F {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 axis {} out of range", axis),
        }
    }
}

macro_rules! scalar_ops {
    ($($t:ty),*) => {$(
        impl Add<$t> for Vec3<$t> {
            type Output = Self;
            fn add(self, rhs: $t) -> Self { Vec3 { x: self.x + rhs, y: self.y + rhs, z: self.z + rhs } }
        }

        impl Sub<$t> for Vec3<$t> {
            type Output = Self;
            fn sub(self, rhs: $t) -> Self { Vec3 { x: self.x - rhs, y: self.y - rhs, z: self.z - rhs } }
        }

        impl Mul<$t> for Vec3<$t> {
            type Output = Self;
            fn mul(self, rhs: $t) -> Self { self.scale(rhs) }
        }

        impl Div<$t> for Vec3<$t> {
            type Output = Self;
            fn div(self, rhs: $t) -> Self { Vec3 { x: self.x / rhs, y: self.y / rhs, z: self.z / rhs } }
        }
    )*};
}

scalar_ops!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_length() {
        let v = Vec3::new(2.0f32, 3.0, 6.0);
        assert!((v.length() - 7.0).abs() < 1e-6);
    }

    #[test]
    fn vec3_cross() {
        let i = Vec3::new(1.0f32, 0.0, 0.0);
        let j = Vec3::new(0.0f32, 1.0, 0.0);
        let k = i.cross(j);
        assert!((k.x - 0.0).abs() < 1e-6);
        assert!((k.y - 0.0).abs() < 1e-6);
        assert!((k.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn component_wise_ops() {
        let a = Vec3::new(2.0f32, 4.0, 8.0);
        let b = Vec3::new(1.0f32, 2.0, 4.0);
        assert_eq!(a + b, Vec3::new(3.0, 6.0, 12.0));
        assert_eq!(a - b, Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(a * b, Vec3::new(2.0, 8.0, 32.0));
        assert_eq!(a / b, Vec3::splat(2.0));
    }

    #[test]
    fn scalar_ops() {
        let a = Vec3::new(2.0f64, 4.0, 8.0);
        assert_eq!(a * 0.5, Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(a / 2.0, Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(a + 1.0, Vec3::new(3.0, 5.0, 9.0));
        assert_eq!(a - 1.0, Vec3::new(1.0, 3.0, 7.0));
    }

    #[test]
    fn normalize_zero_vector() {
        let v = Vec3::<f32>::zero();
        assert_eq!(v.normalize(), Vec3::zero());
    }

    #[test]
    fn normalize_tiny_vector_is_not_zeroed() {
        let v = Vec3::new(1e-20f64, 0.0, 0.0);
        let n = v.normalize();
        assert!((n.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn index_by_axis() {
        let mut v = Vec3::new(1.0f32, 2.0, 3.0);
        v[1] = 5.0;
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 5.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec3::new(0.0f32, 0.0, 0.0);
        let b = Vec3::new(0.0f32, 3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }
}
