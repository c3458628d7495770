//! Representation of planes.

use crate::{
    geometry::{BoundingBox, BoundingFrustum, BoundingSphere, PlaneIntersectionType},
    num::Float,
};
use approx::AbsDiffEq;
use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3, Vector4};

/// A plane in 3D, represented by a normal vector and a displacement.
///
/// A point `p` lies on the plane when `n.dot(p) + d = 0`, where `n` is the
/// normal and `d` the displacement. The normal is not required to have unit
/// length, in which case signed distances computed from the plane are scaled
/// by the length of the normal. [`Self::normalize`] rescales the plane to a
/// unit normal.
///
/// The plane divides space into the front halfspace, which the normal points
/// into, and the back halfspace.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane<F: Float> {
    normal: Vector3<F>,
    d: F,
}

/// Evaluates the plane equation for the given point. The result is positive
/// if the point lies in front of the plane.
#[inline]
pub fn classify_point<F: Float>(point: &Point3<F>, plane: &Plane<F>) -> F {
    plane.dot_coordinate(point)
}

/// Computes the unsigned perpendicular distance from the given point to the
/// plane, correcting for a non-unit normal.
#[inline]
pub fn perpendicular_distance<F: Float>(point: &Point3<F>, plane: &Plane<F>) -> F {
    plane.dot_coordinate(point).abs() / plane.normal().norm()
}

impl<F: Float> Plane<F> {
    /// Creates a new plane with the given normal vector and displacement.
    #[inline]
    pub fn new(normal: Vector3<F>, d: F) -> Self {
        Self { normal, d }
    }

    /// Creates a new plane from the coefficients of the plane equation
    /// `a*x + b*y + c*z + d = 0`.
    #[inline]
    pub fn from_coefficients(a: F, b: F, c: F, d: F) -> Self {
        Self::new(Vector3::new(a, b, c), d)
    }

    /// Creates a new plane whose normal is the xyz-part and whose
    /// displacement is the w-component of the given vector.
    #[inline]
    pub fn from_vector4(vector: &Vector4<F>) -> Self {
        Self::from_coefficients(vector.x, vector.y, vector.z, vector.w)
    }

    /// Creates the plane passing through the three given points. The normal
    /// has unit length and points towards the side from which the points
    /// appear in counter-clockwise order.
    ///
    /// Collinear points give a plane with non-finite components.
    pub fn from_points(a: &Point3<F>, b: &Point3<F>, c: &Point3<F>) -> Self {
        let ab = b - a;
        let ac = c - a;

        let cross = ab.cross(&ac);
        let normal = cross / cross.norm();

        Self::new(normal, -normal.dot(&a.coords))
    }

    /// Creates a new plane with the given normal passing through the given
    /// point. The normal is used as given.
    #[inline]
    pub fn from_point_and_normal(point_in_plane: &Point3<F>, normal: Vector3<F>) -> Self {
        let d = -normal.dot(&point_in_plane.coords);
        Self::new(normal, d)
    }

    /// Returns the normal vector of the plane.
    #[inline]
    pub fn normal(&self) -> &Vector3<F> {
        &self.normal
    }

    /// Returns the displacement of the plane.
    #[inline]
    pub fn d(&self) -> F {
        self.d
    }

    /// Deconstructs the plane into its normal and displacement.
    #[inline]
    pub fn into_normal_and_d(self) -> (Vector3<F>, F) {
        (self.normal, self.d)
    }

    /// Computes the dot product of the plane coefficients `(n, d)` with the
    /// given 4D vector.
    #[inline]
    pub fn dot(&self, vector: &Vector4<F>) -> F {
        self.normal.dot(&vector.xyz()) + self.d * vector.w
    }

    /// Evaluates the plane equation for the given point. This is the signed
    /// distance from the plane to the point, scaled by the length of the
    /// normal.
    #[inline]
    pub fn dot_coordinate(&self, point: &Point3<F>) -> F {
        self.normal.dot(&point.coords) + self.d
    }

    /// Computes the dot product of the plane normal with the given direction
    /// vector.
    #[inline]
    pub fn dot_normal(&self, vector: &Vector3<F>) -> F {
        self.normal.dot(vector)
    }

    /// Rescales the plane in place so that its normal has unit length.
    ///
    /// A zero normal leaves the plane with non-finite components.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns a copy of the plane rescaled so that its normal has unit
    /// length.
    ///
    /// A zero normal gives a plane with non-finite components.
    #[inline]
    pub fn normalized(&self) -> Self {
        let factor = F::ONE / self.normal.norm();
        Self::new(self.normal * factor, self.d * factor)
    }

    /// Determines on which side of the plane the given point lies. A point
    /// exactly on the plane is classified as intersecting.
    #[inline]
    pub fn intersects_point(&self, point: &Point3<F>) -> PlaneIntersectionType {
        PlaneIntersectionType::from_signed_distance(self.dot_coordinate(point))
    }

    /// Determines how the given axis-aligned box is positioned relative to
    /// the plane.
    #[inline]
    pub fn intersects_box(&self, bounding_box: &BoundingBox<F>) -> PlaneIntersectionType {
        bounding_box.intersects_plane(self)
    }

    /// Determines how the given sphere is positioned relative to the plane.
    #[inline]
    pub fn intersects_sphere(&self, sphere: &BoundingSphere<F>) -> PlaneIntersectionType {
        sphere.intersects_plane(self)
    }

    /// Determines how the given frustum is positioned relative to the plane.
    #[inline]
    pub fn intersects_frustum(&self, frustum: &BoundingFrustum<F>) -> PlaneIntersectionType {
        frustum.intersects_plane(self)
    }

    /// Computes the plane resulting from transforming this plane with the
    /// given matrix. The plane coefficients are transformed with the
    /// inverse-transpose of the matrix, which keeps points transformed with
    /// the matrix on the transformed plane.
    ///
    /// # Returns
    /// [`None`] if the matrix is not invertible.
    pub fn transformed(&self, transform_matrix: &Matrix4<F>) -> Option<Self> {
        let inverse_transpose = transform_matrix.try_inverse()?.transpose();
        let coefficients = Vector4::new(self.normal.x, self.normal.y, self.normal.z, self.d);
        Some(Self::from_vector4(&(inverse_transpose * coefficients)))
    }

    /// Computes the plane resulting from rotating this plane about the
    /// origin with the given rotation quaternion.
    #[inline]
    pub fn rotated(&self, rotation: &UnitQuaternion<F>) -> Self {
        Self::new(rotation.transform_vector(&self.normal), self.d)
    }
}

impl<F: Float> AbsDiffEq for Plane<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.normal.abs_diff_eq(&other.normal, epsilon) && self.d.abs_diff_eq(&other.d, epsilon)
    }
}
