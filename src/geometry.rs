//! Geometrical objects.

mod bounding_box;
mod bounding_frustum;
mod bounding_sphere;
mod containment;
mod plane;
mod projection;
mod ray;

pub use bounding_box::BoundingBox;
pub use bounding_frustum::{BoundingFrustum, FRUSTUM_RAY_PARALLEL_EPSILON};
pub use bounding_sphere::BoundingSphere;
pub use containment::{ContainmentType, PlaneClassify, PlaneIntersectionType};
pub use plane::{Plane, classify_point, perpendicular_distance};
pub use projection::{OrthographicTransform, PerspectiveTransform, look_at_view_matrix};
pub use ray::{RAY_AXIS_PARALLEL_EPSILON, RAY_PLANE_EPSILON, Ray};

use crate::num::Float;
use nalgebra::Point3;

/// Anything that represents a 3D point.
pub trait Point<F: Float> {
    /// Returns a reference to the point.
    fn point(&self) -> &Point3<F>;
}

impl<F: Float> Point<F> for Point3<F> {
    fn point(&self) -> &Point3<F> {
        self
    }
}
