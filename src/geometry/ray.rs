//! Representation of rays.

use crate::{
    geometry::{BoundingBox, BoundingFrustum, BoundingSphere, Plane},
    num::Float,
};
use nalgebra::{Point3, Vector3};

/// Direction components with a smaller magnitude than this are considered
/// parallel to the corresponding slab of a box.
pub const RAY_AXIS_PARALLEL_EPSILON: f64 = 1e-6;

/// Tolerance used when intersecting rays with planes, both for detecting a
/// ray parallel to the plane and for accepting hits slightly behind the ray
/// origin.
pub const RAY_PLANE_EPSILON: f64 = 1e-5;

/// A half-line starting at a position and extending along a direction. The
/// point at parameter `t >= 0` is `position + t * direction`.
///
/// The direction is not required to have unit length, but distances
/// returned by [`Self::intersects_sphere`] are only meaningful when it has.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray<F: Float> {
    position: Point3<F>,
    direction: Vector3<F>,
}

impl<F: Float> Ray<F> {
    /// Creates a new ray with the given origin and direction.
    #[inline]
    pub fn new(position: Point3<F>, direction: Vector3<F>) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Returns the origin of the ray.
    #[inline]
    pub fn position(&self) -> &Point3<F> {
        &self.position
    }

    /// Returns the direction of the ray.
    #[inline]
    pub fn direction(&self) -> &Vector3<F> {
        &self.direction
    }

    /// Computes the point on the ray at the given parameter.
    #[inline]
    pub fn point_at(&self, t: F) -> Point3<F> {
        self.position + self.direction * t
    }

    /// Deconstructs the ray into its origin and direction.
    #[inline]
    pub fn into_position_and_direction(self) -> (Point3<F>, Vector3<F>) {
        (self.position, self.direction)
    }

    /// Computes the ray parameter where the ray enters the given box, using
    /// the slab method.
    ///
    /// # Returns
    /// `Some(0)` if the ray starts inside the box, otherwise the parameter of
    /// the entry point, or [`None`] if the ray misses the box.
    pub fn intersects_box(&self, bounding_box: &BoundingBox<F>) -> Option<F> {
        let epsilon = F::from_constant(RAY_AXIS_PARALLEL_EPSILON);

        let mut interval: Option<(F, F)> = None;

        for axis in 0..3 {
            let position = self.position[axis];
            let direction = self.direction[axis];
            let min = bounding_box.min()[axis];
            let max = bounding_box.max()[axis];

            if direction.abs() < epsilon {
                if position < min || position > max {
                    return None;
                }
                continue;
            }

            let mut t_near = (min - position) / direction;
            let mut t_far = (max - position) / direction;

            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }

            interval = match interval {
                None => Some((t_near, t_far)),
                Some((t_min, t_max)) => {
                    if t_min > t_far || t_near > t_max {
                        return None;
                    }
                    Some((t_min.max(t_near), t_max.min(t_far)))
                }
            };
        }

        // With no constraining axis the origin has passed every slab test
        let Some((t_min, t_max)) = interval else {
            return Some(F::ZERO);
        };

        if t_min < F::ZERO && t_max > F::ZERO {
            Some(F::ZERO)
        } else if t_min < F::ZERO {
            None
        } else {
            Some(t_min)
        }
    }

    /// Computes the ray parameter where the ray enters the given sphere.
    ///
    /// # Returns
    /// `Some(0)` if the ray starts strictly inside the sphere, otherwise the
    /// parameter of the entry point, or [`None`] if the ray misses the
    /// sphere or points away from it.
    pub fn intersects_sphere(&self, sphere: &BoundingSphere<F>) -> Option<F> {
        let difference = sphere.center() - self.position;
        let difference_length_squared = difference.norm_squared();
        let radius_squared = sphere.radius_squared();

        if difference_length_squared < radius_squared {
            return Some(F::ZERO);
        }

        let distance_along_ray = self.direction.dot(&difference);

        if distance_along_ray < F::ZERO {
            return None;
        }

        let discriminant = radius_squared + distance_along_ray * distance_along_ray
            - difference_length_squared;

        if discriminant < F::ZERO {
            None
        } else {
            Some(distance_along_ray - discriminant.sqrt())
        }
    }

    /// Computes the ray parameter where the ray crosses the given plane.
    /// Crossings within a small tolerance behind the origin are clamped to
    /// zero.
    ///
    /// # Returns
    /// [`None`] if the ray is parallel to the plane or the crossing lies
    /// behind the origin.
    pub fn intersects_plane(&self, plane: &Plane<F>) -> Option<F> {
        let epsilon = F::from_constant(RAY_PLANE_EPSILON);

        let denominator = plane.dot_normal(&self.direction);

        if denominator.abs() < epsilon {
            return None;
        }

        let t = (-plane.d() - plane.dot_normal(&self.position.coords)) / denominator;

        if t < -epsilon {
            None
        } else if t < F::ZERO {
            Some(F::ZERO)
        } else {
            Some(t)
        }
    }

    /// Computes the ray parameter where the ray enters the given frustum.
    /// See [`BoundingFrustum::intersects_ray`].
    #[inline]
    pub fn intersects_frustum(&self, frustum: &BoundingFrustum<F>) -> Option<F> {
        frustum.intersects_ray(self)
    }
}
