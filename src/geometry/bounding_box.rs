//! Representation of axis-aligned bounding boxes.

use super::Point;
use crate::{
    geometry::{
        BoundingFrustum, BoundingSphere, ContainmentType, Plane, PlaneClassify,
        PlaneIntersectionType, Ray,
    },
    num::Float,
};
use anyhow::{Result, bail};
use approx::AbsDiffEq;
use nalgebra::{Point3, Vector3, point};

/// A box with faces aligned with the coordinate system axes, represented by
/// its minimum and maximum corner points.
///
/// The box is closed, so points on its faces are inside it. The minimum
/// corner is not required to be component-wise smaller than the maximum
/// corner, but the predicates assume it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<F: Float> {
    min: Point3<F>,
    max: Point3<F>,
}

impl<F: Float> BoundingBox<F> {
    /// Creates a new box with the given minimum and maximum corner points.
    #[inline]
    pub fn new(min: Point3<F>, max: Point3<F>) -> Self {
        Self { min, max }
    }

    /// Creates the smallest box enclosing all the points in the given slice.
    ///
    /// # Errors
    /// Returns an error if the point slice is empty.
    pub fn from_points(points: &[impl Point<F>]) -> Result<Self> {
        let Some((first_point, remaining_points)) = points.split_first() else {
            bail!("Tried to create bounding box for empty point slice");
        };

        let first_point = *first_point.point();

        let (min, max) = remaining_points
            .iter()
            .fold((first_point, first_point), |(min, max), point| {
                (min.inf(point.point()), max.sup(point.point()))
            });

        Ok(Self::new(min, max))
    }

    /// Creates the smallest box enclosing the `count` points starting at
    /// `index` in the given slice. When no count is given, all points from
    /// `index` to the end of the slice are used.
    ///
    /// # Errors
    /// Returns an error if the range is empty or extends past the end of the
    /// slice.
    pub fn from_points_in_range(
        points: &[impl Point<F>],
        index: usize,
        count: Option<usize>,
    ) -> Result<Self> {
        if index > points.len() {
            bail!(
                "Start index {} for bounding box points is out of bounds for {} points",
                index,
                points.len()
            );
        }

        let count = count.unwrap_or(points.len() - index);

        let end = match index.checked_add(count) {
            Some(end) if end <= points.len() => end,
            _ => bail!(
                "Range of {} points starting at index {} is out of bounds for {} points",
                count,
                index,
                points.len()
            ),
        };

        if count == 0 {
            bail!("Tried to create bounding box for empty point range");
        }

        Self::from_points(&points[index..end])
    }

    /// Creates the smallest box enclosing the given sphere.
    pub fn from_sphere(sphere: &BoundingSphere<F>) -> Self {
        let half_extent = Vector3::repeat(sphere.radius());
        Self::new(sphere.center() - half_extent, sphere.center() + half_extent)
    }

    /// Creates the smallest box enclosing both the given boxes.
    pub fn merged(box_1: &Self, box_2: &Self) -> Self {
        Self::new(box_1.min.inf(&box_2.min), box_1.max.sup(&box_2.max))
    }

    /// Returns the minimum corner of the box.
    #[inline]
    pub fn min(&self) -> &Point3<F> {
        &self.min
    }

    /// Returns the maximum corner of the box.
    #[inline]
    pub fn max(&self) -> &Point3<F> {
        &self.max
    }

    /// Computes the center of the box.
    #[inline]
    pub fn center(&self) -> Point3<F> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Deconstructs the box into its minimum and maximum corner.
    #[inline]
    pub fn into_min_and_max(self) -> (Point3<F>, Point3<F>) {
        (self.min, self.max)
    }

    /// Returns the eight corners of the box. The first four corners lie on
    /// the face with maximum z, ordered counter-clockwise starting from the
    /// one with minimum x and maximum y. The last four corners are the
    /// corresponding ones on the face with minimum z.
    pub fn corners(&self) -> [Point3<F>; 8] {
        let mut corners = [Point3::origin(); 8];
        self.write_corners(&mut corners);
        corners
    }

    /// Writes the corners of the box into the given array, in the order used
    /// by [`Self::corners`].
    pub fn write_corners(&self, corners: &mut [Point3<F>; 8]) {
        let (min, max) = (&self.min, &self.max);
        *corners = [
            point![min.x, max.y, max.z],
            point![max.x, max.y, max.z],
            point![max.x, min.y, max.z],
            point![min.x, min.y, max.z],
            point![min.x, max.y, min.z],
            point![max.x, max.y, min.z],
            point![max.x, min.y, min.z],
            point![min.x, min.y, min.z],
        ];
    }

    /// Computes the squared distance from the given point to the closest
    /// point in the box. Points inside the box have zero distance.
    pub fn compute_squared_distance_to_point(&self, point: &Point3<F>) -> F {
        let below = (self.min - point).sup(&Vector3::zeros());
        let above = (point - self.max).sup(&Vector3::zeros());
        below.norm_squared() + above.norm_squared()
    }

    /// Determines how the given box is contained in this box.
    pub fn contains_box(&self, other: &Self) -> ContainmentType {
        if !self.intersects_box(other) {
            ContainmentType::Disjoint
        } else if (0..3).all(|axis| {
            other.min[axis] >= self.min[axis] && other.max[axis] <= self.max[axis]
        }) {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }

    /// Determines how the given frustum is contained in this box, based on
    /// which of the frustum corners lie inside the box. The frustum is
    /// disjoint from the box as soon as any corner lies outside it.
    ///
    /// This is an approximation: a frustum only partially overlapping the
    /// box is reported as disjoint. Use [`Self::intersects_frustum`] for an
    /// exact overlap test.
    pub fn contains_frustum(&self, frustum: &BoundingFrustum<F>) -> ContainmentType {
        ContainmentType::from_corner_containments_requiring_all(
            frustum.corners().iter().map(|corner| self.contains_point(corner)),
        )
    }

    /// Determines how the given sphere is contained in this box.
    pub fn contains_sphere(&self, sphere: &BoundingSphere<F>) -> ContainmentType {
        let center = sphere.center();
        let radius = sphere.radius();

        if (0..3).all(|axis| {
            center[axis] - self.min[axis] >= radius && self.max[axis] - center[axis] >= radius
        }) {
            return ContainmentType::Contains;
        }

        let mut squared_min_distance = F::ZERO;

        for axis in 0..3 {
            let below = center[axis] - self.min[axis];
            if below < F::ZERO {
                if below < -radius {
                    return ContainmentType::Disjoint;
                }
                squared_min_distance += below * below;
            } else {
                let above = center[axis] - self.max[axis];
                if above > F::ZERO {
                    if above > radius {
                        return ContainmentType::Disjoint;
                    }
                    squared_min_distance += above * above;
                }
            }
        }

        if squared_min_distance <= sphere.radius_squared() {
            ContainmentType::Intersects
        } else {
            ContainmentType::Disjoint
        }
    }

    /// Determines whether the given point lies in the box. Points on the
    /// faces of the box are contained.
    pub fn contains_point(&self, point: &Point3<F>) -> ContainmentType {
        if (0..3).any(|axis| point[axis] < self.min[axis] || point[axis] > self.max[axis]) {
            ContainmentType::Disjoint
        } else {
            ContainmentType::Contains
        }
    }

    /// Whether the given box overlaps this box. Touching boxes overlap.
    pub fn intersects_box(&self, other: &Self) -> bool {
        (0..3).all(|axis| self.max[axis] >= other.min[axis] && self.min[axis] <= other.max[axis])
    }

    /// Whether the given sphere overlaps this box. A sphere touching the box
    /// overlaps it.
    pub fn intersects_sphere(&self, sphere: &BoundingSphere<F>) -> bool {
        self.compute_squared_distance_to_point(sphere.center()) <= sphere.radius_squared()
    }

    /// Determines how this box is positioned relative to the given plane, by
    /// classifying the corners lying farthest along and against the plane
    /// normal.
    pub fn intersects_plane(&self, plane: &Plane<F>) -> PlaneIntersectionType {
        let mut positive_vertex = self.max;
        let mut negative_vertex = self.min;

        for axis in 0..3 {
            if plane.normal()[axis] < F::ZERO {
                positive_vertex[axis] = self.min[axis];
                negative_vertex[axis] = self.max[axis];
            }
        }

        if plane.dot_coordinate(&negative_vertex) > F::ZERO {
            PlaneIntersectionType::Front
        } else if plane.dot_coordinate(&positive_vertex) < F::ZERO {
            PlaneIntersectionType::Back
        } else {
            PlaneIntersectionType::Intersecting
        }
    }

    /// Whether the given frustum overlaps this box.
    #[inline]
    pub fn intersects_frustum(&self, frustum: &BoundingFrustum<F>) -> bool {
        frustum.intersects_box(self)
    }

    /// Computes the ray parameter where the given ray enters this box. See
    /// [`Ray::intersects_box`].
    #[inline]
    pub fn intersects_ray(&self, ray: &Ray<F>) -> Option<F> {
        ray.intersects_box(self)
    }
}

impl<F: Float> PlaneClassify<F> for BoundingBox<F> {
    fn classify_against_plane(&self, plane: &Plane<F>) -> PlaneIntersectionType {
        self.intersects_plane(plane)
    }
}

impl<F: Float> AbsDiffEq for BoundingBox<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.min.abs_diff_eq(&other.min, epsilon) && self.max.abs_diff_eq(&other.max, epsilon)
    }
}
