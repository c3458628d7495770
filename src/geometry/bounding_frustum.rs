//! Representation of view frustums.

use crate::{
    geometry::{
        BoundingBox, BoundingSphere, ContainmentType, Plane, PlaneClassify,
        PlaneIntersectionType, Ray, classify_point,
    },
    num::Float,
};
use approx::AbsDiffEq;
use nalgebra::{Matrix4, Point3, Vector4};

/// Plane normals whose dot product with a ray direction has a smaller
/// magnitude than this are considered parallel to the ray.
pub const FRUSTUM_RAY_PARALLEL_EPSILON: f64 = 1e-6;

/// A frustum, which in general is a pyramid truncated at the top, defined as
/// the region mapped into the canonical clip volume by a combined
/// view-projection matrix.
///
/// The matrix is assumed to act on column vectors and to produce clip
/// coordinates satisfying `-w <= x <= w`, `-w <= y <= w` and `0 <= z <= w`
/// for points inside the frustum. The six bounding planes are derived from
/// the rows of the matrix using the method of Gribb and Hartmann (2001)
/// "Fast Extraction of Viewing Frustum Planes from the World-View-Projection
/// Matrix", and are normalized so that their normals point out of the
/// frustum. A point is thus outside the frustum if it lies in front of any of
/// the planes.
///
/// The planes and corners are derived from the matrix whenever it changes
/// and are never updated separately. Only the matrix is serialized, and the
/// planes and corners are derived again when deserializing.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "Matrix4<F>",
        into = "Matrix4<F>",
        bound(
            serialize = "Matrix4<F>: serde::Serialize",
            deserialize = "Matrix4<F>: serde::Deserialize<'de>"
        )
    )
)]
pub struct BoundingFrustum<F: Float> {
    matrix: Matrix4<F>,
    planes: [Plane<F>; 6],
    corners: [Point3<F>; 8],
}

impl<F: Float> BoundingFrustum<F> {
    const NEAR: usize = 0;
    const FAR: usize = 1;
    const LEFT: usize = 2;
    const RIGHT: usize = 3;
    const TOP: usize = 4;
    const BOTTOM: usize = 5;

    /// The triple of planes whose intersection gives each corner, in corner
    /// order.
    const CORNER_PLANES: [[usize; 3]; 8] = [
        [Self::NEAR, Self::LEFT, Self::TOP],
        [Self::NEAR, Self::RIGHT, Self::TOP],
        [Self::NEAR, Self::RIGHT, Self::BOTTOM],
        [Self::NEAR, Self::LEFT, Self::BOTTOM],
        [Self::FAR, Self::LEFT, Self::TOP],
        [Self::FAR, Self::RIGHT, Self::TOP],
        [Self::FAR, Self::RIGHT, Self::BOTTOM],
        [Self::FAR, Self::LEFT, Self::BOTTOM],
    ];

    /// Creates the frustum corresponding to the given view-projection matrix.
    pub fn new(matrix: Matrix4<F>) -> Self {
        let (planes, corners) = Self::derive_planes_and_corners(&matrix);
        let frustum = Self {
            matrix,
            planes,
            corners,
        };
        frustum.warn_if_degenerate();
        frustum
    }

    /// Returns the view-projection matrix defining the frustum.
    #[inline]
    pub fn matrix(&self) -> &Matrix4<F> {
        &self.matrix
    }

    /// Replaces the view-projection matrix defining the frustum and derives
    /// new planes and corners from it.
    pub fn set_matrix(&mut self, matrix: Matrix4<F>) {
        self.matrix = matrix;
        (self.planes, self.corners) = Self::derive_planes_and_corners(&self.matrix);
        self.warn_if_degenerate();
    }

    /// Returns the six bounding planes, ordered as near, far, left, right,
    /// top and bottom.
    #[inline]
    pub fn planes(&self) -> &[Plane<F>; 6] {
        &self.planes
    }

    /// Returns the eight corners. The first four lie on the near plane and
    /// the last four on the far plane, each group ordered as top left, top
    /// right, bottom right and bottom left.
    #[inline]
    pub fn corners(&self) -> &[Point3<F>; 8] {
        &self.corners
    }

    /// Writes the corners into the given array, in the order used by
    /// [`Self::corners`].
    #[inline]
    pub fn write_corners(&self, corners: &mut [Point3<F>; 8]) {
        *corners = self.corners;
    }

    /// Returns the near plane.
    #[inline]
    pub fn near(&self) -> &Plane<F> {
        &self.planes[Self::NEAR]
    }

    /// Returns the far plane.
    #[inline]
    pub fn far(&self) -> &Plane<F> {
        &self.planes[Self::FAR]
    }

    /// Returns the plane bounding the left side.
    #[inline]
    pub fn left(&self) -> &Plane<F> {
        &self.planes[Self::LEFT]
    }

    /// Returns the plane bounding the right side.
    #[inline]
    pub fn right(&self) -> &Plane<F> {
        &self.planes[Self::RIGHT]
    }

    /// Returns the plane bounding the top side.
    #[inline]
    pub fn top(&self) -> &Plane<F> {
        &self.planes[Self::TOP]
    }

    /// Returns the plane bounding the bottom side.
    #[inline]
    pub fn bottom(&self) -> &Plane<F> {
        &self.planes[Self::BOTTOM]
    }

    /// Determines how the given box is contained in the frustum.
    ///
    /// The test is conservative: a box outside the frustum but not fully in
    /// front of any single plane is reported as intersecting.
    pub fn contains_box(&self, bounding_box: &BoundingBox<F>) -> ContainmentType {
        self.classify_against_planes(bounding_box)
    }

    /// Determines how the given frustum is contained in this frustum. A
    /// frustum with the same matrix is contained.
    pub fn contains_frustum(&self, other: &Self) -> ContainmentType {
        if self == other {
            return ContainmentType::Contains;
        }
        self.classify_against_planes(other)
    }

    /// Determines how the given sphere is contained in the frustum.
    ///
    /// The test is conservative in the same way as [`Self::contains_box`].
    pub fn contains_sphere(&self, sphere: &BoundingSphere<F>) -> ContainmentType {
        self.classify_against_planes(sphere)
    }

    /// Determines whether the given point lies in the frustum. Points on the
    /// boundary are contained.
    pub fn contains_point(&self, point: &Point3<F>) -> ContainmentType {
        if self
            .planes
            .iter()
            .any(|plane| classify_point(point, plane) > F::ZERO)
        {
            ContainmentType::Disjoint
        } else {
            ContainmentType::Contains
        }
    }

    /// Whether the given box overlaps the frustum.
    #[inline]
    pub fn intersects_box(&self, bounding_box: &BoundingBox<F>) -> bool {
        self.contains_box(bounding_box).is_overlapping()
    }

    /// Whether the given frustum overlaps this frustum.
    #[inline]
    pub fn intersects_frustum(&self, other: &Self) -> bool {
        self.contains_frustum(other).is_overlapping()
    }

    /// Whether the given sphere overlaps the frustum.
    #[inline]
    pub fn intersects_sphere(&self, sphere: &BoundingSphere<F>) -> bool {
        self.contains_sphere(sphere).is_overlapping()
    }

    /// Determines how the frustum is positioned relative to the given plane,
    /// by classifying each of its corners.
    pub fn intersects_plane(&self, plane: &Plane<F>) -> PlaneIntersectionType {
        let first_classification = plane.intersects_point(&self.corners[0]);

        if self.corners[1..]
            .iter()
            .all(|corner| plane.intersects_point(corner) == first_classification)
        {
            first_classification
        } else {
            PlaneIntersectionType::Intersecting
        }
    }

    /// Computes the ray parameter where the given ray enters the frustum, by
    /// clipping the ray against each of the bounding planes.
    ///
    /// # Returns
    /// `Some(0)` if the ray starts inside the frustum, otherwise the
    /// parameter of the entry point, or [`None`] if the ray misses the
    /// frustum.
    pub fn intersects_ray(&self, ray: &Ray<F>) -> Option<F> {
        let epsilon = F::from_constant(FRUSTUM_RAY_PARALLEL_EPSILON);

        let mut t_enter = F::ZERO;
        let mut t_exit: Option<F> = None;

        for plane in &self.planes {
            let denominator = plane.dot_normal(ray.direction());
            let distance = plane.dot_coordinate(ray.position());

            if denominator.abs() < epsilon {
                // A parallel ray stays on the side of the plane it starts on
                if distance > F::ZERO {
                    return None;
                }
                continue;
            }

            let t = -distance / denominator;

            if denominator < F::ZERO {
                t_enter = t_enter.max(t);
            } else {
                t_exit = Some(t_exit.map_or(t, |t_exit| t_exit.min(t)));
            }
        }

        match t_exit {
            Some(t_exit) if t_enter > t_exit => None,
            _ => Some(t_enter),
        }
    }

    /// Computes the axis-aligned bounding box of the frustum.
    pub fn compute_aabb(&self) -> BoundingBox<F> {
        let (min, max) = self.corners[1..]
            .iter()
            .fold((self.corners[0], self.corners[0]), |(min, max), corner| {
                (min.inf(corner), max.sup(corner))
            });
        BoundingBox::new(min, max)
    }

    fn classify_against_planes(&self, volume: &impl PlaneClassify<F>) -> ContainmentType {
        ContainmentType::from_outward_plane_classifications(
            self.planes
                .iter()
                .map(|plane| volume.classify_against_plane(plane)),
        )
    }

    fn derive_planes_and_corners(matrix: &Matrix4<F>) -> ([Plane<F>; 6], [Point3<F>; 8]) {
        with_trace_logging!("Deriving frustum planes and corners"; {
            let planes = Self::planes_from_matrix(matrix);
            let corners = Self::CORNER_PLANES.map(|[a, b, c]| {
                Self::intersection_point(&planes[a], &planes[b], &planes[c])
            });
            (planes, corners)
        })
    }

    fn planes_from_matrix(matrix: &Matrix4<F>) -> [Plane<F>; 6] {
        let row = |index: usize| -> Vector4<F> { matrix.row(index).transpose() };
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        [
            -r2,
            r2 - r3,
            -r3 - r0,
            r0 - r3,
            r1 - r3,
            -r3 - r1,
        ]
        .map(|coefficients| Plane::from_vector4(&coefficients).normalized())
    }

    /// Computes the point where the three given planes meet. Planes that do
    /// not meet in a single point give a non-finite result.
    pub fn intersection_point(a: &Plane<F>, b: &Plane<F>, c: &Plane<F>) -> Point3<F> {
        let b_cross_c = b.normal().cross(c.normal());
        let c_cross_a = c.normal().cross(a.normal());
        let a_cross_b = a.normal().cross(b.normal());

        let f = -a.normal().dot(&b_cross_c);

        Point3::from((b_cross_c * a.d() + c_cross_a * b.d() + a_cross_b * c.d()) / f)
    }

    fn warn_if_degenerate(&self) {
        if !self
            .corners
            .iter()
            .all(|corner| corner.iter().all(|coord| coord.is_finite()))
        {
            log::warn!(
                "Frustum matrix {:?} gives non-finite corners, containment tests will be unreliable",
                self.matrix
            );
        }
    }
}

impl<F: Float> From<Matrix4<F>> for BoundingFrustum<F> {
    fn from(matrix: Matrix4<F>) -> Self {
        Self::new(matrix)
    }
}

impl<F: Float> From<BoundingFrustum<F>> for Matrix4<F> {
    fn from(frustum: BoundingFrustum<F>) -> Self {
        frustum.matrix
    }
}

impl<F: Float> PartialEq for BoundingFrustum<F> {
    fn eq(&self, other: &Self) -> bool {
        self.matrix == other.matrix
    }
}

impl<F: Float> PlaneClassify<F> for BoundingFrustum<F> {
    fn classify_against_plane(&self, plane: &Plane<F>) -> PlaneIntersectionType {
        self.intersects_plane(plane)
    }
}

impl<F: Float> AbsDiffEq for BoundingFrustum<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.matrix.abs_diff_eq(&other.matrix, epsilon)
    }
}
