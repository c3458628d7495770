//! Representation of bounding spheres.

use super::Point;
use crate::{
    geometry::{
        BoundingBox, BoundingFrustum, ContainmentType, Plane, PlaneClassify,
        PlaneIntersectionType, Ray,
    },
    num::Float,
};
use anyhow::{Result, bail};
use approx::AbsDiffEq;
use nalgebra::{Matrix4, Point3};

/// A sphere represented by its center point and radius.
///
/// The radius is not required to be non-negative, but the predicates assume
/// it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingSphere<F: Float> {
    center: Point3<F>,
    radius: F,
}

impl<F: Float> BoundingSphere<F> {
    /// Creates a new sphere with the given center and radius.
    #[inline]
    pub fn new(center: Point3<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Computes an approximate bounding sphere for the points in the given
    /// slice. The initial sphere spans the pair of axis-extreme points lying
    /// farthest apart, and is then grown in a single pass to enclose any
    /// point lying outside it. The result encloses all the points but is
    /// generally somewhat larger than the minimal bounding sphere.
    ///
    /// # Errors
    /// Returns an error if the point slice is empty.
    pub fn from_points(points: &[impl Point<F>]) -> Result<Self> {
        let Some(first_point) = points.first() else {
            bail!("Tried to create bounding sphere for empty point slice");
        };
        Ok(Self::enclosing_points(first_point.point(), points))
    }

    /// Creates the sphere circumscribing the given box.
    pub fn from_box(bounding_box: &BoundingBox<F>) -> Self {
        let center = bounding_box.center();
        let radius = nalgebra::distance(&center, bounding_box.max());
        Self::new(center, radius)
    }

    /// Computes an approximate bounding sphere for the corners of the given
    /// frustum.
    pub fn from_frustum(frustum: &BoundingFrustum<F>) -> Self {
        let corners = frustum.corners();
        Self::enclosing_points(&corners[0], corners.as_slice())
    }

    /// Creates a sphere enclosing both the given spheres. If one of the
    /// spheres encloses the other, it is returned unchanged.
    pub fn merged(sphere_1: &Self, sphere_2: &Self) -> Self {
        let center_displacement = sphere_2.center - sphere_1.center;
        let distance = center_displacement.norm();

        if distance <= sphere_1.radius + sphere_2.radius {
            if distance <= sphere_1.radius - sphere_2.radius {
                return *sphere_1;
            }
            if distance <= sphere_2.radius - sphere_1.radius {
                return *sphere_2;
            }
        }

        let left_radius = (sphere_1.radius - distance).max(sphere_2.radius);
        let right_radius = (sphere_1.radius + distance).max(sphere_2.radius);

        let center_offset = center_displacement
            + center_displacement * ((left_radius - right_radius) / (F::TWO * distance));

        Self::new(
            sphere_1.center + center_offset,
            (left_radius + right_radius) * F::ONE_HALF,
        )
    }

    /// Creates a sphere enclosing all the given spheres by merging them in
    /// order.
    ///
    /// # Errors
    /// Returns an error if the sphere slice is empty.
    pub fn merged_with_all(spheres: &[Self]) -> Result<Self> {
        let Some((first_sphere, remaining_spheres)) = spheres.split_first() else {
            bail!("Tried to merge empty sphere slice");
        };
        Ok(remaining_spheres
            .iter()
            .fold(*first_sphere, |merged, sphere| Self::merged(&merged, sphere)))
    }

    /// Returns the center of the sphere.
    #[inline]
    pub fn center(&self) -> &Point3<F> {
        &self.center
    }

    /// Returns the radius of the sphere.
    #[inline]
    pub fn radius(&self) -> F {
        self.radius
    }

    /// Returns the square of the radius of the sphere.
    #[inline]
    pub fn radius_squared(&self) -> F {
        self.radius * self.radius
    }

    /// Deconstructs the sphere into its center and radius.
    #[inline]
    pub fn into_center_and_radius(self) -> (Point3<F>, F) {
        (self.center, self.radius)
    }

    /// Determines how the given box is contained in this sphere.
    pub fn contains_box(&self, bounding_box: &BoundingBox<F>) -> ContainmentType {
        if bounding_box
            .corners()
            .iter()
            .all(|corner| self.contains_point(corner).is_overlapping())
        {
            ContainmentType::Contains
        } else if bounding_box.compute_squared_distance_to_point(&self.center)
            <= self.radius_squared()
        {
            ContainmentType::Intersects
        } else {
            ContainmentType::Disjoint
        }
    }

    /// Determines how the given frustum is contained in this sphere, based on
    /// which of the frustum corners lie inside the sphere. When no corner
    /// lies inside, the frustum's own classification of the sphere decides
    /// whether they overlap.
    pub fn contains_frustum(&self, frustum: &BoundingFrustum<F>) -> ContainmentType {
        ContainmentType::from_corner_containments(
            frustum.corners().iter().map(|corner| self.contains_point(corner)),
            || frustum.contains_sphere(self),
        )
    }

    /// Determines how the given sphere is contained in this sphere.
    pub fn contains_sphere(&self, other: &Self) -> ContainmentType {
        let squared_distance = nalgebra::distance_squared(&self.center, &other.center);

        let radius_sum = self.radius + other.radius;
        let radius_difference = self.radius - other.radius;

        if squared_distance > radius_sum * radius_sum {
            ContainmentType::Disjoint
        } else if squared_distance <= radius_difference * radius_difference {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }

    /// Determines whether the given point lies in the sphere. A point exactly
    /// on the surface is classified as intersecting.
    pub fn contains_point(&self, point: &Point3<F>) -> ContainmentType {
        let squared_distance = nalgebra::distance_squared(&self.center, point);
        let radius_squared = self.radius_squared();

        if squared_distance > radius_squared {
            ContainmentType::Disjoint
        } else if squared_distance < radius_squared {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }

    /// Whether the given box overlaps this sphere.
    #[inline]
    pub fn intersects_box(&self, bounding_box: &BoundingBox<F>) -> bool {
        bounding_box.intersects_sphere(self)
    }

    /// Whether the given sphere overlaps this sphere. Spheres that only touch
    /// do not overlap.
    pub fn intersects_sphere(&self, other: &Self) -> bool {
        let radius_sum = self.radius + other.radius;
        nalgebra::distance_squared(&self.center, &other.center) < radius_sum * radius_sum
    }

    /// Determines how this sphere is positioned relative to the given plane.
    pub fn intersects_plane(&self, plane: &Plane<F>) -> PlaneIntersectionType {
        let distance = plane.dot_coordinate(&self.center);

        if distance > self.radius {
            PlaneIntersectionType::Front
        } else if distance < -self.radius {
            PlaneIntersectionType::Back
        } else {
            PlaneIntersectionType::Intersecting
        }
    }

    /// Whether the given frustum overlaps this sphere.
    #[inline]
    pub fn intersects_frustum(&self, frustum: &BoundingFrustum<F>) -> bool {
        frustum.intersects_sphere(self)
    }

    /// Computes the ray parameter where the given ray enters this sphere. See
    /// [`Ray::intersects_sphere`].
    #[inline]
    pub fn intersects_ray(&self, ray: &Ray<F>) -> Option<F> {
        ray.intersects_sphere(self)
    }

    /// Computes the sphere resulting from transforming this sphere with the
    /// given affine transformation matrix. The radius is scaled by the
    /// largest scaling of any coordinate axis, so the result encloses the
    /// transformed sphere also under non-uniform scaling.
    pub fn transformed(&self, transform_matrix: &Matrix4<F>) -> Self {
        let center = Point3::from((transform_matrix * self.center.to_homogeneous()).xyz());

        let max_squared_axis_scaling = transform_matrix
            .fixed_view::<3, 3>(0, 0)
            .column_iter()
            .map(|axis| axis.norm_squared())
            .fold(F::ZERO, |current_max, squared_scaling| current_max.max(squared_scaling));

        Self::new(center, self.radius * max_squared_axis_scaling.sqrt())
    }

    fn enclosing_points(first_point: &Point3<F>, points: &[impl Point<F>]) -> Self {
        let first_point = *first_point;

        // Points with the smallest and largest coordinate along each axis
        let mut min_points = [first_point; 3];
        let mut max_points = [first_point; 3];

        for point in points.iter().skip(1) {
            let point = point.point();
            for axis in 0..3 {
                if point[axis] < min_points[axis][axis] {
                    min_points[axis] = *point;
                }
                if point[axis] > max_points[axis][axis] {
                    max_points[axis] = *point;
                }
            }
        }

        let squared_separations: [F; 3] = std::array::from_fn(|axis| {
            nalgebra::distance_squared(&min_points[axis], &max_points[axis])
        });

        let mut widest_axis = 0;
        if squared_separations[1] > squared_separations[0]
            && squared_separations[1] > squared_separations[2]
        {
            widest_axis = 1;
        }
        if squared_separations[2] > squared_separations[0]
            && squared_separations[2] > squared_separations[1]
        {
            widest_axis = 2;
        }

        let mut center = nalgebra::center(&min_points[widest_axis], &max_points[widest_axis]);
        let mut radius = nalgebra::distance(&max_points[widest_axis], &center);
        let mut radius_squared = radius * radius;

        for point in points {
            let point = point.point();
            let difference = point - center;
            let squared_distance = difference.norm_squared();

            if squared_distance > radius_squared {
                let direction = difference / squared_distance.sqrt();
                let opposite_point = center - direction * radius;
                center = nalgebra::center(&opposite_point, point);
                radius = nalgebra::distance(point, &center);
                radius_squared = radius * radius;
            }
        }

        Self::new(center, radius)
    }
}

impl<F: Float> PlaneClassify<F> for BoundingSphere<F> {
    fn classify_against_plane(&self, plane: &Plane<F>) -> PlaneIntersectionType {
        self.intersects_plane(plane)
    }
}

impl<F: Float> AbsDiffEq for BoundingSphere<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.center.abs_diff_eq(&other.center, epsilon)
            && self.radius.abs_diff_eq(&other.radius, epsilon)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::PerspectiveTransform;
    use approx::{abs_diff_eq, assert_abs_diff_eq};
    use nalgebra::{Translation3, UnitQuaternion, point, vector};
    use proptest::prelude::*;
    use ContainmentType::{Contains, Disjoint, Intersects};
    use PlaneIntersectionType::{Back, Front, Intersecting};

    macro_rules! test_merged_sphere {
        (
            sphere_1 = ($center_1:expr, $radius_1:expr),
            sphere_2 = ($center_2:expr, $radius_2:expr),
            merged_sphere = ($center_merged:expr, $radius_merged:expr)
        ) => {{
            let sphere_1 = BoundingSphere::new($center_1, $radius_1);
            let sphere_2 = BoundingSphere::new($center_2, $radius_2);
            let merged_sphere = BoundingSphere::merged(&sphere_1, &sphere_2);
            assert_abs_diff_eq!(merged_sphere.center(), &$center_merged, epsilon = 1e-12);
            assert_abs_diff_eq!(merged_sphere.radius(), $radius_merged, epsilon = 1e-12);
            assert_ne!(merged_sphere.contains_sphere(&sphere_1), Disjoint);
            assert_ne!(merged_sphere.contains_sphere(&sphere_2), Disjoint);
        }};
    }

    prop_compose! {
        fn sphere_strategy(max_coord: f64, max_radius: f64)(
            x in -max_coord..max_coord,
            y in -max_coord..max_coord,
            z in -max_coord..max_coord,
            radius in 0.0..max_radius,
        ) -> BoundingSphere<f64> {
            BoundingSphere::new(point![x, y, z], radius)
        }
    }

    prop_compose! {
        fn points_strategy(max_coord: f64)(
            coords in prop::collection::vec(
                (-max_coord..max_coord, -max_coord..max_coord, -max_coord..max_coord),
                1..50,
            ),
        ) -> Vec<Point3<f64>> {
            coords.into_iter().map(|(x, y, z)| point![x, y, z]).collect()
        }
    }

    fn distant_frustum() -> BoundingFrustum<f64> {
        BoundingFrustum::new(
            Matrix4::<f64>::identity() * Translation3::new(-100.0, 0.0, 0.0).to_homogeneous(),
        )
    }

    #[test]
    fn creating_sphere_works() {
        let center = point![-0.1, 0.0, 123.5];
        let radius = 42.0;
        let sphere = BoundingSphere::new(center, radius);
        assert_eq!(sphere.center(), &center);
        assert_eq!(sphere.radius(), radius);
        assert_eq!(sphere.radius_squared(), radius * radius);
        assert_eq!(sphere.into_center_and_radius(), (center, radius));
    }

    #[test]
    fn creating_sphere_with_negative_radius_is_allowed() {
        let sphere = BoundingSphere::new(point![1.0, 2.0, 3.0], -0.1);
        assert_eq!(sphere.radius(), -0.1);
    }

    #[test]
    fn creating_sphere_from_box_circumscribes_box() {
        let bounding_box = BoundingBox::new(point![-1.0, -2.0, -2.0], point![1.0, 2.0, 2.0]);
        let sphere = BoundingSphere::from_box(&bounding_box);
        assert_abs_diff_eq!(sphere.center(), &Point3::origin());
        assert_abs_diff_eq!(sphere.radius(), 3.0);
    }

    #[test]
    fn creating_sphere_from_points_on_axis_spans_extremes() {
        let points = [
            point![-2.0, 0.0, 0.0],
            point![0.5, 0.1, 0.0],
            point![2.0, 0.0, 0.0],
        ];
        let sphere = BoundingSphere::from_points(&points).unwrap();
        assert_abs_diff_eq!(sphere.center(), &Point3::origin());
        assert_abs_diff_eq!(sphere.radius(), 2.0);
    }

    #[test]
    fn creating_sphere_from_points_grows_to_enclose_outliers() {
        let points = [
            point![-1.0, 0.0, 0.0],
            point![1.0, 0.0, 0.0],
            point![0.0, 0.9, 0.9],
        ];
        let sphere = BoundingSphere::from_points(&points).unwrap();
        for point in &points {
            assert!(nalgebra::distance(sphere.center(), point) <= sphere.radius() + 1e-12);
        }
        assert!(sphere.radius() > 1.0);
    }

    #[test]
    fn creating_sphere_from_single_point_gives_zero_radius() {
        let point = point![3.0, -1.0, 2.0];
        let sphere = BoundingSphere::from_points(&[point]).unwrap();
        assert_eq!(sphere.center(), &point);
        assert_eq!(sphere.radius(), 0.0);
    }

    #[test]
    fn creating_sphere_from_no_points_fails() {
        assert!(BoundingSphere::from_points(&[] as &[Point3<f64>]).is_err());
    }

    #[test]
    fn creating_sphere_from_frustum_encloses_corners() {
        let frustum = BoundingFrustum::<f64>::new(Matrix4::identity());
        let sphere = BoundingSphere::from_frustum(&frustum);
        for corner in frustum.corners() {
            assert!(nalgebra::distance(sphere.center(), corner) <= sphere.radius() + 1e-12);
        }
    }

    #[test]
    fn merging_spheres_works() {
        test_merged_sphere!(
            sphere_1 = (Point3::origin(), 42.0),
            sphere_2 = (Point3::origin(), 42.0),
            merged_sphere = (Point3::origin(), 42.0)
        );
        test_merged_sphere!(
            sphere_1 = (Point3::origin(), 0.5),
            sphere_2 = (Point3::origin(), 2.0),
            merged_sphere = (Point3::origin(), 2.0)
        );
        test_merged_sphere!(
            sphere_1 = (point![3.0, 4.0, 0.0], 0.0),
            sphere_2 = (Point3::origin(), 2.0),
            merged_sphere = (
                point![(3.0 - 6.0 / 5.0) / 2.0, (4.0 - 8.0 / 5.0) / 2.0, 0.0],
                3.5
            )
        );
        test_merged_sphere!(
            sphere_1 = (Point3::origin(), 1.5),
            sphere_2 = (point![1.0, 0.0, 0.0], 2.0),
            merged_sphere = (point![0.75, 0.0, 0.0], 2.25)
        );
    }

    #[test]
    fn merging_many_spheres_encloses_all() {
        let spheres = [
            BoundingSphere::new(point![0.0, 0.0, 0.0], 1.0),
            BoundingSphere::new(point![5.0, 0.0, 0.0], 1.0),
            BoundingSphere::new(point![0.0, -3.0, 2.0], 0.5),
        ];
        let merged = BoundingSphere::merged_with_all(&spheres).unwrap();
        for sphere in &spheres {
            assert!(
                nalgebra::distance(merged.center(), sphere.center()) + sphere.radius()
                    <= merged.radius() + 1e-9
            );
        }
        assert!(BoundingSphere::<f64>::merged_with_all(&[]).is_err());
    }

    #[test]
    fn sphere_contains_points_inside_and_intersects_points_on_surface() {
        let sphere = BoundingSphere::new(Point3::origin(), 3.0);
        assert_eq!(sphere.contains_point(&point![0.0, 1.0, 0.0]), Contains);
        assert_eq!(sphere.contains_point(&point![0.0, 3.0, 0.0]), Intersects);
        assert_eq!(sphere.contains_point(&point![0.0, 3.0 + 1e-9, 0.0]), Disjoint);
    }

    #[test]
    fn sphere_with_zero_radius_intersects_own_center() {
        let sphere = BoundingSphere::new(point![1.0, 2.0, 3.0], 0.0);
        assert_eq!(sphere.contains_point(sphere.center()), Intersects);
    }

    #[test]
    fn sphere_containment_of_spheres_works() {
        let sphere = BoundingSphere::new(Point3::origin(), 2.0);
        assert_eq!(
            sphere.contains_sphere(&BoundingSphere::new(point![0.5, 0.0, 0.0], 1.0)),
            Contains
        );
        assert_eq!(
            sphere.contains_sphere(&BoundingSphere::new(point![2.0, 0.0, 0.0], 1.0)),
            Intersects
        );
        assert_eq!(
            sphere.contains_sphere(&BoundingSphere::new(point![4.0, 0.0, 0.0], 1.0)),
            Disjoint
        );
    }

    #[test]
    fn unit_spheres_intersect_only_when_overlapping() {
        let sphere = BoundingSphere::new(Point3::origin(), 1.0);
        assert!(sphere.intersects_sphere(&BoundingSphere::new(point![1.5, 0.0, 0.0], 1.0)));
        assert!(!sphere.intersects_sphere(&BoundingSphere::new(point![2.0, 0.0, 0.0], 1.0)));
    }

    #[test]
    fn sphere_containment_of_boxes_works() {
        let sphere = BoundingSphere::new(Point3::origin(), 2.0);
        let inner_box = BoundingBox::new(point![-1.0, -1.0, -1.0], point![1.0, 1.0, 1.0]);
        let straddling_box = BoundingBox::new(point![1.0, -1.0, -1.0], point![3.0, 1.0, 1.0]);
        let outer_box = BoundingBox::new(point![2.0, 2.0, 2.0], point![3.0, 3.0, 3.0]);
        assert_eq!(sphere.contains_box(&inner_box), Contains);
        assert_eq!(sphere.contains_box(&straddling_box), Intersects);
        assert_eq!(sphere.contains_box(&outer_box), Disjoint);
        assert!(sphere.intersects_box(&straddling_box));
        assert!(!sphere.intersects_box(&outer_box));
    }

    #[test]
    fn sphere_classification_against_planes_works() {
        let sphere = BoundingSphere::new(point![0.0, 2.0, 0.0], 1.0);
        assert_eq!(sphere.intersects_plane(&Plane::new(vector![0.0, 1.0, 0.0], 0.0)), Front);
        assert_eq!(sphere.intersects_plane(&Plane::new(vector![0.0, -1.0, 0.0], 0.0)), Back);
        assert_eq!(
            sphere.intersects_plane(&Plane::new(vector![0.0, 1.0, 0.0], -1.0)),
            Intersecting
        );
        assert_eq!(
            Plane::new(vector![0.0, 1.0, 0.0], -2.5).intersects_sphere(&sphere),
            Intersecting
        );
    }

    #[test]
    fn sphere_enclosing_frustum_contains_it() {
        let frustum = BoundingFrustum::new(Matrix4::identity());
        let sphere = BoundingSphere::new(Point3::origin(), 5.0);
        assert_eq!(sphere.contains_frustum(&frustum), Contains);
        assert!(sphere.intersects_frustum(&frustum));
    }

    #[test]
    fn sphere_containing_some_frustum_corners_intersects_it() {
        let frustum = BoundingFrustum::new(Matrix4::identity());
        let sphere = BoundingSphere::new(point![1.0, 1.0, 0.0], 0.5);
        assert_eq!(sphere.contains_frustum(&frustum), Intersects);
    }

    #[test]
    fn sphere_far_from_frustum_is_disjoint() {
        let sphere = BoundingSphere::new(Point3::origin(), 1.0);
        assert_eq!(sphere.contains_frustum(&distant_frustum()), Disjoint);
        assert!(!sphere.intersects_frustum(&distant_frustum()));
    }

    #[test]
    fn sphere_inside_large_frustum_intersects_it() {
        let projection = PerspectiveTransform::new(1.0, std::f64::consts::FRAC_PI_2, 0.1, 100.0)
            .unwrap()
            .into_matrix();
        let frustum = BoundingFrustum::new(projection);
        let sphere = BoundingSphere::new(point![0.0, 0.0, -10.0], 1.0);
        assert_eq!(sphere.contains_frustum(&frustum), Intersects);
    }

    #[test]
    fn transforming_sphere_moves_center_and_scales_radius_by_largest_scaling() {
        let sphere = BoundingSphere::new(point![1.0, 0.0, 0.0], 2.0);
        let transform_matrix = Translation3::new(0.0, 3.0, 0.0).to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&vector![2.0, 1.0, 0.5]);
        let transformed_sphere = sphere.transformed(&transform_matrix);
        assert_abs_diff_eq!(transformed_sphere.center(), &point![2.0, 3.0, 0.0]);
        assert_abs_diff_eq!(transformed_sphere.radius(), 4.0);
    }

    #[test]
    fn rotating_sphere_keeps_radius() {
        let sphere = BoundingSphere::new(point![1.0, 0.0, 0.0], 2.0);
        let rotation =
            UnitQuaternion::from_axis_angle(&nalgebra::Vector3::z_axis(), std::f64::consts::PI);
        let transformed_sphere = sphere.transformed(&rotation.to_homogeneous());
        assert_abs_diff_eq!(transformed_sphere.center(), &point![-1.0, 0.0, 0.0], epsilon = 1e-12);
        assert_abs_diff_eq!(transformed_sphere.radius(), 2.0, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn should_enclose_both_spheres_after_merging(
            sphere_1 in sphere_strategy(1e2, 1e2),
            sphere_2 in sphere_strategy(1e2, 1e2),
        ) {
            let merged = BoundingSphere::merged(&sphere_1, &sphere_2);
            let tolerance = 1e-9 * (1.0 + merged.radius());

            prop_assert!(merged.radius() >= sphere_1.radius().max(sphere_2.radius()) - tolerance);

            for sphere in [&sphere_1, &sphere_2] {
                prop_assert!(
                    nalgebra::distance(merged.center(), sphere.center())
                        <= merged.radius() + tolerance
                );
            }
        }
    }

    proptest! {
        #[test]
        fn should_enclose_all_points(points in points_strategy(1e3)) {
            let sphere = BoundingSphere::from_points(&points).unwrap();
            for point in &points {
                prop_assert!(
                    nalgebra::distance(sphere.center(), point)
                        <= sphere.radius() * (1.0 + 1e-9) + 1e-9
                );
            }
        }
    }

    proptest! {
        #[test]
        fn should_contain_own_center_when_radius_is_positive(
            sphere in sphere_strategy(1e3, 1e3),
        ) {
            prop_assume!(sphere.radius() > 0.0);
            prop_assert_eq!(sphere.contains_point(sphere.center()), Contains);
        }
    }

    proptest! {
        #[test]
        fn should_be_enclosed_by_own_bounding_box(sphere in sphere_strategy(1e3, 1e3)) {
            let bounding_box = BoundingBox::from_sphere(&sphere);
            prop_assert!(abs_diff_eq!(
                bounding_box.center(),
                *sphere.center(),
                epsilon = 1e-9 * (1.0 + sphere.radius())
            ));
            prop_assert!(bounding_box.intersects_sphere(&sphere));
        }
    }
}
