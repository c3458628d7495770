//! Projection and view transformations for building frustums.

use crate::num::Float;
use anyhow::{Result, bail};
use nalgebra::{Matrix4, Point3, Vector3};

/// A perspective transformation that maps points in a view frustum pointing
/// along the negative z-axis into the box spanning from -1 to 1 in x and y
/// and from 0 to 1 in z in normalized device coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerspectiveTransform<F: Float> {
    matrix: Matrix4<F>,
}

/// An orthographic transformation that maps points in an axis-aligned box
/// in front of the viewer along the negative z-axis into the box spanning
/// from -1 to 1 in x and y and from 0 to 1 in z in normalized device
/// coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrthographicTransform<F: Float> {
    matrix: Matrix4<F>,
}

/// Creates the matrix of the right-handed view transformation for a viewer at
/// `eye` looking towards `target`, with `up` giving the upward direction. In
/// view space the viewer looks along the negative z-axis.
pub fn look_at_view_matrix<F: Float>(
    eye: &Point3<F>,
    target: &Point3<F>,
    up: &Vector3<F>,
) -> Matrix4<F> {
    Matrix4::look_at_rh(eye, target, up)
}

impl<F: Float> PerspectiveTransform<F> {
    /// Creates a new perspective transformation.
    ///
    /// # Note
    /// `aspect_ratio` is the ratio of width to height of the view plane, and
    /// `vertical_field_of_view` is given in radians.
    ///
    /// # Errors
    /// Returns an error if the aspect ratio is not positive, the field of
    /// view is not between zero and π, the near distance is not positive or
    /// the far distance does not exceed the near distance.
    pub fn new(
        aspect_ratio: F,
        vertical_field_of_view: F,
        near_distance: F,
        far_distance: F,
    ) -> Result<Self> {
        if aspect_ratio <= F::ZERO {
            bail!("Invalid aspect ratio for perspective transform: {}", aspect_ratio);
        }
        if vertical_field_of_view <= F::ZERO || vertical_field_of_view >= F::pi() {
            bail!(
                "Invalid vertical field of view for perspective transform: {}",
                vertical_field_of_view
            );
        }
        if near_distance <= F::ZERO {
            bail!(
                "Invalid near distance for perspective transform: {}",
                near_distance
            );
        }
        if far_distance <= near_distance {
            bail!(
                "Far distance {} for perspective transform does not exceed near distance {}",
                far_distance,
                near_distance
            );
        }

        let y_scale = F::ONE / (vertical_field_of_view * F::ONE_HALF).tan();
        let inverse_depth_range = F::ONE / (near_distance - far_distance);

        let mut matrix = Matrix4::zeros();
        matrix.m11 = y_scale / aspect_ratio;
        matrix.m22 = y_scale;
        matrix.m33 = far_distance * inverse_depth_range;
        matrix.m34 = near_distance * far_distance * inverse_depth_range;
        matrix.m43 = F::NEG_ONE;

        Ok(Self { matrix })
    }

    /// Returns the matrix of the transformation.
    #[inline]
    pub fn matrix(&self) -> &Matrix4<F> {
        &self.matrix
    }

    /// Returns the matrix of the transformation by value.
    #[inline]
    pub fn into_matrix(self) -> Matrix4<F> {
        self.matrix
    }

    /// Returns the ratio of width to height of the view frustum.
    pub fn aspect_ratio(&self) -> F {
        self.matrix.m22 / self.matrix.m11
    }

    /// Returns the vertical field of view angle in radians.
    pub fn vertical_field_of_view(&self) -> F {
        F::TWO * (F::ONE / self.matrix.m22).atan()
    }

    /// Returns the near distance of the view frustum.
    pub fn near_distance(&self) -> F {
        self.matrix.m34 / self.matrix.m33
    }

    /// Returns the far distance of the view frustum.
    pub fn far_distance(&self) -> F {
        self.matrix.m34 / (F::ONE + self.matrix.m33)
    }
}

impl<F: Float> OrthographicTransform<F> {
    /// Creates a new orthographic transformation for a view box with the
    /// given width and height, extending from the near to the far distance
    /// along the negative z-axis.
    ///
    /// # Errors
    /// Returns an error if the width or height is not positive or the far
    /// distance does not exceed the near distance.
    pub fn new(width: F, height: F, near_distance: F, far_distance: F) -> Result<Self> {
        if width <= F::ZERO || height <= F::ZERO {
            bail!(
                "Invalid view extent for orthographic transform: {} x {}",
                width,
                height
            );
        }
        if far_distance <= near_distance {
            bail!(
                "Far distance {} for orthographic transform does not exceed near distance {}",
                far_distance,
                near_distance
            );
        }

        let inverse_depth_range = F::ONE / (near_distance - far_distance);

        let mut matrix = Matrix4::identity();
        matrix.m11 = F::TWO / width;
        matrix.m22 = F::TWO / height;
        matrix.m33 = inverse_depth_range;
        matrix.m34 = near_distance * inverse_depth_range;

        Ok(Self { matrix })
    }

    /// Returns the matrix of the transformation.
    #[inline]
    pub fn matrix(&self) -> &Matrix4<F> {
        &self.matrix
    }

    /// Returns the matrix of the transformation by value.
    #[inline]
    pub fn into_matrix(self) -> Matrix4<F> {
        self.matrix
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{BoundingFrustum, ContainmentType};
    use approx::assert_abs_diff_eq;
    use nalgebra::{point, vector};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn creating_perspective_transform_works() {
        let transform = PerspectiveTransform::new(1.5, FRAC_PI_4, 0.2, 350.0).unwrap();
        assert_abs_diff_eq!(transform.aspect_ratio(), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(transform.vertical_field_of_view(), FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(transform.near_distance(), 0.2, epsilon = 1e-9);
        assert_abs_diff_eq!(transform.far_distance(), 350.0, epsilon = 1e-6);
        assert_eq!(transform.matrix().m43, -1.0);
        assert_eq!(transform.matrix().m44, 0.0);
    }

    #[test]
    fn perspective_transform_maps_near_and_far_plane_to_unit_depth_range() {
        let matrix = PerspectiveTransform::new(1.0, FRAC_PI_2, 1.0, 10.0)
            .unwrap()
            .into_matrix();

        let near_point = matrix.transform_point(&point![0.0, 0.0, -1.0]);
        let far_point = matrix.transform_point(&point![0.0, 0.0, -10.0]);
        let edge_point = matrix.transform_point(&point![5.0, 5.0, -5.0]);

        assert_abs_diff_eq!(near_point.z, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(far_point.z, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(edge_point.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(edge_point.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn creating_perspective_transform_with_invalid_parameters_fails() {
        assert!(PerspectiveTransform::new(0.0, FRAC_PI_4, 1.0, 10.0).is_err());
        assert!(PerspectiveTransform::new(1.0, 0.0, 1.0, 10.0).is_err());
        assert!(PerspectiveTransform::new(1.0, PI, 1.0, 10.0).is_err());
        assert!(PerspectiveTransform::new(1.0, FRAC_PI_4, 0.0, 10.0).is_err());
        assert!(PerspectiveTransform::new(1.0, FRAC_PI_4, 10.0, 10.0).is_err());
    }

    #[test]
    fn orthographic_transform_maps_view_box_to_unit_depth_range() {
        let matrix = OrthographicTransform::new(4.0, 2.0, 1.0, 11.0)
            .unwrap()
            .into_matrix();

        let near_corner = matrix.transform_point(&point![2.0, 1.0, -1.0]);
        let far_corner = matrix.transform_point(&point![-2.0, -1.0, -11.0]);

        assert_abs_diff_eq!(near_corner, point![1.0, 1.0, 0.0], epsilon = 1e-12);
        assert_abs_diff_eq!(far_corner, point![-1.0, -1.0, 1.0], epsilon = 1e-12);
    }

    #[test]
    fn creating_orthographic_transform_with_invalid_parameters_fails() {
        assert!(OrthographicTransform::new(0.0, 1.0, 0.0, 1.0).is_err());
        assert!(OrthographicTransform::new(1.0, -1.0, 0.0, 1.0).is_err());
        assert!(OrthographicTransform::new(1.0, 1.0, 2.0, 1.0).is_err());
    }

    #[test]
    fn look_at_view_matrix_moves_eye_to_origin_looking_down_negative_z() {
        let eye = point![1.0, 2.0, 3.0];
        let target = point![1.0, 2.0, -7.0];
        let view = look_at_view_matrix(&eye, &target, &Vector3::y());

        assert_abs_diff_eq!(view.transform_point(&eye), Point3::origin(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            view.transform_point(&target),
            point![0.0, 0.0, -10.0],
            epsilon = 1e-12
        );
    }

    #[test]
    fn orthographic_frustum_matches_view_box() {
        let matrix = OrthographicTransform::new(2.0, 2.0, 0.0, 5.0)
            .unwrap()
            .into_matrix();
        let frustum = BoundingFrustum::new(matrix);

        assert_eq!(
            frustum.contains_point(&point![0.5, -0.5, -4.0]),
            ContainmentType::Contains
        );
        assert_eq!(
            frustum.contains_point(&point![0.0, 0.0, 1.0]),
            ContainmentType::Disjoint
        );
        assert_abs_diff_eq!(frustum.near().normal(), &vector![0.0, 0.0, 1.0], epsilon = 1e-12);
    }
}
