//! Culls a grid of boxes and spheres against a camera frustum and reports
//! which of them are visible.
//!
//! Run with `RUST_LOG=info` (or `debug` for the individual volumes).

use anyhow::Result;
use nalgebra::{Point3, Vector3, point};
use std::f64::consts::FRAC_PI_3;
use xna_bounds::geometry::{
    BoundingBox, BoundingFrustum, BoundingSphere, ContainmentType, PerspectiveTransform, Ray,
    look_at_view_matrix,
};

const GRID_HALF_EXTENT: i32 = 10;
const GRID_SPACING: f64 = 4.0;

fn main() -> Result<()> {
    init_logging()?;

    let frustum = create_camera_frustum()?;

    let (box_counts, sphere_counts) = cull_grid(&frustum);

    log::info!(
        "Boxes: {} inside, {} intersecting, {} culled",
        box_counts.contains,
        box_counts.intersects,
        box_counts.disjoint
    );
    log::info!(
        "Spheres: {} inside, {} intersecting, {} culled",
        sphere_counts.contains,
        sphere_counts.intersects,
        sphere_counts.disjoint
    );

    let view_sphere = BoundingSphere::from_frustum(&frustum);
    log::info!(
        "Frustum is bounded by the sphere at {} with radius {:.2}, and by the box {:?}",
        view_sphere.center(),
        view_sphere.radius(),
        frustum.compute_aabb()
    );

    let pick_ray = Ray::new(point![0.0, 2.0, 10.0], Vector3::new(0.0, 0.0, -1.0));
    match pick_ray.intersects_frustum(&frustum) {
        Some(distance) => log::info!("Pick ray enters the frustum at distance {:.3}", distance),
        None => log::info!("Pick ray misses the frustum"),
    }

    Ok(())
}

fn init_logging() -> Result<()> {
    env_logger::init();
    Ok(())
}

fn create_camera_frustum() -> Result<BoundingFrustum<f64>> {
    let projection = PerspectiveTransform::new(16.0 / 9.0, FRAC_PI_3, 0.5, 60.0)?;
    let view = look_at_view_matrix(
        &point![0.0, 2.0, 5.0],
        &Point3::origin(),
        &Vector3::y(),
    );
    Ok(BoundingFrustum::new(projection.into_matrix() * view))
}

#[derive(Clone, Copy, Debug, Default)]
struct ContainmentCounts {
    contains: usize,
    intersects: usize,
    disjoint: usize,
}

impl ContainmentCounts {
    fn record(&mut self, containment: ContainmentType) {
        match containment {
            ContainmentType::Contains => self.contains += 1,
            ContainmentType::Intersects => self.intersects += 1,
            ContainmentType::Disjoint => self.disjoint += 1,
        }
    }
}

fn cull_grid(frustum: &BoundingFrustum<f64>) -> (ContainmentCounts, ContainmentCounts) {
    let mut box_counts = ContainmentCounts::default();
    let mut sphere_counts = ContainmentCounts::default();

    for i in -GRID_HALF_EXTENT..=GRID_HALF_EXTENT {
        for k in -GRID_HALF_EXTENT..=GRID_HALF_EXTENT {
            let center = point![
                f64::from(i) * GRID_SPACING,
                0.0,
                f64::from(k) * GRID_SPACING
            ];

            let half_extent = Vector3::repeat(0.5);
            let bounding_box = BoundingBox::new(center - half_extent, center + half_extent);
            let box_containment = frustum.contains_box(&bounding_box);
            box_counts.record(box_containment);

            let sphere = BoundingSphere::new(center + Vector3::y() * 2.0, 0.75);
            let sphere_containment = frustum.contains_sphere(&sphere);
            sphere_counts.record(sphere_containment);

            log::debug!(
                "Volumes at {}: box {:?}, sphere {:?}",
                center,
                box_containment,
                sphere_containment
            );
        }
    }

    (box_counts, sphere_counts)
}
