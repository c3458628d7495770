//! Bounding volumes and their containment and intersection tests.
//!
//! The crate provides planes, rays, axis-aligned boxes, spheres and view
//! frustums, generic over the floating point type, together with the full
//! set of pairwise containment and intersection predicates between them.
//! Linear algebra is delegated to [`nalgebra`].

#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(clippy::cast_lossless)]

#[macro_use]
mod macros;

pub mod geometry;
pub mod num;
