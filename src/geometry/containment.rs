//! Classification of bounding volumes relative to each other and to planes.

use crate::{geometry::Plane, num::Float};
use nalgebra::Point3;

/// How one bounding volume relates to another.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainmentType {
    /// There is no overlap between the two volumes.
    Disjoint,
    /// The first volume completely contains the second.
    Contains,
    /// The volumes partially overlap.
    Intersects,
}

/// How a point or bounding volume is positioned relative to a plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaneIntersectionType {
    /// Everything lies strictly in the halfspace the plane normal points
    /// into.
    Front,
    /// Everything lies strictly in the halfspace behind the plane.
    Back,
    /// The plane is touched or crossed.
    Intersecting,
}

/// Anything that can be classified against a plane.
pub trait PlaneClassify<F: Float> {
    /// Determines on which side of the given plane this lies.
    fn classify_against_plane(&self, plane: &Plane<F>) -> PlaneIntersectionType;
}

impl ContainmentType {
    /// Whether the volumes overlap in any way.
    #[inline]
    pub fn is_overlapping(self) -> bool {
        self != Self::Disjoint
    }

    /// Reduces a sequence of plane classifications of a volume against the
    /// outward facing planes of a convex region into a containment type.
    ///
    /// Any plane with the volume fully in front of it makes the volume
    /// disjoint from the region. Otherwise the volume is contained unless
    /// some plane cuts through it.
    pub(crate) fn from_outward_plane_classifications(
        classifications: impl IntoIterator<Item = PlaneIntersectionType>,
    ) -> Self {
        let mut intersects = false;

        for classification in classifications {
            match classification {
                PlaneIntersectionType::Front => return Self::Disjoint,
                PlaneIntersectionType::Intersecting => {
                    intersects = true;
                }
                PlaneIntersectionType::Back => {}
            }
        }

        if intersects {
            Self::Intersects
        } else {
            Self::Contains
        }
    }

    /// Reduces the containment of each corner of a volume inside another
    /// volume, treating any corner outside as the volumes being disjoint.
    /// All corners enclosed gives [`Self::Contains`], otherwise the result
    /// is [`Self::Intersects`].
    ///
    /// Volumes overlapping without an enclosed corner, or with only some
    /// corners enclosed, are reported as disjoint.
    pub(crate) fn from_corner_containments_requiring_all(
        corner_containments: impl IntoIterator<Item = Self>,
    ) -> Self {
        let mut all_contained = true;

        for containment in corner_containments {
            match containment {
                Self::Disjoint => return Self::Disjoint,
                Self::Intersects => {
                    all_contained = false;
                }
                Self::Contains => {}
            }
        }

        if all_contained {
            Self::Contains
        } else {
            Self::Intersects
        }
    }

    /// Reduces the containment of each corner of a volume inside another
    /// volume. All corners inside gives [`Self::Contains`] and some corners
    /// inside gives [`Self::Intersects`]. If no corner is inside, the
    /// decision is deferred to `classify_without_corners`, since the volumes
    /// may still overlap without any corner being enclosed.
    pub(crate) fn from_corner_containments(
        corner_containments: impl IntoIterator<Item = Self>,
        classify_without_corners: impl FnOnce() -> Self,
    ) -> Self {
        let mut n_inside = 0;
        let mut n_total = 0;

        for containment in corner_containments {
            n_total += 1;
            if containment != Self::Disjoint {
                n_inside += 1;
            }
        }

        if n_inside == n_total {
            Self::Contains
        } else if n_inside > 0 {
            Self::Intersects
        } else if classify_without_corners() == Self::Disjoint {
            Self::Disjoint
        } else {
            Self::Intersects
        }
    }
}

impl PlaneIntersectionType {
    /// Classifies a signed distance, where a positive value means the front
    /// halfspace.
    #[inline]
    pub(crate) fn from_signed_distance<F: Float>(signed_distance: F) -> Self {
        if signed_distance > F::ZERO {
            Self::Front
        } else if signed_distance < F::ZERO {
            Self::Back
        } else {
            Self::Intersecting
        }
    }
}

impl<F: Float> PlaneClassify<F> for Point3<F> {
    fn classify_against_plane(&self, plane: &Plane<F>) -> PlaneIntersectionType {
        plane.intersects_point(self)
    }
}
