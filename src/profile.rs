//! Closed profile polygons cut from an integrated [`Curve`].
//!
//! The profile is the part of the curve that stays on the non-negative radial
//! side of the axis of revolution, closed back onto the axis so that a
//! rotational sweep of it is a solid.

use crate::curve::Curve;
use crate::float_types::Real;
use geo::{Area, LineString, Polygon as GeoPolygon};
use nalgebra::Point2;
use tracing::debug;

/// Vertex ring of a droplet profile: `start`, the kept samples, then `closure`.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    start: Point2<Real>,
    kept: Vec<Point2<Real>>,
    closure: Point2<Real>,
    truncated_at: Option<usize>,
}

impl Profile {
    /// Cut the profile from `curve`.
    ///
    /// Samples are scanned from index 1. Each one with a radial coordinate `>= 0`
    /// is kept; the first one that fails the test ends the scan, and nothing after
    /// it is considered even if it swings back to the positive side. A NaN radial
    /// coordinate fails the test too.
    ///
    /// The ring starts on the axis at the height of the first sample and ends on
    /// the axis at the height of the last kept sample (the first sample's height
    /// if nothing was kept).
    pub fn from_curve(curve: &Curve) -> Self {
        let first = curve.samples().first().map_or(0.0, |s| s.position.y);
        let generated = curve.len().saturating_sub(1);

        let kept: Vec<Point2<Real>> = curve
            .positions()
            .skip(1)
            .take_while(|p| p.x >= 0.0)
            .collect();

        let truncated_at = (kept.len() < generated).then_some(kept.len() + 1);
        let tip = kept.last().map_or(first, |p| p.y);

        debug!(
            kept = kept.len(),
            generated,
            ?truncated_at,
            "profile cut from curve"
        );

        Self {
            start: Point2::new(0.0, first),
            kept,
            closure: Point2::new(0.0, tip),
            truncated_at,
        }
    }

    /// First vertex, on the axis.
    pub const fn start(&self) -> Point2<Real> {
        self.start
    }

    /// Samples that survived truncation, in step order.
    pub fn kept(&self) -> &[Point2<Real>] {
        &self.kept
    }

    /// Last vertex, back on the axis at the height of the last kept sample.
    pub const fn closure(&self) -> Point2<Real> {
        self.closure
    }

    /// Index of the sample that ended the scan, or `None` when every generated
    /// sample was kept.
    pub const fn truncated_at(&self) -> Option<usize> {
        self.truncated_at
    }

    /// Number of vertices written for this profile.
    pub fn vertex_count(&self) -> usize {
        self.kept.len() + 2
    }

    /// All vertices in output order.
    pub fn vertices(&self) -> impl Iterator<Item = Point2<Real>> + '_ {
        std::iter::once(self.start)
            .chain(self.kept.iter().copied())
            .chain(std::iter::once(self.closure))
    }

    /// The vertex ring as a planar `geo` polygon; `geo` closes the ring.
    pub fn to_polygon(&self) -> GeoPolygon<Real> {
        let coords: Vec<(Real, Real)> = self.vertices().map(|p| (p.x, p.y)).collect();
        GeoPolygon::new(LineString::from(coords), vec![])
    }

    /// Unsigned area enclosed by the ring. Self-intersections are not resolved.
    pub fn area(&self) -> Real {
        self.to_polygon().unsigned_area()
    }
}
