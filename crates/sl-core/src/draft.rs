//! The in-progress sketch: an ordered sequence of picked ground points

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ordered sequence of ground-plane points accumulated while sketching.
///
/// Insertion order is drawing order. Every ground pick is recorded; whether
/// the sequence can be extruded is a separate question answered by
/// [`DraftPolygon::is_extrudable`], so an over-long sketch is reported at
/// extrusion time instead of being silently truncated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftPolygon {
    points: Vec<Vec3>,
}

impl DraftPolygon {
    /// Fewest points an extrusion can consume (pyramid)
    pub const MIN_POINTS: usize = 3;
    /// Most points an extrusion can consume (cuboid)
    pub const MAX_POINTS: usize = 4;

    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a picked point
    pub fn push(&mut self, point: Vec3) {
        self.points.push(point);
    }

    /// Discard all points
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Number of points picked so far
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no points have been picked
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The picked points, in drawing order
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Check if the current point count supports an extrusion
    pub fn is_extrudable(&self) -> bool {
        (Self::MIN_POINTS..=Self::MAX_POINTS).contains(&self.points.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_empty() {
        let d = DraftPolygon::new();
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
        assert!(!d.is_extrudable());
    }

    #[test]
    fn test_push_preserves_order() {
        let mut d = DraftPolygon::new();
        d.push(Vec3::new(1.0, 0.0, 2.0));
        d.push(Vec3::new(3.0, 0.0, 4.0));
        assert_eq!(d.len(), 2);
        assert_eq!(d.points()[0], Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(d.points()[1], Vec3::new(3.0, 0.0, 4.0));
    }

    #[test]
    fn test_extrudable_only_with_three_or_four_points() {
        let mut d = DraftPolygon::new();
        for count in 1..=6 {
            d.push(Vec3::ZERO);
            assert_eq!(d.is_extrudable(), count == 3 || count == 4);
        }
    }

    #[test]
    fn test_clear_discards_points() {
        let mut d = DraftPolygon::new();
        d.push(Vec3::ONE);
        d.push(Vec3::ONE);
        d.clear();
        assert!(d.is_empty());
    }
}
