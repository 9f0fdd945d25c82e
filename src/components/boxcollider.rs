use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned rectangular collider.
///
/// `offset` is the vector from the entity's [`MapPosition`](super::mapposition::MapPosition)
/// to the top-left corner of the box. Sensors detect overlap but are never a
/// physical obstacle; sensor-vs-sensor pairs are ignored entirely by the
/// collision detector.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
    pub sensor: bool,
}

impl BoxCollider {
    /// Create a solid collider with the given size, centered on the entity.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::new(-width * 0.5, -height * 0.5),
            sensor: false,
        }
    }

    /// Replace the centered offset with an explicit one.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Mark the collider as a sensor.
    pub fn as_sensor(mut self) -> Self {
        self.sensor = true;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        (p0.min(p1), p0.max(p1))
    }

    /// AABB vs AABB overlap test against another collider at another position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Penetration depth of the overlap on each axis, or `None` if the boxes
    /// do not overlap. Contact messages carry the smaller of the two.
    pub fn overlap_depth(&self, position: Vec2, other: &Self, other_position: Vec2) -> Option<Vec2> {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        let dx = max_a.x.min(max_b.x) - min_a.x.max(min_b.x);
        let dy = max_a.y.min(max_b.y) - min_a.y.max(min_b.y);
        if dx > 0.0 && dy > 0.0 {
            Some(Vec2::new(dx, dy))
        } else {
            None
        }
    }

    /// Point containment in world space.
    pub fn contains_point(&self, position: Vec2, point: Vec2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_centered_solid() {
        let c = BoxCollider::new(20.0, 60.0);
        assert_eq!(c.offset, Vec2::new(-10.0, -30.0));
        assert!(!c.sensor);
    }

    #[test]
    fn test_as_sensor() {
        let c = BoxCollider::new(30.0, 50.0).as_sensor();
        assert!(c.sensor);
    }

    #[test]
    fn test_aabb_with_offset() {
        let c = BoxCollider::new(10.0, 10.0).with_offset(Vec2::new(5.0, -5.0));
        let (min, max) = c.aabb(Vec2::new(100.0, 200.0));
        assert_eq!(min, Vec2::new(105.0, 195.0));
        assert_eq!(max, Vec2::new(115.0, 205.0));
    }

    #[test]
    fn test_overlaps_true_and_false() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(a.overlaps(Vec2::ZERO, &b, Vec2::new(9.0, 0.0)));
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(11.0, 0.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn test_overlap_depth() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        let depth = a.overlap_depth(Vec2::ZERO, &b, Vec2::new(8.0, 6.0)).unwrap();
        assert_eq!(depth, Vec2::new(2.0, 4.0));
        assert!(a.overlap_depth(Vec2::ZERO, &b, Vec2::new(20.0, 0.0)).is_none());
    }

    #[test]
    fn test_contains_point() {
        let c = BoxCollider::new(10.0, 10.0);
        assert!(c.contains_point(Vec2::ZERO, Vec2::new(4.0, -4.0)));
        assert!(!c.contains_point(Vec2::ZERO, Vec2::new(6.0, 0.0)));
    }
}
