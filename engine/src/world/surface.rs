//! Surface Classification
//!
//! Buckets a world-space surface normal into ground, wall or ceiling by its
//! vertical component.

use glam::Vec3;

/// Normal Y threshold separating walls from ground and ceilings.
pub const SURFACE_SLOPE_THRESHOLD: f32 = 0.33;

/// Kind of surface a ray struck, derived from the hit normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceType {
    /// Normal points mostly up
    Ground,
    /// Normal is mostly horizontal
    Wall,
    /// Normal points mostly down
    Ceiling,
}

impl SurfaceType {
    /// Classify a world-space normal.
    pub fn from_normal(normal: Vec3) -> Self {
        if normal.y < -SURFACE_SLOPE_THRESHOLD {
            SurfaceType::Ceiling
        } else if normal.y < SURFACE_SLOPE_THRESHOLD {
            SurfaceType::Wall
        } else {
            SurfaceType::Ground
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_normals() {
        assert_eq!(SurfaceType::from_normal(Vec3::Y), SurfaceType::Ground);
        assert_eq!(SurfaceType::from_normal(Vec3::NEG_Y), SurfaceType::Ceiling);
        assert_eq!(SurfaceType::from_normal(Vec3::X), SurfaceType::Wall);
        assert_eq!(SurfaceType::from_normal(Vec3::NEG_Z), SurfaceType::Wall);
    }

    #[test]
    fn test_slopes() {
        // 45 degree ramp is still ground
        let ramp = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert_eq!(SurfaceType::from_normal(ramp), SurfaceType::Ground);
        let steep = Vec3::new(1.0, 0.3, 0.0).normalize();
        assert_eq!(SurfaceType::from_normal(steep), SurfaceType::Wall);
    }
}
