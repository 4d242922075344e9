//! Collision detection module
//!
//! Ray intersection primitives used by the in-memory physics world.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//! Oriented boxes are handled by the caller moving the ray into box space.
//!
//! # Ray-Triangle Intersection
//!
//! Möller–Trumbore, two-sided. The returned normal is flipped to face the
//! incoming ray.

use glam::Vec3;

/// Determinant below which a ray is treated as parallel to a triangle.
const PARALLEL_EPSILON: f32 = 1e-7;

/// Performs ray-AABB intersection test using the slab method.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (need not be normalized; `t` is in
///   multiples of it)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Ray parameter of the nearest intersection (t >= 0)
/// * `None` - No intersection or intersection is behind the ray origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    // Near-zero directions become huge inverses so that slab is either
    // always or never entered
    let inv = |d: f32| {
        if d.abs() > 1e-10 {
            1.0 / d
        } else {
            f32::MAX * d.signum()
        }
    };
    let inv_dir = Vec3::new(inv(ray_dir.x), inv(ray_dir.y), inv(ray_dir.z));

    let t1 = (aabb_min - ray_origin) * inv_dir;
    let t2 = (aabb_max - ray_origin) * inv_dir;

    let t_min = t1.min(t2).max_element();
    let t_max = t1.max(t2).min_element();

    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 {
            Some(t_min)
        } else {
            // Ray starts inside the AABB
            Some(t_max)
        }
    } else {
        None
    }
}

/// Computes the outward normal of the AABB face closest to `point`.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = (aabb_max - aabb_min) * 0.5;
    let normalized = (point - center) / half_extents;
    let abs_normalized = normalized.abs();

    if abs_normalized.x >= abs_normalized.y && abs_normalized.x >= abs_normalized.z {
        Vec3::new(normalized.x.signum(), 0.0, 0.0)
    } else if abs_normalized.y >= abs_normalized.z {
        Vec3::new(0.0, normalized.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, normalized.z.signum())
    }
}

/// Intersects a ray with a triangle.
///
/// # Returns
///
/// * `Some((t, normal))` - Ray parameter of the hit and the unit triangle
///   normal facing against `ray_dir`
/// * `None` - Miss, hit behind the origin, or degenerate triangle
pub fn ray_triangle_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    triangle: &[Vec3; 3],
) -> Option<(f32, Vec3)> {
    let [a, b, c] = *triangle;
    let edge1 = b - a;
    let edge2 = c - a;

    let p = ray_dir.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let s = ray_origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = ray_dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    if t < 0.0 {
        return None;
    }

    let mut normal = edge1.cross(edge2).try_normalize()?;
    if normal.dot(ray_dir) > 0.0 {
        normal = -normal;
    }
    Some((t, normal))
}
