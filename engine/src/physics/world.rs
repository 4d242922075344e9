//! Physics World
//!
//! Brute-force in-memory collider set implementing [`RayCaster`] and
//! [`ColliderHost`]. Used by the sandbox binary and tests to stand in for the
//! host's physics scene.

use glam::Vec3;

use super::collision::{aabb_surface_normal, ray_aabb_intersect, ray_triangle_intersect};
use super::{
    ColliderHost, ColliderId, ColliderKind, ColliderState, LayerMask, RayCaster, RaycastHit,
};
use crate::scene::{FrameId, FrameResolver, Transform};

/// Collision geometry in the collider's local space.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Box centred on the frame origin
    Cuboid { half_extents: Vec3 },
    /// Triangle soup; an empty list models a mesh collider with no mesh bound
    TriangleMesh { triangles: Vec<[Vec3; 3]> },
}

impl Shape {
    pub fn kind(&self) -> ColliderKind {
        match self {
            Shape::Cuboid { .. } => ColliderKind::Primitive,
            Shape::TriangleMesh { triangles } => ColliderKind::Mesh {
                shared_mesh: !triangles.is_empty(),
            },
        }
    }
}

/// A collider attached to a scene frame.
#[derive(Debug, Clone)]
pub struct Collider {
    pub id: ColliderId,
    pub frame: FrameId,
    pub shape: Shape,
    pub state: ColliderState,
    /// World transform of `frame`, refreshed by [`PhysicsWorld::sync`]
    transform: Transform,
}

impl Collider {
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Nearest hit of a normalized world ray, as (distance, world normal).
    fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<(f32, Vec3)> {
        let local_origin = self.transform.inverse_transform_point(origin);
        let local_dir =
            self.transform.inverse_transform_direction(direction) / self.transform.scale;

        let (t, local_normal) = match &self.shape {
            Shape::Cuboid { half_extents } => {
                let t = ray_aabb_intersect(local_origin, local_dir, -*half_extents, *half_extents)?;
                let local_point = local_origin + local_dir * t;
                (t, aabb_surface_normal(local_point, -*half_extents, *half_extents))
            }
            Shape::TriangleMesh { triangles } => triangles
                .iter()
                .filter_map(|tri| ray_triangle_intersect(local_origin, local_dir, tri))
                .min_by(|a, b| a.0.total_cmp(&b.0))?,
        };

        let normal = self
            .transform
            .transform_direction(local_normal / self.transform.scale)
            .try_normalize()?;
        Some((t, normal))
    }
}

/// In-memory set of colliders.
#[derive(Debug, Clone, Default)]
pub struct PhysicsWorld {
    colliders: Vec<Collider>,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a collider to `frame` on `layer`.
    ///
    /// The frame's current world transform is captured; call [`sync`](Self::sync)
    /// after moving frames. A frame the resolver does not know sits at the
    /// origin.
    pub fn add_collider(
        &mut self,
        scene: &dyn FrameResolver,
        frame: FrameId,
        shape: Shape,
        layer: u8,
    ) -> ColliderId {
        let id = ColliderId(self.colliders.len() as u32);
        self.colliders.push(Collider {
            id,
            frame,
            shape,
            state: ColliderState {
                layer,
                ..ColliderState::default()
            },
            transform: scene.world_transform(frame).unwrap_or_default(),
        });
        id
    }

    pub fn add_cuboid(
        &mut self,
        scene: &dyn FrameResolver,
        frame: FrameId,
        half_extents: Vec3,
        layer: u8,
    ) -> ColliderId {
        self.add_collider(scene, frame, Shape::Cuboid { half_extents }, layer)
    }

    pub fn add_mesh(
        &mut self,
        scene: &dyn FrameResolver,
        frame: FrameId,
        triangles: Vec<[Vec3; 3]>,
        layer: u8,
    ) -> ColliderId {
        self.add_collider(scene, frame, Shape::TriangleMesh { triangles }, layer)
    }

    /// Refresh every collider's cached world transform.
    pub fn sync(&mut self, scene: &dyn FrameResolver) {
        for collider in &mut self.colliders {
            if let Some(transform) = scene.world_transform(collider.frame) {
                collider.transform = transform;
            }
        }
    }

    pub fn get(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: ColliderId) -> Option<&mut Collider> {
        self.colliders.get_mut(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl RayCaster for PhysicsWorld {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RaycastHit> {
        let direction = direction.try_normalize()?;
        let mut closest: Option<RaycastHit> = None;
        let mut closest_dist = max_distance;

        for collider in &self.colliders {
            let state = &collider.state;
            if !state.enabled || state.is_trigger || !mask.contains(state.layer) {
                continue;
            }
            if let Some((t, normal)) = collider.intersect(origin, direction)
                && t <= closest_dist
            {
                closest_dist = t;
                closest = Some(RaycastHit {
                    point: origin + direction * t,
                    normal,
                    distance: t,
                    frame: collider.frame,
                    collider: collider.id,
                    kind: collider.shape.kind(),
                });
            }
        }

        closest
    }
}

impl ColliderHost for PhysicsWorld {
    fn collider_state(&self, collider: ColliderId) -> Option<ColliderState> {
        self.get(collider).map(|c| c.state)
    }

    fn restore_collider_state(&mut self, collider: ColliderId, state: ColliderState) {
        if let Some(c) = self.get_mut(collider) {
            c.state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneGraph;
    use glam::Quat;
    use std::f32::consts::FRAC_PI_2;

    fn floor_scene() -> (SceneGraph, PhysicsWorld, ColliderId) {
        let mut graph = SceneGraph::new();
        let floor = graph.add_root("Floor", Transform::from_position(Vec3::new(0.0, -0.5, 0.0)));
        let mut world = PhysicsWorld::new();
        let id = world.add_cuboid(&graph, floor, Vec3::new(10.0, 0.5, 10.0), 0);
        (graph, world, id)
    }

    #[test]
    fn test_raycast_hits_floor_top() {
        let (_, world, id) = floor_scene();
        let hit = world
            .raycast(Vec3::new(1.0, 2.0, 1.0), Vec3::new(0.0, -4.0, 0.0), 10.0, LayerMask::ALL)
            .expect("should hit floor");
        assert_eq!(hit.collider, id);
        assert!((hit.point - Vec3::new(1.0, 0.0, 1.0)).length() < 1e-4);
        assert!((hit.normal - Vec3::Y).length() < 1e-4);
        assert!((hit.distance - 2.0).abs() < 1e-4);
        assert_eq!(hit.kind, ColliderKind::Primitive);
    }

    #[test]
    fn test_raycast_respects_distance_and_mask() {
        let (_, world, _) = floor_scene();
        let origin = Vec3::new(0.0, 2.0, 0.0);
        assert!(world.raycast(origin, Vec3::NEG_Y, 1.5, LayerMask::ALL).is_none());
        assert!(world.raycast(origin, Vec3::NEG_Y, 5.0, LayerMask::layer(4)).is_none());
        assert!(world.raycast(origin, Vec3::ZERO, 5.0, LayerMask::ALL).is_none());
    }

    #[test]
    fn test_raycast_skips_triggers_and_disabled() {
        let (_, mut world, id) = floor_scene();
        let origin = Vec3::new(0.0, 2.0, 0.0);
        world.get_mut(id).unwrap().state.is_trigger = true;
        assert!(world.raycast(origin, Vec3::NEG_Y, 5.0, LayerMask::ALL).is_none());
        world.get_mut(id).unwrap().state = ColliderState {
            enabled: false,
            ..ColliderState::default()
        };
        assert!(world.raycast(origin, Vec3::NEG_Y, 5.0, LayerMask::ALL).is_none());
    }

    #[test]
    fn test_raycast_rotated_box_normal() {
        let mut graph = SceneGraph::new();
        let quarter_turn = Quat::from_rotation_y(FRAC_PI_2);
        let wall_local = Transform::from_position_rotation(Vec3::new(0.0, 1.0, 5.0), quarter_turn);
        let wall = graph.add_root("Wall", wall_local);
        let mut world = PhysicsWorld::new();
        // half extents along local z become world x after the yaw
        world.add_cuboid(&graph, wall, Vec3::new(0.1, 2.0, 3.0), 0);
        let hit = world.raycast(Vec3::new(0.0, 1.0, 0.0), Vec3::Z, 10.0, LayerMask::ALL).unwrap();
        assert!((hit.point.z - 4.9).abs() < 1e-4);
        assert!((hit.normal - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn test_nearest_collider_wins() {
        let mut graph = SceneGraph::new();
        let low = graph.add_root("Low", Transform::from_position(Vec3::new(0.0, 0.0, 0.0)));
        let high = graph.add_root("High", Transform::from_position(Vec3::new(0.0, 1.0, 0.0)));
        let mut world = PhysicsWorld::new();
        world.add_cuboid(&graph, low, Vec3::splat(0.25), 0);
        let top = world.add_cuboid(&graph, high, Vec3::splat(0.25), 0);
        let hit = world
            .raycast(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, 10.0, LayerMask::ALL)
            .unwrap();
        assert_eq!(hit.collider, top);
    }

    #[test]
    fn test_mesh_kind_and_hit() {
        let mut graph = SceneGraph::new();
        let terrain = graph.add_root("Terrain", Transform::IDENTITY);
        let mut world = PhysicsWorld::new();
        let tri = [Vec3::new(-5.0, 0.0, -5.0), Vec3::new(5.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 5.0)];
        world.add_mesh(&graph, terrain, vec![tri], 0);
        let hit = world
            .raycast(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y, 5.0, LayerMask::ALL)
            .unwrap();
        assert!(hit.kind.has_shared_mesh());
        assert!((hit.normal - Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn test_sync_follows_moved_frame() {
        let (mut graph, mut world, _) = floor_scene();
        let floor = FrameId(0);
        graph.set_local_transform(floor, Transform::from_position(Vec3::new(0.0, -1.5, 0.0)));
        world.sync(&graph);
        let hit = world
            .raycast(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Y, 10.0, LayerMask::ALL)
            .unwrap();
        assert!((hit.point.y - -1.0).abs() < 1e-4);
    }

    #[test]
    fn test_collider_host_round_trip() {
        let (_, mut world, id) = floor_scene();
        let original = world.collider_state(id).unwrap();
        let changed = ColliderState {
            enabled: false,
            is_trigger: true,
            layer: 2,
        };
        world.restore_collider_state(id, changed);
        assert!(!world.collider_state(id).unwrap().enabled);
        world.restore_collider_state(id, original);
        assert_eq!(world.collider_state(id), Some(original));
        assert_eq!(world.collider_state(ColliderId(42)), None);
    }
}
