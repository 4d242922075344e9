//! Scene Graph Module
//!
//! The `FrameResolver` port through which placement code queries the host's
//! transform hierarchy, and `SceneGraph`, an in-memory hierarchy used by the
//! sandbox and the tests.

use super::Transform;

/// Identity of a host transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u32);

/// Read access to the host's transform hierarchy.
pub trait FrameResolver {
    /// Parent of a frame, `None` for roots and unknown frames.
    fn parent(&self, frame: FrameId) -> Option<FrameId>;

    /// World transform of a frame, `None` if the frame no longer exists.
    fn world_transform(&self, frame: FrameId) -> Option<Transform>;

    /// Object name of a frame.
    fn name(&self, frame: FrameId) -> Option<&str>;

    /// Nearest frame (the frame itself included) marked as the root of a
    /// world entity.
    fn entity_root(&self, frame: FrameId) -> Option<FrameId>;

    /// Walk from `frame` (inclusive) toward the root and return the first
    /// frame matching `predicate`.
    fn find_ancestor(
        &self,
        frame: FrameId,
        predicate: &dyn Fn(FrameId) -> bool,
    ) -> Option<FrameId> {
        let mut current = Some(frame);
        while let Some(id) = current {
            if predicate(id) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }

    /// Nearest frame (inclusive) with the given name.
    fn find_ancestor_named(&self, frame: FrameId, name: &str) -> Option<FrameId> {
        self.find_ancestor(frame, &|id| self.name(id) == Some(name))
    }
}

#[derive(Debug, Clone)]
struct SceneNode {
    name: String,
    parent: Option<FrameId>,
    local: Transform,
    entity_root: bool,
}

/// In-memory transform hierarchy.
///
/// Frames are never removed, so a `FrameId` stays valid for the life of the
/// graph.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame under `parent` with a transform relative to it.
    ///
    /// An unknown parent is treated as no parent.
    pub fn add_frame(
        &mut self,
        name: impl Into<String>,
        parent: Option<FrameId>,
        local: Transform,
    ) -> FrameId {
        let parent = parent.filter(|p| (p.0 as usize) < self.nodes.len());
        let id = FrameId(self.nodes.len() as u32);
        self.nodes.push(SceneNode {
            name: name.into(),
            parent,
            local,
            entity_root: false,
        });
        id
    }

    /// Add a root frame positioned in world space.
    pub fn add_root(&mut self, name: impl Into<String>, world: Transform) -> FrameId {
        self.add_frame(name, None, world)
    }

    /// Mark a frame as the root of a world entity.
    pub fn mark_entity_root(&mut self, frame: FrameId) {
        if let Some(node) = self.nodes.get_mut(frame.0 as usize) {
            node.entity_root = true;
        }
    }

    pub fn local_transform(&self, frame: FrameId) -> Option<Transform> {
        self.node(frame).map(|n| n.local)
    }

    pub fn set_local_transform(&mut self, frame: FrameId, local: Transform) {
        if let Some(node) = self.nodes.get_mut(frame.0 as usize) {
            node.local = local;
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, frame: FrameId) -> Option<&SceneNode> {
        self.nodes.get(frame.0 as usize)
    }
}

impl FrameResolver for SceneGraph {
    fn parent(&self, frame: FrameId) -> Option<FrameId> {
        self.node(frame).and_then(|n| n.parent)
    }

    fn world_transform(&self, frame: FrameId) -> Option<Transform> {
        let node = self.node(frame)?;
        match node.parent {
            Some(parent) => {
                let parent_world = self.world_transform(parent)?;
                Some(parent_world.mul_transform(&node.local))
            }
            None => Some(node.local),
        }
    }

    fn name(&self, frame: FrameId) -> Option<&str> {
        self.node(frame).map(|n| n.name.as_str())
    }

    fn entity_root(&self, frame: FrameId) -> Option<FrameId> {
        self.find_ancestor(frame, &|id| self.node(id).is_some_and(|n| n.entity_root))
    }
}
