//! Authoritative scene: a transform hierarchy of mesh nodes plus the
//! currently loaded model's identity.
//!
//! The hierarchy is deliberately small — one root node per model, with
//! per-mesh children as the file dictates. Bounds extraction walks the tree
//! with accumulated world transforms; the loader builds trees from OBJ
//! files and normalizes them to a predictable size.

pub mod bounds;
pub mod loader;

pub use bounds::{compute_bounds, BoundingInfo};
use glam::{Mat4, Quat, Vec3};
pub use loader::{list_models, load_model, ModelEntry};

// ---------------------------------------------------------------------------
// Mesh
// ---------------------------------------------------------------------------

/// Triangle mesh data in node-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Per-vertex normals, parallel to `positions`.
    pub normals: Vec<Vec3>,
    /// Triangle indices into `positions`.
    pub indices: Vec<u32>,
    /// Flat base color for the whole mesh, linear RGB.
    pub color: [f32; 3],
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A node in the scene hierarchy: a local TRS transform, an optional mesh,
/// and child nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Local translation.
    pub translation: Vec3,
    /// Local rotation.
    pub rotation: Quat,
    /// Local scale.
    pub scale: Vec3,
    /// Mesh attached to this node, if any.
    pub mesh: Option<Mesh>,
    /// Child nodes, transformed relative to this node.
    pub children: Vec<SceneNode>,
    /// Whether this node (and its subtree) participates in rendering and
    /// bounds extraction.
    pub visible: bool,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            mesh: None,
            children: Vec::new(),
            visible: true,
        }
    }
}

impl SceneNode {
    /// Node-local transform matrix.
    #[must_use]
    pub fn local_transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.translation,
        )
    }

    /// Visit every visible mesh in the subtree with its accumulated world
    /// transform.
    pub fn visit_meshes<F: FnMut(&Mesh, Mat4)>(&self, visitor: &mut F) {
        self.visit_inner(Mat4::IDENTITY, visitor);
    }

    fn visit_inner<F: FnMut(&Mesh, Mat4)>(
        &self,
        parent: Mat4,
        visitor: &mut F,
    ) {
        if !self.visible {
            return;
        }
        let world = parent * self.local_transform();
        if let Some(mesh) = &self.mesh {
            visitor(mesh, world);
        }
        for child in &self.children {
            child.visit_inner(world, visitor);
        }
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The authoritative scene: at most one loaded model at a time.
#[derive(Debug, Default)]
pub struct Scene {
    /// Root node of the loaded model, if any.
    pub model: Option<SceneNode>,
    /// Display name of the loaded model (file stem).
    pub model_name: Option<String>,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation last consumed by the renderer.
    rendered_generation: u64,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the loaded model. Bumps the generation so the renderer
    /// re-uploads geometry.
    pub fn set_model(&mut self, root: SceneNode, name: String) {
        self.model = Some(root);
        self.model_name = Some(name);
        self.generation += 1;
    }

    /// Whether the scene changed since the renderer last consumed it.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Mark the current generation as consumed by the renderer.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad_mesh() -> Mesh {
        Mesh {
            positions: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![Vec3::Z; 4],
            indices: vec![0, 1, 2, 0, 2, 3],
            color: [0.8, 0.8, 0.8],
        }
    }

    #[test]
    fn visit_accumulates_parent_transforms() {
        let mut root = SceneNode {
            translation: Vec3::new(10.0, 0.0, 0.0),
            ..SceneNode::default()
        };
        root.children.push(SceneNode {
            translation: Vec3::new(0.0, 5.0, 0.0),
            mesh: Some(unit_quad_mesh()),
            ..SceneNode::default()
        });

        let mut transforms = Vec::new();
        root.visit_meshes(&mut |_, world| transforms.push(world));

        assert_eq!(transforms.len(), 1);
        let origin = transforms[0].transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(10.0, 5.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn hidden_subtrees_are_skipped() {
        let mut root = SceneNode::default();
        root.children.push(SceneNode {
            mesh: Some(unit_quad_mesh()),
            visible: false,
            ..SceneNode::default()
        });

        let mut count = 0;
        root.visit_meshes(&mut |_, _| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn generation_tracks_mutations() {
        let mut scene = Scene::new();
        assert!(!scene.is_dirty());
        scene.set_model(SceneNode::default(), "cube".into());
        assert!(scene.is_dirty());
        scene.mark_rendered();
        assert!(!scene.is_dirty());
    }
}
