//! World-space bounds extraction over the scene hierarchy.

use glam::Vec3;

use super::SceneNode;

/// Axis-aligned bounds of a node subtree, in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingInfo {
    /// Box center.
    pub center: Vec3,
    /// Box extent along each axis (max - min).
    pub size: Vec3,
}

impl BoundingInfo {
    /// A zero-size box at the origin, used for empty subtrees.
    pub const EMPTY: Self = Self {
        center: Vec3::ZERO,
        size: Vec3::ZERO,
    };

    /// Length of the box diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f32 {
        self.size.length()
    }

    /// Largest extent across the three axes.
    #[must_use]
    pub fn max_dimension(&self) -> f32 {
        self.size.x.max(self.size.y).max(self.size.z)
    }
}

/// Compute the world-space axis-aligned bounds of all visible meshes under
/// `root`, applying each node's accumulated transform.
///
/// A subtree with no visible mesh vertices yields [`BoundingInfo::EMPTY`]
/// rather than an inverted box.
#[must_use]
pub fn compute_bounds(root: &SceneNode) -> BoundingInfo {
    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);
    let mut any = false;

    root.visit_meshes(&mut |mesh, world| {
        for &position in &mesh.positions {
            let p = world.transform_point3(position);
            min = min.min(p);
            max = max.max(p);
            any = true;
        }
    });

    if !any {
        return BoundingInfo::EMPTY;
    }
    BoundingInfo {
        center: (min + max) * 0.5,
        size: max - min,
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;
    use crate::scene::Mesh;

    fn box_mesh(half: Vec3) -> Mesh {
        let mut positions = Vec::new();
        for dx in [-1.0, 1.0] {
            for dy in [-1.0, 1.0] {
                for dz in [-1.0, 1.0] {
                    positions.push(Vec3::new(dx, dy, dz) * half);
                }
            }
        }
        Mesh {
            normals: vec![Vec3::Y; positions.len()],
            positions,
            indices: Vec::new(),
            color: [1.0, 1.0, 1.0],
        }
    }

    #[test]
    fn empty_subtree_yields_zero_box() {
        let root = SceneNode::default();
        assert_eq!(compute_bounds(&root), BoundingInfo::EMPTY);
    }

    #[test]
    fn bounds_cover_translated_child() {
        let mut root = SceneNode::default();
        root.children.push(SceneNode {
            translation: Vec3::new(10.0, 0.0, 0.0),
            mesh: Some(box_mesh(Vec3::ONE)),
            ..SceneNode::default()
        });

        let bounds = compute_bounds(&root);
        assert!((bounds.center - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-5);
        assert!((bounds.size - Vec3::splat(2.0)).length() < 1e-5);
    }

    #[test]
    fn bounds_respect_scale_and_rotation() {
        let root = SceneNode {
            scale: Vec3::splat(2.0),
            rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            mesh: Some(box_mesh(Vec3::new(1.0, 2.0, 3.0))),
            ..SceneNode::default()
        };

        let bounds = compute_bounds(&root);
        // Quarter turn about Y swaps the x and z extents
        assert!((bounds.size.x - 12.0).abs() < 1e-4);
        assert!((bounds.size.y - 8.0).abs() < 1e-4);
        assert!((bounds.size.z - 4.0).abs() < 1e-4);
    }

    #[test]
    fn hidden_meshes_are_excluded() {
        let mut root = SceneNode {
            mesh: Some(box_mesh(Vec3::ONE)),
            ..SceneNode::default()
        };
        root.children.push(SceneNode {
            translation: Vec3::splat(100.0),
            mesh: Some(box_mesh(Vec3::ONE)),
            visible: false,
            ..SceneNode::default()
        });

        let bounds = compute_bounds(&root);
        assert!((bounds.size - Vec3::splat(2.0)).length() < 1e-5);
    }
}
