//! OBJ model loading and the on-disk model catalog.
//!
//! Loaded models are normalized to a predictable size: the hierarchy is
//! recentered on the origin and uniformly scaled so the bounding diagonal
//! is 4 world units, keeping the framing math independent of how each
//! source file was authored.

use std::path::{Path, PathBuf};

use glam::Vec3;
use log::info;

use super::bounds::compute_bounds;
use super::{Mesh, SceneNode};
use crate::error::VantageError;

/// Target bounding-box diagonal after normalization, in world units.
const NORMALIZED_DIAGONAL: f32 = 4.0;

/// Base color for meshes whose material carries no diffuse color.
const FALLBACK_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

/// A model file discovered in the catalog directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEntry {
    /// Display name (file stem).
    pub name: String,
    /// Full path to the OBJ file.
    pub path: PathBuf,
}

/// List model files (OBJ) in a directory, sorted by name.
///
/// An unreadable directory yields an empty catalog rather than an error.
#[must_use]
pub fn list_models(dir: &Path) -> Vec<ModelEntry> {
    let mut entries = Vec::new();
    if let Ok(dir_entries) = std::fs::read_dir(dir) {
        for entry in dir_entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "obj") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                {
                    entries.push(ModelEntry {
                        name: stem.to_owned(),
                        path,
                    });
                }
            }
        }
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// Load an OBJ file into a normalized scene hierarchy.
///
/// Each OBJ object becomes a child node under a single root; the root's
/// transform recenters the model on the origin and scales its bounding
/// diagonal to [`NORMALIZED_DIAGONAL`]. Failure leaves no partial state —
/// callers keep their current scene on error.
///
/// # Errors
///
/// Returns [`VantageError::ModelLoad`] if the file cannot be parsed or
/// contains no triangle geometry.
pub fn load_model(path: &Path) -> Result<SceneNode, VantageError> {
    let (models, materials) =
        tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS).map_err(|e| {
            VantageError::ModelLoad(format!("{}: {e}", path.display()))
        })?;
    // Missing or broken MTL files are tolerated; meshes fall back to a
    // flat default color
    let materials = materials.unwrap_or_default();

    let mut root = SceneNode::default();
    for model in &models {
        if model.mesh.positions.is_empty() {
            continue;
        }
        let color = model
            .mesh
            .material_id
            .and_then(|id| materials.get(id))
            .and_then(|material| material.diffuse)
            .unwrap_or(FALLBACK_COLOR);
        root.children.push(SceneNode {
            mesh: Some(build_mesh(&model.mesh, color)),
            ..SceneNode::default()
        });
    }
    if root.children.is_empty() {
        return Err(VantageError::ModelLoad(format!(
            "{}: no triangle geometry",
            path.display()
        )));
    }

    normalize(&mut root);
    info!(
        "loaded {} ({} object{})",
        path.display(),
        root.children.len(),
        if root.children.len() == 1 { "" } else { "s" }
    );
    Ok(root)
}

fn build_mesh(mesh: &tobj::Mesh, color: [f32; 3]) -> Mesh {
    let positions: Vec<Vec3> = mesh
        .positions
        .chunks_exact(3)
        .map(|p| Vec3::new(p[0], p[1], p[2]))
        .collect();
    let normals: Vec<Vec3> = if mesh.normals.len() == mesh.positions.len() {
        mesh.normals
            .chunks_exact(3)
            .map(|n| Vec3::new(n[0], n[1], n[2]))
            .collect()
    } else {
        flat_normals(&positions, &mesh.indices)
    };
    Mesh {
        positions,
        normals,
        indices: mesh.indices.clone(),
        color,
    }
}

/// Per-vertex normals from accumulated face normals, for files that ship
/// none.
fn flat_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for triangle in indices.chunks_exact(3) {
        let [a, b, c] =
            [triangle[0] as usize, triangle[1] as usize, triangle[2] as usize];
        let face = (positions[b] - positions[a])
            .cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    for normal in &mut normals {
        *normal = normal.normalize_or(Vec3::Y);
    }
    normals
}

/// Recenter the hierarchy on the origin and scale its bounding diagonal to
/// [`NORMALIZED_DIAGONAL`]. Degenerate (zero-size) models are recentered
/// but left unscaled.
fn normalize(root: &mut SceneNode) {
    let bounds = compute_bounds(root);
    let diagonal = bounds.diagonal();
    let scale = if diagonal > 0.0 {
        NORMALIZED_DIAGONAL / diagonal
    } else {
        1.0
    };
    root.scale = Vec3::splat(scale);
    root.translation = -bounds.center * scale;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset_box_node() -> SceneNode {
        let positions = vec![
            Vec3::new(10.0, 10.0, 10.0),
            Vec3::new(13.0, 10.0, 10.0),
            Vec3::new(13.0, 14.0, 10.0),
            Vec3::new(10.0, 10.0, 22.0),
        ];
        SceneNode {
            mesh: Some(Mesh {
                normals: vec![Vec3::Y; positions.len()],
                positions,
                indices: vec![0, 1, 2, 0, 2, 3],
                color: FALLBACK_COLOR,
            }),
            ..SceneNode::default()
        }
    }

    #[test]
    fn normalize_recenters_and_scales_to_target_diagonal() {
        let mut root = SceneNode::default();
        root.children.push(offset_box_node());

        normalize(&mut root);
        let bounds = compute_bounds(&root);

        assert!(bounds.center.length() < 1e-4);
        assert!((bounds.diagonal() - NORMALIZED_DIAGONAL).abs() < 1e-3);
    }

    #[test]
    fn normalize_leaves_degenerate_model_unscaled() {
        let mut root = SceneNode {
            mesh: Some(Mesh {
                positions: vec![Vec3::new(5.0, 0.0, 0.0)],
                normals: vec![Vec3::Y],
                indices: Vec::new(),
                color: FALLBACK_COLOR,
            }),
            ..SceneNode::default()
        };

        normalize(&mut root);
        assert_eq!(root.scale, Vec3::ONE);
        assert!((root.translation - Vec3::new(-5.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn flat_normals_point_away_from_faces() {
        let positions = vec![
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let normals = flat_normals(&positions, &[0, 1, 2]);
        for normal in normals {
            assert!((normal - Vec3::Z).length() < 1e-5);
        }
    }

    #[test]
    fn missing_catalog_directory_yields_empty_list() {
        let entries = list_models(Path::new("/nonexistent/models"));
        assert!(entries.is_empty());
    }
}
