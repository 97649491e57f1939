//! Low-level GPU plumbing: device/surface ownership and shared texture
//! helpers.

pub mod context;
pub mod texture;

pub use context::{RenderContext, RenderContextError};
pub use texture::DepthTexture;
