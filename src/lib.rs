// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math allowances
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]

//! Native 3D model viewer built on wgpu.
//!
//! Vantage lists model files in a directory, loads a selected one into a
//! scene, frames it with an animated camera move, and lets the user
//! orbit/pan with mouse or touch and zoom with a two-finger pinch.
//!
//! # Key entry points
//!
//! - [`engine::ViewerEngine`] - the viewer engine owning camera, scene, and
//!   renderer
//! - [`camera`] - framing policy, eased transitions, and the orbit/pan
//!   controller
//! - [`input`] - pinch-zoom and double-tap gesture state machines
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! All camera mutation is frame-driven: the engine's
//! [`update`](engine::ViewerEngine::update) applies the orbit controller's
//! damping step and then the in-flight camera transition (if any), so the
//! transition is the last writer within a frame. The pinch handler mutates
//! the camera only from touch events, during which the orbit controller is
//! disabled — exactly one of the two applies distance changes at any
//! instant.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::ViewerEngine;
pub use error::VantageError;
pub use input::InputEvent;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
