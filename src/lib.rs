// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Real-time camera controllers for interactive 3D viewers.
//!
//! Camrig turns pointer and keyboard input into camera poses. A controller
//! reads a per-frame [`input::InputSnapshot`], mutates the pose model it
//! owns through elementary manipulations, and the renderer reads the
//! resulting view and frame matrices back.
//!
//! # Key entry points
//!
//! - [`controller::Controller`] - the capability every controller provides
//! - [`controller::OrbitEulerController`], [`controller::OrbitController`],
//!   [`controller::FirstPersonEulerController`],
//!   [`controller::Displacement2dController`] - concrete controllers
//! - [`camera::CameraPose`] - renderer-facing pose queries
//! - [`shell::Shell`] - owns the input snapshot and drives one controller
//!   per frame
//! - [`options::Options`] - runtime configuration (sensitivities, key
//!   bindings, frame pacing) with TOML presets
//!
//! # Architecture
//!
//! Everything runs on one thread. The shell folds platform
//! [`input::InputEvent`]s into the snapshot, calls the controller's event
//! hooks, then once per frame calls `on_idle` and reads the pose. Controllers
//! hold only weak handles to the snapshot and window, so the shell stays the
//! single owner and writer of both.

pub mod camera;
pub mod controller;
pub mod error;
pub mod input;
pub mod options;
pub mod shell;
pub mod util;
pub mod window;
