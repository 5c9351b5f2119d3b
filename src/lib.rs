//! boundary-map
//! ============
//!
//! Workspace host crate. It re-exports [`boundary_core`] so the demos under
//! `demos/` can be run from the repository root:
//!
//! ```text
//! cargo run --example basic_usage
//! cargo run --example replace_and_clear
//! cargo run --example error_handling
//! ```
pub use boundary_core::*;
