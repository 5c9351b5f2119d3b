//! boundary-cli
//! ============
//!
//! Command-line dry-run tool for the `boundary-core` overlay manager.
//!
//! This crate primarily provides a binary (`boundary-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install boundary-cli
//! boundary-cli --help
//! boundary-cli config
//! boundary-cli load 610604 --fill-color '#ff0000' --repeat 2
//! boundary-cli replay session.json
//! ```
//!
//! Each command prints the map calls the manager made (`load`, `unload`,
//! `clear`, ...) and the boundaries left on the map afterwards.
//!
//! For programmatic access use the [`boundary-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/holg/boundary-map>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
