//! Sortpack Core -- compiles item sorting groups into data pack functions.
//!
//! A [`config::Configuration`] declares groups of items, each routed to one
//! item frame target. [`compiler::compile`] turns it into command scripts for
//! the game's function runtime:
//!
//! 1. **Dispatcher** -- one script, run as the item entity, that calls the
//!    per-item script matching the item it carries.
//! 2. **Item scripts** -- teleport the item to the nearest frame showing that
//!    item, or fall back to the owning group's script.
//! 3. **Group scripts** -- teleport the item to the group's frame, or fall
//!    back to another group or the configured final fallback.
//!
//! Validation is soft: duplicate identifiers and incomplete groups are
//! reported as [`error::CompileError`]s and the offending group or item is
//! skipped, but compilation always completes.
//!
//! ```rust,ignore
//! let compilation = sortpack_core::compile(&config);
//! for artifact in compilation.iter_artifacts() {
//!     sink.write(&layout.function_path(&artifact.name), &artifact.content)?;
//! }
//! ```
//!
//! # Key Types
//!
//! - [`config::Configuration`] -- parsed input, including [`config::PackOptions`].
//! - [`compiler::Compilation`] -- artifacts, errors, warnings and counters.
//! - [`template::FrameMatch`] -- the single source of frame selector text.
//! - [`lifecycle`] -- fixed init/tick/sort scripts driving the dispatcher.

pub mod compiler;
pub mod config;
pub mod error;
pub mod ident;
pub mod lifecycle;
pub mod template;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use compiler::{Artifact, ArtifactKind, Compilation, CompileStats, compile};
pub use config::{Configuration, Group, PackOptions};
pub use error::{CompileError, CompileWarning, InvalidGroupReason};
