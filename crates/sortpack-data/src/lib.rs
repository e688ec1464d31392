//! Loading sorter configurations and writing compiled data packs.
//!
//! [`loader`] turns RON/JSON/TOML files into a
//! [`Configuration`](sortpack_core::Configuration), [`pack`] lays compiled
//! functions and metadata out as a data pack, and [`sink`] decides where the
//! files go.

pub mod loader;
pub mod pack;
pub mod sink;

pub use loader::{DataLoadError, Format, load_config};
pub use pack::{PackError, PackLayout, PackSummary, build_pack, write_pack};
pub use sink::{ArtifactSink, DirSink, MemorySink};
