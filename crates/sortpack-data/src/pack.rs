//! Data pack layout and writing.
//!
//! A built pack looks like:
//!
//! ```text
//! pack.mcmeta
//! data/<namespace>/functions/{dispatch,group_*,item_*,init,tick,sort}.mcfunction
//! data/minecraft/tags/functions/{load,tick}.json
//! ```
//!
//! Pack formats from 45 on use `function` instead of `functions` in both
//! directory names.

use serde::Serialize;
use sortpack_core::compiler::{Artifact, Compilation, CompileStats, compile};
use sortpack_core::config::PackOptions;
use sortpack_core::ident::resource_location;
use sortpack_core::lifecycle::{INIT_ARTIFACT, TICK_ARTIFACT, lifecycle_artifacts};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::loader::{DataLoadError, load_config};
use crate::sink::ArtifactSink;

// ===========================================================================
// Errors
// ===========================================================================

/// Fatal errors while building a pack. Any of these aborts the run; files
/// already written are left as they are.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    /// The configuration could not be loaded.
    #[error("configuration unavailable: {0}")]
    ConfigUnavailable(#[from] DataLoadError),

    /// The sink failed to persist a file.
    #[error("failed to write {path}: {source}")]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A metadata document could not be encoded.
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ===========================================================================
// Layout
// ===========================================================================

/// Maps artifact names to pack-relative paths.
#[derive(Debug, Clone, Copy)]
pub struct PackLayout<'a> {
    options: &'a PackOptions,
}

impl<'a> PackLayout<'a> {
    pub fn new(options: &'a PackOptions) -> Self {
        Self { options }
    }

    fn function_dir(&self) -> &'static str {
        if self.options.uses_singular_dirs() {
            "function"
        } else {
            "functions"
        }
    }

    pub fn function_path(&self, name: &str) -> PathBuf {
        Path::new("data")
            .join(&self.options.namespace)
            .join(self.function_dir())
            .join(format!("{name}.mcfunction"))
    }

    /// Path of a `#minecraft:<tag>` function tag.
    pub fn tag_path(&self, tag: &str) -> PathBuf {
        Path::new("data")
            .join("minecraft")
            .join("tags")
            .join(self.function_dir())
            .join(format!("{tag}.json"))
    }

    pub fn meta_path(&self) -> PathBuf {
        PathBuf::from("pack.mcmeta")
    }
}

// ===========================================================================
// Metadata documents
// ===========================================================================

#[derive(Debug, Serialize)]
struct PackMeta<'a> {
    pack: PackSection<'a>,
}

#[derive(Debug, Serialize)]
struct PackSection<'a> {
    pack_format: u32,
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct FunctionTag {
    values: Vec<String>,
}

/// `pack.mcmeta` contents.
pub fn pack_meta_json(options: &PackOptions) -> Result<String, serde_json::Error> {
    let meta = PackMeta {
        pack: PackSection {
            pack_format: options.pack_format,
            description: &options.description,
        },
    };
    serde_json::to_string_pretty(&meta).map(|s| s + "\n")
}

/// A function tag listing `values`.
pub fn function_tag_json(values: Vec<String>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&FunctionTag { values }).map(|s| s + "\n")
}

// ===========================================================================
// Writing
// ===========================================================================

/// Counts reported after a pack is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackSummary {
    pub files_written: usize,
    pub stats: CompileStats,
    pub errors: usize,
    pub warnings: usize,
}

/// Write a compiled pack through `sink`.
///
/// Order: compiled functions (dispatcher first, then emission order),
/// lifecycle functions, `load`/`tick` tags, `pack.mcmeta`. Stops at the
/// first failed write.
pub fn write_pack(
    compilation: &Compilation,
    options: &PackOptions,
    sink: &mut impl ArtifactSink,
) -> Result<PackSummary, PackError> {
    let layout = PackLayout::new(options);
    let mut files_written = 0;

    let lifecycle = lifecycle_artifacts(options);
    let functions: Vec<&Artifact> = compilation.iter_artifacts().chain(lifecycle.iter()).collect();
    for artifact in functions {
        let path = layout.function_path(&artifact.name);
        write_file(sink, &path, &artifact.content)?;
        files_written += 1;
    }

    for (tag, function) in [("load", INIT_ARTIFACT), ("tick", TICK_ARTIFACT)] {
        let path = layout.tag_path(tag);
        let content = function_tag_json(vec![resource_location(&options.namespace, function)])
            .map_err(|source| PackError::Encode {
                path: path.clone(),
                source,
            })?;
        write_file(sink, &path, &content)?;
        files_written += 1;
    }

    let path = layout.meta_path();
    let content = pack_meta_json(options).map_err(|source| PackError::Encode {
        path: path.clone(),
        source,
    })?;
    write_file(sink, &path, &content)?;
    files_written += 1;

    let summary = PackSummary {
        files_written,
        stats: compilation.stats,
        errors: compilation.errors.len(),
        warnings: compilation.warnings.len(),
    };
    info!(
        files = summary.files_written,
        items = summary.stats.total_items,
        groups = summary.stats.total_groups,
        errors = summary.errors,
        "pack written"
    );
    Ok(summary)
}

/// Load the configuration at `config_path`, compile it and write the pack.
pub fn build_pack(
    config_path: &Path,
    sink: &mut impl ArtifactSink,
) -> Result<(Compilation, PackSummary), PackError> {
    let config = load_config(config_path)?;
    let compilation = compile(&config);
    let summary = write_pack(&compilation, &config.pack, sink)?;
    Ok((compilation, summary))
}

fn write_file(sink: &mut impl ArtifactSink, path: &Path, content: &str) -> Result<(), PackError> {
    debug!(path = %path.display(), bytes = content.len(), "writing");
    sink.write(path, content)
        .map_err(|source| PackError::PersistenceFailure {
            path: path.to_path_buf(),
            source,
        })
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use sortpack_core::test_utils::*;
    use std::io;

    /// Fails every write after the first `ok` ones.
    struct FailingSink {
        ok: usize,
        written: usize,
    }

    impl ArtifactSink for FailingSink {
        fn write(&mut self, _path: &Path, _content: &str) -> io::Result<()> {
            if self.written == self.ok {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
            self.written += 1;
            Ok(())
        }
    }

    #[test]
    fn layout_paths() {
        let options = PackOptions::default();
        let layout = PackLayout::new(&options);
        assert_eq!(
            layout.function_path("dispatch"),
            PathBuf::from("data/sorter/functions/dispatch.mcfunction")
        );
        assert_eq!(
            layout.tag_path("load"),
            PathBuf::from("data/minecraft/tags/functions/load.json")
        );
        assert_eq!(layout.meta_path(), PathBuf::from("pack.mcmeta"));
    }

    #[test]
    fn layout_singular_dirs() {
        let options = PackOptions {
            pack_format: 48,
            ..PackOptions::default()
        };
        let layout = PackLayout::new(&options);
        assert_eq!(
            layout.function_path("tick"),
            PathBuf::from("data/sorter/function/tick.mcfunction")
        );
        assert_eq!(
            layout.tag_path("tick"),
            PathBuf::from("data/minecraft/tags/function/tick.json")
        );
    }

    #[test]
    fn pack_meta_document() {
        let options = PackOptions {
            description: "Sorts \"stuff\"".to_string(),
            ..PackOptions::default()
        };
        let json: serde_json::Value = serde_json::from_str(&pack_meta_json(&options).unwrap()).unwrap();
        assert_eq!(json["pack"]["pack_format"], 15);
        assert_eq!(json["pack"]["description"], "Sorts \"stuff\"");
    }

    #[test]
    fn function_tag_document() {
        let json: serde_json::Value =
            serde_json::from_str(&function_tag_json(vec!["sorter:init".to_string()]).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"values": ["sorter:init"]}));
    }

    #[test]
    fn write_pack_order_and_contents() {
        let config = config(vec![group("Ores", "minecraft:chest", &["minecraft:coal"])]);
        let compilation = compile(&config);
        let mut sink = MemorySink::new();

        let summary = write_pack(&compilation, &config.pack, &mut sink).unwrap();
        assert_eq!(summary.files_written, 9);
        assert_eq!(summary.stats.total_items, 1);
        assert_eq!(summary.errors, 0);

        let paths: Vec<String> = sink.paths().map(|p| p.display().to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "data/sorter/functions/dispatch.mcfunction",
                "data/sorter/functions/group_Ores.mcfunction",
                "data/sorter/functions/item_coal.mcfunction",
                "data/sorter/functions/init.mcfunction",
                "data/sorter/functions/tick.mcfunction",
                "data/sorter/functions/sort.mcfunction",
                "data/minecraft/tags/functions/load.json",
                "data/minecraft/tags/functions/tick.json",
                "pack.mcmeta",
            ]
        );

        let load: serde_json::Value =
            serde_json::from_str(sink.get("data/minecraft/tags/functions/load.json").unwrap()).unwrap();
        assert_eq!(load["values"][0], "sorter:init");
        let tick: serde_json::Value =
            serde_json::from_str(sink.get("data/minecraft/tags/functions/tick.json").unwrap()).unwrap();
        assert_eq!(tick["values"][0], "sorter:tick");
        assert_eq!(
            sink.get("data/sorter/functions/dispatch.mcfunction"),
            Some(compilation.dispatcher.content.as_str())
        );
    }

    #[test]
    fn write_failure_is_fatal() {
        let config = config(vec![group("Ores", "minecraft:chest", &["minecraft:coal"])]);
        let compilation = compile(&config);
        let mut sink = FailingSink { ok: 2, written: 0 };

        let result = write_pack(&compilation, &config.pack, &mut sink);
        match result {
            Err(PackError::PersistenceFailure { path, .. }) => {
                assert_eq!(path, PathBuf::from("data/sorter/functions/item_coal.mcfunction"));
            }
            other => panic!("expected persistence failure, got {other:?}"),
        }
        assert_eq!(sink.written, 2);
    }

    #[test]
    fn build_pack_reports_missing_config() {
        let mut sink = MemorySink::new();
        let dir = std::env::temp_dir().join(format!("sortpack_pack_missing_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let result = build_pack(&dir, &mut sink);
        assert!(matches!(
            result,
            Err(PackError::ConfigUnavailable(DataLoadError::MissingConfig { .. }))
        ));
        assert!(sink.is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
