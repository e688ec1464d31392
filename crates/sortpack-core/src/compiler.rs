//! Single-pass compiler from [`Configuration`] to function artifacts.
//!
//! Groups are visited in declaration order. For each group:
//!
//! 1. **Identify** -- derive the group id and check it, then the frame
//!    target, against everything seen so far. A duplicate skips the group.
//! 2. **Complete** -- a group with no id, no items or no frame is skipped.
//! 3. **Emit group** -- the group's routing function.
//! 4. **Emit items** -- one routing function per first-seen item, plus one
//!    dispatch line each. Later occurrences only report an error.
//!
//! All duplicate tracking lives in a state value owned by one call to
//! [`compile`], so separate compilations never interact.

use std::collections::{HashMap, HashSet};

use tracing::{debug, error, warn};

use crate::config::{Configuration, Group};
use crate::error::{CompileError, CompileWarning, InvalidGroupReason};
use crate::ident::{
    DISPATCH_ARTIFACT, function_call, group_artifact_name, group_id, item_artifact_name,
    item_name,
};
use crate::template::{FrameMatch, dispatch_line, dispatcher_header, routing_script};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// What an artifact is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Dispatcher,
    Group,
    Item,
    /// Fixed init/tick/sort scripts.
    Lifecycle,
}

/// A named function body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub kind: ArtifactKind,
    pub content: String,
}

/// Summary counters of one compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileStats {
    /// Items that produced a function and a dispatch line.
    pub total_items: usize,
    /// Declared groups, valid or not.
    pub total_groups: usize,
}

/// Result of [`compile`].
#[derive(Debug, Clone)]
pub struct Compilation {
    pub dispatcher: Artifact,
    /// Group and item functions in emission order.
    pub routines: Vec<Artifact>,
    pub errors: Vec<CompileError>,
    pub warnings: Vec<CompileWarning>,
    pub stats: CompileStats,
}

impl Compilation {
    /// Every artifact, dispatcher first, then in emission order.
    pub fn iter_artifacts(&self) -> impl Iterator<Item = &Artifact> {
        std::iter::once(&self.dispatcher).chain(self.routines.iter())
    }

    pub fn artifact(&self, name: &str) -> Option<&Artifact> {
        self.iter_artifacts().find(|a| a.name == name)
    }

    pub fn artifacts_of(&self, kind: ArtifactKind) -> impl Iterator<Item = &Artifact> {
        self.iter_artifacts().filter(move |a| a.kind == kind)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Compiler
// ---------------------------------------------------------------------------

/// Compile `config` into dispatcher, group and item functions.
///
/// Never fails: invalid groups and duplicate items are recorded in
/// [`Compilation::errors`] and left out of the output.
#[tracing::instrument(skip_all, fields(groups = config.groups.len()))]
pub fn compile(config: &Configuration) -> Compilation {
    let mut state = CompileState::new(config);
    for group in &config.groups {
        state.compile_group(group);
    }
    state.finish()
}

struct CompileState<'a> {
    config: &'a Configuration,
    seen_group_ids: HashSet<String>,
    seen_frames: HashSet<&'a str>,
    seen_item_ids: HashSet<&'a str>,
    /// Derived item name -> first item id that produced it.
    item_names: HashMap<&'a str, &'a str>,
    emitted_groups: HashSet<String>,
    /// (group name, fallback) of every emitted group with a fallback.
    fallbacks: Vec<(&'a str, &'a str)>,
    dispatch_body: String,
    routines: Vec<Artifact>,
    errors: Vec<CompileError>,
    total_items: usize,
}

impl<'a> CompileState<'a> {
    fn new(config: &'a Configuration) -> Self {
        Self {
            config,
            seen_group_ids: HashSet::new(),
            seen_frames: HashSet::new(),
            seen_item_ids: HashSet::new(),
            item_names: HashMap::new(),
            emitted_groups: HashSet::new(),
            fallbacks: Vec::new(),
            dispatch_body: dispatcher_header(config),
            routines: Vec::new(),
            errors: Vec::new(),
            total_items: 0,
        }
    }

    fn compile_group(&mut self, group: &'a Group) {
        let config = self.config;
        let id = group_id(&group.group_name);

        if self.seen_group_ids.contains(&id) {
            self.report(CompileError::DuplicateGroupId {
                group_name: group.group_name.clone(),
                group_id: id,
            });
            return;
        }

        let frame = group.frame();
        if let Some(frame) = frame.filter(|f| self.seen_frames.contains(f)) {
            self.report(CompileError::DuplicateFrameTarget {
                group_name: group.group_name.clone(),
                frame: frame.to_string(),
            });
            return;
        }

        self.seen_group_ids.insert(id.clone());
        if let Some(frame) = frame {
            self.seen_frames.insert(frame);
        }

        let checked = match frame {
            _ if id.is_empty() => Err(InvalidGroupReason::EmptyId),
            _ if group.items.is_empty() => Err(InvalidGroupReason::NoItems),
            None => Err(InvalidGroupReason::NoItemFrame),
            Some(frame) => Ok(frame),
        };
        let frame = match checked {
            Ok(frame) => frame,
            Err(reason) => {
                self.report(CompileError::InvalidGroup {
                    group_name: group.group_name.clone(),
                    reason,
                });
                return;
            }
        };

        let namespace = &config.pack.namespace;
        let fallback = match group.fallback.as_deref().filter(|f| !f.is_empty()) {
            Some(target) => {
                self.fallbacks.push((group.group_name.as_str(), target));
                function_call(namespace, &group_artifact_name(&group_id(target)))
            }
            None => self.final_fallback(),
        };

        let name = group_artifact_name(&id);
        let matcher = FrameMatch::new(&config.pack, frame, config.group_name_in_frame.as_deref());
        let group_call = function_call(namespace, &name);
        self.emit(name, ArtifactKind::Group, routing_script(&matcher, &fallback));
        self.emitted_groups.insert(id);

        for item in &group.items {
            self.compile_item(group, item, &group_call);
        }
    }

    fn compile_item(&mut self, group: &'a Group, item: &'a str, group_call: &str) {
        let config = self.config;

        if !self.seen_item_ids.insert(item) {
            self.report(CompileError::DuplicateItemId {
                group_name: group.group_name.clone(),
                item: item.to_string(),
            });
            return;
        }

        let short_name = item_name(item);
        if let Some(first) = self.item_names.get(short_name) {
            let first = first.to_string();
            self.report(CompileError::DuplicateItemName {
                group_name: group.group_name.clone(),
                item: item.to_string(),
                name: short_name.to_string(),
                first,
            });
            return;
        }
        self.item_names.insert(short_name, item);

        let name = item_artifact_name(short_name);
        let matcher = FrameMatch::new(&config.pack, item, config.item_name_in_frame.as_deref());
        let item_call = function_call(&config.pack.namespace, &name);
        self.emit(name, ArtifactKind::Item, routing_script(&matcher, group_call));

        self.dispatch_body.push_str(&dispatch_line(item, &item_call));
        self.total_items += 1;
    }

    fn final_fallback(&self) -> String {
        match &self.config.final_fallback {
            Some(action) => action.clone(),
            None => format!("tag @s add {}_unsorted", self.config.pack.namespace),
        }
    }

    fn emit(&mut self, name: String, kind: ArtifactKind, content: String) {
        debug!(artifact = %name, ?kind, "emitted function");
        self.routines.push(Artifact {
            name,
            kind,
            content,
        });
    }

    fn report(&mut self, err: CompileError) {
        error!("{err}");
        self.errors.push(err);
    }

    fn finish(self) -> Compilation {
        let mut warnings = Vec::new();
        for (group_name, fallback) in &self.fallbacks {
            if !self.emitted_groups.contains(&group_id(fallback)) {
                let warning = CompileWarning::UnresolvedFallback {
                    group_name: group_name.to_string(),
                    fallback: fallback.to_string(),
                };
                warn!("{warning}");
                warnings.push(warning);
            }
        }

        let stats = CompileStats {
            total_items: self.total_items,
            total_groups: self.config.groups.len(),
        };
        debug!(
            items = stats.total_items,
            groups = stats.total_groups,
            errors = self.errors.len(),
            "compilation finished"
        );

        Compilation {
            dispatcher: Artifact {
                name: DISPATCH_ARTIFACT.to_string(),
                kind: ArtifactKind::Dispatcher,
                content: self.dispatch_body,
            },
            routines: self.routines,
            errors: self.errors,
            warnings,
            stats,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
