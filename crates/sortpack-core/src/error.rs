use std::fmt;

/// Soft validation errors. Each one causes a group or item to be skipped,
/// never the whole compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// Two groups derive the same id after stripping non-word characters.
    #[error("duplicate group id '{group_id}' (group '{group_name}')")]
    DuplicateGroupId { group_name: String, group_id: String },

    /// Two groups route to the same frame target.
    #[error("duplicate item frame '{frame}' (group '{group_name}')")]
    DuplicateFrameTarget { group_name: String, frame: String },

    /// An item id already appeared earlier in this or another group.
    #[error("duplicate item '{item}' (group '{group_name}')")]
    DuplicateItemId { group_name: String, item: String },

    /// Two different item ids derive the same function name.
    #[error("item '{item}' (group '{group_name}') derives name '{name}' already used by '{first}'")]
    DuplicateItemName {
        group_name: String,
        item: String,
        name: String,
        first: String,
    },

    /// The group cannot be routed at all.
    #[error("invalid group '{group_name}': {reason}")]
    InvalidGroup {
        group_name: String,
        reason: InvalidGroupReason,
    },
}

/// Why a group was rejected as incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGroupReason {
    /// `groupName` has no word characters.
    EmptyId,
    NoItems,
    NoItemFrame,
}

impl fmt::Display for InvalidGroupReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => f.write_str("group name has no word characters"),
            Self::NoItems => f.write_str("no items"),
            Self::NoItemFrame => f.write_str("no item frame"),
        }
    }
}

/// Non-fatal findings that do not change the emitted artifacts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileWarning {
    /// A fallback names a group that produced no function.
    #[error("group '{group_name}' falls back to unknown group '{fallback}'")]
    UnresolvedFallback { group_name: String, fallback: String },
}
