//! Shared test helpers for unit tests, integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`.

use crate::compiler::Compilation;
use crate::config::{Configuration, Group};

/// A group routed to `frame`. An empty `frame` is stored as-is and treated
/// as absent by the compiler.
pub fn group(name: &str, frame: &str, items: &[&str]) -> Group {
    Group {
        group_name: name.to_string(),
        items: items.iter().map(|i| i.to_string()).collect(),
        item_frame: Some(frame.to_string()),
        fallback: None,
    }
}

/// A configuration with default options and the given groups.
pub fn config(groups: Vec<Group>) -> Configuration {
    Configuration {
        groups,
        ..Configuration::default()
    }
}

/// `count` valid groups of `items_per_group` distinct items each.
pub fn generated_config(count: usize, items_per_group: usize) -> Configuration {
    let groups = (0..count)
        .map(|g| Group {
            group_name: format!("Group {g}"),
            items: (0..items_per_group)
                .map(|i| format!("minecraft:item_{g}_{i}"))
                .collect(),
            item_frame: Some(format!("minecraft:frame_{g}")),
            fallback: (g > 0).then(|| format!("Group {}", g - 1)),
        })
        .collect();
    config(groups)
}

/// Dispatcher lines that route an item (header lines excluded).
pub fn dispatch_lines(compilation: &Compilation) -> Vec<&str> {
    compilation
        .dispatcher
        .content
        .lines()
        .filter(|l| l.starts_with("execute if entity @s["))
        .collect()
}
