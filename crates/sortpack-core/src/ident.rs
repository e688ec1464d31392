//! Identifier derivation and artifact naming.

/// Name of the dispatcher function.
pub const DISPATCH_ARTIFACT: &str = "dispatch";

/// Prefix of per-group function names.
pub const GROUP_PREFIX: &str = "group_";

/// Prefix of per-item function names.
pub const ITEM_PREFIX: &str = "item_";

/// Derive a group id by dropping every non-word character (`[A-Za-z0-9_]`
/// survive).
pub fn group_id(group_name: &str) -> String {
    group_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// The `name` segment of a `namespace:name` item id.
///
/// An id without a namespace separator is its own name.
pub fn item_name(item_id: &str) -> &str {
    let mut segments = item_id.split(':');
    match (segments.next(), segments.next()) {
        (Some(_), Some(name)) => name,
        _ => item_id,
    }
}

pub fn group_artifact_name(group_id: &str) -> String {
    format!("{GROUP_PREFIX}{group_id}")
}

pub fn item_artifact_name(item_name: &str) -> String {
    format!("{ITEM_PREFIX}{item_name}")
}

/// `<namespace>:<artifact>`.
pub fn resource_location(namespace: &str, artifact: &str) -> String {
    format!("{namespace}:{artifact}")
}

/// A `function <namespace>:<artifact>` command.
pub fn function_call(namespace: &str, artifact: &str) -> String {
    format!("function {}", resource_location(namespace, artifact))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_id_strips_non_word_characters() {
        assert_eq!(group_id("Ores"), "Ores");
        assert_eq!(group_id("Ores & Ingots!"), "OresIngots");
        assert_eq!(group_id("tier-2 (rare)"), "tier2rare");
        assert_eq!(group_id("snake_case_1"), "snake_case_1");
        assert_eq!(group_id("!!!"), "");
    }

    #[test]
    fn group_id_drops_non_ascii() {
        assert_eq!(group_id("Érz"), "rz");
    }

    #[test]
    fn item_name_takes_second_segment() {
        assert_eq!(item_name("minecraft:iron_ingot"), "iron_ingot");
        assert_eq!(item_name("mod:a:b"), "a");
        assert_eq!(item_name("minecraft:"), "");
    }

    #[test]
    fn item_name_without_namespace() {
        assert_eq!(item_name("stick"), "stick");
    }

    #[test]
    fn artifact_names() {
        assert_eq!(group_artifact_name("Ores"), "group_Ores");
        assert_eq!(item_artifact_name("iron_ingot"), "item_iron_ingot");
        assert_eq!(resource_location("sorter", "init"), "sorter:init");
        assert_eq!(
            function_call("sorter", "group_Ores"),
            "function sorter:group_Ores"
        );
    }
}
