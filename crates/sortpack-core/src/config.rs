//! Serde structs for the sorter configuration file.
//!
//! Field names are camelCase on disk (`groupName`, `itemFrame`, ...) in every
//! supported format. Everything except `groups[].groupName` is optional.

use serde::{Deserialize, Serialize};

// ===========================================================================
// Configuration
// ===========================================================================

/// Top-level sorter configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Commands played once per sorting cycle when the dispatcher runs.
    #[serde(default)]
    pub effects: Vec<String>,
    /// Command run when a group has no frame nearby and no fallback group.
    #[serde(default)]
    pub final_fallback: Option<String>,
    /// Custom name a group frame's item must carry to match.
    #[serde(default)]
    pub group_name_in_frame: Option<String>,
    /// Custom name an item frame's item must carry to match.
    #[serde(default)]
    pub item_name_in_frame: Option<String>,
    #[serde(default)]
    pub pack: PackOptions,
}

/// A named bucket of items routed to one frame target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub group_name: String,
    #[serde(default)]
    pub items: Vec<String>,
    /// Item id displayed in the group's frame.
    #[serde(default)]
    pub item_frame: Option<String>,
    /// Id of the group tried next when this group's frame is out of range.
    #[serde(default)]
    pub fallback: Option<String>,
}

impl Group {
    /// The frame target, treating an empty string as absent.
    pub fn frame(&self) -> Option<&str> {
        self.item_frame.as_deref().filter(|f| !f.is_empty())
    }
}

// ===========================================================================
// Pack options
// ===========================================================================

/// Pack-wide settings. Every field has a default, so the whole `pack` table
/// may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackOptions {
    pub namespace: String,
    pub description: String,
    pub pack_format: u32,
    pub search_radius: u32,
    pub frame_kind: String,
    pub marker_top: String,
    pub marker_bottom: String,
    /// Tick count after which the sorting cycle restarts.
    pub interval: u32,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            namespace: "sorter".to_string(),
            description: "Item sorter".to_string(),
            pack_format: 15,
            search_radius: 64,
            frame_kind: "minecraft:item_frame".to_string(),
            marker_top: "minecraft:hopper".to_string(),
            marker_bottom: "minecraft:observer".to_string(),
            interval: 20,
        }
    }
}

impl PackOptions {
    /// Pack formats from 45 on use singular `function` directory names.
    pub fn uses_singular_dirs(&self) -> bool {
        self.pack_format >= 45
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal_json() {
        let config: Configuration = serde_json::from_str(
            r#"{"groups": [{"groupName": "Ores", "items": ["minecraft:iron_ingot"], "itemFrame": "minecraft:chest"}]}"#,
        )
        .unwrap();
        assert_eq!(config.groups.len(), 1);
        assert_eq!(config.groups[0].group_name, "Ores");
        assert_eq!(config.groups[0].frame(), Some("minecraft:chest"));
        assert!(config.effects.is_empty());
        assert_eq!(config.final_fallback, None);
        assert_eq!(config.pack, PackOptions::default());
    }

    #[test]
    fn deserialize_full_json() {
        let config: Configuration = serde_json::from_str(
            r#"{
                "groups": [
                    {"groupName": "Ores", "items": [], "itemFrame": "minecraft:chest", "fallback": "Misc"}
                ],
                "effects": ["playsound minecraft:entity.item.pickup master @a"],
                "finalFallback": "kill @s",
                "groupNameInFrame": "Sorter",
                "itemNameInFrame": "Slot",
                "pack": {"namespace": "mysort", "searchRadius": 16}
            }"#,
        )
        .unwrap();
        assert_eq!(config.groups[0].fallback.as_deref(), Some("Misc"));
        assert_eq!(config.effects.len(), 1);
        assert_eq!(config.final_fallback.as_deref(), Some("kill @s"));
        assert_eq!(config.group_name_in_frame.as_deref(), Some("Sorter"));
        assert_eq!(config.item_name_in_frame.as_deref(), Some("Slot"));
        assert_eq!(config.pack.namespace, "mysort");
        assert_eq!(config.pack.search_radius, 16);
        // Unspecified pack fields keep their defaults.
        assert_eq!(config.pack.interval, 20);
        assert_eq!(config.pack.frame_kind, "minecraft:item_frame");
    }

    #[test]
    fn deserialize_ron() {
        let config: Configuration = ron::from_str(
            r#"(
                groups: [
                    (groupName: "Food", items: ["minecraft:bread"], itemFrame: Some("minecraft:barrel")),
                ],
                finalFallback: Some("kill @s"),
            )"#,
        )
        .unwrap();
        assert_eq!(config.groups[0].items, vec!["minecraft:bread"]);
        assert_eq!(config.final_fallback.as_deref(), Some("kill @s"));
    }

    #[test]
    fn empty_frame_counts_as_absent() {
        let group = Group {
            group_name: "Ores".to_string(),
            items: vec!["minecraft:coal".to_string()],
            item_frame: Some(String::new()),
            fallback: None,
        };
        assert_eq!(group.frame(), None);
    }

    #[test]
    fn singular_dirs_from_pack_format_45() {
        let mut options = PackOptions::default();
        assert!(!options.uses_singular_dirs());
        options.pack_format = 45;
        assert!(options.uses_singular_dirs());
    }
}
