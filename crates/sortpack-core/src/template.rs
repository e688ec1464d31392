//! Command text templates.
//!
//! Every line the compiler emits is produced here. The frame selector in
//! particular is built only by [`FrameMatch::selector`], so the positive and
//! negative branches of a routing script always test the same predicate.

use serde_json::Value;

use crate::config::{Configuration, PackOptions};

/// Fake player holding the tick counter.
pub const TIMER_HOLDER: &str = "#timer";

/// Fake player holding the effect cooldown flag.
pub const COOLDOWN_HOLDER: &str = "#cooldown";

pub fn timer_objective(namespace: &str) -> String {
    format!("{namespace}_timer")
}

pub fn cooldown_objective(namespace: &str) -> String {
    format!("{namespace}_cooldown")
}

// ===========================================================================
// SNBT quoting
// ===========================================================================

/// Quote `value` as an SNBT string delimited by `quote` (`"` or `'`).
pub fn quote_snbt(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        if c == '\\' || c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(quote);
    out
}

/// A custom name as the JSON text component stored in `display.Name`.
pub fn name_component(name: &str) -> String {
    Value::String(name.to_string()).to_string()
}

// ===========================================================================
// Frame matching
// ===========================================================================

/// Predicate for "a frame within range showing `target`, optionally renamed
/// to `name`".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameMatch<'a> {
    pub kind: &'a str,
    pub radius: u32,
    pub target: &'a str,
    pub name: Option<&'a str>,
}

impl<'a> FrameMatch<'a> {
    pub fn new(options: &'a PackOptions, target: &'a str, name: Option<&'a str>) -> Self {
        Self {
            kind: &options.frame_kind,
            radius: options.search_radius,
            target,
            name,
        }
    }

    /// The `nbt=` compound matched against the frame.
    pub fn item_predicate(&self) -> String {
        let mut item = format!("id:{}", quote_snbt(self.target, '"'));
        if let Some(name) = self.name {
            item.push_str(&format!(
                ",tag:{{display:{{Name:{}}}}}",
                quote_snbt(&name_component(name), '\'')
            ));
        }
        format!("{{Item:{{{item}}}}}")
    }

    /// Entity selector for the nearest matching frame.
    pub fn selector(&self) -> String {
        format!(
            "@e[type={},distance=..{},nbt={},sort=nearest,limit=1]",
            self.kind,
            self.radius,
            self.item_predicate()
        )
    }
}

/// Two-line routing script: teleport to the frame if one is in range,
/// otherwise run `fallback`.
pub fn routing_script(frame: &FrameMatch<'_>, fallback: &str) -> String {
    let selector = frame.selector();
    format!(
        "execute if entity {selector} run tp @s {selector}\n\
         execute unless entity {selector} run {fallback}\n"
    )
}

// ===========================================================================
// Dispatcher
// ===========================================================================

/// Header block of the dispatcher: title, group summary, and cooldown-gated
/// effects.
pub fn dispatcher_header(config: &Configuration) -> String {
    let names: Vec<&str> = config
        .groups
        .iter()
        .map(|g| g.group_name.as_str())
        .collect();

    let mut header = String::from("# Item sorter dispatcher\n");
    header.push_str(&format!("# {} groups: {}\n", names.len(), names.join(", ")));

    if !config.effects.is_empty() {
        let objective = cooldown_objective(&config.pack.namespace);
        for effect in &config.effects {
            header.push_str(&format!(
                "execute if score {COOLDOWN_HOLDER} {objective} matches 0 run {effect}\n"
            ));
        }
        header.push_str(&format!(
            "scoreboard players set {COOLDOWN_HOLDER} {objective} 1\n"
        ));
    }

    header
}

/// Dispatch line: run `call` when the executing item entity carries `item_id`.
pub fn dispatch_line(item_id: &str, call: &str) -> String {
    format!(
        "execute if entity @s[nbt={{Item:{{id:{}}}}}] run {call}\n",
        quote_snbt(item_id, '"')
    )
}

// ===========================================================================
// Tests
// ===========================================================================
