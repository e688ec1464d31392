//! Fixed init/tick/sort functions that drive the dispatcher.
//!
//! `init` runs on load, `tick` every game tick. `tick` runs `sort` once per
//! cycle of `interval` ticks, and `sort` runs the dispatcher as every item
//! entity resting on the marker blocks.

use crate::compiler::{Artifact, ArtifactKind};
use crate::config::PackOptions;
use crate::ident::{DISPATCH_ARTIFACT, function_call};
use crate::template::{COOLDOWN_HOLDER, TIMER_HOLDER, cooldown_objective, timer_objective};

pub const INIT_ARTIFACT: &str = "init";
pub const TICK_ARTIFACT: &str = "tick";
pub const SORT_ARTIFACT: &str = "sort";

pub fn init_script(options: &PackOptions) -> String {
    let timer = timer_objective(&options.namespace);
    let cooldown = cooldown_objective(&options.namespace);
    format!(
        "scoreboard objectives add {timer} dummy\n\
         scoreboard objectives add {cooldown} dummy\n\
         scoreboard players set {TIMER_HOLDER} {timer} 0\n\
         scoreboard players set {COOLDOWN_HOLDER} {cooldown} 0\n"
    )
}

pub fn tick_script(options: &PackOptions) -> String {
    let timer = timer_objective(&options.namespace);
    let cooldown = cooldown_objective(&options.namespace);
    let sort = function_call(&options.namespace, SORT_ARTIFACT);
    let interval = options.interval.max(1);
    format!(
        "scoreboard players add {TIMER_HOLDER} {timer} 1\n\
         execute if score {TIMER_HOLDER} {timer} matches 1 run {sort}\n\
         execute if score {TIMER_HOLDER} {timer} matches {interval}.. run scoreboard players set {COOLDOWN_HOLDER} {cooldown} 0\n\
         execute if score {TIMER_HOLDER} {timer} matches {interval}.. run scoreboard players set {TIMER_HOLDER} {timer} 0\n"
    )
}

pub fn sort_script(options: &PackOptions) -> String {
    let dispatch = function_call(&options.namespace, DISPATCH_ARTIFACT);
    format!(
        "execute as @e[type=minecraft:item] at @s if block ~ ~-1 ~ {} if block ~ ~-2 ~ {} run {dispatch}\n",
        options.marker_top, options.marker_bottom
    )
}

/// The three lifecycle functions, in write order.
pub fn lifecycle_artifacts(options: &PackOptions) -> Vec<Artifact> {
    [
        (INIT_ARTIFACT, init_script(options)),
        (TICK_ARTIFACT, tick_script(options)),
        (SORT_ARTIFACT, sort_script(options)),
    ]
    .into_iter()
    .map(|(name, content)| Artifact {
        name: name.to_string(),
        kind: ArtifactKind::Lifecycle,
        content,
    })
    .collect()
}
