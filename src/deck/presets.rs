//! Preset decks from the base game's balance notes.

use super::config::DeckConfig;

/// Names accepted by [`preset`].
pub const PRESET_NAMES: &[&str] = &["goblin-rush", "archer-control", "skeleton-wall", "mixed-arsenal"];

/// 20 angry Goblins hunting kills.
pub fn goblin_rush() -> DeckConfig {
    DeckConfig::repeated("Goblin", 20)
        .with_name("Goblin Rush")
        .with_flavor("angry")
        .with_strategy("kill-shot")
}

/// 12 Archers then 8 Wizards, hardy, minimizing wasted damage.
pub fn archer_control() -> DeckConfig {
    DeckConfig::repeated("Archer", 12)
        .then(std::iter::repeat("Wizard").take(8))
        .with_name("Archer Control")
        .with_flavor("hardy")
        .with_strategy("optimize-damage")
}

/// 20 hardy Skeletons going after expensive units.
pub fn skeleton_wall() -> DeckConfig {
    DeckConfig::repeated("Skeleton", 20)
        .with_name("Skeleton Wall")
        .with_flavor("hardy")
        .with_strategy("target-mana")
}

/// A curve of every card but Skeleton, angry, going after expensive units.
pub fn mixed_arsenal() -> DeckConfig {
    DeckConfig::new([
        "Archer", "Archer", "Goblin", "Wizard", "Goblin", "Wizard", "Knight", "Knight", "Goblin",
        "Archer", "Wizard", "Knight", "Archer", "Wizard", "Archer", "Wizard", "Archer", "Wizard",
        "Knight", "Wizard",
    ])
    .with_name("Mixed Arsenal")
    .with_flavor("angry")
    .with_strategy("target-mana")
}

/// Look up a preset by name.
#[must_use]
pub fn preset(name: &str) -> Option<DeckConfig> {
    match name {
        "goblin-rush" => Some(goblin_rush()),
        "archer-control" => Some(archer_control()),
        "skeleton-wall" => Some(skeleton_wall()),
        "mixed-arsenal" => Some(mixed_arsenal()),
        _ => None,
    }
}
