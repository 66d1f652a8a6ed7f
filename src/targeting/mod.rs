//! Targeting strategies for attacking units.
//!
//! A side's strategy decides which enemy unit each of its attackers hits:
//! - `TargetMana`: most expensive enemy
//! - `KillShot`: biggest enemy the hit can kill
//! - `OptimizeDamage`: least wasted damage

pub mod strategy;

pub use strategy::Strategy;
