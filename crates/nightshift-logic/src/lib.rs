//! Pure game logic for Night Shift.
//!
//! This crate contains all night-simulation logic that is independent of any
//! scheduler, renderer, or audio runtime. Functions take plain data and
//! return results, making them unit-testable and portable.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Path topology, aggression table, tick cadences |
//! | [`movement`] | Path-step resolution for antagonist AI |
//! | [`power`] | Actuator drain formula and usage-level indicator |
//! | [`settings`] | Night configuration, defaults, validation |

pub mod constants;
pub mod movement;
pub mod power;
pub mod settings;
