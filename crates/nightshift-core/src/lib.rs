//! Night Shift Core - Night Simulation Engine
//!
//! A headless survival-horror night simulation: the player guards an office
//! from midnight to 6 AM against two antagonists that move along fixed
//! paths toward the office doors, while doors, lights, and the camera
//! monitor drain a shared power reserve.
//!
//! # Architecture
//!
//! - **Session**: the single authoritative state snapshot (`session`)
//! - **Systems**: per-tick logic over the session (`systems`)
//! - **Engine**: cooperative scheduler, state machine, and command entry
//!   points (`engine`)
//! - **Signals**: fire-and-forget outbound events for the rendering and
//!   audio layers (`events`)
//!
//! Everything runs on one logical thread. The embedding layer calls
//! [`engine::NightEngine::advance`] with elapsed wall-clock milliseconds
//! and renders from the published session snapshot.
//!
//! # Example
//!
//! ```rust,no_run
//! use nightshift_core::prelude::*;
//!
//! let mut engine = NightEngine::new();
//! engine.start_night(1);
//!
//! loop {
//!     engine.advance(16); // ~60 FPS frame
//!     for signal in engine.drain_signals() {
//!         // forward to rendering / audio
//!         let _ = signal;
//!     }
//! }
//! ```

pub mod engine;
pub mod events;
pub mod session;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::NightEngine;
    pub use crate::events::{Signal, SoundCue};
    pub use crate::session::{AntagonistId, FailureCause, Session, Side, View};
    pub use nightshift_logic::settings::GameSettings;
}
