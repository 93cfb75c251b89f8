//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the terminal shell (main.rs) and the
//! domain/index layers. It implements the event-driven flow behind the hub:
//!
//! ```text
//! Input → Event → handle_event → State Mutations → (render?, Actions)
//!                                                        ↓
//!                                   Hub: render, then execute actions
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`controller`]: The [`Hub`] loop and the host capability traits
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Navigation and input mode state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use controller::{Clipboard, Hub, Navigator, Notifier, Surface};
pub use handler::{handle_event, Event};
pub use modes::{CheckStatus, InputMode, View};
pub use state::{AppState, CopiedBadge, ListEntry, PlatformSelection};
