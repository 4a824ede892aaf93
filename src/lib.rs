//! This crate provides a way to load and edit planner events ("umbrellas").
//!
//! It provides a GraphQL client in the [`client`] module, that can be used as a stand-alone module.
//!
//! The [`PlannerEditor`](editor::PlannerEditor) holds the state of one umbrella being edited. \
//! It loads the record from any [`PlannerSource`](traits::PlannerSource), and commits title and date range changes back to it. \
//! Notifications, navigation and dialog changes are reported through a [`feedback`] channel.

pub mod traits;

mod event;
pub use event::{Event, EventId, EventInput};
pub mod editor;
pub use editor::PlannerEditor;
pub mod form;
pub mod range;
pub mod session;
pub use session::Session;

pub mod client;
pub mod mock;

pub mod config;
pub mod feedback;
pub mod nav;
pub mod utils;
