//! Cascading selection (Subject → Chapter → Topic, Board → Program, ...)
//!
//! - controller.rs: framework-free state machine with request generations
//! - handle.rs: Leptos binding that runs the fetches with `spawn_local`

mod controller;
mod handle;

pub use controller::{CascadeController, CascadeLevel, FetchTicket, LevelState};
pub use handle::{list_fetcher, CascadeHandle, LevelFetcher};
