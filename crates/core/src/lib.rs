//! Core state for the Neo Lux site interactions
//!
//! Everything here is browser-independent: the wasm frontend (`neo-lux-ui`)
//! feeds DOM events into these types and applies what they return.

pub mod carousel;
pub mod config;
pub mod lightbox;
pub mod reveal;
pub mod schedule;
pub mod scroll;
pub mod storage;
pub mod submit;
pub mod theme;
pub mod validate;

pub use config::{ConfigError, SiteConfig};
pub use schedule::{ManualScheduler, Scheduler};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::{Theme, ThemeState};
