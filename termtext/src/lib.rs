pub mod ansi;
pub mod event;
pub mod overlay;
pub mod text;
pub mod types;

pub use event::{Binding, Event, EventResult, Key, KeyCombo, KeyParseError, Modifiers};
pub use overlay::place_overlay;
pub use types::*;
