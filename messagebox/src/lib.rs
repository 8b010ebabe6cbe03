//! A modal message box drawn over another widget's output.
//!
//! Open it with [`MessageBox::open`], route input to [`MessageBox::update`]
//! while [`MessageBox::is_active`] is true, and call [`MessageBox::render`]
//! as the last step of drawing a frame. `update` returns the chosen
//! [`Button`] once the box is dismissed.

mod button;
mod message_box;
mod style;

pub use button::{Button, ButtonSet};
pub use message_box::{MessageBox, Options, DEFAULT_WIDTH};
pub use style::Styles;
