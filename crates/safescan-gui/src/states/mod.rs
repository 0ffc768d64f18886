mod preview;
mod reveal;
mod ui;

pub use preview::PreviewState;
pub use reveal::BarReveal;
pub use ui::{Notice, UIState};
