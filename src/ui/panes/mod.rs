//! TUI pane rendering modules
//!
//! Each pane is a stateless `render_*` function over engine data; none of them
//! mutate the session.
//!
//! # Pane Modules
//!
//! - [`structure`]: the current snapshot drawn on a canvas with role colours
//! - [`narration`]: the step messages of the current sequence
//! - [`input`]: value prompt or the visualizer's operation keys
//! - [`status`]: step counter, notices, keybindings and playback badges

pub mod input;
pub mod narration;
pub mod status;
pub mod structure;

// Re-export render functions for convenience
pub use input::render_input_line;
pub use narration::render_narration_pane;
pub use status::render_status_bar;
pub use structure::render_structure_pane;
