//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, value prompts, auto-play ticks
//! - **[`panes`]**: stateless render functions for each visible pane (structure,
//!   narration, input line, status bar)
//! - **[`theme`]**: centralized color palette, including highlight role colours
//!
//! The entry point for consumers is [`App`]: construct it with a [`Session`] and
//! call [`App::run`] to start the event loop. The UI only reads engine state and
//! sends [`Command`]s; it never mutates a structure directly.
//!
//! [`Session`]: crate::session::Session
//! [`Command`]: crate::session::Command
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
