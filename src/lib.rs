//! # Introduction
//!
//! Algoscope generates and replays step-by-step animations of classic data
//! structures and algorithms: stack, queue, linked list, binary search tree,
//! merge sort, binary search and linear search. Every operation is recorded in
//! full before anything is shown, then navigated forward and backward through a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Command → Model → Recorder → StepSequence → Player → Layout → TUI
//! ```
//!
//! 1. [`model`]: the structures and algorithms themselves, returning traces of
//!    every comparison and pointer move.
//! 2. [`recorder`]: turns a trace into a [`snapshot::StepSequence`] of
//!    self-contained steps (structure copy, highlight roles, narration).
//! 3. [`player`]: cursor over the active sequence with next/previous,
//!    auto-play driven by an injectable [`player::scheduler::Scheduler`].
//! 4. [`layout`]: pure projection of a snapshot to positioned nodes and edges.
//! 5. [`session`]: typed [`session::Command`]s, input validation, the live
//!    structure and auto-expiring notices.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod config;
pub mod errors;
pub mod layout;
pub mod model;
pub mod player;
pub mod recorder;
pub mod session;
pub mod snapshot;
pub mod ui;
