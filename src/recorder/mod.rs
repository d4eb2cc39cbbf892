//! Step recorder
//!
//! This module turns structural-model traces into [`StepSequence`]s:
//! - [`container`]: stack, queue and linked list operations
//! - [`tree`]: binary search tree insert, search and delete
//! - [`merge_sort`]: split/merge forest animation
//! - [`search`]: linear and binary search over arrays
//!
//! # Recording Model
//!
//! Every recorder is a pure function of the current structure and the request.
//! It works on a private copy, and returns both the resulting structure and the
//! full sequence; nothing is displayed until a player installs the sequence.
//!
//! Each sequence has the same shape:
//!
//! ```text
//! Intro → Action* → Terminal → Reset
//! ```
//!
//! The reset step repeats the terminal structure and message with an empty
//! highlight. Every step owns a full copy of the structure, so any step can be
//! rendered on its own.

pub mod container;
pub mod merge_sort;
pub mod search;
pub mod tree;

use crate::model::Element;
use crate::snapshot::{Highlight, Step, StepPhase, StepSequence, Structure};

/// Resulting structure plus the steps that animate getting there
#[derive(Debug, Clone)]
pub struct Recorded<T> {
    pub structure: T,
    pub steps: StepSequence,
}

/// Appends steps in the fixed intro/action/terminal/reset shape
struct SequenceBuilder {
    sequence: StepSequence,
}

impl SequenceBuilder {
    fn new(operation: impl Into<String>) -> Self {
        SequenceBuilder {
            sequence: StepSequence::new(operation),
        }
    }

    fn intro(&mut self, structure: Structure, message: impl Into<String>) {
        self.push(structure, Highlight::none(), message, StepPhase::Intro);
    }

    fn action(&mut self, structure: Structure, highlight: Highlight, message: impl Into<String>) {
        self.push(structure, highlight, message, StepPhase::Action);
    }

    fn terminal(&mut self, structure: Structure, highlight: Highlight, message: impl Into<String>) {
        self.push(structure, highlight, message, StepPhase::Terminal);
    }

    /// Append the reset step and hand back the sequence
    fn finish(mut self) -> StepSequence {
        if let Some(last) = self.sequence.last() {
            let reset = Step {
                structure: last.structure.clone(),
                highlight: Highlight::none(),
                message: last.message.clone(),
                phase: StepPhase::Reset,
            };
            self.sequence.push(reset);
        }
        self.sequence
    }

    fn push(
        &mut self,
        structure: Structure,
        highlight: Highlight,
        message: impl Into<String>,
        phase: StepPhase,
    ) {
        self.sequence.push(Step {
            structure,
            highlight,
            message: message.into(),
            phase,
        });
    }
}

/// `[5, 4, 3]` style rendering used in narration
fn format_values(values: &[Element]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{ArrayView, Role, Target};

    #[test]
    fn test_finish_appends_reset() {
        let mut builder = SequenceBuilder::new("demo");
        let structure = Structure::Array(ArrayView::plain(vec![1, 2]));
        builder.intro(structure.clone(), "start");
        builder.terminal(
            structure.clone(),
            Highlight::none().with(Target::Index(0), Role::Matched),
            "done",
        );
        let sequence = builder.finish();

        assert_eq!(sequence.len(), 3);
        let reset = sequence.last().unwrap();
        assert_eq!(reset.phase, StepPhase::Reset);
        assert!(reset.highlight.is_empty());
        assert_eq!(reset.structure, structure);
        assert_eq!(reset.message, "done");
        assert_eq!(sequence.terminal().unwrap().message, "done");
    }

    #[test]
    fn test_format_values() {
        assert_eq!(format_values(&[5, 4, 3]), "[5, 4, 3]");
        assert_eq!(format_values(&[]), "[]");
    }
}
