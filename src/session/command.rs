//! Typed user commands and input validation

use crate::errors::VizError;
use crate::model::Element;

/// A request from the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(Element),
    Delete(Element),
    Search(Element),
    GenerateRandom { size: usize, max_value: Element },
    Next,
    Previous,
    ToggleAuto,
    JumpToStart,
    JumpToEnd,
    Push(Element),
    Pop,
    Enqueue(Element),
    Dequeue,
    /// Show the element a pop/dequeue would remove
    Peek,
    InsertAt { index: usize, value: Element },
    RemoveAt(usize),
    RemoveHead,
    RemoveTail,
    Clear,
    /// Re-run merge sort over the current array
    Sort,
}

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Command::Insert(_) => "Insert",
            Command::Delete(_) => "Delete",
            Command::Search(_) => "Search",
            Command::GenerateRandom { .. } => "Random",
            Command::Next => "Next",
            Command::Previous => "Previous",
            Command::ToggleAuto => "Auto",
            Command::JumpToStart => "First",
            Command::JumpToEnd => "Last",
            Command::Push(_) => "Push",
            Command::Pop => "Pop",
            Command::Enqueue(_) => "Enqueue",
            Command::Dequeue => "Dequeue",
            Command::Peek => "Peek",
            Command::InsertAt { .. } => "Insert at index",
            Command::RemoveAt(_) => "Delete at index",
            Command::RemoveHead => "Delete head",
            Command::RemoveTail => "Delete tail",
            Command::Clear => "Clear",
            Command::Sort => "Sort",
        }
    }

    /// Player navigation rather than a new operation
    pub fn is_playback(self) -> bool {
        matches!(
            self,
            Command::Next
                | Command::Previous
                | Command::ToggleAuto
                | Command::JumpToStart
                | Command::JumpToEnd
        )
    }
}

/// Parse a user-typed element value
pub fn parse_element(input: &str) -> Result<Element, VizError> {
    input.trim().parse().map_err(|_| VizError::InvalidInput {
        input: input.to_string(),
    })
}

/// Parse a user-typed list index
pub fn parse_index(input: &str) -> Result<usize, VizError> {
    input.trim().parse().map_err(|_| VizError::InvalidInput {
        input: input.to_string(),
    })
}
