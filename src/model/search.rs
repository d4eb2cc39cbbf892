//! Linear and binary search traces
//!
//! Binary search keeps `low`/`high` as signed indices: a miss left of index 0
//! drives `high` to -1, and the terminal state is always `low > high`.

use super::Element;
use std::cmp::Ordering;

/// Terminal result of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    Found(usize),
    NotFound,
}

/// One index examined by linear search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearProbe {
    pub index: usize,
    pub value: Element,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearTrace {
    pub key: Element,
    pub probes: Vec<LinearProbe>,
    pub result: SearchResult,
}

/// Scan from index 0 until the key is found or the array ends
pub fn linear_search(values: &[Element], key: Element) -> LinearTrace {
    let mut probes = Vec::new();
    for (index, &value) in values.iter().enumerate() {
        let matched = value == key;
        probes.push(LinearProbe {
            index,
            value,
            matched,
        });
        if matched {
            return LinearTrace {
                key,
                probes,
                result: SearchResult::Found(index),
            };
        }
    }
    LinearTrace {
        key,
        probes,
        result: SearchResult::NotFound,
    }
}

/// A state change of the binary search window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryEvent {
    Init {
        low: isize,
        high: isize,
    },
    Mid {
        low: isize,
        high: isize,
        mid: usize,
    },
    /// `array[mid]` compared with the key; `low`/`high` are the narrowed window
    Compare {
        mid: usize,
        value: Element,
        ordering: Ordering,
        low: isize,
        high: isize,
    },
    Exhausted {
        low: isize,
        high: isize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTrace {
    pub key: Element,
    pub events: Vec<BinaryEvent>,
    pub result: SearchResult,
}

impl BinaryTrace {
    /// Final `(low, high)` window
    pub fn final_window(&self) -> Option<(isize, isize)> {
        self.events.last().map(|event| match *event {
            BinaryEvent::Init { low, high }
            | BinaryEvent::Mid { low, high, .. }
            | BinaryEvent::Compare { low, high, .. }
            | BinaryEvent::Exhausted { low, high } => (low, high),
        })
    }
}

/// Binary search over a sorted slice
pub fn binary_search(values: &[Element], key: Element) -> BinaryTrace {
    let mut events = Vec::new();
    let mut low: isize = 0;
    let mut high: isize = values.len() as isize - 1;
    events.push(BinaryEvent::Init { low, high });

    while low <= high {
        let mid = ((low + high) / 2) as usize;
        events.push(BinaryEvent::Mid { low, high, mid });

        let value = values[mid];
        let ordering = value.cmp(&key);
        match ordering {
            Ordering::Equal => {}
            Ordering::Less => low = mid as isize + 1,
            Ordering::Greater => high = mid as isize - 1,
        }
        events.push(BinaryEvent::Compare {
            mid,
            value,
            ordering,
            low,
            high,
        });

        if ordering == Ordering::Equal {
            return BinaryTrace {
                key,
                events,
                result: SearchResult::Found(mid),
            };
        }
    }

    events.push(BinaryEvent::Exhausted { low, high });
    BinaryTrace {
        key,
        events,
        result: SearchResult::NotFound,
    }
}
