//! Step recording for linear and binary search

use super::{format_values, Recorded, SequenceBuilder};
use crate::errors::VizError;
use crate::model::search::{binary_search, linear_search, BinaryEvent, SearchResult};
use crate::model::Element;
use crate::snapshot::{ArrayView, Highlight, Role, Structure, Target};
use std::cmp::Ordering;

/// Scan `values` left to right for `key`
pub fn record_linear_search(
    values: &[Element],
    key: Element,
) -> Result<Recorded<Vec<Element>>, VizError> {
    if values.is_empty() {
        return Err(VizError::EmptyStructure);
    }

    let trace = linear_search(values, key);
    let mut builder = SequenceBuilder::new(format!("Linear search {}", key));
    builder.intro(
        Structure::Array(ArrayView::plain(values.to_vec())),
        format!("Linear Search Started. Searching for {}...", key),
    );

    for probe in &trace.probes {
        let view = ArrayView {
            current: Some(probe.index),
            ..ArrayView::plain(values.to_vec())
        };
        if probe.matched {
            builder.terminal(
                Structure::Array(view),
                Highlight::none().with(Target::Index(probe.index), Role::Matched),
                format!("Key {} found at index {}.", key, probe.index),
            );
        } else {
            builder.action(
                Structure::Array(view),
                Highlight::none().with(Target::Index(probe.index), Role::Compared),
                format!(
                    "Key ({}) not at index {} (value {}).",
                    key, probe.index, probe.value
                ),
            );
        }
    }

    if trace.result == SearchResult::NotFound {
        let last = values.len() - 1;
        builder.terminal(
            Structure::Array(ArrayView {
                current: Some(last),
                ..ArrayView::plain(values.to_vec())
            }),
            Highlight::none(),
            format!("Reached end of array. Key {} not found.", key),
        );
    }

    Ok(Recorded {
        structure: values.to_vec(),
        steps: builder.finish(),
    })
}

/// Binary search over sorted `values` for `key`
pub fn record_binary_search(
    values: &[Element],
    key: Element,
) -> Result<Recorded<Vec<Element>>, VizError> {
    if values.is_empty() {
        return Err(VizError::EmptyStructure);
    }

    let trace = binary_search(values, key);
    let mut builder = SequenceBuilder::new(format!("Binary search {}", key));
    builder.intro(
        Structure::Array(ArrayView::plain(values.to_vec())),
        format!("Searching for {} in {}", key, format_values(values)),
    );

    let window = |low: isize, high: isize, mid: Option<usize>| {
        Structure::Array(ArrayView {
            low: Some(low),
            high: Some(high),
            mid,
            ..ArrayView::plain(values.to_vec())
        })
    };

    for event in &trace.events {
        match *event {
            BinaryEvent::Init { low, high } => builder.action(
                window(low, high, None),
                Highlight::none(),
                "Initializing low (L) and high (H) pointers.",
            ),
            BinaryEvent::Mid { low, high, mid } => builder.action(
                window(low, high, Some(mid)),
                Highlight::none().with(Target::Index(mid), Role::Current),
                format!(
                    "Calculating mid: mid = (L + H) / 2 = ({} + {}) / 2 = {}",
                    low, high, mid
                ),
            ),
            BinaryEvent::Compare {
                mid,
                value,
                ordering,
                low,
                high,
            } => match ordering {
                Ordering::Equal => builder.terminal(
                    window(low, high, Some(mid)),
                    Highlight::none().with(Target::Index(mid), Role::Matched),
                    format!("Key {} found at index {}.", key, mid),
                ),
                Ordering::Less => builder.action(
                    window(low, high, Some(mid)),
                    Highlight::none().with(Target::Index(mid), Role::Compared),
                    format!(
                        "Key({}) is greater than mid element ({}). Moving low to mid + 1 (low = {}).",
                        key, value, low
                    ),
                ),
                Ordering::Greater => builder.action(
                    window(low, high, Some(mid)),
                    Highlight::none().with(Target::Index(mid), Role::Compared),
                    format!(
                        "Key({}) is less than mid element ({}). Moving high to mid - 1 (high = {}).",
                        key, value, high
                    ),
                ),
            },
            BinaryEvent::Exhausted { low, high } => builder.terminal(
                window(low, high, None),
                Highlight::none(),
                format!(
                    "low ({}) is greater than high ({}). Key {} not found in the array.",
                    low, high, key
                ),
            ),
        }
    }

    Ok(Recorded {
        structure: values.to_vec(),
        steps: builder.finish(),
    })
}
