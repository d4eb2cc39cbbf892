//! Merge sort with a recorded split/merge trace
//!
//! The recursion splits at `floor(n / 2)` until a sub-array has at most one
//! element, then merges pairs bottom-up. Every sub-array gets a node id in
//! creation order (pre-order over the recursion), which the recorder uses to
//! keep the visible split forest in sync.
//!
//! The merge is stable in the opposite sense of the textbook one: `left[i] <
//! right[j]` takes from the left, anything else (including ties) takes from the
//! right. Step narration depends on this exact rule.

use super::{Element, Side};

/// Identifier of a sub-array in the split forest
pub type SortNodeId = usize;

/// One element written to a merge output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeWrite {
    pub value: Element,
    pub from: Side,
    /// Head of the other half at the time of the write, `None` once it is drained
    pub against: Option<Element>,
}

/// A semantically meaningful sub-action of the sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortEvent {
    /// A sub-array became visible
    Split {
        id: SortNodeId,
        parent: Option<SortNodeId>,
        values: Vec<Element>,
        depth: usize,
        /// Split point, `None` for sub-arrays of length <= 1
        mid: Option<usize>,
    },
    /// Two sorted children merged into their parent
    Merge {
        id: SortNodeId,
        left: SortNodeId,
        right: SortNodeId,
        left_values: Vec<Element>,
        right_values: Vec<Element>,
        writes: Vec<MergeWrite>,
    },
}

/// Full trace of one merge sort run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortTrace {
    pub input: Vec<Element>,
    pub events: Vec<SortEvent>,
    pub sorted: Vec<Element>,
}

impl SortTrace {
    /// Writes where the right half won while the left half still had elements
    pub fn reorderings(&self) -> usize {
        self.events
            .iter()
            .filter_map(|event| match event {
                SortEvent::Merge { writes, .. } => Some(writes),
                SortEvent::Split { .. } => None,
            })
            .flatten()
            .filter(|write| write.from == Side::Right && write.against.is_some())
            .count()
    }

    pub fn merge_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SortEvent::Merge { .. }))
            .count()
    }
}

/// Sort `values`, recording every split and merge
pub fn merge_sort(values: &[Element]) -> SortTrace {
    let mut events = Vec::new();
    let mut next_id = 0;
    let sorted = sort_node(values, None, 0, &mut next_id, &mut events);
    SortTrace {
        input: values.to_vec(),
        events,
        sorted,
    }
}

fn sort_node(
    values: &[Element],
    parent: Option<SortNodeId>,
    depth: usize,
    next_id: &mut SortNodeId,
    events: &mut Vec<SortEvent>,
) -> Vec<Element> {
    let id = *next_id;
    *next_id += 1;

    let mid = (values.len() > 1).then_some(values.len() / 2);
    events.push(SortEvent::Split {
        id,
        parent,
        values: values.to_vec(),
        depth,
        mid,
    });

    let Some(mid) = mid else {
        return values.to_vec();
    };

    let left_id = *next_id;
    let left = sort_node(&values[..mid], Some(id), depth + 1, next_id, events);
    let right_id = *next_id;
    let right = sort_node(&values[mid..], Some(id), depth + 1, next_id, events);

    let writes = merge(&left, &right);
    let merged = writes.iter().map(|w| w.value).collect();
    events.push(SortEvent::Merge {
        id,
        left: left_id,
        right: right_id,
        left_values: left,
        right_values: right,
        writes,
    });
    merged
}

/// Interleave two sorted halves; ties favor the right half
pub fn merge(left: &[Element], right: &[Element]) -> Vec<MergeWrite> {
    let mut writes = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] < right[j] {
            writes.push(MergeWrite {
                value: left[i],
                from: Side::Left,
                against: Some(right[j]),
            });
            i += 1;
        } else {
            writes.push(MergeWrite {
                value: right[j],
                from: Side::Right,
                against: Some(left[i]),
            });
            j += 1;
        }
    }
    writes.extend(left[i..].iter().map(|&value| MergeWrite {
        value,
        from: Side::Left,
        against: None,
    }));
    writes.extend(right[j..].iter().map(|&value| MergeWrite {
        value,
        from: Side::Right,
        against: None,
    }));
    writes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_values(trace: &SortTrace) -> Vec<Vec<Element>> {
        trace
            .events
            .iter()
            .filter_map(|event| match event {
                SortEvent::Split { values, .. } => Some(values.clone()),
                SortEvent::Merge { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_reverse_input_split_order() {
        let trace = merge_sort(&[5, 4, 3, 2, 1]);
        assert_eq!(trace.sorted, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            split_values(&trace),
            vec![
                vec![5, 4, 3, 2, 1],
                vec![5, 4],
                vec![5],
                vec![4],
                vec![3, 2, 1],
                vec![3],
                vec![2, 1],
                vec![2],
                vec![1],
            ]
        );
        assert_eq!(trace.merge_count(), 4);
    }

    #[test]
    fn test_merge_ids_follow_creation_order() {
        let trace = merge_sort(&[5, 4, 3]);
        // ids: 0=[5,4,3] 1=[5] 2=[4,3] 3=[4] 4=[3]
        let merges: Vec<(SortNodeId, SortNodeId, SortNodeId)> = trace
            .events
            .iter()
            .filter_map(|event| match event {
                SortEvent::Merge {
                    id, left, right, ..
                } => Some((*id, *left, *right)),
                SortEvent::Split { .. } => None,
            })
            .collect();
        assert_eq!(merges, vec![(2, 3, 4), (0, 1, 2)]);
    }

    #[test]
    fn test_ties_favor_right() {
        let writes = merge(&[3], &[3]);
        assert_eq!(writes[0].from, Side::Right);
        assert_eq!(writes[0].against, Some(3));
        assert_eq!(writes[1].from, Side::Left);
        assert_eq!(writes[1].against, None);
    }

    #[test]
    fn test_sorted_input_has_no_reorderings() {
        let trace = merge_sort(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(trace.reorderings(), 0);
        assert_eq!(trace.sorted, trace.input);

        let reversed = merge_sort(&[7, 6, 5, 4, 3, 2, 1]);
        assert!(reversed.reorderings() > 0);
    }

    #[test]
    fn test_trivial_inputs() {
        assert_eq!(merge_sort(&[]).sorted, Vec::<Element>::new());
        let single = merge_sort(&[9]);
        assert_eq!(single.sorted, vec![9]);
        assert_eq!(single.events.len(), 1);
    }
}
