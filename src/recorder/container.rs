//! Step recording for stack, queue and linked list operations

use super::{Recorded, SequenceBuilder};
use crate::errors::VizError;
use crate::model::sequence::{BoundedSeq, SeqChange};
use crate::model::Element;
use crate::snapshot::{ContainerView, Highlight, Role, Structure, Target};

/// A container mutation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerOp {
    /// Stack push onto the top
    Push(Element),
    /// Stack pop from the top
    Pop,
    /// Queue insert at the front
    Enqueue(Element),
    /// Queue removal from the back
    Dequeue,
    /// List append at the tail
    InsertTail(Element),
    InsertAt { index: usize, value: Element },
    RemoveAt(usize),
    RemoveHead,
    RemoveTail,
    Clear,
}

impl ContainerOp {
    pub fn name(self) -> &'static str {
        match self {
            ContainerOp::Push(_) => "Push",
            ContainerOp::Pop => "Pop",
            ContainerOp::Enqueue(_) => "Enqueue",
            ContainerOp::Dequeue => "Dequeue",
            ContainerOp::InsertTail(_) => "Insert",
            ContainerOp::InsertAt { .. } => "Insert at index",
            ContainerOp::RemoveAt(_) => "Delete at index",
            ContainerOp::RemoveHead => "Delete head",
            ContainerOp::RemoveTail => "Delete tail",
            ContainerOp::Clear => "Clear",
        }
    }
}

fn view(seq: &BoundedSeq) -> Structure {
    Structure::Container(ContainerView {
        kind: seq.kind(),
        items: seq.items().to_vec(),
        capacity: seq.capacity(),
    })
}

/// Apply `op` to a copy of `seq` and record the steps.
///
/// Rejected operations (full, empty, bad index) return an error and no steps.
pub fn record_container(
    seq: &BoundedSeq,
    op: ContainerOp,
) -> Result<Recorded<BoundedSeq>, VizError> {
    let kind = seq.kind();
    let mut next = seq.clone();

    match op {
        ContainerOp::Push(value) => {
            let change = next.push_end(value)?;
            Ok(record_insert(
                seq,
                next,
                change,
                format!("Pushing {} onto the stack", value),
                format!("{} pushed onto the top of the stack", value),
                "Push complete",
            ))
        }
        ContainerOp::Enqueue(value) => {
            let change = next.push_front(value)?;
            Ok(record_insert(
                seq,
                next,
                change,
                format!("Enqueuing {}", value),
                format!("{} inserted at the rear of the queue", value),
                "Enqueue complete",
            ))
        }
        ContainerOp::InsertTail(value) => {
            let index = next.len();
            let change = next.insert_at(index, value)?;
            Ok(record_insert(
                seq,
                next,
                change,
                format!("Inserting {} at the tail", value),
                format!("Inserted {} at index {}", value, index),
                "Insertion complete",
            ))
        }
        ContainerOp::InsertAt { index, value } => {
            let change = next.insert_at(index, value)?;
            Ok(record_insert(
                seq,
                next,
                change,
                format!("Inserting {} at index {}", value, index),
                format!("Inserted {} at index {}", value, index),
                "Insertion complete",
            ))
        }
        ContainerOp::Pop => {
            let change = next.pop_end()?;
            let value = change.value;
            Ok(record_remove(
                seq,
                next,
                change,
                "Popping from the stack".to_string(),
                format!("Removing top element {}", value),
                format!("Popped {} from the stack", value),
            ))
        }
        ContainerOp::Dequeue => {
            let change = next.pop_end()?;
            let value = change.value;
            Ok(record_remove(
                seq,
                next,
                change,
                "Dequeuing from the queue".to_string(),
                format!("Removing front element {}", value),
                format!("Dequeued {} from the queue", value),
            ))
        }
        ContainerOp::RemoveHead => record_remove_at(seq, next, 0),
        ContainerOp::RemoveTail => {
            let index = next.len().saturating_sub(1);
            record_remove_at(seq, next, index)
        }
        ContainerOp::RemoveAt(index) => record_remove_at(seq, next, index),
        ContainerOp::Clear => {
            let removed = next.clear();
            let mut builder = SequenceBuilder::new(op.name());
            builder.intro(view(seq), format!("Clearing the {}", kind.name().to_lowercase()));
            let message = if removed == 0 {
                format!("{} is already empty", kind.name())
            } else {
                format!("{} cleared ({} removed)", kind.name(), removed)
            };
            builder.terminal(view(&next), Highlight::none(), message);
            Ok(Recorded {
                structure: next,
                steps: builder.finish(),
            })
        }
    }
}

fn record_remove_at(
    before: &BoundedSeq,
    mut after: BoundedSeq,
    index: usize,
) -> Result<Recorded<BoundedSeq>, VizError> {
    let change = after.remove_at(index)?;
    let value = change.value;
    Ok(record_remove(
        before,
        after,
        change,
        format!("Deleting the node at index {}", index),
        format!("Removing {} at index {}", value, index),
        format!("Deleted {} from index {}", value, index),
    ))
}

fn record_insert(
    before: &BoundedSeq,
    after: BoundedSeq,
    change: SeqChange,
    intro: String,
    action: String,
    terminal: &str,
) -> Recorded<BoundedSeq> {
    let mut builder = SequenceBuilder::new(intro.clone());
    builder.intro(view(before), intro);
    record_walk(&mut builder, before, &change.visited);

    let inserted = Highlight::none().with(Target::Index(change.index), Role::New);
    builder.action(view(&after), inserted.clone(), action);
    builder.terminal(view(&after), inserted, terminal);
    Recorded {
        structure: after,
        steps: builder.finish(),
    }
}

fn record_remove(
    before: &BoundedSeq,
    after: BoundedSeq,
    change: SeqChange,
    intro: String,
    action: String,
    terminal: String,
) -> Recorded<BoundedSeq> {
    let mut builder = SequenceBuilder::new(intro.clone());
    builder.intro(view(before), intro);
    record_walk(&mut builder, before, &change.visited);

    builder.action(
        view(before),
        Highlight::none().with(Target::Index(change.index), Role::Removed),
        action,
    );
    builder.terminal(view(&after), Highlight::none(), terminal);
    Recorded {
        structure: after,
        steps: builder.finish(),
    }
}

/// One step per node walked from the head
fn record_walk(builder: &mut SequenceBuilder, seq: &BoundedSeq, visited: &[usize]) {
    for &index in visited {
        let value = seq.items()[index];
        let message = if index == 0 {
            format!("Starting at the head node {}", value)
        } else {
            format!("Moving to the next node: {} at index {}", value, index)
        };
        builder.action(
            view(seq),
            Highlight::none().with(Target::Index(index), Role::Current),
            message,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sequence::ContainerKind;
    use crate::snapshot::StepPhase;

    fn items(structure: &Structure) -> Vec<Element> {
        match structure {
            Structure::Container(view) => view.items.clone(),
            _ => panic!("Expected container"),
        }
    }

    #[test]
    fn test_push_sequence_shape() {
        let stack = BoundedSeq::new(ContainerKind::Stack, 5);
        let recorded = record_container(&stack, ContainerOp::Push(7)).unwrap();
        let steps = &recorded.steps;

        assert_eq!(recorded.structure.items(), &[7]);
        assert_eq!(steps.get(0).unwrap().phase, StepPhase::Intro);
        assert!(items(&steps.get(0).unwrap().structure).is_empty());
        assert_eq!(steps.terminal().unwrap().message, "Push complete");
        assert_eq!(steps.last().unwrap().phase, StepPhase::Reset);
        assert_eq!(items(&steps.last().unwrap().structure), vec![7]);
    }

    #[test]
    fn test_full_stack_rejected_without_steps() {
        let mut stack = BoundedSeq::new(ContainerKind::Stack, 1);
        stack.push_end(1).unwrap();
        let result = record_container(&stack, ContainerOp::Push(2));
        assert!(matches!(result, Err(VizError::CapacityExceeded { .. })));
        assert_eq!(stack.items(), &[1]);
    }

    #[test]
    fn test_dequeue_removes_front() {
        let mut queue = BoundedSeq::new(ContainerKind::Queue, 5);
        queue.push_front(1).unwrap();
        queue.push_front(2).unwrap();
        let recorded = record_container(&queue, ContainerOp::Dequeue).unwrap();
        assert_eq!(recorded.structure.items(), &[2]);

        let removal = recorded.steps.get(1).unwrap();
        assert_eq!(removal.highlight.role_of(Target::Index(1)), Some(Role::Removed));
        assert_eq!(removal.message, "Removing front element 1");
    }

    #[test]
    fn test_list_insert_walks_from_head() {
        let mut list = BoundedSeq::new(ContainerKind::LinkedList, 10);
        for value in [10, 20, 30] {
            list.push_end(value).unwrap();
        }
        let recorded =
            record_container(&list, ContainerOp::InsertAt { index: 2, value: 25 }).unwrap();
        let messages: Vec<&str> = recorded.steps.iter().map(|s| s.message.as_str()).collect();

        assert_eq!(
            messages,
            vec![
                "Inserting 25 at index 2",
                "Starting at the head node 10",
                "Moving to the next node: 20 at index 1",
                "Inserted 25 at index 2",
                "Insertion complete",
                "Insertion complete",
            ]
        );
        assert_eq!(recorded.structure.items(), &[10, 20, 25, 30]);
    }

    #[test]
    fn test_list_remove_tail_and_bad_index() {
        let mut list = BoundedSeq::new(ContainerKind::LinkedList, 10);
        for value in [1, 2, 3] {
            list.push_end(value).unwrap();
        }
        let recorded = record_container(&list, ContainerOp::RemoveTail).unwrap();
        assert_eq!(recorded.structure.items(), &[1, 2]);
        assert_eq!(recorded.steps.terminal().unwrap().message, "Deleted 3 from index 2");

        assert_eq!(
            record_container(&list, ContainerOp::RemoveAt(5)).unwrap_err(),
            VizError::IndexOutOfRange { index: 5, len: 3 }
        );
    }

    #[test]
    fn test_clear() {
        let mut queue = BoundedSeq::new(ContainerKind::Queue, 4);
        queue.push_front(1).unwrap();
        let recorded = record_container(&queue, ContainerOp::Clear).unwrap();
        assert!(recorded.structure.is_empty());
        assert_eq!(recorded.steps.len(), 3);
        assert_eq!(recorded.steps.terminal().unwrap().message, "Queue cleared (1 removed)");
    }
}
