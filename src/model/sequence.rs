//! Bounded ordered containers
//!
//! [`BoundedSeq`] backs the stack, queue and linked list visualizers. The
//! container kind decides which ends are used:
//!
//! - **Stack**: push and pop at the back (the "top")
//! - **Queue**: enqueue inserts at the front (index 0), dequeue removes from the back
//! - **Linked list**: insert/remove at an explicit index `0 <= i <= len`, walking from the head
//!
//! Exceeding the capacity is a rejected operation, never a structural change.

use super::Element;
use crate::errors::VizError;

/// The kind of container being animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Stack,
    Queue,
    LinkedList,
}

impl ContainerKind {
    /// Display name used in narration and errors
    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::Stack => "Stack",
            ContainerKind::Queue => "Queue",
            ContainerKind::LinkedList => "Linked list",
        }
    }
}

/// Result of a successful insertion or removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqChange {
    /// Index the element was inserted at / removed from
    pub index: usize,
    /// The inserted or removed element
    pub value: Element,
    /// Indices walked from the head before reaching `index`
    pub visited: Vec<usize>,
}

/// Ordered container with a fixed maximum size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedSeq {
    kind: ContainerKind,
    items: Vec<Element>,
    capacity: usize,
}

impl BoundedSeq {
    pub fn new(kind: ContainerKind, capacity: usize) -> Self {
        BoundedSeq {
            kind,
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn items(&self) -> &[Element] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// First element (queue front, list head)
    pub fn peek_front(&self) -> Option<Element> {
        self.items.first().copied()
    }

    /// Last element (stack top, queue rear, list tail)
    pub fn peek_back(&self) -> Option<Element> {
        self.items.last().copied()
    }

    pub fn push_end(&mut self, value: Element) -> Result<SeqChange, VizError> {
        self.insert_unwalked(self.items.len(), value)
    }

    pub fn push_front(&mut self, value: Element) -> Result<SeqChange, VizError> {
        self.insert_unwalked(0, value)
    }

    pub fn pop_end(&mut self) -> Result<SeqChange, VizError> {
        let index = self.items.len().checked_sub(1).ok_or_else(|| self.underflow())?;
        self.remove_unwalked(index)
    }

    pub fn pop_front(&mut self) -> Result<SeqChange, VizError> {
        if self.items.is_empty() {
            return Err(self.underflow());
        }
        self.remove_unwalked(0)
    }

    /// Insert at `index`, walking from the head
    pub fn insert_at(&mut self, index: usize, value: Element) -> Result<SeqChange, VizError> {
        if index > self.items.len() {
            return Err(VizError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let mut change = self.insert_unwalked(index, value)?;
        change.visited = (0..index).collect();
        Ok(change)
    }

    /// Remove at `index`, walking from the head
    pub fn remove_at(&mut self, index: usize) -> Result<SeqChange, VizError> {
        if self.items.is_empty() {
            return Err(self.underflow());
        }
        if index >= self.items.len() {
            return Err(VizError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let mut change = self.remove_unwalked(index)?;
        change.visited = (0..index).collect();
        Ok(change)
    }

    /// Remove every element; returns how many were dropped
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    fn insert_unwalked(&mut self, index: usize, value: Element) -> Result<SeqChange, VizError> {
        if self.is_full() {
            return Err(VizError::CapacityExceeded {
                structure: self.kind.name(),
                capacity: self.capacity,
            });
        }
        self.items.insert(index, value);
        Ok(SeqChange {
            index,
            value,
            visited: Vec::new(),
        })
    }

    fn remove_unwalked(&mut self, index: usize) -> Result<SeqChange, VizError> {
        if index >= self.items.len() {
            return Err(self.underflow());
        }
        let value = self.items.remove(index);
        Ok(SeqChange {
            index,
            value,
            visited: Vec::new(),
        })
    }

    fn underflow(&self) -> VizError {
        VizError::Underflow {
            structure: self.kind.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_capacity() {
        let mut stack = BoundedSeq::new(ContainerKind::Stack, 20);
        for value in 1..=20 {
            stack.push_end(value).unwrap();
        }

        let err = stack.push_end(21).unwrap_err();
        assert!(matches!(err, VizError::CapacityExceeded { capacity: 20, .. }));
        assert_eq!(stack.peek_back(), Some(20));
        assert_eq!(stack.len(), 20);
    }

    #[test]
    fn test_queue_front_insert_back_remove() {
        let mut queue = BoundedSeq::new(ContainerKind::Queue, 5);
        queue.push_front(1).unwrap();
        queue.push_front(2).unwrap();
        queue.push_front(3).unwrap();
        assert_eq!(queue.items(), &[3, 2, 1]);

        let removed = queue.pop_end().unwrap();
        assert_eq!(removed.value, 1);
        assert_eq!(removed.index, 2);
        assert_eq!(queue.items(), &[3, 2]);
    }

    #[test]
    fn test_underflow() {
        let mut stack = BoundedSeq::new(ContainerKind::Stack, 3);
        assert!(matches!(stack.pop_end(), Err(VizError::Underflow { .. })));
        assert!(matches!(stack.pop_front(), Err(VizError::Underflow { .. })));
        assert!(matches!(stack.remove_at(0), Err(VizError::Underflow { .. })));
    }

    #[test]
    fn test_list_index_bounds() {
        let mut list = BoundedSeq::new(ContainerKind::LinkedList, 10);
        list.push_end(10).unwrap();
        list.push_end(30).unwrap();

        let change = list.insert_at(1, 20).unwrap();
        assert_eq!(change.visited, vec![0]);
        assert_eq!(list.items(), &[10, 20, 30]);

        // Insert at len is allowed (append), beyond is not
        assert!(list.insert_at(3, 40).is_ok());
        assert_eq!(
            list.insert_at(9, 50),
            Err(VizError::IndexOutOfRange { index: 9, len: 4 })
        );
        assert_eq!(
            list.remove_at(4),
            Err(VizError::IndexOutOfRange { index: 4, len: 4 })
        );

        let removed = list.remove_at(2).unwrap();
        assert_eq!(removed.value, 30);
        assert_eq!(removed.visited, vec![0, 1]);
        assert_eq!(list.items(), &[10, 20, 40]);
    }

    #[test]
    fn test_rejected_insert_leaves_list_untouched() {
        let mut list = BoundedSeq::new(ContainerKind::LinkedList, 2);
        list.push_end(1).unwrap();
        list.push_end(2).unwrap();
        let before = list.clone();
        assert!(list.insert_at(1, 9).is_err());
        assert_eq!(list, before);
    }
}
