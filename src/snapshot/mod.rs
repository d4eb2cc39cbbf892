// Step snapshots for forward/backward replay

use crate::model::sequence::ContainerKind;
use crate::model::sort::SortNodeId;
use crate::model::tree::Bst;
use crate::model::Element;

/// Rendering state of a sub-array in the merge-sort forest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortNodeState {
    Split,
    Merging,
    Merged,
}

/// A visible sub-array in the merge-sort forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortNode {
    pub id: SortNodeId,
    pub parent: Option<SortNodeId>,
    /// Current contents; partially written while merging
    pub values: Vec<Element>,
    pub depth: usize,
    /// Split point of the original sub-array (drives child placement)
    pub mid: Option<usize>,
    pub state: SortNodeState,
}

/// Container contents as drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerView {
    pub kind: ContainerKind,
    pub items: Vec<Element>,
    pub capacity: usize,
}

/// Array with search pointers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArrayView {
    pub values: Vec<Element>,
    pub low: Option<isize>,
    pub high: Option<isize>,
    pub mid: Option<usize>,
    /// Linear search cursor
    pub current: Option<usize>,
}

impl ArrayView {
    pub fn plain(values: Vec<Element>) -> Self {
        ArrayView {
            values,
            ..ArrayView::default()
        }
    }

    /// Whether `index` lies outside the live binary-search window
    pub fn is_discarded(&self, index: usize) -> bool {
        let index = index as isize;
        match (self.low, self.high) {
            (Some(low), Some(high)) => index < low || index > high,
            _ => self.current.is_some_and(|current| index < current as isize),
        }
    }
}

/// Full copy of whatever structure is being animated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Structure {
    Container(ContainerView),
    Tree(Bst),
    Array(ArrayView),
    SortForest(Vec<SortNode>),
}

/// What a highlight refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Tree node, addressed by value
    Node(Element),
    /// Tree edge from parent to child
    Edge { from: Element, to: Element },
    /// Array or container slot
    Index(usize),
    SortNode(SortNodeId),
    SortCell { node: SortNodeId, index: usize },
}

/// Semantic highlight role; colors are the renderer's business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Current,
    Compared,
    Matched,
    New,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub target: Target,
    pub role: Role,
}

/// Set of highlighted targets for one step
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlight {
    marks: Vec<Mark>,
}

impl Highlight {
    pub fn none() -> Self {
        Highlight::default()
    }

    /// Add a mark (builder style)
    pub fn with(mut self, target: Target, role: Role) -> Self {
        self.marks.push(Mark { target, role });
        self
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Role of `target`; later marks win
    pub fn role_of(&self, target: Target) -> Option<Role> {
        self.marks
            .iter()
            .rev()
            .find(|mark| mark.target == target)
            .map(|mark| mark.role)
    }
}

/// Where a step sits in its sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPhase {
    /// Pre-operation state shown at cursor 0
    Intro,
    Action,
    /// "operation complete" / "not found"
    Terminal,
    /// Neutral highlight, structure unchanged
    Reset,
}

/// One immutable, self-contained visual state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub structure: Structure,
    pub highlight: Highlight,
    pub message: String,
    pub phase: StepPhase,
}

/// Ordered steps for exactly one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    operation: String,
    steps: Vec<Step>,
}

impl StepSequence {
    pub fn new(operation: impl Into<String>) -> Self {
        StepSequence {
            operation: operation.into(),
            steps: Vec::new(),
        }
    }

    /// Short label of the operation this sequence animates
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Append a step to the sequence
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// The terminal step, i.e. the one just before the reset step
    pub fn terminal(&self) -> Option<&Step> {
        self.steps
            .iter()
            .rev()
            .find(|step| step.phase == StepPhase::Terminal)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}
