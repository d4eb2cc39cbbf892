//! Session: the one live structure, its player and user-facing notices
//!
//! A [`Command`] either moves the player through the current sequence or starts a
//! new operation. A new operation is fully recorded before anything changes; only
//! when recording succeeds is the resulting structure committed and the sequence
//! handed to the player. Rejected commands raise a short-lived [`Notice`] and
//! leave the structure, sequence and cursor exactly as they were.

pub mod command;

pub use command::{parse_element, parse_index, Command};

use crate::config::constants::{MAX_ELEMENTS, NOTICE_TTL};
use crate::config::Config;
use crate::errors::VizError;
use crate::model::random::{random_sorted, random_tree, random_values};
use crate::model::sequence::{BoundedSeq, ContainerKind};
use crate::model::tree::Bst;
use crate::model::Element;
use crate::player::scheduler::{Scheduler, TimerId};
use crate::player::{Player, PlayerStatus};
use crate::recorder::container::{record_container, ContainerOp};
use crate::recorder::merge_sort::record_merge_sort;
use crate::recorder::search::{record_binary_search, record_linear_search};
use crate::recorder::tree;
use crate::snapshot::{ArrayView, ContainerView, Step, StepSequence, Structure};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::{debug, warn};

/// Which visualizer a session drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualizerKind {
    Stack,
    Queue,
    LinkedList,
    Bst,
    MergeSort,
    BinarySearch,
    LinearSearch,
}

/// Explanation page and reference listing for a visualizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceFiles {
    pub explanation: &'static str,
    pub code: &'static str,
}

impl VisualizerKind {
    pub const ALL: [VisualizerKind; 7] = [
        VisualizerKind::Stack,
        VisualizerKind::Queue,
        VisualizerKind::LinkedList,
        VisualizerKind::Bst,
        VisualizerKind::MergeSort,
        VisualizerKind::BinarySearch,
        VisualizerKind::LinearSearch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VisualizerKind::Stack => "Stack",
            VisualizerKind::Queue => "Queue",
            VisualizerKind::LinkedList => "Linked list",
            VisualizerKind::Bst => "Binary search tree",
            VisualizerKind::MergeSort => "Merge sort",
            VisualizerKind::BinarySearch => "Binary search",
            VisualizerKind::LinearSearch => "Linear search",
        }
    }

    /// Command-line name
    pub fn slug(self) -> &'static str {
        match self {
            VisualizerKind::Stack => "stack",
            VisualizerKind::Queue => "queue",
            VisualizerKind::LinkedList => "linked-list",
            VisualizerKind::Bst => "bst",
            VisualizerKind::MergeSort => "merge-sort",
            VisualizerKind::BinarySearch => "binary-search",
            VisualizerKind::LinearSearch => "linear-search",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        match name.as_str() {
            "list" => Some(VisualizerKind::LinkedList),
            "tree" => Some(VisualizerKind::Bst),
            "sort" => Some(VisualizerKind::MergeSort),
            _ => VisualizerKind::ALL
                .into_iter()
                .find(|kind| kind.slug() == name),
        }
    }

    pub fn resource_files(self) -> ResourceFiles {
        let (explanation, code) = match self {
            VisualizerKind::Stack => ("utils/stack/stack.html", "utils/stack/stack.py"),
            VisualizerKind::Queue => ("utils/queue/queue.html", "utils/queue/queue.py"),
            VisualizerKind::LinkedList => (
                "utils/linked list/linked_list.html",
                "utils/linked list/linked_list.py",
            ),
            VisualizerKind::Bst => ("utils/BST/BST.html", "utils/BST/BST.py"),
            VisualizerKind::MergeSort => (
                "utils/merge sort/merge_sort.html",
                "utils/merge sort/merge_sort.py",
            ),
            VisualizerKind::BinarySearch => (
                "utils/binary search/binary_search.html",
                "utils/binary search/binary_search.py",
            ),
            VisualizerKind::LinearSearch => (
                "utils/linear search/linear_search.html",
                "utils/linear search/linear_search.py",
            ),
        };
        ResourceFiles { explanation, code }
    }

    pub fn container_kind(self) -> Option<ContainerKind> {
        match self {
            VisualizerKind::Stack => Some(ContainerKind::Stack),
            VisualizerKind::Queue => Some(ContainerKind::Queue),
            VisualizerKind::LinkedList => Some(ContainerKind::LinkedList),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Auto-expiring message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
    raised_at: Instant,
}

impl Notice {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= NOTICE_TTL
    }
}

/// What a successful command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new sequence was recorded and installed
    Recorded { operation: String, steps: usize },
    /// The structure was replaced with random contents
    Generated { len: usize },
    Playback(PlayerStatus),
    /// Informational notice only
    Info,
}

#[derive(Debug, Clone)]
enum Live {
    Container(BoundedSeq),
    Tree(Bst),
    Array(Vec<Element>),
}

impl Live {
    fn len(&self) -> usize {
        match self {
            Live::Container(seq) => seq.len(),
            Live::Tree(tree) => tree.len(),
            Live::Array(values) => values.len(),
        }
    }
}

pub struct Session<S: Scheduler> {
    kind: VisualizerKind,
    config: Config,
    live: Live,
    player: Player<S>,
    notice: Option<Notice>,
    rng: StdRng,
}

impl<S: Scheduler> Session<S> {
    pub fn new(config: Config, scheduler: S) -> Self {
        let kind = config.visualizer;
        let live = match kind.container_kind() {
            Some(container) => Live::Container(BoundedSeq::new(container, config.capacity)),
            None if kind == VisualizerKind::Bst => Live::Tree(Bst::new()),
            None => Live::Array(Vec::new()),
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Session {
            kind,
            player: Player::new(scheduler, config.auto_interval),
            config,
            live,
            notice: None,
            rng,
        }
    }

    pub fn kind(&self) -> VisualizerKind {
        self.kind
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn player(&self) -> &Player<S> {
        &self.player
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        self.player.scheduler_mut()
    }

    /// The step on screen, if a sequence is installed
    pub fn current_step(&self) -> Option<&Step> {
        self.player.current()
    }

    /// Snapshot of the committed structure
    pub fn snapshot(&self) -> Structure {
        match &self.live {
            Live::Container(seq) => Structure::Container(ContainerView {
                kind: seq.kind(),
                items: seq.items().to_vec(),
                capacity: seq.capacity(),
            }),
            Live::Tree(tree) => Structure::Tree(tree.clone()),
            Live::Array(values) => Structure::Array(ArrayView::plain(values.clone())),
        }
    }

    /// Active notice, unless it has expired by `now`
    pub fn notice(&self, now: Instant) -> Option<&Notice> {
        self.notice.as_ref().filter(|notice| !notice.is_expired(now))
    }

    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|notice| notice.is_expired(now)) {
            self.notice = None;
        }
    }

    /// Deliver an auto-play tick
    pub fn on_timer(&mut self, id: TimerId) -> PlayerStatus {
        self.player.on_timer(id)
    }

    /// Random generation request sized from the configuration
    pub fn random_command(&self) -> Command {
        let size = match self.kind {
            VisualizerKind::Bst => self.config.tree_random_size,
            VisualizerKind::Stack | VisualizerKind::Queue | VisualizerKind::LinkedList => {
                self.config.array_random_size.min(self.config.capacity)
            }
            _ => self.config.array_random_size,
        };
        Command::GenerateRandom {
            size,
            max_value: self.config.max_value,
        }
    }

    /// Run `command`; failures become a notice and change nothing else
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, VizError> {
        let result = self.apply(command);
        if let Err(err) = &result {
            warn!(command = command.name(), error = %err, "Command rejected");
            self.report(err);
        }
        result
    }

    /// Surface an error raised before dispatch (e.g. unparsable input)
    pub fn report(&mut self, err: &VizError) {
        self.raise(Severity::Error, err.to_string());
    }

    fn apply(&mut self, command: Command) -> Result<Outcome, VizError> {
        match command {
            Command::Next => Ok(Outcome::Playback(self.player.next())),
            Command::Previous => Ok(Outcome::Playback(self.player.previous())),
            Command::ToggleAuto => Ok(Outcome::Playback(self.player.toggle_auto())),
            Command::JumpToStart => Ok(Outcome::Playback(self.player.jump_to_start())),
            Command::JumpToEnd => Ok(Outcome::Playback(self.player.jump_to_end())),
            Command::GenerateRandom { size, max_value } => self.generate(size, max_value),
            Command::Peek => self.peek(),
            _ => {
                let (live, steps) = self.record(command)?;
                Ok(self.commit(live, steps))
            }
        }
    }

    /// Compute the full sequence against the committed structure
    fn record(&self, command: Command) -> Result<(Live, StepSequence), VizError> {
        match (&self.live, command) {
            (Live::Container(seq), _) => {
                let op = self.container_op(seq.kind(), command)?;
                let recorded = record_container(seq, op)?;
                Ok((Live::Container(recorded.structure), recorded.steps))
            }
            (Live::Tree(bst), Command::Insert(value)) => {
                let recorded = tree::record_insert(bst, value);
                Ok((Live::Tree(recorded.structure), recorded.steps))
            }
            (Live::Tree(bst), Command::Search(value)) => {
                let recorded = tree::record_search(bst, value);
                Ok((Live::Tree(recorded.structure), recorded.steps))
            }
            (Live::Tree(bst), Command::Delete(value)) => {
                let recorded = tree::record_delete(bst, value);
                Ok((Live::Tree(recorded.structure), recorded.steps))
            }
            (Live::Array(values), Command::Sort) if self.kind == VisualizerKind::MergeSort => {
                let recorded = record_merge_sort(values)?;
                Ok((Live::Array(recorded.structure), recorded.steps))
            }
            (Live::Array(values), Command::Search(key)) => {
                let recorded = match self.kind {
                    VisualizerKind::BinarySearch => record_binary_search(values, key)?,
                    VisualizerKind::LinearSearch => record_linear_search(values, key)?,
                    _ => return Err(self.unsupported(command)),
                };
                Ok((Live::Array(recorded.structure), recorded.steps))
            }
            _ => Err(self.unsupported(command)),
        }
    }

    fn container_op(
        &self,
        kind: ContainerKind,
        command: Command,
    ) -> Result<ContainerOp, VizError> {
        let op = match (kind, command) {
            (ContainerKind::Stack, Command::Push(value) | Command::Insert(value)) => {
                ContainerOp::Push(value)
            }
            (ContainerKind::Stack, Command::Pop) => ContainerOp::Pop,
            (ContainerKind::Queue, Command::Enqueue(value) | Command::Insert(value)) => {
                ContainerOp::Enqueue(value)
            }
            (ContainerKind::Queue, Command::Dequeue) => ContainerOp::Dequeue,
            (ContainerKind::LinkedList, Command::Insert(value)) => ContainerOp::InsertTail(value),
            (ContainerKind::LinkedList, Command::InsertAt { index, value }) => {
                ContainerOp::InsertAt { index, value }
            }
            (ContainerKind::LinkedList, Command::RemoveAt(index)) => ContainerOp::RemoveAt(index),
            (ContainerKind::LinkedList, Command::RemoveHead) => ContainerOp::RemoveHead,
            (ContainerKind::LinkedList, Command::RemoveTail) => ContainerOp::RemoveTail,
            (_, Command::Clear) => ContainerOp::Clear,
            _ => return Err(self.unsupported(command)),
        };
        Ok(op)
    }

    /// Swap in the new structure and install its sequence
    fn commit(&mut self, live: Live, steps: StepSequence) -> Outcome {
        let operation = steps.operation().to_string();
        let len = steps.len();
        self.player.new_operation();
        self.live = live;
        self.player.start(steps);
        self.notice = None;
        debug!(operation = %operation, steps = len, "Recorded operation");
        Outcome::Recorded {
            operation,
            steps: len,
        }
    }

    fn generate(&mut self, size: usize, max_value: Element) -> Result<Outcome, VizError> {
        if size == 0 || size > MAX_ELEMENTS {
            return Err(VizError::InvalidRandomRange { size, max_value });
        }

        let (live, description) = match self.kind {
            VisualizerKind::Bst => {
                let bst = random_tree(&mut self.rng, size, max_value)?;
                let description = format!("Generated a random tree with {} nodes", bst.len());
                (Live::Tree(bst), description)
            }
            VisualizerKind::BinarySearch => {
                let values = random_sorted(&mut self.rng, size, max_value)?;
                (Live::Array(values), "Generated a random sorted array".to_string())
            }
            VisualizerKind::MergeSort | VisualizerKind::LinearSearch => {
                let values = random_values(&mut self.rng, size, max_value)?;
                (Live::Array(values), "Generated a random array".to_string())
            }
            VisualizerKind::Stack | VisualizerKind::Queue | VisualizerKind::LinkedList => {
                let seq = self.random_container(size, max_value)?;
                let description = format!(
                    "Filled the {} with {} values",
                    seq.kind().name().to_lowercase(),
                    seq.len()
                );
                (Live::Container(seq), description)
            }
        };

        let len = live.len();
        self.player.clear();
        self.live = live;
        debug!(visualizer = self.kind.name(), size, len, "Generated random structure");
        self.raise(Severity::Info, description);
        Ok(Outcome::Generated { len })
    }

    fn random_container(
        &mut self,
        size: usize,
        max_value: Element,
    ) -> Result<BoundedSeq, VizError> {
        let kind = self
            .kind
            .container_kind()
            .ok_or_else(|| self.unsupported(Command::GenerateRandom { size, max_value }))?;
        if size > self.config.capacity {
            return Err(VizError::InvalidRandomRange { size, max_value });
        }
        let mut seq = BoundedSeq::new(kind, self.config.capacity);
        for value in random_values(&mut self.rng, size, max_value)? {
            seq.push_end(value)?;
        }
        Ok(seq)
    }

    fn peek(&mut self) -> Result<Outcome, VizError> {
        let Live::Container(seq) = &self.live else {
            return Err(self.unsupported(Command::Peek));
        };
        let kind = seq.kind();
        let text = match kind {
            ContainerKind::Stack => seq.peek_back().map(|v| format!("Top element is {}", v)),
            ContainerKind::Queue => seq.peek_back().map(|v| format!("Front element is {}", v)),
            ContainerKind::LinkedList => seq.peek_front().map(|v| format!("Head node is {}", v)),
        }
        .ok_or(VizError::Underflow {
            structure: kind.name(),
        })?;
        self.raise(Severity::Info, text);
        Ok(Outcome::Info)
    }

    fn unsupported(&self, command: Command) -> VizError {
        VizError::Unsupported {
            command: command.name(),
            visualizer: self.kind.name(),
        }
    }

    fn raise(&mut self, severity: Severity, text: String) {
        self.notice = Some(Notice {
            severity,
            text,
            raised_at: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::scheduler::ManualScheduler;
    use crate::player::PlayerState;
    use std::time::Duration;

    fn session(kind: VisualizerKind) -> Session<ManualScheduler> {
        let config = Config {
            visualizer: kind,
            seed: Some(7),
            ..Config::default()
        };
        Session::new(config, ManualScheduler::new())
    }

    #[test]
    fn test_from_name() {
        assert_eq!(VisualizerKind::from_name("BST"), Some(VisualizerKind::Bst));
        assert_eq!(VisualizerKind::from_name("list"), Some(VisualizerKind::LinkedList));
        assert_eq!(
            VisualizerKind::from_name("binary-search"),
            Some(VisualizerKind::BinarySearch)
        );
        assert_eq!(VisualizerKind::from_name("heap"), None);
    }

    #[test]
    fn test_resource_files() {
        let files = VisualizerKind::LinearSearch.resource_files();
        assert_eq!(files.code, "utils/linear search/linear_search.py");
        assert_eq!(files.explanation, "utils/linear search/linear_search.html");
    }

    #[test]
    fn test_insert_commits_structure_and_installs_sequence() {
        let mut session = session(VisualizerKind::Bst);
        let outcome = session.dispatch(Command::Insert(12)).unwrap();
        assert!(matches!(outcome, Outcome::Recorded { .. }));
        assert_eq!(session.player().cursor(), Some(0));
        match session.snapshot() {
            Structure::Tree(tree) => assert!(tree.contains(12)),
            _ => panic!("Expected tree"),
        }
    }

    #[test]
    fn test_rejection_keeps_state_and_raises_notice() {
        let mut session = session(VisualizerKind::Stack);
        session.dispatch(Command::Push(1)).unwrap();
        session.dispatch(Command::Next).unwrap();
        let before = session.current_step().cloned();

        let err = session.dispatch(Command::Delete(1)).unwrap_err();
        assert!(matches!(err, VizError::Unsupported { .. }));
        assert_eq!(session.current_step().cloned(), before);
        assert_eq!(session.player().cursor(), Some(1));

        let notice = session.notice(Instant::now()).unwrap();
        assert_eq!(notice.severity, Severity::Error);
        assert!(session.notice(Instant::now() + NOTICE_TTL).is_none());
    }

    #[test]
    fn test_new_operation_cancels_auto_play() {
        let mut session = session(VisualizerKind::Queue);
        session.dispatch(Command::Enqueue(1)).unwrap();
        session.dispatch(Command::ToggleAuto).unwrap();
        assert_eq!(session.player().state(), PlayerState::AutoPlaying);
        let stale = session.player().scheduler().pending()[0];

        session.dispatch(Command::Enqueue(2)).unwrap();
        assert_eq!(session.player().state(), PlayerState::Ready);
        assert!(session.player().scheduler().pending().is_empty());
        assert_eq!(session.on_timer(stale), PlayerStatus::StaleTick);
        assert_eq!(session.player().cursor(), Some(0));
    }

    #[test]
    fn test_generate_random_tree() {
        let mut session = session(VisualizerKind::Bst);
        let command = session.random_command();
        assert_eq!(
            command,
            Command::GenerateRandom {
                size: 15,
                max_value: 100
            }
        );
        session.dispatch(command).unwrap();
        match session.snapshot() {
            Structure::Tree(tree) => assert!(!tree.is_empty()),
            _ => panic!("Expected tree"),
        }
        assert_eq!(session.notice(Instant::now()).unwrap().severity, Severity::Info);
    }

    #[test]
    fn test_generated_len_counts_distinct_tree_nodes() {
        let mut session = session(VisualizerKind::Bst);
        let outcome = session
            .dispatch(Command::GenerateRandom {
                size: 15,
                max_value: 3,
            })
            .unwrap();
        let Structure::Tree(tree) = session.snapshot() else {
            panic!("Expected tree");
        };
        assert!(tree.len() <= 3);
        assert_eq!(outcome, Outcome::Generated { len: tree.len() });
    }

    #[test]
    fn test_generate_rejects_oversize() {
        let mut session = session(VisualizerKind::MergeSort);
        assert!(matches!(
            session.dispatch(Command::GenerateRandom {
                size: 0,
                max_value: 10
            }),
            Err(VizError::InvalidRandomRange { .. })
        ));
        assert!(matches!(
            session.dispatch(Command::GenerateRandom {
                size: MAX_ELEMENTS + 1,
                max_value: 10
            }),
            Err(VizError::InvalidRandomRange { .. })
        ));
    }

    #[test]
    fn test_sort_then_sorted_array_is_live() {
        let mut session = session(VisualizerKind::MergeSort);
        assert_eq!(
            session.dispatch(Command::Sort).unwrap_err(),
            VizError::EmptyStructure
        );
        session.dispatch(session.random_command()).unwrap();
        session.dispatch(Command::Sort).unwrap();
        match session.snapshot() {
            Structure::Array(view) => {
                assert!(view.values.windows(2).all(|w| w[0] <= w[1]));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_peek() {
        let mut session = session(VisualizerKind::Queue);
        assert!(matches!(
            session.dispatch(Command::Peek),
            Err(VizError::Underflow { .. })
        ));
        session.dispatch(Command::Enqueue(1)).unwrap();
        session.dispatch(Command::Enqueue(2)).unwrap();
        session.dispatch(Command::Peek).unwrap();
        assert_eq!(
            session.notice(Instant::now()).unwrap().text,
            "Front element is 1"
        );
    }

    #[test]
    fn test_auto_play_interval_from_config() {
        let config = Config {
            visualizer: VisualizerKind::Stack,
            auto_interval: Duration::from_millis(300),
            ..Config::default()
        };
        let session: Session<ManualScheduler> = Session::new(config, ManualScheduler::new());
        assert_eq!(session.player().interval(), Duration::from_millis(300));
    }
}
