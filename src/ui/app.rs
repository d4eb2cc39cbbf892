//! Main TUI application state and logic

use crate::config::constants::POLL_INTERVAL;
use crate::errors::VizError;
use crate::player::scheduler::DeadlineScheduler;
use crate::player::PlayerStatus;
use crate::session::{parse_element, parse_index, Command, Outcome, Session, VisualizerKind};
use crate::snapshot::{Highlight, Structure};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Value prompt being typed into the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Insert,
    Delete,
    Search,
    /// Two numbers: index then value
    InsertAt,
    RemoveAt,
}

impl Prompt {
    pub fn label(self, kind: VisualizerKind) -> &'static str {
        match (self, kind) {
            (Prompt::Insert, VisualizerKind::Stack) => "Push value",
            (Prompt::Insert, VisualizerKind::Queue) => "Enqueue value",
            (Prompt::Insert, _) => "Insert value",
            (Prompt::Delete, _) => "Delete value",
            (Prompt::Search, _) => "Search key",
            (Prompt::InsertAt, _) => "Index and value",
            (Prompt::RemoveAt, _) => "Delete at index",
        }
    }

    /// Turn the typed text into a command; nothing is dispatched on failure
    pub fn command(self, input: &str) -> Result<Command, VizError> {
        match self {
            Prompt::Insert => Ok(Command::Insert(parse_element(input)?)),
            Prompt::Delete => Ok(Command::Delete(parse_element(input)?)),
            Prompt::Search => Ok(Command::Search(parse_element(input)?)),
            Prompt::RemoveAt => Ok(Command::RemoveAt(parse_index(input)?)),
            Prompt::InsertAt => {
                let parts: Vec<&str> = input.split_whitespace().collect();
                match parts.as_slice() {
                    [index, value] => Ok(Command::InsertAt {
                        index: parse_index(index)?,
                        value: parse_element(value)?,
                    }),
                    _ => Err(VizError::InvalidInput {
                        input: input.to_string(),
                    }),
                }
            }
        }
    }
}

/// The main application state
pub struct App {
    /// The engine session
    pub session: Session<DeadlineScheduler>,

    /// Active value prompt, if any
    pub prompt: Option<Prompt>,

    /// Text typed into the prompt
    pub input: String,

    /// Scroll offset for the narration pane
    pub narration_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(session: Session<DeadlineScheduler>) -> Self {
        App {
            session,
            prompt: None,
            input: String::new(),
            narration_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Feed due auto-play ticks to the player
            let now = Instant::now();
            let due = self.session.scheduler_mut().due(now);
            for id in due {
                if self.session.on_timer(id) == PlayerStatus::Advanced {
                    self.status_message = "Playing...".to_string();
                }
                if !self.session.player().is_auto_playing() {
                    self.status_message = "Playback complete".to_string();
                }
            }
            self.session.expire_notice(now);

            // Use poll with timeout to allow auto-play to work
            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes, input line, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        let kind = self.session.kind();
        let is_playing = self.session.player().is_auto_playing();
        let no_highlight = Highlight::none();
        let live: Structure;
        let (structure, highlight) = match self.session.current_step() {
            Some(step) => (&step.structure, &step.highlight),
            None => {
                live = self.session.snapshot();
                (&live, &no_highlight)
            }
        };

        super::panes::render_structure_pane(
            frame,
            columns[0],
            &structure_title(kind, structure),
            structure,
            highlight,
            is_playing,
        );

        super::panes::render_narration_pane(
            frame,
            columns[1],
            self.session.player().sequence(),
            self.session.player().cursor().unwrap_or(0),
            &mut self.narration_scroll,
        );

        let prompt = self
            .prompt
            .map(|prompt| (prompt.label(kind), self.input.as_str()));
        super::panes::render_input_line(frame, main_chunks[1], kind, prompt);

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.session.notice(Instant::now()),
            self.session.player().cursor(),
            self.session.player().len(),
            is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(prompt) = self.prompt {
            self.handle_prompt_key(prompt, key);
            return;
        }

        let kind = self.session.kind();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left => self.dispatch(Command::Previous),
            KeyCode::Right => self.dispatch(Command::Next),
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.dispatch(Command::ToggleAuto);
                }
            }
            KeyCode::Enter => self.dispatch(Command::JumpToEnd),
            KeyCode::Backspace => self.dispatch(Command::JumpToStart),
            KeyCode::Char('r') => self.dispatch(self.session.random_command()),
            KeyCode::Char('i') => match kind {
                VisualizerKind::Stack
                | VisualizerKind::Queue
                | VisualizerKind::LinkedList
                | VisualizerKind::Bst => self.open_prompt(Prompt::Insert),
                _ => {}
            },
            KeyCode::Char('d') => match kind {
                VisualizerKind::Bst => self.open_prompt(Prompt::Delete),
                VisualizerKind::LinkedList => self.open_prompt(Prompt::RemoveAt),
                _ => {}
            },
            KeyCode::Char('a') if kind == VisualizerKind::LinkedList => {
                self.open_prompt(Prompt::InsertAt)
            }
            KeyCode::Char('s') => match kind {
                VisualizerKind::MergeSort => self.dispatch(Command::Sort),
                VisualizerKind::Bst
                | VisualizerKind::BinarySearch
                | VisualizerKind::LinearSearch => self.open_prompt(Prompt::Search),
                _ => {}
            },
            KeyCode::Char('o') => match kind {
                VisualizerKind::Stack => self.dispatch(Command::Pop),
                VisualizerKind::Queue => self.dispatch(Command::Dequeue),
                VisualizerKind::LinkedList => self.dispatch(Command::RemoveHead),
                _ => {}
            },
            KeyCode::Char('t') if kind == VisualizerKind::LinkedList => {
                self.dispatch(Command::RemoveTail)
            }
            KeyCode::Char('p') if kind.container_kind().is_some() => self.dispatch(Command::Peek),
            KeyCode::Char('c') if kind.container_kind().is_some() => self.dispatch(Command::Clear),
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, prompt: Prompt, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_prompt(),
            KeyCode::Enter => {
                let parsed = prompt.command(&self.input);
                self.close_prompt();
                match parsed {
                    Ok(command) => self.dispatch(command),
                    Err(err) => self.session.report(&err),
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == ' ' => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn open_prompt(&mut self, prompt: Prompt) {
        self.prompt = Some(prompt);
        self.input.clear();
    }

    fn close_prompt(&mut self) {
        self.prompt = None;
        self.input.clear();
    }

    fn dispatch(&mut self, command: Command) {
        if let Ok(outcome) = self.session.dispatch(command) {
            self.status_message = match outcome {
                Outcome::Recorded { operation, steps } => {
                    self.narration_scroll = 0;
                    format!("{}: {} steps", operation, steps)
                }
                Outcome::Generated { .. } => "New structure".to_string(),
                Outcome::Playback(status) => describe(status).to_string(),
                Outcome::Info => return,
            };
        }
    }
}

fn describe(status: PlayerStatus) -> &'static str {
    match status {
        PlayerStatus::Advanced => "Stepped forward",
        PlayerStatus::Retreated => "Stepped backward",
        PlayerStatus::SequenceExhausted => "Already at the last step",
        PlayerStatus::AtStart => "Already at the first step",
        PlayerStatus::NothingToDo => "Nothing to play yet",
        PlayerStatus::AutoStarted => "Playing...",
        PlayerStatus::AutoPaused => "Paused",
        PlayerStatus::Busy => "Pause auto-play first",
        PlayerStatus::StaleTick => "",
    }
}

fn structure_title(kind: VisualizerKind, structure: &Structure) -> String {
    match structure {
        Structure::Container(view) => {
            format!("{} ({}/{})", kind.name(), view.items.len(), view.capacity)
        }
        Structure::Tree(tree) => format!("{} ({} nodes)", kind.name(), tree.len()),
        _ => kind.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_parses_index_and_value() {
        assert_eq!(
            Prompt::InsertAt.command("2 25").unwrap(),
            Command::InsertAt {
                index: 2,
                value: 25
            }
        );
        assert!(Prompt::InsertAt.command("2").is_err());
        assert!(Prompt::Insert.command("").is_err());
        assert_eq!(Prompt::RemoveAt.command("0").unwrap(), Command::RemoveAt(0));
    }

    #[test]
    fn test_prompt_labels_follow_visualizer() {
        assert_eq!(Prompt::Insert.label(VisualizerKind::Stack), "Push value");
        assert_eq!(Prompt::Insert.label(VisualizerKind::Bst), "Insert value");
    }
}
