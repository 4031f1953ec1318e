//! TUI application state and logic

use crate::core::{Constraint, LetterState, MAX_CONSTRAINTS, Pattern, Word};
use crate::solver::{SolverConfig, SolverResult, SolverWorker, turns_left_after};
use crate::wordlists::Corpus;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// How long to wait for a key before checking the solver again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

const MAX_MESSAGES: usize = 5;

/// A committed guess and the feedback tiles set on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptRow {
    pub guess: Word,
    pub pattern: Pattern,
}

impl AttemptRow {
    #[must_use]
    pub fn constraint(&self) -> Constraint {
        Constraint::new(self.guess, self.pattern)
    }
}

/// Which part of the board receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Draft,
    Row(usize),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub corpus: Arc<Corpus>,
    worker: SolverWorker,
    pub rows: Vec<AttemptRow>,
    pub draft: String,
    pub focus: Focus,
    /// Tile index within the focused row
    pub cursor: usize,
    pub candidate_count: usize,
    pub solver: SolverResult,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl App {
    /// Create the app and queue the opening solve
    #[must_use]
    pub fn new(corpus: Arc<Corpus>, config: SolverConfig) -> Self {
        let worker = SolverWorker::spawn(Arc::clone(&corpus), config);
        let candidate_count = corpus.answers().len();

        let mut app = Self {
            corpus,
            worker,
            rows: Vec::new(),
            draft: String::new(),
            focus: Focus::Draft,
            cursor: 0,
            candidate_count,
            solver: SolverResult::empty(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Type a guess and press Enter, then set its tiles with Space.",
            MessageStyle::Info,
        );
        app.request_solve();
        app
    }

    #[must_use]
    pub fn constraints(&self) -> Vec<Constraint> {
        self.rows.iter().map(AttemptRow::constraint).collect()
    }

    #[must_use]
    pub fn turns_left(&self) -> u32 {
        turns_left_after(self.rows.len())
    }

    /// Whether the shown result is out of date
    #[must_use]
    pub const fn is_solving(&self) -> bool {
        self.worker.is_pending()
    }

    /// Submit the current rows; any earlier solve becomes stale
    pub fn request_solve(&mut self) {
        self.worker.submit(self.constraints(), self.turns_left());
    }

    /// Take the latest result if it has arrived
    pub fn poll_solver(&mut self) -> bool {
        match self.worker.try_latest() {
            Some(response) => {
                self.apply(response.solution.candidate_count, response.solution.solver);
                true
            }
            None => false,
        }
    }

    /// Block until the latest result arrives
    pub fn wait_for_solver(&mut self) {
        if let Some(response) = self.worker.wait_latest() {
            self.apply(response.solution.candidate_count, response.solution.solver);
        }
    }

    fn apply(&mut self, candidate_count: usize, solver: SolverResult) {
        self.candidate_count = candidate_count;
        self.solver = solver;
        if candidate_count == 0 && !self.rows.is_empty() {
            self.add_message(
                "No candidates remain - check the tiles or delete a row.",
                MessageStyle::Error,
            );
        }
    }

    pub fn type_letter(&mut self, c: char) {
        self.focus = Focus::Draft;
        if self.draft.len() < 5 && c.is_ascii_alphabetic() {
            self.draft.push(c.to_ascii_lowercase());
        }
    }

    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    /// Commit the draft as a new all-gray row
    pub fn submit_guess(&mut self) {
        if self.rows.len() >= MAX_CONSTRAINTS {
            self.add_message("At most six guesses can be entered.", MessageStyle::Error);
            return;
        }

        let Ok(guess) = Word::new(&self.draft) else {
            self.add_message("Enter a five-letter word.", MessageStyle::Error);
            return;
        };
        if !self.corpus.is_allowed(&guess) {
            self.add_message(
                format!("'{}' is not an allowed guess.", guess.text().to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        self.rows.push(AttemptRow {
            guess,
            pattern: Pattern::default(),
        });
        self.draft.clear();
        self.focus = Focus::Row(self.rows.len() - 1);
        self.cursor = 0;
        self.request_solve();
    }

    /// Copy the recommended word into the draft
    pub fn use_recommendation(&mut self) {
        if let Some(recommended) = self.solver.recommended {
            self.draft = recommended.word.text().to_string();
            self.focus = Focus::Draft;
        } else {
            self.add_message("No recommendation yet.", MessageStyle::Error);
        }
    }

    /// Advance the focused tile absent -> present -> exact -> absent
    pub fn cycle_tile(&mut self) {
        let Focus::Row(index) = self.focus else {
            return;
        };
        let is_last = index + 1 == self.rows.len();
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };

        let next = row.pattern.states()[self.cursor].cycle();
        row.pattern.set(self.cursor, next);
        if is_last && row.pattern.is_perfect() {
            self.add_message("🎉 Solved! Ctrl-N starts a new game.", MessageStyle::Success);
        }
        self.request_solve();
    }

    /// Set the focused tile directly
    pub fn set_tile(&mut self, state: LetterState) {
        if let Focus::Row(index) = self.focus
            && let Some(row) = self.rows.get_mut(index)
        {
            row.pattern.set(self.cursor, state);
            self.request_solve();
        }
    }

    pub fn delete_row(&mut self) {
        let Focus::Row(index) = self.focus else {
            return;
        };
        if index >= self.rows.len() {
            return;
        }

        self.rows.remove(index);
        self.focus = match self.rows.len() {
            0 => Focus::Draft,
            len => Focus::Row(index.min(len - 1)),
        };
        self.request_solve();
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.cursor = self.cursor.saturating_add_signed(delta).min(4);
    }

    /// Move focus through the rows; below the last row is the draft
    pub fn move_focus(&mut self, up: bool) {
        let last = self.rows.len().checked_sub(1);
        self.focus = match (self.focus, up, last) {
            (_, _, None) => Focus::Draft,
            (Focus::Draft, true, Some(last)) => Focus::Row(last),
            (Focus::Draft, false, _) => Focus::Draft,
            (Focus::Row(i), true, _) => Focus::Row(i.saturating_sub(1)),
            (Focus::Row(i), false, Some(last)) if i >= last => Focus::Draft,
            (Focus::Row(i), false, _) => Focus::Row(i + 1),
        };
    }

    pub fn new_game(&mut self) {
        self.rows.clear();
        self.draft.clear();
        self.focus = Focus::Draft;
        self.cursor = 0;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.request_solve();
    }

    pub fn add_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.messages.push(Message {
            text: text.into(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.cycle_tile(),
            KeyCode::Char(digit @ '0'..='2') if matches!(self.focus, Focus::Row(_)) => {
                let state = LetterState::from_digit(digit as u8 - b'0');
                if let Some(state) = state {
                    self.set_tile(state);
                    self.move_cursor(1);
                }
            }
            KeyCode::Char(c) => self.type_letter(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete_row(),
            KeyCode::Enter => self.submit_guess(),
            KeyCode::Tab => self.use_recommendation(),
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_focus(true),
            KeyCode::Down => self.move_focus(false),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)? {
            // Only process key press events (fixes Windows double-input bug)
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                app.handle_key(key);
            }
        }
        app.poll_solver();
    }

    Ok(())
}
