use crate::config::GameConfig;
use crate::error::SetupError;
use crate::game::{CandySet, GameState, MoveError, SelectOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: GameConfig,
    candies: CandySet,
    game: GameState,
    seed: u64,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Build the first game. The seed is kept verbatim so the game can be
    /// replayed by passing it again.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, SetupError> {
        let candies = CandySet::numbered(config.candy_types)?;
        let game = GameState::from_seed(config.columns, config.rows, &candies, seed)?;
        Ok(App {
            config,
            candies,
            game,
            seed,
            selected_column: 0,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game.board().column_count() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select_column();
            }
            KeyCode::Char('r') => {
                self.new_game();
            }
            _ => {}
        }
    }

    /// Feed the highlighted column into the two-step move protocol.
    fn select_column(&mut self) {
        if self.game.is_won() {
            self.message = Some("Game over! Press 'r' for a new game.".to_string());
            return;
        }

        match self.game.select_column(self.selected_column) {
            Ok(SelectOutcome::SourceSelected) => {
                self.message = Some(format!(
                    "Taking from column {}, now pick a destination",
                    self.selected_column + 1
                ));
            }
            Ok(SelectOutcome::Moved) => {
                if self.game.is_won() {
                    self.message = Some(format!("Sorted in {} moves!", self.game.moves()));
                }
            }
            Err(MoveError::SourceEmpty) => {
                self.message = Some("That column is empty!".to_string());
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("That column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
        }
    }

    /// Start a fresh game with a newly drawn seed.
    fn new_game(&mut self) {
        self.seed = StdRng::from_os_rng().random();
        match GameState::from_seed(
            self.config.columns,
            self.config.rows,
            &self.candies,
            self.seed,
        ) {
            Ok(game) => {
                self.game = game;
                self.selected_column = 0;
                self.message = Some("New game started!".to_string());
            }
            Err(err) => {
                self.message = Some(format!("Could not start a new game: {err}"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            self.selected_column,
            self.seed,
            &self.message,
        );
    }
}
