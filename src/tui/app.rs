//! Application state and logic.

use crossterm::event::KeyCode;
use strictly_river::{
    Entity, GameOutcome, MoveError, Puzzle, PuzzleConfig, Replay, SecretKey, SequenceDetector,
};
use tracing::{debug, info, instrument, warn};

use super::input::{command_for, secret_key_for, Command};

const INTRO: &str = "Put the farmer and one item in the boat, then cross.";
const WON: &str = "Congratulations, everything made it across safely!";

/// Main application state.
///
/// Holds the single authoritative [`Puzzle`] and swaps it after every
/// accepted move.
pub struct App {
    puzzle: Puzzle,
    config: PuzzleConfig,
    status_message: String,
    failed_attempts: u32,
    detector: SequenceDetector<SecretKey>,
    solution_unlocked: bool,
    replay: Option<Replay>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: PuzzleConfig) -> Self {
        Self {
            puzzle: Puzzle::new(),
            config,
            status_message: INTRO.to_string(),
            failed_attempts: 0,
            detector: SequenceDetector::konami(),
            solution_unlocked: false,
            replay: None,
            should_quit: false,
        }
    }

    /// Gets the current puzzle.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Number of lost play-throughs since launch.
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Whether the secret sequence has revealed the solution.
    pub fn solution_unlocked(&self) -> bool {
        self.solution_unlocked
    }

    /// Whether the scripted solution is playing.
    pub fn is_replaying(&self) -> bool {
        self.replay.is_some()
    }

    /// Whether the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Gets the configuration.
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(secret) = secret_key_for(key) {
            self.feed_secret(secret);
        }

        let Some(command) = command_for(key) else {
            return;
        };
        debug!(?command, "Handling command");

        match command {
            Command::Quit => self.should_quit = true,
            Command::Reset => self.restart(),
            _ if self.is_replaying() => {
                self.status_message = "Demonstrating the solution...".to_string();
            }
            Command::Toggle(entity) => self.toggle(entity),
            Command::Cross => self.cross(),
            Command::ShowSolution => self.show_solution(),
        }
    }

    /// The secret sequence is ignored while the puzzle is finished, unless
    /// the player has failed often enough to be offered the hint.
    fn feed_secret(&mut self, key: SecretKey) {
        if self.is_replaying() {
            return;
        }
        if self.puzzle.is_terminal() && self.failed_attempts < *self.config.hint_after_failures() {
            return;
        }
        if self.detector.feed(key) {
            info!("Solution unlocked");
            self.solution_unlocked = true;
            self.status_message = "Secret unlocked! Press 's' to watch the solution.".to_string();
        }
    }

    fn toggle(&mut self, entity: Entity) {
        match self.puzzle.toggle_board(entity) {
            Ok(next) => {
                self.puzzle = next;
                self.status_message.clear();
            }
            Err(e) => self.reject(e),
        }
    }

    fn cross(&mut self) {
        let crossing = match self.puzzle.cross_river() {
            Ok(crossing) => crossing,
            Err(e) => return self.reject(e),
        };

        let description = crossing.record().description();
        self.puzzle = crossing.into_puzzle();

        let outcome = self.puzzle.outcome();
        self.status_message = if let Some(hazard) = outcome.hazard() {
            self.failed_attempts += 1;
            info!(failed_attempts = self.failed_attempts, %hazard, "Puzzle lost");
            let mut message = format!("Game over: the {}!", hazard);
            if self.failed_attempts >= *self.config.hint_after_failures() {
                message.push_str(" Stuck? Try up, up, down, down, left, right, left, right, B, A.");
            }
            message
        } else if outcome == GameOutcome::Won {
            WON.to_string()
        } else {
            description
        };
    }

    fn reject(&mut self, error: MoveError) {
        debug!(%error, "Move rejected");
        self.status_message = error.to_string();
    }

    fn show_solution(&mut self) {
        if !self.solution_unlocked {
            return;
        }
        self.restart();
        self.replay = Some(Replay::solution());
        self.status_message = "Demonstrating the solution...".to_string();
    }

    /// Applies the next scripted move, if a demonstration is running.
    #[instrument(skip(self))]
    pub fn advance_replay(&mut self) {
        let Some(replay) = self.replay.as_mut() else {
            return;
        };

        match replay.advance(&self.puzzle) {
            Some(Ok(next)) => self.puzzle = next,
            Some(Err(e)) => {
                warn!(error = %e, "Scripted move rejected");
                self.replay = None;
                self.reject(e);
            }
            None => {
                self.replay = None;
                self.status_message = if self.puzzle.outcome() == GameOutcome::Won {
                    WON.to_string()
                } else {
                    "Demonstration finished.".to_string()
                };
            }
        }
    }

    /// Restarts the puzzle and hides the solution again.
    pub fn restart(&mut self) {
        debug!("Restarting puzzle");
        self.puzzle = self.puzzle.reset();
        self.detector.reset();
        self.solution_unlocked = false;
        self.replay = None;
        self.status_message = INTRO.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_river::{Bank, Location, KONAMI, SOLUTION};

    fn app() -> App {
        App::new(PuzzleConfig::default())
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    fn konami_keys() -> Vec<KeyCode> {
        KONAMI
            .iter()
            .map(|key| match key {
                SecretKey::Up => KeyCode::Up,
                SecretKey::Down => KeyCode::Down,
                SecretKey::Left => KeyCode::Left,
                SecretKey::Right => KeyCode::Right,
                SecretKey::Char(c) => KeyCode::Char(*c),
            })
            .collect()
    }

    fn lose(app: &mut App) {
        // Farmer and chicken first leaves tiger and sheep alone.
        press(app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('c')]);
    }

    #[test]
    fn test_toggle_and_cross() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('6'), KeyCode::Enter]);

        assert_eq!(app.puzzle().state().boat(), Bank::Right);
        assert_eq!(app.puzzle().state().location(Entity::Apple), Location::Right);
        assert_eq!(
            app.status_message(),
            "The farmer takes the apple to the right bank."
        );
    }

    #[test]
    fn test_rejection_is_reported() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'));
        assert_eq!(app.status_message(), MoveError::FarmerNotAboard.to_string());
        assert_eq!(app.puzzle(), &Puzzle::new());
    }

    #[test]
    fn test_loss_counts_and_hints() {
        let mut app = app();
        lose(&mut app);
        assert_eq!(app.failed_attempts(), 1);
        assert!(app.status_message().starts_with("Game over: the tiger would eat the sheep!"));
        assert!(!app.status_message().contains("Stuck?"));

        app.handle_key(KeyCode::Char('r'));
        lose(&mut app);
        app.handle_key(KeyCode::Char('r'));
        lose(&mut app);

        assert_eq!(app.failed_attempts(), 3);
        assert!(app.status_message().contains("Stuck?"));
    }

    #[test]
    fn test_secret_unlocks_solution() {
        let mut app = app();
        press(&mut app, &konami_keys());
        assert!(app.solution_unlocked());
    }

    #[test]
    fn test_secret_ignored_after_early_loss() {
        let mut app = app();
        lose(&mut app);
        press(&mut app, &konami_keys());
        assert!(!app.solution_unlocked());
    }

    #[test]
    fn test_secret_allowed_after_repeated_losses() {
        let mut app = app();
        for _ in 0..3 {
            app.handle_key(KeyCode::Char('r'));
            lose(&mut app);
        }
        press(&mut app, &konami_keys());
        assert!(app.solution_unlocked());
    }

    #[test]
    fn test_reset_hides_solution() {
        let mut app = app();
        press(&mut app, &konami_keys());
        app.handle_key(KeyCode::Char('r'));
        assert!(!app.solution_unlocked());

        app.handle_key(KeyCode::Char('s'));
        assert!(!app.is_replaying());
    }

    #[test]
    fn test_show_solution_replays_to_win() {
        let mut app = app();
        press(&mut app, &konami_keys());
        app.handle_key(KeyCode::Char('s'));
        assert!(app.is_replaying());

        // Player input is locked out during the demonstration.
        app.handle_key(KeyCode::Char('2'));
        assert_eq!(app.puzzle(), &Puzzle::new());

        for _ in 0..SOLUTION.len() {
            app.advance_replay();
        }
        assert_eq!(app.puzzle().outcome(), GameOutcome::Won);
        assert!(app.is_replaying());

        app.advance_replay();
        assert!(!app.is_replaying());
        assert_eq!(app.status_message(), WON);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
