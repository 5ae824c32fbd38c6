//! Guessing game state and its transition function.

use rand::Rng;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 100;
pub const MAX_ATTEMPTS: u8 = 10;
pub const POINTS_PER_ATTEMPT: u32 = 10;

const WELCOME_MESSAGE: &str = "Devinez un nombre entre 1 et 100. Vous avez 10 tentatives.";
const RESTART_MESSAGE: &str =
    "Jeu redémarré ! Devinez un nombre entre 1 et 100. Vous avez 10 tentatives.";
const INVALID_MESSAGE: &str = "Veuillez entrer un nombre valide entre 1 et 100.";

/// Outcome of a single validated guess, relative to the target.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Hint {
    Higher,
    Lower,
    Correct,
}

impl Hint {
    pub fn of(guess: u8, target: u8) -> Self {
        match guess.cmp(&target) {
            std::cmp::Ordering::Less => Hint::Higher,
            std::cmp::Ordering::Greater => Hint::Lower,
            std::cmp::Ordering::Equal => Hint::Correct,
        }
    }
}

/// One guessing session. Every transition returns a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: u8,
    guesses: Vec<u8>,
    attempts_left: u8,
    message: String,
    game_over: bool,
    win: bool,
}

/// Starts a game with a target drawn from the thread-local generator.
pub fn initialize() -> GameState {
    GameState::new(&mut rand::thread_rng())
}

impl GameState {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_target(rng.gen_range(MIN_NUMBER..=MAX_NUMBER))
    }

    /// Fresh game with a pinned target. Values outside 1..=100 are clamped.
    pub fn with_target(target: u8) -> Self {
        Self {
            target: target.clamp(MIN_NUMBER, MAX_NUMBER),
            guesses: Vec::with_capacity(MAX_ATTEMPTS as usize),
            attempts_left: MAX_ATTEMPTS,
            message: WELCOME_MESSAGE.to_string(),
            game_over: false,
            win: false,
        }
    }

    /// Fresh game announcing a restart, as the console `restart` command shows it.
    pub fn restarted<R: Rng>(rng: &mut R) -> Self {
        Self {
            message: RESTART_MESSAGE.to_string(),
            ..Self::new(rng)
        }
    }

    /// Applies raw user input. Anything that does not parse as an integer
    /// counts as invalid input.
    pub fn guess(&self, input: &str) -> GameState {
        match input.trim().parse::<i64>() {
            Ok(value) => self.guess_number(value),
            Err(_) => self.rejected(),
        }
    }

    pub fn guess_number(&self, value: i64) -> GameState {
        if self.game_over {
            return self.clone();
        }

        let guess = match u8::try_from(value) {
            Ok(g) if (MIN_NUMBER..=MAX_NUMBER).contains(&g) => g,
            _ => return self.rejected(),
        };

        let mut guesses = self.guesses.clone();
        guesses.push(guess);
        let attempts_left = self.attempts_left.saturating_sub(1);

        // A correct final guess is still a win.
        let (message, game_over, win) = match Hint::of(guess, self.target) {
            Hint::Correct => (
                format!(
                    "Félicitations ! Vous avez deviné le nombre {} correctement !",
                    self.target
                ),
                true,
                true,
            ),
            _ if attempts_left == 0 => (
                format!("Partie terminée ! Le nombre était {}.", self.target),
                true,
                false,
            ),
            Hint::Higher => (
                format!(
                    "Le nombre est plus grand que {}. {} tentatives restantes.",
                    guess, attempts_left
                ),
                false,
                false,
            ),
            Hint::Lower => (
                format!(
                    "Le nombre est plus petit que {}. {} tentatives restantes.",
                    guess, attempts_left
                ),
                false,
                false,
            ),
        };

        GameState {
            target: self.target,
            guesses,
            attempts_left,
            message,
            game_over,
            win,
        }
    }

    fn rejected(&self) -> GameState {
        if self.game_over {
            return self.clone();
        }
        GameState {
            message: INVALID_MESSAGE.to_string(),
            ..self.clone()
        }
    }

    pub fn guesses(&self) -> &[u8] {
        &self.guesses
    }

    pub fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn is_won(&self) -> bool {
        self.game_over && self.win
    }

    /// The target, revealed only once the game has ended.
    pub fn target(&self) -> Option<u8> {
        self.game_over.then_some(self.target)
    }

    /// Hint for the most recent guess, if any.
    pub fn last_hint(&self) -> Option<Hint> {
        self.guesses.last().map(|&g| Hint::of(g, self.target))
    }

    /// Every guess so far paired with the hint it earned.
    pub fn history(&self) -> impl Iterator<Item = (u8, Hint)> + '_ {
        self.guesses.iter().map(|&g| (g, Hint::of(g, self.target)))
    }

    /// Remaining attempts times ten for a win, zero otherwise.
    pub fn score(&self) -> u32 {
        if self.is_won() {
            u32::from(self.attempts_left) * POINTS_PER_ATTEMPT
        } else {
            0
        }
    }

    /// Multi-line, display-ready summary of the game.
    pub fn render(&self) -> String {
        let mut output = String::from("=== JEU DE DEVINETTE DE NOMBRE ===\n\n");
        output.push_str(&self.message);
        output.push_str("\n\n");

        if !self.guesses.is_empty() {
            let list: Vec<String> = self.guesses.iter().map(|g| g.to_string()).collect();
            output.push_str(&format!("Vos estimations : {}\n", list.join(", ")));
        }

        if !self.game_over {
            output.push_str(&format!("Tentatives restantes : {}\n", self.attempts_left));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn assert_invariants(state: &GameState) {
        assert_eq!(
            state.attempts_left() as usize + state.guesses().len(),
            MAX_ATTEMPTS as usize
        );
        assert_eq!(state.is_over(), state.win || state.attempts_left() == 0);
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::with_target(42);

        assert_eq!(state.attempts_left(), 10);
        assert!(state.guesses().is_empty());
        assert!(!state.is_over());
        assert!(!state.is_won());
        assert_eq!(state.target(), None);
        assert_eq!(state.message(), WELCOME_MESSAGE);
    }

    #[test]
    fn test_random_target_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let state = GameState::new(&mut rng);
            assert!((MIN_NUMBER..=MAX_NUMBER).contains(&state.target));
        }
    }

    #[test]
    fn test_initialize_hides_target() {
        let state = initialize();
        assert_eq!(state.target(), None);
        assert!((MIN_NUMBER..=MAX_NUMBER).contains(&state.target));
        assert_invariants(&state);
    }

    #[test]
    fn test_restarted_message() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = GameState::restarted(&mut rng);
        assert_eq!(state.message(), RESTART_MESSAGE);
        assert_eq!(state.attempts_left(), MAX_ATTEMPTS);
    }

    #[test]
    fn test_scenario_lower_higher_win() {
        let state = GameState::with_target(42);

        let state = state.guess("50");
        assert!(state.message().contains("plus petit"));
        assert_eq!(state.attempts_left(), 9);
        assert_eq!(state.last_hint(), Some(Hint::Lower));

        let state = state.guess("25");
        assert!(state.message().contains("plus grand"));
        assert_eq!(state.attempts_left(), 8);

        let state = state.guess("42");
        assert!(state.is_won());
        assert!(state.is_over());
        assert_eq!(state.attempts_left(), 8);
        assert_eq!(state.guesses(), &[50, 25, 42]);
        assert_eq!(
            state.history().collect::<Vec<_>>(),
            vec![(50, Hint::Lower), (25, Hint::Higher), (42, Hint::Correct)]
        );
        assert_eq!(state.score(), 80);
        assert_eq!(state.target(), Some(42));
        assert_invariants(&state);
    }

    #[test]
    fn test_invalid_input_only_updates_message() {
        let state = GameState::with_target(42).guess("10");

        for input in ["0", "101", "abc", "", "-5", "4.5", "99999999999999999999"] {
            let next = state.guess(input);
            assert_eq!(next.guesses(), state.guesses());
            assert_eq!(next.attempts_left(), state.attempts_left());
            assert_eq!(next.is_over(), state.is_over());
            assert_eq!(next.message(), INVALID_MESSAGE);
        }
    }

    #[test]
    fn test_input_is_trimmed() {
        let state = GameState::with_target(42).guess("  42 \n");
        assert!(state.is_won());
    }

    #[test]
    fn test_guess_after_game_over_is_noop() {
        let won = GameState::with_target(7).guess("7");
        assert_eq!(won.guess("8"), won);
        assert_eq!(won.guess("nope"), won);
        assert_eq!(won.guess_number(0), won);
    }

    #[test]
    fn test_ten_wrong_guesses_lose() {
        let mut state = GameState::with_target(100);
        for i in 1..=10 {
            assert!(!state.is_over());
            state = state.guess_number(i);
            assert_invariants(&state);
        }

        assert!(state.is_over());
        assert!(!state.is_won());
        assert_eq!(state.attempts_left(), 0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.message(), "Partie terminée ! Le nombre était 100.");
    }

    #[test]
    fn test_correct_on_last_attempt_wins() {
        let mut state = GameState::with_target(55);
        for i in 1..=9 {
            state = state.guess_number(i);
        }
        assert_eq!(state.attempts_left(), 1);

        let state = state.guess_number(55);
        assert!(state.is_won());
        assert_eq!(state.attempts_left(), 0);
        assert_eq!(state.score(), 0);
        assert_invariants(&state);
    }

    #[test]
    fn test_hint_messages() {
        let state = GameState::with_target(30).guess("20");
        assert_eq!(
            state.message(),
            "Le nombre est plus grand que 20. 9 tentatives restantes."
        );

        let state = state.guess("40");
        assert_eq!(
            state.message(),
            "Le nombre est plus petit que 40. 8 tentatives restantes."
        );
    }

    #[test]
    fn test_render_in_progress() {
        let state = GameState::with_target(30).guess("20").guess("40");
        let text = state.render();

        assert!(text.starts_with("=== JEU DE DEVINETTE DE NOMBRE ===\n\n"));
        assert!(text.contains("Vos estimations : 20, 40\n"));
        assert!(text.ends_with("Tentatives restantes : 8\n"));
    }

    #[test]
    fn test_render_fresh_and_finished() {
        let fresh = GameState::with_target(30).render();
        assert!(!fresh.contains("Vos estimations"));
        assert!(fresh.contains("Tentatives restantes : 10"));

        let done = GameState::with_target(30).guess("30").render();
        assert!(done.contains("Vos estimations : 30"));
        assert!(!done.contains("Tentatives restantes"));
    }
}
