//! Line-oriented console mode.

use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::{
    engine::GameState,
    rules::RULES,
    scores::{ScoreBoard, normalize_username, render_table},
    store::KeyValueStore,
};

const HELP: &str = "Commandes : un nombre pour deviner, 'restart', 'scores', 'rules', 'help', 'exit'";

enum Flow {
    Continue,
    Exit,
}

pub struct Console<R, W, S, G> {
    input: R,
    output: W,
    board: ScoreBoard<S>,
    rng: G,
    state: GameState,
}

impl<R, W, S, G> Console<R, W, S, G>
where
    R: BufRead,
    W: Write,
    S: KeyValueStore,
    G: Rng,
{
    pub fn new(input: R, output: W, board: ScoreBoard<S>, mut rng: G) -> Self {
        let state = GameState::new(&mut rng);
        Self {
            input,
            output,
            board,
            rng,
            state,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &ScoreBoard<S> {
        &self.board
    }

    pub fn run(&mut self) -> Result<()> {
        info!("console session started");
        writeln!(self.output, "\nBienvenue dans le jeu de devinette de nombre !")?;
        writeln!(
            self.output,
            "Tapez 'exit' pour quitter ou 'restart' pour recommencer à tout moment."
        )?;

        loop {
            self.display()?;

            // EOF ends the session like `exit`.
            let flow = match self.prompt("> ")? {
                Some(line) => self.handle(&line)?,
                None => Flow::Exit,
            };

            if let Flow::Exit = flow {
                writeln!(self.output, "\nMerci d'avoir joué ! À bientôt !")?;
                break;
            }
        }

        info!("console session ended");
        Ok(())
    }

    fn display(&mut self) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", self.state.render())?;

        if self.state.is_over() {
            if self.state.is_won() {
                writeln!(
                    self.output,
                    "\nFélicitations ! Votre score est: {}",
                    self.state.score()
                )?;
            }
            writeln!(
                self.output,
                "\nTapez 'restart' pour recommencer ou 'exit' pour quitter"
            )?;
        }
        Ok(())
    }

    fn handle(&mut self, line: &str) -> Result<Flow> {
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "exit" | "quit" => return Ok(Flow::Exit),
            "restart" => {
                info!("game restarted");
                self.state = GameState::restarted(&mut self.rng);
            }
            "scores" => {
                let table = render_table(&self.board.list());
                write!(self.output, "\n{table}")?;
            }
            "rules" => {
                write!(self.output, "\n{}", RULES.render_text())?;
            }
            "help" => {
                writeln!(self.output, "\n{HELP}")?;
            }
            _ => {
                let was_over = self.state.is_over();
                self.state = self.state.guess(&command);
                info!(input = %command, attempts_left = self.state.attempts_left(), "guess");

                if !was_over && self.state.is_over() {
                    info!(won = self.state.is_won(), score = self.state.score(), "game over");
                    if self.state.score() > 0 {
                        return self.offer_save();
                    }
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn offer_save(&mut self) -> Result<Flow> {
        let score = self.state.score();
        writeln!(self.output, "\nPartie terminée ! Votre score final : {score}")?;

        loop {
            let Some(line) = self.prompt(
                "Entrez votre nom d'utilisateur pour enregistrer votre score (vide pour ignorer) : ",
            )?
            else {
                return Ok(Flow::Exit);
            };

            if line.trim().is_empty() {
                return Ok(Flow::Continue);
            }

            match normalize_username(&line) {
                Ok(name) => {
                    match self.board.save(&name, score) {
                        Ok(()) => writeln!(self.output, "Score enregistré avec succès !")?,
                        Err(e) => {
                            warn!("failed to save score: {e:#}");
                            writeln!(self.output, "Impossible d'enregistrer le score : {e}")?;
                        }
                    }
                    return Ok(Flow::Continue);
                }
                Err(reason) => {
                    writeln!(self.output, "Nom invalide ({reason}), 15 caractères maximum.")?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FlakyStore, MemoryStore};
    use rand::{SeedableRng, rngs::StdRng};
    use std::io::Cursor;

    fn run_console(script: &str) -> (String, Console<Cursor<Vec<u8>>, Vec<u8>, MemoryStore, StdRng>) {
        let mut console = Console::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            ScoreBoard::new(MemoryStore::new()),
            StdRng::seed_from_u64(3),
        );
        console.state = GameState::with_target(42);
        console.run().unwrap();
        let output = String::from_utf8(console.output.clone()).unwrap();
        (output, console)
    }

    #[test]
    fn test_exit_command() {
        let (output, console) = run_console("QUIT\n50\n");
        assert!(output.contains("Merci d'avoir joué"));
        assert!(console.state().guesses().is_empty());
    }

    #[test]
    fn test_eof_ends_session() {
        let (output, _) = run_console("50\n");
        assert!(output.contains("plus petit que 50"));
        assert!(output.ends_with("Merci d'avoir joué ! À bientôt !\n"));
    }

    #[test]
    fn test_eof_at_name_prompt_says_goodbye_once() {
        let (output, console) = run_console("42\n");
        assert_eq!(output.matches("Merci d'avoir joué").count(), 1);
        assert!(console.board().list().is_empty());
    }

    #[test]
    fn test_failed_save_is_reported() {
        let store = FlakyStore::default();
        store.fail_writes.set(true);
        let mut console = Console::new(
            Cursor::new(b"42\nalice\nexit\n".to_vec()),
            Vec::new(),
            ScoreBoard::new(store),
            StdRng::seed_from_u64(3),
        );
        console.state = GameState::with_target(42);
        console.run().unwrap();

        let output = String::from_utf8(console.output.clone()).unwrap();
        assert!(output.contains("Impossible d'enregistrer le score : permission denied"));
        assert!(!output.contains("Score enregistré avec succès"));
        assert!(output.contains("Merci d'avoir joué"));
    }

    #[test]
    fn test_win_and_save() {
        let (output, console) = run_console("50\n25\n42\nalice\nexit\n");

        assert!(output.contains("Votre score final : 80"));
        assert!(output.contains("Score enregistré avec succès !"));
        assert!(output.contains("Tapez 'restart'"));

        let scores = console.board().list();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].username, "alice");
        assert_eq!(scores[0].score, 80);
    }

    #[test]
    fn test_skip_save_with_blank_name() {
        let (_, console) = run_console("42\n\nexit\n");
        assert!(console.board().list().is_empty());
    }

    #[test]
    fn test_long_name_asked_again() {
        let (output, console) = run_console("42\nthisnameiswaytoolong\nbob\nexit\n");
        assert!(output.contains("Nom invalide"));
        assert_eq!(console.board().list()[0].username, "bob");
    }

    #[test]
    fn test_restart_resets_game() {
        let (output, console) = run_console("10\nrestart\nexit\n");
        assert!(output.contains("Jeu redémarré !"));
        assert!(console.state().guesses().is_empty());
        assert_eq!(console.state().attempts_left(), 10);
    }

    #[test]
    fn test_invalid_guess_message() {
        let (output, console) = run_console("bonjour\nexit\n");
        assert!(output.contains("Veuillez entrer un nombre valide entre 1 et 100."));
        assert_eq!(console.state().attempts_left(), 10);
    }

    #[test]
    fn test_scores_and_rules_commands() {
        let (output, _) = run_console("scores\nrules\nhelp\nexit\n");
        assert!(output.contains("Aucun score"));
        assert!(output.contains("Règles du Jeu:"));
        assert!(output.contains("Commandes :"));
    }
}
