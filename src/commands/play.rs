//! Interactive play mode
//!
//! Text-based game loop over any input and output streams, so the same code
//! drives the terminal and the tests.

use crate::core::{Difficulty, GameType, GuessType, Player, Puzzle, Selection};
use crate::engine::{ComputerMove, GuessReport, Outcome, PuzzleEngine, Round, choose_move};
use crate::output::display::{write_guess_report, write_round_result, write_round_status};
use crate::puzzles;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};

/// Table setup for a play session
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    pub game_type: GameType,
    pub difficulty: Difficulty,
    /// Let an easy computer switch to hard once half the letters show
    pub escalate: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            game_type: GameType::HumanComputer,
            difficulty: Difficulty::Easy,
            escalate: false,
        }
    }
}

/// An interactive session: one or more rounds with scores carried over
pub struct PlaySession<'a, R, W, G: ?Sized> {
    engine: &'a PuzzleEngine,
    puzzles: &'a [Puzzle],
    options: PlayOptions,
    input: R,
    output: W,
    rng: &'a mut G,
}

impl<'a, R: BufRead, W: Write, G: Rng + ?Sized> PlaySession<'a, R, W, G> {
    pub fn new(
        engine: &'a PuzzleEngine,
        puzzles: &'a [Puzzle],
        options: PlayOptions,
        input: R,
        output: W,
        rng: &'a mut G,
    ) -> Self {
        Self {
            engine,
            puzzles,
            options,
            input,
            output,
            rng,
        }
    }

    /// Play rounds until a player quits or declines another puzzle
    ///
    /// Returns the final scores of both seats. End of input counts as quitting.
    ///
    /// # Errors
    ///
    /// Returns an error if the puzzle list is empty or the streams fail.
    pub fn run(&mut self) -> Result<(i32, i32)> {
        writeln!(self.output, "Welcome to Phrase Puzzler!")?;
        let mut scores = (0, 0);

        loop {
            let puzzle = puzzles::choose(self.puzzles, &mut *self.rng).context("no puzzles to play")?;
            let round = self.play_round(puzzle, scores)?;
            scores = round.scores();
            write_round_result(&mut self.output, self.engine.config(), &round)?;

            if round.outcome() == Some(Outcome::Quit) {
                break;
            }
            match self.prompt("Play again? (yes/no)")? {
                Some(answer) if answer.to_lowercase().starts_with('y') => {}
                _ => break,
            }
        }

        writeln!(self.output, "Thanks for playing!")?;
        Ok(scores)
    }

    fn play_round(&mut self, puzzle: &Puzzle, scores: (i32, i32)) -> Result<Round> {
        let engine = self.engine;
        let mut round = Round::new(engine, puzzle, scores, Player::One);

        loop {
            write_round_status(&mut self.output, engine.config(), &round)?;

            let (next, selection) = if self.options.game_type.is_computer(round.current_player()) {
                self.computer_turn(&round)?
            } else {
                self.human_turn(&round)?
            };

            round = if self.options.game_type == GameType::Solo {
                next.hand_to(Player::One)
            } else {
                next
            };

            if round.is_over() || engine.game_over(round.puzzle(), round.view(), selection) {
                return Ok(round);
            }
        }
    }

    fn human_turn(&mut self, round: &Round) -> Result<(Round, Selection)> {
        let Some(answer) = self.prompt("Choose [C]onsonant, [V]owel, [S]olve or [Q]uit")? else {
            return Ok((round.quit(), Selection::Quit));
        };
        let Some(tag) = answer.chars().next() else {
            return Ok((round.clone(), Selection::Consonant));
        };
        let selection = match Selection::from_tag(tag) {
            Ok(selection) => selection,
            Err(e) => {
                writeln!(self.output, "{e}")?;
                return Ok((round.clone(), Selection::Consonant));
            }
        };

        let next = match selection {
            Selection::Quit => round.quit(),
            Selection::Solve => {
                let Some(attempt) = self.prompt("Your solution")? else {
                    return Ok((round.quit(), Selection::Quit));
                };
                let (next, correct) = round.solve(self.engine, &attempt)?;
                if correct {
                    writeln!(self.output, "That's it!")?;
                } else {
                    writeln!(self.output, "Sorry, that is not the puzzle.")?;
                }
                next
            }
            Selection::Consonant => self.letter_turn(round, GuessType::Consonant)?,
            Selection::Vowel => self.letter_turn(round, GuessType::Vowel)?,
        };

        Ok((next, selection))
    }

    fn letter_turn(&mut self, round: &Round, guess_type: GuessType) -> Result<Round> {
        let remaining = match guess_type {
            GuessType::Consonant => round.unguessed_consonants(),
            GuessType::Vowel => round.unguessed_vowels(),
        };
        if remaining.is_empty() {
            writeln!(self.output, "There are no {}s left to guess.", guess_type.label())?;
            return Ok(round.clone());
        }

        let Some(answer) = self.prompt(&format!("Pick a {} from {remaining}", guess_type.label()))?
        else {
            return Ok(round.quit());
        };
        let Some(letter) = answer.chars().next() else {
            return Ok(round.clone());
        };

        match round.apply_guess(self.engine, letter, guess_type) {
            Ok(report) => self.finish_guess(report),
            Err(e) => {
                writeln!(self.output, "{e}")?;
                Ok(round.clone())
            }
        }
    }

    fn computer_turn(&mut self, round: &Round) -> Result<(Round, Selection)> {
        let engine = self.engine;
        let difficulty = if self.options.escalate {
            self.options
                .difficulty
                .escalate(engine.half_revealed(round.view()))
        } else {
            self.options.difficulty
        };
        let player = round.current_player().name(engine.config()).to_string();

        match choose_move(engine, round, difficulty, self.puzzles, &mut *self.rng)? {
            ComputerMove::Guess(letter, guess_type) => {
                writeln!(self.output, "{player} (computer) picks '{letter}'.")?;
                let report = round.apply_guess(engine, letter, guess_type)?;
                let selection = match guess_type {
                    GuessType::Consonant => Selection::Consonant,
                    GuessType::Vowel => Selection::Vowel,
                };
                Ok((self.finish_guess(report)?, selection))
            }
            ComputerMove::Solve(attempt) => {
                writeln!(self.output, "{player} (computer) solves: {attempt}")?;
                let (next, correct) = round.solve(engine, &attempt)?;
                if !correct {
                    writeln!(self.output, "The computer got it wrong!")?;
                }
                Ok((next, Selection::Solve))
            }
        }
    }

    fn finish_guess(&mut self, report: GuessReport) -> Result<Round> {
        write_guess_report(&mut self.output, &report)?;
        Ok(report.round)
    }

    /// Prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PuzzleConfig;
    use crate::puzzles::loader::puzzles_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn play(texts: &[&str], options: PlayOptions, script: &str) -> ((i32, i32), String) {
        colored::control::set_override(false);
        let engine = PuzzleEngine::new(PuzzleConfig::default());
        let puzzles = puzzles_from_slice(texts, engine.config());
        let mut rng = StdRng::seed_from_u64(1);
        let mut output = Vec::new();

        let scores = PlaySession::new(
            &engine,
            &puzzles,
            options,
            Cursor::new(script.to_string()),
            &mut output,
            &mut rng,
        )
        .run()
        .unwrap();

        (scores, String::from_utf8(output).unwrap())
    }

    fn two_humans() -> PlayOptions {
        PlayOptions {
            game_type: GameType::HumanHuman,
            ..PlayOptions::default()
        }
    }

    #[test]
    fn immediate_quit() {
        let (scores, output) = play(&["banana"], two_humans(), "q\n");
        assert_eq!(scores, (0, 0));
        assert!(output.contains("^^^^^^"));
        assert!(output.contains("Thanks for playing!"));
    }

    #[test]
    fn end_of_input_quits() {
        let (scores, output) = play(&["banana"], two_humans(), "");
        assert_eq!(scores, (0, 0));
        assert!(output.contains("Thanks for playing!"));
    }

    #[test]
    fn end_of_input_at_letter_prompt_ends_the_round() {
        let (scores, output) = play(&["banana"], two_humans(), "c\n");
        assert_eq!(scores, (0, 0));
        assert_eq!(output.matches("to play").count(), 1);
        assert!(output.contains("Round abandoned."));
        assert!(output.contains("Thanks for playing!"));
    }

    #[test]
    fn guesses_then_solve() {
        // One: n (hit), z (miss). Two: a (vowel), then solves.
        let script = "c\nn\nc\nz\nv\na\ns\nbanana\nno\n";
        let (scores, output) = play(&["banana"], two_humans(), script);

        // One: 2 for the n's. Two: -1 for the vowel, +2 for the unguessed 'b'.
        assert_eq!(scores, (2, 1));
        assert!(output.contains("^^n^n^"));
        assert!(output.contains("That's it!"));
    }

    #[test]
    fn invalid_inputs_keep_the_turn() {
        // bad menu tag, vowel offered as consonant, repeated letter, then quit
        let script = "x\nc\na\nc\nb\nc\nb\nq\n";
        let (scores, output) = play(&["banana"], two_humans(), script);

        assert_eq!(scores, (1, 0));
        assert!(output.contains("unknown menu selection 'x'"));
        assert!(output.contains("'a' is not a consonant"));
        assert!(output.contains("'b' has already been guessed"));
    }

    #[test]
    fn wrong_solve_passes_turn() {
        let script = "s\nbandana\nq\n";
        let (_, output) = play(&["banana"], two_humans(), script);
        assert!(output.contains("Sorry, that is not the puzzle."));
        assert!(output.contains("Player Two"));
    }

    #[test]
    fn solo_player_keeps_every_turn() {
        let options = PlayOptions {
            game_type: GameType::Solo,
            ..PlayOptions::default()
        };
        // miss, then reveal every letter of "ox"
        let script = "c\nz\nc\nx\nv\no\nno\n";
        let (scores, output) = play(&["ox"], options, script);

        assert_eq!(scores, (0, 0));
        assert!(!output.contains("Player Two to play"));
        assert!(output.contains("Player One wins"));
    }

    #[test]
    fn computer_opponent_takes_its_turns() {
        let options = PlayOptions {
            game_type: GameType::HumanComputer,
            difficulty: Difficulty::Hard,
            escalate: false,
        };
        // Player One misses; the hard computer opens with 't', which shows half
        // of "tent", then solves it from the known puzzles
        let script = "c\nz\nno\n";
        let (scores, output) = play(&["tent"], options, script);

        assert!(output.contains("Player Two (computer) picks 't'."));
        assert!(output.contains("Player Two (computer) solves: tent"));
        assert!(output.contains("Player Two wins"));
        // 2 for the t's, +2 for the unguessed 'n'
        assert_eq!(scores, (0, 4));
    }

    #[test]
    fn scores_carry_over_between_rounds() {
        let script = "c\nn\ns\nbanana\nyes\nc\nn\ns\nbanana\nno\n";
        let (scores, _) = play(&["banana"], two_humans(), script);
        // each round: 2 for the n's, +2 for the unguessed 'b'
        assert_eq!(scores, (8, 0));
    }
}
