//! Terminal game mode
//!
//! Plays up to the session's game limit, never repeating a solution.

use crate::dictionary::DictionarySnapshot;
use crate::game::{GameSession, GameStatus};
use crate::output::{print_banner, print_board, print_game_result};
use crate::selection::SolutionSelector;
use std::io::{self, BufRead, Write};

/// How a play session went
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    pub games: usize,
    pub wins: usize,
}

/// Run the interactive game loop, reading guesses from `input`
///
/// Ends on `sair`, end of input, or once the game limit is reached.
///
/// # Errors
///
/// Returns an error if reading input fails or no solution can be picked.
pub fn run_play<R: BufRead>(
    selector: &SolutionSelector,
    snapshot: &DictionarySnapshot,
    game_limit: usize,
    input: &mut R,
) -> Result<PlaySummary, String> {
    let mut session = GameSession::start(selector, snapshot)
        .map_err(|e| e.to_string())?
        .with_game_limit(game_limit);
    let mut summary = PlaySummary::default();

    print_banner(session.game_limit());

    loop {
        print_board(&session);

        let Some(line) = read_input(input, &format!("Tentativa {}", session.turn()))? else {
            return Ok(summary);
        };
        if matches!(line.to_lowercase().as_str(), "sair" | "quit" | "q" | "exit") {
            println!("\n👋 Até a próxima!\n");
            return Ok(summary);
        }

        let outcome = match session.submit(&line, snapshot) {
            Ok(outcome) => outcome,
            Err(e) => {
                println!("❌ {e}");
                continue;
            }
        };

        if !outcome.status.is_over() {
            continue;
        }

        print_board(&session);
        print_game_result(&session);
        summary.games += 1;
        if outcome.status == GameStatus::Won {
            summary.wins += 1;
        }

        if !session.can_start_next() {
            println!(
                "\nLimite de {} jogos por sessão atingido. Até a próxima!\n",
                session.game_limit()
            );
            return Ok(summary);
        }

        match read_input(input, "Jogar novamente? (s/n)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "s" | "sim" | "y" | "yes") => {
                session
                    .start_next(selector, snapshot)
                    .map_err(|e| e.to_string())?;
                println!("\n🔄 Novo jogo!\n");
            }
            _ => {
                println!("\n👋 Até a próxima!\n");
                return Ok(summary);
            }
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
