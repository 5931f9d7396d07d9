//! Display functions for command results

use super::formatters::{feedback_row, keyboard_rows, status_label};
use crate::core::Feedback;
use crate::dictionary::DictionarySnapshot;
use crate::game::{GameSession, GameStatus, MAX_GUESSES};
use crate::selection::Solution;
use colored::Colorize;

/// Print the game banner
pub fn print_banner(games: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "              T E R M O".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\nAdivinhe a palavra de 5 letras em {MAX_GUESSES} tentativas.");
    println!("Acentos são ignorados. {games} jogos por sessão.");
    println!("Comandos: 'sair' para sair\n");
}

/// Print the board and keyboard of the game in progress
pub fn print_board(session: &GameSession) {
    println!();
    for guess in session.guesses() {
        println!("  {}", feedback_row(&guess.feedback));
    }
    for _ in session.guesses().len()..MAX_GUESSES {
        println!("  {}", " _ ".repeat(5).bright_black());
    }

    println!();
    for (indent, row) in keyboard_rows(session.keyboard()).iter().enumerate() {
        println!("  {}{row}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print the end-of-game summary
pub fn print_game_result(session: &GameSession) {
    let solution = session.solution().word.text().to_uppercase();
    println!("{}", "─".repeat(60).cyan());
    match session.status() {
        GameStatus::Won => println!(
            "{}",
            format!("🎉 Acertou em {}/{MAX_GUESSES}!", session.guesses().len())
                .green()
                .bold()
        ),
        GameStatus::Lost => println!(
            "{} {}",
            "❌ Não foi dessa vez. A palavra era".red().bold(),
            solution.bright_yellow().bold()
        ),
        GameStatus::InProgress => {}
    }

    for guess in session.guesses() {
        println!("  {}", guess.feedback.to_emoji());
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print a single evaluation with per-letter labels
pub fn print_feedback(feedback: &Feedback) {
    println!("\n  {}  {}", feedback_row(feedback), feedback.to_emoji());
    for result in feedback.results() {
        println!(
            "   {} {} {}",
            (result.position + 1).to_string().bright_black(),
            result.letter.to_uppercase(),
            status_label(result.status)
        );
    }
    println!();
}

/// Print a picked solution and where it came from
pub fn print_solution(solution: &Solution) {
    println!(
        "{} {} ({})",
        "Palavra:".bright_cyan().bold(),
        solution.word.text().to_uppercase().bright_yellow().bold(),
        solution.source.bright_black()
    );
}

/// Print dictionary size, per-source results and a sample
pub fn print_dictionary_report(snapshot: &DictionarySnapshot) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICIONÁRIO".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Palavras:          {}",
        snapshot.len().to_string().bright_yellow().bold()
    );
    println!("   Sem acentos:       {}", snapshot.unaccented_len());

    println!("\n📚 {}", "Fontes:".bright_cyan().bold());
    for source in snapshot.sources() {
        match &source.error {
            None => println!(
                "   {} {:>6}  {}",
                "✓".green(),
                source.unique_tokens,
                source.url
            ),
            Some(error) => println!("   {} {:>6}  {}  {}", "✗".red(), 0, source.url, error.red()),
        }
    }

    println!("\n🔤 {}", "Exemplos:".bright_cyan().bold());
    println!("   {}", snapshot.examples(20).join(", "));
}

/// Print the result of checking a word against the snapshot
pub fn print_word_check(snapshot: &DictionarySnapshot, word: &str) {
    match snapshot.accented_form(word) {
        Some(form) => println!(
            "{} {} ({})",
            "✓".green().bold(),
            form.to_uppercase().bold(),
            snapshot.source_of(form).unwrap_or("?")
        ),
        None => println!(
            "{} {} não está no dicionário",
            "✗".red().bold(),
            word.to_uppercase().bold()
        ),
    }
}
