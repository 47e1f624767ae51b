use super::*;
use crate::gesture::Verdict;
use colored::Colorize;

/// Prints the game to stdout.
#[derive(Debug, Default)]
pub struct Terminal;

#[async_trait::async_trait]
impl Surface for Terminal {
    async fn notify(&mut self, event: &Event) {
        match event {
            Event::Observed(gesture) => println!("{} {}", "you show".dimmed(), gesture),
            Event::Countdown(n) => println!("{}", n.to_string().bold()),
            Event::Resolved(round) => {
                println!("computer throws {}", round.computer().to_string().cyan());
                match round.verdict() {
                    Verdict::Win => println!("{}", round.to_string().green()),
                    Verdict::Lose => println!("{}", round.to_string().red()),
                    Verdict::Tie => println!("{}", round.to_string().yellow()),
                }
            }
            Event::Cleared => println!("{}", "show rock to play again".dimmed()),
            Event::Unavailable(e) => eprintln!("{}", e.to_string().red()),
        }
    }
}
