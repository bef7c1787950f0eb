//! Line-oriented text front-end.
//!
//! Stands in for a graphical board: each input line is one command, each
//! reply is `= <message>` on success or `? <message>` on failure, echoing an
//! optional leading numeric id the way GTP does.
//!
//! ## Supported Commands
//!
//! - `name` - Return program name
//! - `version` - Return program version
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `boardsize` - Report the (fixed) board size
//! - `new_game` / `clear_board` - Start over with Red to move
//! - `play <coord>` or `play <q> <r>` - Place a stone for the player to move
//! - `turn` - Player to move
//! - `status` - `ongoing <player>` or `won <player>`
//! - `showboard` - Print the board
//! - `winning_path` - The winning chain once the game is over
//!
//! ## Example
//!
//! ```ignore
//! use hex_game::shell::Shell;
//! let mut shell = Shell::new();
//! shell.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::board::{Point, parse_coord, str_coord};
use crate::constants::N;
use crate::game::{Game, Status};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "known_command",
    "list_commands",
    "name",
    "new_game",
    "play",
    "quit",
    "showboard",
    "status",
    "turn",
    "version",
    "winning_path",
];

/// Command loop state: the game in play.
#[derive(Default)]
pub struct Shell {
    game: Game,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Read commands from `input` and write replies to `output` until `quit`
    /// or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("reading command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let (success, message) = self.execute(&command, &parts[1..]);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n").context("writing reply")?;
            output.flush().context("flushing reply")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Split an optional numeric command id from the rest of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Accepts `c5` or `2 4`.
    fn parse_point(args: &[&str]) -> Option<Point> {
        match args {
            [coord] => parse_coord(coord),
            [q, r] => Some((q.parse().ok()?, r.parse().ok()?)),
            _ => None,
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => (true, N.to_string()),

            "new_game" | "clear_board" => {
                self.game.new_game();
                (true, String::new())
            }

            "play" => {
                let Some((q, r)) = Self::parse_point(args) else {
                    return (false, "invalid coordinate".to_string());
                };
                match self.game.play(q, r) {
                    Some(placement) => (true, describe(placement.status)),
                    None => (false, "ignored".to_string()),
                }
            }

            "turn" => match self.game.status() {
                Status::Ongoing(p) => (true, p.to_string()),
                Status::Won(_) => (false, "game over".to_string()),
            },

            "status" => {
                let status = match self.game.status() {
                    Status::Ongoing(p) => format!("ongoing {p}"),
                    Status::Won(p) => format!("won {p}"),
                };
                (true, status)
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "winning_path" => match self.game.winning_path() {
                Some(path) => {
                    let coords: Vec<String> = path.into_iter().map(str_coord).collect();
                    (true, coords.join(" "))
                }
                None => (false, "no winner yet".to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

/// Human-readable reply to an accepted move.
fn describe(status: Status) -> String {
    match status {
        Status::Ongoing(next) => next.to_string(),
        Status::Won(winner) => format!("{winner} wins"),
    }
}
