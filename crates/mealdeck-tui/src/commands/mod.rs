// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use mealdeck_core::Route;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Leave the current screen; on Home, close the app
    Quit,
    // Regardless of screen, close the app
    Exit,
    // Display help
    Help,
    // Change theme
    Theme(String),
    // Run a fresh aggregation for this term
    Load(String),
    // Open the create form
    New,
    // Detail screen for a recipe id
    Open(String),
    // Edit form for a recipe id
    Edit(String),
    // Navigate to a path (`/`, `/meal/<id>`, `/create`, `/edit/<id>`)
    Go(Route),
    // Clear every filter
    Reset,
    // Ask for the next page
    More,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "q!" | "quit!" => Ok(Command::Exit),
            "help" => Ok(Command::Help),
            "new" | "create" => Ok(Command::New),
            "reset" => Ok(Command::Reset),
            "more" => Ok(Command::More),
            "theme" => required(rest, "usage: theme <default|gruvbox>").map(Command::Theme),
            "load" => required(rest, "usage: load <term>").map(Command::Load),
            "open" => required(rest, "usage: open <id>").map(Command::Open),
            "edit" => required(rest, "usage: edit <id>").map(Command::Edit),
            "go" => required(rest, "usage: go <path>").map(|p| Command::Go(Route::parse(&p))),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

fn required(arg: &str, usage: &str) -> Result<String, String> {
    if arg.is_empty() {
        Err(usage.to_string())
    } else {
        Ok(arg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit() {
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("  quit  "), Ok(Command::Quit));
        assert_eq!(Command::parse("q!"), Ok(Command::Exit));
    }

    #[test]
    fn parse_theme() {
        assert_eq!(
            Command::parse("theme gruvbox"),
            Ok(Command::Theme("gruvbox".to_string()))
        );
        assert!(Command::parse("theme").is_err());
    }

    #[test]
    fn parse_load_keeps_inner_spaces() {
        assert_eq!(
            Command::parse("load  fish pie "),
            Ok(Command::Load("fish pie".to_string()))
        );
        assert!(Command::parse("load").is_err());
    }

    #[test]
    fn parse_go_routes() {
        assert_eq!(
            Command::parse("go /meal/52772"),
            Ok(Command::Go(Route::Detail("52772".to_string())))
        );
        assert_eq!(Command::parse("go /"), Ok(Command::Go(Route::Home)));
        assert_eq!(Command::parse("go /nope/x/y"), Ok(Command::Go(Route::NotFound)));
    }

    #[test]
    fn parse_record_commands() {
        assert_eq!(Command::parse("new"), Ok(Command::New));
        assert_eq!(Command::parse("open 1"), Ok(Command::Open("1".to_string())));
        assert_eq!(Command::parse("edit 1"), Ok(Command::Edit("1".to_string())));
        assert!(Command::parse("open").is_err());
    }

    #[test]
    fn parse_empty_returns_sentinel_err() {
        assert_eq!(Command::parse(""), Err(String::new()));
        assert_eq!(Command::parse("  "), Err(String::new()));
    }

    #[test]
    fn parse_unknown() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.contains("frobnicate"));
    }
}
