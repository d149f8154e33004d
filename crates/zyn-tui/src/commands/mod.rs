//! `:` commands — parsing only. The app shell executes them.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `help` | Toggle the help popup |
//! | `theme [light\|dark]` | Set the theme, or toggle with no argument |
//! | `filter <category>` | Show a category (`all` for everything) |
//! | `search <text>` | Search immediately |
//! | `reset` | Clear search and category |
//! | `more` | Load the next page |
//! | `cart` | Open the cart summary |
//! | `remove <id>` | Remove a product from the cart |
//! | `subscribe <email>` | Newsletter signup |
//! | `contact <name>; <email>; <message>` | Send the services contact form |

use zyn_core::forms::ContactForm;
use zyn_core::ThemeMode;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    /// `None` flips the current theme.
    Theme(Option<ThemeMode>),
    Filter(String),
    Search(String),
    Reset,
    More,
    Cart,
    Remove(u32),
    Subscribe(String),
    Contact(ContactForm),
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
            "help" => Ok(Command::Help),
            "more" => Ok(Command::More),
            "cart" => Ok(Command::Cart),
            "reset" => Ok(Command::Reset),
            "theme" => {
                if rest.is_empty() {
                    Ok(Command::Theme(None))
                } else {
                    rest.parse::<ThemeMode>()
                        .map(|mode| Command::Theme(Some(mode)))
                        .map_err(|_| "usage: theme [light|dark]".to_string())
                }
            }
            "filter" => {
                if rest.is_empty() {
                    Err("usage: filter <category>".to_string())
                } else {
                    Ok(Command::Filter(rest.to_lowercase()))
                }
            }
            "search" => Ok(Command::Search(rest.to_string())),
            "remove" => rest
                .parse::<u32>()
                .map(Command::Remove)
                .map_err(|_| "usage: remove <id>".to_string()),
            "subscribe" => Ok(Command::Subscribe(rest.to_string())),
            "contact" => Ok(Command::Contact(ContactForm::parse(rest))),
            other => Err(format!("unknown command: {other}")),
        }
    }
}
