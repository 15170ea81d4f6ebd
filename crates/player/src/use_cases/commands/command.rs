//! Fixed verb and alias matching.

use rise_domain::Direction;

/// A classified player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Look,
    Inventory,
    Map,
    Score,
    Help,
    Unknown,
}

impl Command {
    /// Classify raw input. Whitespace-only input is not a command.
    pub fn parse(raw: &str) -> Option<Self> {
        let input = raw.trim().to_lowercase();
        if input.is_empty() {
            return None;
        }

        if let Some(direction) = Direction::parse(&input) {
            return Some(Self::Move(direction));
        }

        let command = match input.as_str() {
            "look" | "l" => Self::Look,
            "inventory" | "inv" | "i" => Self::Inventory,
            "map" | "map look" => Self::Map,
            "score" | "stats" => Self::Score,
            "help" | "?" => Self::Help,
            _ => Self::Unknown,
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_not_a_command() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   \t"), None);
    }

    #[test]
    fn directions_match_tokens_and_words_in_any_case() {
        assert_eq!(Command::parse("n"), Some(Command::Move(Direction::North)));
        assert_eq!(Command::parse("  NORTH "), Some(Command::Move(Direction::North)));
        assert_eq!(Command::parse("Down"), Some(Command::Move(Direction::Down)));
    }

    #[test]
    fn aliases_resolve_to_the_same_command() {
        for raw in ["inventory", "inv", "i", "INV"] {
            assert_eq!(Command::parse(raw), Some(Command::Inventory));
        }
        assert_eq!(Command::parse("map look"), Some(Command::Map));
        assert_eq!(Command::parse("stats"), Some(Command::Score));
        assert_eq!(Command::parse("?"), Some(Command::Help));
        assert_eq!(Command::parse("l"), Some(Command::Look));
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(Command::parse("dance"), Some(Command::Unknown));
        assert_eq!(Command::parse("go north"), Some(Command::Unknown));
    }
}
