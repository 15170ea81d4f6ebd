//! Fixed transcript text: banners, story, help, status messages.

use rise_domain::{LocationNode, TranscriptLine};

pub const HELP_HINT: &str = r#"Type "help" for commands. Type "look" to examine your surroundings."#;
pub const NO_EXIT: &str = "You cannot go that way.";
pub const UNKNOWN_COMMAND: &str = r#"Unknown command. Type "help" for available commands."#;
pub const EMPTY_POCKETS: &str = "  Nothing. Your pockets are empty.";
pub const CONNECT_WALLET: &str = "Please connect your wallet to play.";
pub const HOSTILE_NEARBY: &str = "Something stirs nearby. You are not alone here.";

pub const MOVE_PENDING: &str = "Recording movement on the ledger...";
pub const LOOK_PENDING: &str = "Querying the ledger for location data...";
pub const SCORE_PENDING: &str = "Loading stats from the ledger...";
pub const REGISTER_PENDING: &str = "Initializing new player on the ledger...";

const RULE: &str = "═══════════════════════════════════════════════════";

/// Title banner shown when a session starts
pub fn banner() -> Vec<TranscriptLine> {
    vec![
        TranscriptLine::normal(RULE),
        TranscriptLine::highlight("          R I S E"),
        TranscriptLine::normal("    A POST-APOCALYPTIC TEXT ADVENTURE"),
        TranscriptLine::normal(RULE),
        TranscriptLine::blank(),
        TranscriptLine::success("Ledger-Backed Game"),
        TranscriptLine::success("All movements are recorded on the ledger"),
        TranscriptLine::blank(),
    ]
}

/// Replaces the registration placeholder once the ledger accepts a new player
pub fn new_player_story(start: &LocationNode) -> Vec<TranscriptLine> {
    let mut lines = vec![
        TranscriptLine::success("Player initialized on the ledger!"),
        TranscriptLine::blank(),
        TranscriptLine::normal(
            "The year is 2089. The world as you knew it ended thirty years ago.",
        ),
        TranscriptLine::normal("You are one of the few survivors, wandering the barren wasteland"),
        TranscriptLine::normal("in search of... something. Anything."),
        TranscriptLine::blank(),
        TranscriptLine::highlight("Your story begins here."),
        TranscriptLine::blank(),
        TranscriptLine::normal(HELP_HINT),
        TranscriptLine::blank(),
    ];
    lines.extend(location_lines(start));
    lines
}

/// Name, description and exits of a location
pub fn location_lines(node: &LocationNode) -> Vec<TranscriptLine> {
    vec![
        TranscriptLine::highlight(node.name()),
        TranscriptLine::normal(node.description()),
        TranscriptLine::blank(),
        exits_line(node),
    ]
}

pub fn exits_line(node: &LocationNode) -> TranscriptLine {
    TranscriptLine::normal(format!("Obvious exits: {}", node.exit_summary()))
}

/// Command reference. `[ledger]` marks remote-confirmed commands and
/// `[reads ledger]` marks commands answered live by the ledger.
pub fn help_lines() -> Vec<TranscriptLine> {
    vec![
        TranscriptLine::blank(),
        TranscriptLine::highlight("Available Commands:"),
        TranscriptLine::success(
            "  Movement: n, s, e, w, u, d (north, south, east, west, up, down) [ledger]",
        ),
        TranscriptLine::normal("  look (l) - Examine your surroundings [reads ledger]"),
        TranscriptLine::normal("  inventory (inv, i) - Check what you're carrying"),
        TranscriptLine::normal("  map - Consult your map for landmarks"),
        TranscriptLine::normal("  score (stats) - Check your health and status [reads ledger]"),
        TranscriptLine::normal("  help (?) - Show this message"),
        TranscriptLine::blank(),
        TranscriptLine::success("[ledger] = recorded on the ledger before it takes effect"),
        TranscriptLine::normal("[reads ledger] = answered live by the ledger"),
    ]
}
