use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use word_trail::config::Config;
use word_trail::dictionary::Dictionary;
use word_trail::game::GameSession;
use word_trail::models::{Position, RenderSnapshot, TileHighlight, WordOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_trail=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting word-trail...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionary
    let dictionary = match Dictionary::load(&config.game.dictionary_path).await {
        Ok(dict) => {
            tracing::info!("Dictionary loaded successfully");
            dict
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load dictionary: {}. Using empty dictionary for now.",
                e
            );
            tracing::warn!(
                "Download a word list to {} for full functionality",
                config.game.dictionary_path
            );
            Dictionary::empty()
        }
    };

    let mut session = GameSession::new(config.session_settings(), dictionary);

    print_grid(&session.snapshot());
    print_help();

    // Line-oriented pointer events on stdin drive the session; each line is
    // one input event, handled to completion before the next is read.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if !handle_command(line.trim(), &mut session)? {
            break;
        }
    }

    tracing::info!(
        "Session {} ended with {} words",
        session.session_id(),
        session.submitted_count()
    );
    Ok(())
}

/// Dispatch one REPL line. Returns false when the loop should exit.
fn handle_command(line: &str, session: &mut GameSession) -> Result<bool> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("down") => session.pointer_down(parse_position(parts)),
        Some("move") => session.pointer_moved(parse_position(parts)),
        Some("up") => match session.pointer_up() {
            Some(WordOutcome::Accepted { word }) => println!("accepted '{}'", word),
            Some(WordOutcome::RejectedDuplicate { word }) => {
                println!("'{}' was already submitted", word)
            }
            Some(WordOutcome::RejectedNotAWord { word }) => println!("'{}' is not a word", word),
            None => println!("nothing selected"),
        },
        Some("cancel") => session.cancel_selection(),
        Some("new") => {
            session.new_game();
            print_grid(&session.snapshot());
        }
        Some("grid") => print_grid(&session.snapshot()),
        Some("words") => {
            for word in session.submitted_words() {
                println!("{}", word);
            }
        }
        Some("snapshot") => println!("{}", serde_json::to_string_pretty(&session.snapshot())?),
        Some("help") => print_help(),
        Some("quit") | Some("exit") => return Ok(false),
        Some(other) => println!("unknown command '{}' (try 'help')", other),
        None => {}
    }
    Ok(true)
}

/// `down 0 1` presses at row 0, col 1; bare `down` presses off the board.
fn parse_position<'a>(mut parts: impl Iterator<Item = &'a str>) -> Option<Position> {
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    Some(Position::new(row, col))
}

fn print_grid(snapshot: &RenderSnapshot) {
    for row in &snapshot.tiles {
        let line: String = row
            .iter()
            .map(|tile| match tile.highlight {
                TileHighlight::NotSelected => format!(" {} ", tile.letter),
                TileHighlight::SelectedValid => format!("[{}]", tile.letter),
                TileHighlight::SelectedInvalid => format!("({})", tile.letter),
            })
            .collect();
        println!("{}", line);
    }
    if let Some(word) = &snapshot.candidate_word {
        println!("selecting: {}", word);
    }
}

fn print_help() {
    println!("commands:");
    println!("  down [row col]   press the pointer (optionally on a tile)");
    println!("  move <row> <col> drag over a tile");
    println!("  up               release and submit the selection");
    println!("  cancel           abort the current selection");
    println!("  new              start a fresh grid");
    println!("  grid             show the board");
    println!("  words            list submitted words");
    println!("  snapshot         dump the render snapshot as JSON");
    println!("  quit             exit");
}
