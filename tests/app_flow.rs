//! Drive the menu and game loop through in-memory streams.

use std::io::Cursor;

use connect_n::config::AppConfig;
use connect_n::game::{SessionParams, Step};
use connect_n::ui::App;

fn config() -> AppConfig {
    let mut config = AppConfig::default();
    config.display.clear_screen = false;
    config
}

fn app(input: &str) -> App<Cursor<Vec<u8>>, Vec<u8>> {
    App::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), &config()).unwrap()
}

#[test]
fn test_quick_game_to_win() {
    let mut app = app("1\n1\n2\n2\n3\n3\n4\n");
    let step = app.play(SessionParams::CLASSIC).unwrap();
    assert_eq!(step, Step::Won(0));

    let text = String::from_utf8(app.into_output()).unwrap();
    assert!(text.contains("Player 1 (X) - choose a column (1-7)"));
    assert!(text.contains("Player 2 (O) - choose a column (1-7)"));
    assert!(text.ends_with("Player 1 (X) wins!\n"));
}

#[test]
fn test_notices_are_shown() {
    let mut app = app("9\nzz\nu\nhelp\nq\n");
    let step = app.play(SessionParams::CLASSIC).unwrap();
    assert_eq!(step, Step::Quit);

    let text = String::from_utf8(app.into_output()).unwrap();
    assert!(text.contains("column 9 is out of range (1-7)"));
    assert!(text.contains("invalid input 'zz'"));
    assert!(text.contains("nothing to undo"));
    assert!(text.contains("Commands:"));
    assert!(text.contains("Game abandoned."));
}

#[test]
fn test_end_of_input_quits_game() {
    let mut app = app("4\n");
    assert_eq!(app.play(SessionParams::CLASSIC).unwrap(), Step::Quit);
}

#[test]
fn test_menu_custom_game_then_quit() {
    // custom 5x5, connect 4, 3 players; one move then quit; back at menu choose 0
    let mut app = app("2\n5\n5\n4\n3\n1\nq\n\n0\n");
    app.run().unwrap();

    let text = String::from_utf8(app.into_output()).unwrap();
    assert!(text.contains("Connect 4 | 5x5 | 3 players"));
    assert!(text.contains("Player 2 (B) - choose a column (1-5)"));
    assert!(text.ends_with("Goodbye!\n"));
}

#[test]
fn test_menu_rules_and_unknown_option() {
    let mut app = app("3\n\n7\n\n0\n");
    app.run().unwrap();

    let text = String::from_utf8(app.into_output()).unwrap();
    assert!(text.contains("A full board is a draw."));
    assert!(text.contains("Unknown option '7'."));
    assert!(text.ends_with("Goodbye!\n"));
}

#[test]
fn test_menu_stops_at_end_of_input() {
    let mut app = app("");
    app.run().unwrap();
    let text = String::from_utf8(app.into_output()).unwrap();
    assert!(text.contains("=== Connect-N ==="));
    assert!(text.ends_with("Goodbye!\n"));
}
