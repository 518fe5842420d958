//! End-to-end scenarios driven through `Session::step`.

use connect_n::error::MoveError;
use connect_n::game::{
    check_win, Board, Cell, Notice, Session, SessionParams, Status, Step, SymbolAlphabet,
};

fn session(rows: usize, cols: usize, win_len: usize, n_players: usize) -> Session {
    let params = SessionParams {
        rows,
        cols,
        win_len,
        n_players,
    };
    Session::new(params, &SymbolAlphabet::default()).unwrap()
}

#[test]
fn test_horizontal_win_on_bottom_row() {
    let mut game = session(6, 7, 4, 2);

    // X plays columns 1-4; O plays column 7 in between
    for col in ["1", "7", "2", "7", "3", "7"] {
        assert_eq!(game.step(col), Step::Continue(None));
    }
    assert_eq!(game.step("4"), Step::Won(0));

    assert_eq!(game.board().get(5, 3), Cell::Piece('X'));
    assert!(check_win(game.board(), 5, 3, 'X', 4));
    assert_eq!(game.status(), Status::Won(0));
}

#[test]
fn test_five_by_five_draw() {
    let mut game = session(5, 5, 4, 2);
    let moves = [
        4, 3, 4, 1, 1, 3, 5, 4, 1, 3, 2, 5, 5, 4, 3, 3, 2, 2, 4, 1, 1, 5, 2, 5, 2,
    ];

    let (last, rest) = moves.split_last().unwrap();
    for col in rest {
        assert_eq!(game.step(&col.to_string()), Step::Continue(None));
        assert!(!game.board().is_full());
    }
    assert_eq!(game.step(&last.to_string()), Step::Drawn);
    assert!(game.board().is_full());
    assert_eq!(game.status(), Status::Drawn);
    assert_eq!(game.move_count(), 25);
}

#[test]
fn test_double_undo_after_one_move() {
    let mut game = session(6, 7, 4, 2);
    game.step("5");

    assert!(matches!(game.step("u"), Step::Continue(Some(Notice::Undone(_)))));
    assert_eq!(game.board(), &Board::new(6, 7).unwrap());
    assert_eq!(game.turn(), 0);

    assert_eq!(game.step("u"), Step::Continue(Some(Notice::NothingToUndo)));
    assert_eq!(game.board(), &Board::new(6, 7).unwrap());
    assert_eq!(game.turn(), 0);
    assert_eq!(game.move_count(), 0);
}

#[test]
fn test_full_column_rejected_without_consuming_turn() {
    let mut game = session(6, 7, 4, 3);
    for _ in 0..6 {
        assert_eq!(game.step("2"), Step::Continue(None));
    }
    let board = game.render_board();
    let turn = game.turn();

    assert_eq!(
        game.step("2"),
        Step::Continue(Some(Notice::Rejected(MoveError::ColumnFull(2))))
    );
    assert_eq!(game.render_board(), board);
    assert_eq!(game.turn(), turn);
    assert_eq!(game.move_count(), 6);
}

#[test]
fn test_twelve_players_rotate_round_robin() {
    let mut game = session(30, 30, 4, 12);
    let symbols: Vec<char> = "ABCDEFGHIJKL".chars().collect();
    assert_eq!(game.symbols(), symbols.as_slice());

    for k in 0..24 {
        assert_eq!(game.current_symbol(), symbols[k % 12]);
        let col = k % 30 + 1;
        assert_eq!(game.step(&col.to_string()), Step::Continue(None));
    }
    assert_eq!(game.turn(), 0);
}

#[test]
fn test_render_board_after_moves() {
    let mut game = session(5, 5, 4, 2);
    game.step("1");
    game.step("1");
    game.step("3");

    let expected = [
        "     1  2  3  4  5",
        "  1  .  .  .  .  .",
        "  2  .  .  .  .  .",
        "  3  .  .  .  .  .",
        "  4  O  .  .  .  .",
        "  5  X  .  X  .  .",
    ]
    .join("\n")
        + "\n";
    assert_eq!(game.render_board(), expected);
}
