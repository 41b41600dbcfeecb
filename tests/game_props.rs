use connect_four::game::{
    evaluate, find_line, Board, GameController, GameState, GameStatus, Input, Player, Renderer,
    Snapshot, COLS, ROWS,
};
use connect_four::error::MoveError;
use proptest::prelude::*;

/// Counts notifications and remembers the latest snapshot.
#[derive(Default)]
struct Watcher {
    renders: usize,
    last: Option<Snapshot>,
}

impl Renderer for Watcher {
    fn render(&mut self, snapshot: &Snapshot) {
        self.renders += 1;
        self.last = Some(*snapshot);
    }
}

/// Columns including a few out-of-range values so rejections get exercised.
fn moves() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..10, 0..80)
}

/// Who owns each cell of a full board with no four in a row: column pairs
/// alternate, shifting by one every row. `swap` exchanges the players.
fn drawn_owner(col: usize, row: usize, swap: bool) -> Player {
    if ((col / 2 + row) % 2 == 0) != swap {
        Player::A
    } else {
        Player::B
    }
}

/// A full move order that ends on the drawn pattern. `seeds` picks the
/// first column tried at each depth; dead ends backtrack.
fn drawn_game(seeds: &[usize], swap: bool) -> Vec<usize> {
    fn extend(
        heights: &mut [usize; COLS],
        played: &mut Vec<usize>,
        seeds: &[usize],
        swap: bool,
    ) -> bool {
        let depth = played.len();
        if depth == ROWS * COLS {
            return true;
        }
        let player = if depth % 2 == 0 { Player::A } else { Player::B };
        for offset in 0..COLS {
            let col = (seeds[depth] + offset) % COLS;
            let row = heights[col];
            if row < ROWS && drawn_owner(col, row, swap) == player {
                heights[col] += 1;
                played.push(col);
                if extend(heights, played, seeds, swap) {
                    return true;
                }
                heights[col] -= 1;
                played.pop();
            }
        }
        false
    }

    let mut heights = [0; COLS];
    let mut played = Vec::with_capacity(ROWS * COLS);
    extend(&mut heights, &mut played, seeds, swap);
    played
}

fn drawn_games() -> impl Strategy<Value = Vec<usize>> {
    (prop::collection::vec(any::<usize>(), ROWS * COLS), any::<bool>())
        .prop_map(|(seeds, swap)| drawn_game(&seeds, swap))
}

fn column_heights(board: &Board) -> [usize; COLS] {
    std::array::from_fn(|col| board.column_height(col))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// No column ever holds more tokens than there are rows
    #[test]
    fn columns_never_overflow(columns in moves()) {
        let mut state = GameState::initial();
        for col in columns {
            let _ = state.apply_move_mut(col);
            for height in column_heights(state.board()) {
                prop_assert!(height <= ROWS);
            }
        }
    }

    /// A rejected move leaves board, turn and status exactly as they were
    #[test]
    fn rejected_moves_change_nothing(columns in moves()) {
        let mut state = GameState::initial();
        for col in columns {
            let before = state;
            match state.apply_move_mut(col) {
                Ok(row) => {
                    prop_assert_eq!(state.board().column_height(col), row + 1);
                    prop_assert_eq!(state.turn(), before.turn().other());
                }
                Err(err) => {
                    prop_assert_eq!(state, before);
                    match err {
                        MoveError::InvalidColumn(c) => prop_assert!(c >= COLS),
                        MoveError::ColumnFull(c) => prop_assert!(before.board().is_column_full(c)),
                        MoveError::GameAlreadyOver => prop_assert!(before.is_terminal()),
                    }
                }
            }
        }
    }

    /// Status always matches a fresh evaluation, and tie means full board with no line
    #[test]
    fn status_matches_evaluation(columns in moves()) {
        let mut state = GameState::initial();
        for col in columns {
            let _ = state.apply_move_mut(col);
            let board = state.board();
            prop_assert_eq!(state.status(), evaluate(board));

            let is_tie = board.empty_cells() == 0 && find_line(board).is_none();
            prop_assert_eq!(state.status() == GameStatus::Tie, is_tie);
        }
    }

    /// Turn alternates with the number of tokens on the board
    #[test]
    fn turn_follows_token_parity(columns in moves()) {
        let mut state = GameState::initial();
        for col in columns {
            let _ = state.apply_move_mut(col);
            let expected = if state.board().token_count() % 2 == 0 { Player::A } else { Player::B };
            prop_assert_eq!(state.turn(), expected);
        }
    }

    /// Once the game ends, nothing but a new game changes it
    #[test]
    fn terminal_state_is_frozen(columns in moves(), extra in moves()) {
        let mut controller = GameController::new(Watcher::default());
        for column in columns {
            controller.dispatch(Input::DropToken { column });
        }
        if controller.state().is_terminal() {
            let frozen = *controller.state();
            for column in extra {
                controller.dispatch(Input::DropToken { column });
                prop_assert_eq!(*controller.state(), frozen);
            }
            controller.dispatch(Input::NewGame);
            prop_assert_eq!(*controller.state(), GameState::initial());
        }
    }

    /// A drawn game stays in progress until the last token, then ties and
    /// stays tied until a new game
    #[test]
    fn drawn_game_ties_on_last_move(columns in drawn_games(), extra in moves()) {
        prop_assert_eq!(columns.len(), ROWS * COLS);
        let mut controller = GameController::new(Watcher::default());
        let (&last, rest) = columns.split_last().unwrap();
        for &column in rest {
            controller.dispatch(Input::DropToken { column });
            prop_assert_eq!(controller.state().status(), GameStatus::InProgress);
        }

        controller.dispatch(Input::DropToken { column: last });
        let tied = controller.renderer().last.unwrap();
        prop_assert_eq!(tied.status, GameStatus::Tie);
        prop_assert_eq!(tied.winning_line, None);
        prop_assert_eq!(tied.rejected, None);
        prop_assert!(controller.state().legal_actions().is_empty());

        for column in extra {
            controller.dispatch(Input::DropToken { column });
            prop_assert_eq!(controller.renderer().last.unwrap(), tied);
        }
        controller.dispatch(Input::NewGame);
        prop_assert_eq!(*controller.state(), GameState::initial());
    }

    /// The renderer hears about every input and always sees the controller's state
    #[test]
    fn renderer_sees_every_input(columns in moves()) {
        let mut controller = GameController::new(Watcher::default());
        for (i, &column) in columns.iter().enumerate() {
            controller.dispatch(Input::DropToken { column });
            prop_assert_eq!(controller.renderer().renders, i + 2);

            let last = controller.renderer().last.unwrap();
            prop_assert_eq!(last.board, *controller.state().board());
            prop_assert_eq!(last.status, controller.state().status());
            prop_assert_eq!(last.winning_line.is_some(), controller.state().status().winner().is_some());
        }
    }

    /// Immutable and in-place moves agree
    #[test]
    fn apply_move_matches_apply_move_mut(columns in moves()) {
        let mut in_place = GameState::initial();
        let mut immutable = GameState::initial();
        for col in columns {
            let a = in_place.apply_move_mut(col).map(|_| ());
            let b = immutable.apply_move(col).map(|next| { immutable = next; });
            prop_assert_eq!(a, b);
            prop_assert_eq!(in_place, immutable);
        }
    }
}

#[test]
fn vertical_example_from_play() {
    let mut state = GameState::initial();
    for col in [0, 1, 0, 1, 0, 1, 0] {
        state.apply_move_mut(col).unwrap();
    }
    assert_eq!(state.status(), GameStatus::Won(Player::A));
}

#[test]
fn horizontal_example_from_play() {
    // B takes columns 3-6 on the bottom row while A stacks elsewhere
    let mut state = GameState::initial();
    for col in [0, 3, 0, 4, 1, 5, 1, 6] {
        state.apply_move_mut(col).unwrap();
    }
    assert_eq!(state.status(), GameStatus::Won(Player::B));
    let line = find_line(state.board()).unwrap();
    assert_eq!(line.cells, [(3, 0), (4, 0), (5, 0), (6, 0)]);
}
