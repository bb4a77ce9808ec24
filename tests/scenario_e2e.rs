//! End-to-end tests for scenario files
//!
//! Every `.c4` file in `test_scenarios/` gets an invariant check generated by
//! `dir-test`; the named tests below check what specific fixtures contain.

use connect_four_rs::{
    core::Token,
    game::{
        GameEndReason, GameLogger, GameLoop, GameOutcome, GameState, Phase, ScriptedController,
        VerbosityLevel,
    },
    render::render_game,
    scenario::{load_scenario_into_game, ScenarioFile},
    C4Error, Result,
};
use dir_test::{dir_test, Fixture};
use std::path::PathBuf;

fn load_fixture(name: &str) -> Result<GameState> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_scenarios")
        .join(name);
    load_scenario_into_game(&ScenarioFile::load(&path)?)
}

fn silent_logger() -> GameLogger {
    let mut logger = GameLogger::with_verbosity(VerbosityLevel::Silent);
    logger.enable_capture();
    logger
}

/// Every fixture loads and satisfies the grid invariants
#[dir_test(
    dir: "$CARGO_MANIFEST_DIR/test_scenarios",
    glob: "**/*.c4",
)]
fn test_scenario_invariants(fixture: Fixture<&str>) {
    let scenario = ScenarioFile::parse(fixture.content())
        .unwrap_or_else(|e| panic!("{} failed to parse: {}", fixture.path(), e));
    let game = load_scenario_into_game(&scenario)
        .unwrap_or_else(|e| panic!("{} failed to load: {}", fixture.path(), e));

    assert_eq!(game.rows(), scenario.rows);
    assert_eq!(game.cols(), scenario.cols);
    assert!(game.board().is_gap_free());
    assert_eq!(game.phase().is_over(), game.outcome().is_some());

    match game.moves_dropped() {
        Ok(moves) => {
            assert_eq!(moves, game.board().occupied());
            let (row, col) = game.last_drop().unwrap();
            assert!(game.token_at(row, col).unwrap().is_some());
        }
        Err(_) => {
            assert_eq!(game.phase(), Phase::Ready);
            assert_eq!(game.board().occupied(), 0);
        }
    }

    // Rendering only reads the game
    let before = game.clone();
    let _ = render_game(&game);
    assert_eq!(game, before);
}

#[test]
fn test_tokens_only_scenario() -> Result<()> {
    let game = load_fixture("tokens_only.c4")?;
    assert_eq!(game.phase(), Phase::Ready);
    assert_eq!(game.player_token(0)?, Token::Red);
    assert_eq!(game.player_token(1)?, Token::Blue);
    Ok(())
}

#[test]
fn test_win_scenarios_are_over() -> Result<()> {
    for (name, last) in [
        ("vertical_win.c4", (3, 3)),
        ("horizontal_win.c4", (0, 0)),
        ("diagonal_win.c4", (2, 2)),
    ] {
        let game = load_fixture(name)?;
        assert_eq!(game.phase(), Phase::Over, "{}", name);
        assert_eq!(game.outcome(), Some(GameOutcome::Winner(0)), "{}", name);
        assert_eq!(game.last_drop()?, last, "{}", name);
    }
    Ok(())
}

#[test]
fn test_draw_scenario() -> Result<()> {
    let game = load_fixture("draw.c4")?;
    assert_eq!(game.phase(), Phase::Over);
    assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    assert_eq!(game.moves_dropped()?, 42);
    Ok(())
}

#[test]
fn test_resume_mid_game() -> Result<()> {
    let mut game = load_fixture("mid_game.c4")?;
    assert_eq!(game.phase(), Phase::Playable);
    assert_eq!(game.moves_dropped()?, 5);

    // Player 0 made the last drop, so player 1 moves next
    let mut p0 = ScriptedController::new(0, vec![]);
    let mut p1 = ScriptedController::new(1, vec![6]);
    let result = GameLoop::new(&mut game)
        .with_logger(silent_logger())
        .run_game(&mut p0, &mut p1)?;

    assert_eq!(result.end_reason, GameEndReason::Abandoned(0));
    assert_eq!(game.token_at(0, 6)?, Some(Token::Red));
    Ok(())
}

#[test]
fn test_play_on_large_scenario() -> Result<()> {
    let mut game = load_fixture("large_mid_game.c4")?;
    assert_eq!(game.moves_dropped()?, 27);

    // Player 0 owns (2, 8), so player 1 moves first. Player 0 already holds
    // (2, 0) and three more drops in column 0 complete the run.
    let mut p0 = ScriptedController::new(0, vec![0, 0, 0]);
    let mut p1 = ScriptedController::new(1, vec![8, 8, 8]);
    let result = GameLoop::new(&mut game)
        .with_logger(silent_logger())
        .run_game(&mut p0, &mut p1)?;

    assert_eq!(result.end_reason, GameEndReason::ConnectFour(0));
    assert_eq!(result.moves_dropped, 33);
    assert_eq!(game.last_drop()?, (5, 0));
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let err = ScenarioFile::load(std::path::Path::new("test_scenarios/does_not_exist.c4"))
        .unwrap_err();
    assert!(matches!(err, C4Error::IoError(_)));
}

#[test]
fn test_floating_token_is_rejected() {
    let mut text = String::from("6 7 RED BLUE\n");
    text.push_str("3 3 3 3 3 3 3\n");
    text.push_str("3 3 3 0 3 3 3\n");
    for _ in 2..6 {
        text.push_str("3 3 3 3 3 3 3\n");
    }
    text.push_str("1 3\n");

    let scenario = ScenarioFile::parse(&text).unwrap();
    assert!(matches!(
        load_scenario_into_game(&scenario),
        Err(C4Error::ParseError(_))
    ));
}
