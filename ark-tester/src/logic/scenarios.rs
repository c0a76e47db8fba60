use anyhow::{Result, ensure};
use ark_game::{AnswerFeedback, GameState, StatsPayload, TimerPhase};

use super::answers::AnswerKey;
use super::harness::{Harness, SolveRecord};
use super::player::SimulatedPlayer;

pub struct ScenarioCtx<'a> {
    pub seed: u64,
    pub answers: &'a AnswerKey,
    pub verbose: bool,
}

pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    run: fn(&ScenarioCtx<'_>) -> Result<()>,
}

impl Scenario {
    /// # Errors
    ///
    /// Returns the first expectation the run violated.
    pub fn run(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        (self.run)(ctx)
    }
}

pub static SCENARIOS: [Scenario; 5] = [
    Scenario {
        key: "smoke",
        description: "Fresh profile, solve one alien",
        run: smoke,
    },
    Scenario {
        key: "full-playthrough",
        description: "Solve all four aliens and report stats once",
        run: full_playthrough,
    },
    Scenario {
        key: "reload-midgame",
        description: "Reload between and during puzzles without losing progress",
        run: reload_midgame,
    },
    Scenario {
        key: "reset-replay",
        description: "Finish, reset and replay without a second report",
        run: reset_replay,
    },
    Scenario {
        key: "reference-sheet",
        description: "Reference sheet openings accumulate across visits",
        run: reference_sheet,
    },
];

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description))
}

pub fn find_scenario(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.key == name)
}

fn smoke(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let harness = Harness::new(ctx.answers);
    let fresh = harness.saved_state()?;
    ensure!(fresh == GameState::default(), "fresh profile is not the default record");

    let mut player = SimulatedPlayer::new(ctx.seed);
    let puzzle = player.visit_order()[0];
    let record = harness.solve(&mut player, puzzle)?;
    log_record(ctx, &record);

    let state = harness.saved_state()?;
    ensure!(state.game_started, "game not marked as started");
    ensure!(state.completed_count() == 1, "expected exactly one solved puzzle");
    ensure!(!state.all_completed, "one puzzle must not complete the game");
    ensure!(harness.sink().play_count_calls() == 1, "play count not sent once");
    ensure!(harness.sink().stats_reports().is_empty(), "stats sent early");
    Ok(())
}

fn full_playthrough(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let harness = Harness::new(ctx.answers);
    let mut player = SimulatedPlayer::new(ctx.seed);
    let records = play_all(ctx, &harness, &mut player)?;

    let state = harness.saved_state()?;
    ensure!(state.all_completed, "all puzzles solved but game not complete");
    ensure!(harness.sink().play_count_calls() == 1, "play count not sent once");
    let reports = harness.sink().stats_reports();
    ensure!(reports.len() == 1, "expected one stats report, got {}", reports.len());
    check_payload(&reports[0], &records)?;
    ensure!(
        reports[0] == StatsPayload::from_state(&state),
        "reported stats differ from the saved record"
    );
    Ok(())
}

fn reload_midgame(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut harness = Harness::new(ctx.answers);
    let mut player = SimulatedPlayer::new(ctx.seed);
    let order = player.visit_order();
    let mut records = Vec::new();

    for &puzzle in &order[..2] {
        records.push(harness.solve(&mut player, puzzle)?);
        harness.reload();
    }

    let solved = order[0];
    let controller = harness.mount(solved);
    ensure!(controller.is_solved(), "{solved} lost its completion on reload");
    ensure!(
        controller.timer_phase() == TimerPhase::Stopped,
        "{solved} timer restarted after reload"
    );
    drop(controller);

    let half_done = order[2];
    let partial = player.partial(ctx.answers.primary(half_done));
    {
        let mut controller = harness.mount(half_done);
        ensure!(
            controller.on_answer_input(&partial) == AnswerFeedback::Incorrect,
            "partial answer accepted for {half_done}"
        );
        harness.ticker().advance(7);
        controller.teardown();
    }
    harness.reload();
    let draft = harness.mount(half_done).draft();
    ensure!(draft == partial, "draft {draft:?} not restored for {half_done}");
    ensure!(
        harness.state().progress(half_done).completion_time == 7,
        "{half_done} time not kept across reload"
    );

    let mut controller = harness.mount(half_done);
    let typed = player.decorate(ctx.answers.primary(half_done));
    ensure!(
        controller.on_answer_input(&typed) == AnswerFeedback::Correct,
        "{typed:?} rejected for {half_done}"
    );
    controller.teardown();
    records.push(harness.solve(&mut player, order[3])?);
    for record in &records {
        log_record(ctx, record);
    }

    ensure!(harness.state().all_completed, "game not complete after reloads");
    ensure!(
        harness.sink().play_count_calls() == 1,
        "play count re-sent after reload"
    );
    ensure!(harness.sink().stats_reports().len() == 1, "stats not sent exactly once");
    Ok(())
}

fn reset_replay(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let harness = Harness::new(ctx.answers);
    let mut player = SimulatedPlayer::new(ctx.seed);
    play_all(ctx, &harness, &mut player)?;

    harness.session().reset();
    let state = harness.saved_state()?;
    ensure!(state == GameState::replay(), "reset left progress behind");
    ensure!(!state.first_playthrough, "reset profile still marked as first play");

    play_all(ctx, &harness, &mut player)?;
    ensure!(harness.state().all_completed, "replay did not complete");
    ensure!(harness.sink().play_count_calls() == 1, "replay counted as a new play");
    ensure!(harness.sink().stats_reports().len() == 1, "replay reported stats");
    Ok(())
}

fn reference_sheet(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let harness = Harness::new(ctx.answers);
    let mut player = SimulatedPlayer::new(ctx.seed);
    let puzzle = player.visit_order()[0];

    let mut opened = 0;
    for _ in 0..3 {
        let controller = harness.mount(puzzle);
        for _ in 0..player.reference_peeks() {
            opened = controller.open_reference_sheet();
        }
    }
    ensure!(
        harness.saved_state()?.progress(puzzle).opened_ref_sheet_count == opened,
        "reference sheet count not saved"
    );
    ensure!(
        !harness.state().game_started,
        "opening the reference sheet started the game"
    );

    let record = harness.solve(&mut player, puzzle)?;
    let total = harness.state().progress(puzzle).opened_ref_sheet_count;
    ensure!(
        total == opened + record.peeks,
        "expected {} openings, found {total}",
        opened + record.peeks
    );
    Ok(())
}

fn play_all(
    ctx: &ScenarioCtx<'_>,
    harness: &Harness<'_>,
    player: &mut SimulatedPlayer,
) -> Result<Vec<SolveRecord>> {
    let mut records = Vec::new();
    for puzzle in player.visit_order() {
        let record = harness.solve(player, puzzle)?;
        log_record(ctx, &record);
        records.push(record);
    }
    Ok(records)
}

fn check_payload(payload: &StatsPayload, records: &[SolveRecord]) -> Result<()> {
    for record in records {
        let (time, count) = payload.for_puzzle(record.puzzle);
        ensure!(
            time == record.seconds,
            "{} reported {time}s, played {}s",
            record.puzzle,
            record.seconds
        );
        ensure!(
            count == record.peeks,
            "{} reported {count} openings, made {}",
            record.puzzle,
            record.peeks
        );
    }
    Ok(())
}

fn log_record(ctx: &ScenarioCtx<'_>, record: &SolveRecord) {
    if ctx.verbose {
        println!(
            "     ↳ {} solved in {}s after {} wrong attempts, {} peeks",
            record.puzzle, record.seconds, record.wrong_attempts, record.peeks
        );
    }
    log::debug!("{record:?}");
}
