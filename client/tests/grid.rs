mod support;

use client::grid::{GridError, Mutation, RowAction, RowKey, RowMode, StatsGrid};
use client::{ApiError, FailurePolicy, StatsApi};
use support::{stat_line, two_lines, RecordingApi, Request};
use futures::executor::block_on;
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

use common::{Counter, GameId, PlayerId, StatLineKey};

fn loaded(api: &RecordingApi, policy: FailurePolicy) -> StatsGrid {
    let mut grid = StatsGrid::new(policy);
    let lines = block_on(api.stat_lines()).unwrap();
    grid.replace_all(lines);
    api.clear();
    grid
}

/// Dispatches an action and, if it needs one, runs its request to completion.
fn run(grid: &mut StatsGrid, api: &RecordingApi, key: RowKey, action: RowAction) -> Result<(), ApiError> {
    match grid.dispatch(key, action).unwrap() {
        Some(mutation) => {
            let result = block_on(mutation.send(api));
            grid.settle(mutation, result)
        }
        None => Ok(()),
    }
}

#[test]
fn load_keys_every_row_locally() {
    let api = RecordingApi::with_stat_lines(two_lines());
    let grid = loaded(&api, FailurePolicy::Rollback);

    assert_eq!(grid.len(), 2);
    let keys = grid.row_keys();
    assert_ne!(keys[0], keys[1]);

    let lines: Vec<_> = grid.rows().iter().filter_map(|row| row.line().cloned()).collect();
    assert_eq!(lines, two_lines());
}

#[test]
fn save_is_applied_before_the_request() {
    let api = RecordingApi::with_stat_lines(two_lines());
    let mut grid = loaded(&api, FailurePolicy::Rollback);
    let key = grid.row_keys()[0];

    grid.dispatch(key, RowAction::Edit).unwrap();
    grid.set_counter(key, Counter::Points, 20).unwrap();
    let mutation = grid.dispatch(key, RowAction::Save).unwrap().unwrap();

    let row = grid.row(key).unwrap();
    assert_eq!(row.mode(), RowMode::View);
    assert_eq!(row.counter(Counter::Points), 20);
    assert!(api.requests().is_empty());

    let result = block_on(mutation.send(&api));
    assert_eq!(grid.settle(mutation, result), Ok(()));

    assert_eq!(api.requests(), vec![Request::EditStatLine(stat_line(1, 1, 20))]);
    assert_eq!(grid.row(key).unwrap().counter(Counter::Points), 20);
}

#[test]
fn delete_removes_without_waiting() {
    let api = RecordingApi::with_stat_lines(two_lines());
    let mut grid = loaded(&api, FailurePolicy::Rollback);
    let key = grid.row_keys()[1];

    let mutation = grid.dispatch(key, RowAction::Delete).unwrap().unwrap();
    assert_eq!(grid.len(), 1);
    assert!(grid.row(key).is_none());

    let result = block_on(mutation.send(&api));
    assert_eq!(grid.settle(mutation, result), Ok(()));
    assert_eq!(
        api.requests(),
        vec![Request::DeleteStatLine(StatLineKey {
            player_id: PlayerId(6),
            game_id: GameId(1),
        })]
    );
}

#[test]
fn cancel_transient_row_sends_nothing() {
    let api = RecordingApi::with_stat_lines(two_lines());
    let mut grid = loaded(&api, FailurePolicy::Rollback);

    let key = grid.add_row();
    assert_eq!(grid.len(), 3);
    assert!(grid.row(key).unwrap().is_transient());

    run(&mut grid, &api, key, RowAction::Cancel).unwrap();

    assert_eq!(grid.len(), 2);
    assert!(grid.row(key).is_none());
    assert!(api.requests().is_empty());
}

#[test]
fn cancel_persisted_row_restores_values() {
    let api = RecordingApi::with_stat_lines(two_lines());
    let mut grid = loaded(&api, FailurePolicy::Rollback);
    let key = grid.row_keys()[0];

    run(&mut grid, &api, key, RowAction::Edit).unwrap();
    grid.set_counter(key, Counter::Rebounds, 40).unwrap();
    assert_eq!(grid.row(key).unwrap().counter(Counter::Rebounds), 40);

    run(&mut grid, &api, key, RowAction::Cancel).unwrap();

    let row = grid.row(key).unwrap();
    assert_eq!(row.mode(), RowMode::View);
    assert_eq!(row.line(), Some(&stat_line(1, 1, 16)));
    assert!(api.requests().is_empty());
}

#[test]
#[traced_test]
fn failed_update_rolls_back() {
    let api = RecordingApi::with_stat_lines(two_lines());
    let mut grid = loaded(&api, FailurePolicy::Rollback);
    let key = grid.row_keys()[0];
    api.fail_with(ApiError::Transport("connection reset".to_owned()));

    grid.dispatch(key, RowAction::Edit).unwrap();
    grid.set_counter(key, Counter::Points, 20).unwrap();
    let result = run(&mut grid, &api, key, RowAction::Save);

    assert_eq!(result, Err(ApiError::Transport("connection reset".to_owned())));
    assert_eq!(grid.row(key).unwrap().line(), Some(&stat_line(1, 1, 16)));
    assert!(logs_contain("Stat line request failed"));
}

#[test]
fn failed_update_kept_when_optimistic() {
    let api = RecordingApi::with_stat_lines(two_lines());
    let mut grid = loaded(&api, FailurePolicy::KeepOptimistic);
    let key = grid.row_keys()[0];
    api.fail_with(ApiError::from_status(500, "boom".to_owned()));

    grid.dispatch(key, RowAction::Edit).unwrap();
    grid.set_counter(key, Counter::Points, 20).unwrap();
    let result = run(&mut grid, &api, key, RowAction::Save);

    assert_eq!(result, Ok(()));
    assert_eq!(grid.row(key).unwrap().counter(Counter::Points), 20);
}

#[test]
fn failed_delete_reinserts_row() {
    let api = RecordingApi::with_stat_lines(two_lines());
    let mut grid = loaded(&api, FailurePolicy::Rollback);
    let keys = grid.row_keys();
    api.fail_with(ApiError::Transport("offline".to_owned()));

    let result = run(&mut grid, &api, keys[0], RowAction::Delete);

    assert!(result.is_err());
    assert_eq!(grid.row_keys(), keys);
}

#[test]
fn failed_delete_stays_removed_when_optimistic() {
    let api = RecordingApi::with_stat_lines(two_lines());
    let mut grid = loaded(&api, FailurePolicy::KeepOptimistic);
    let keys = grid.row_keys();
    api.fail_with(ApiError::Transport("offline".to_owned()));

    assert_eq!(run(&mut grid, &api, keys[0], RowAction::Delete), Ok(()));
    assert_eq!(grid.row_keys(), vec![keys[1]]);
}

#[test]
fn transient_row_is_created() {
    let api = RecordingApi::with_stat_lines(two_lines());
    let mut grid = loaded(&api, FailurePolicy::Rollback);

    let key = grid.add_row();
    grid.select_player(key, PlayerId(3)).unwrap();
    grid.select_game(key, GameId(1)).unwrap();
    grid.set_counter(key, Counter::Points, 10).unwrap();

    let mutation = grid.dispatch(key, RowAction::Save).unwrap().unwrap();
    assert!(matches!(mutation, Mutation::Create { .. }));
    assert!(!grid.row(key).unwrap().is_transient());

    let result = block_on(mutation.send(&api));
    grid.settle(mutation, result).unwrap();

    match api.requests().as_slice() {
        [Request::AddStatLine(line)] => {
            assert_eq!(line.player_id, PlayerId(3));
            assert_eq!(line.points, 10);
        }
        other => panic!("unexpected requests {:?}", other),
    }
}

#[test]
fn duplicate_transient_row_rejected() {
    let api = RecordingApi::with_stat_lines(two_lines());
    let mut grid = loaded(&api, FailurePolicy::Rollback);

    let key = grid.add_row();
    grid.select_player(key, PlayerId(6)).unwrap();
    grid.select_game(key, GameId(1)).unwrap();

    assert!(grid.dispatch(key, RowAction::Save).is_err());
    assert!(grid.row(key).unwrap().is_transient());
    assert_eq!(grid.row(key).unwrap().mode(), RowMode::Edit);
    assert!(api.requests().is_empty());
}

#[test]
fn failed_create_keeps_input() {
    let api = RecordingApi::with_stat_lines(two_lines());
    let mut grid = loaded(&api, FailurePolicy::Rollback);
    api.fail_with(ApiError::from_status(409, "exists".to_owned()));

    let key = grid.add_row();
    grid.select_player(key, PlayerId(3)).unwrap();
    grid.select_game(key, GameId(1)).unwrap();
    grid.set_counter(key, Counter::Assists, 7).unwrap();

    let result = run(&mut grid, &api, key, RowAction::Save);
    assert!(matches!(result, Err(ApiError::Conflict { status: 409, .. })));

    let row = grid.row(key).unwrap();
    assert!(row.is_transient());
    assert_eq!(row.mode(), RowMode::Edit);
    assert_eq!(row.counter(Counter::Assists), 7);
    assert_eq!(row.player_id(), Some(PlayerId(3)));
}

#[test]
#[traced_test]
fn row_waits_for_its_create_before_updating() {
    let api = RecordingApi::with_stat_lines(two_lines());
    let mut grid = loaded(&api, FailurePolicy::Rollback);

    let key = grid.add_row();
    grid.select_player(key, PlayerId(3)).unwrap();
    grid.select_game(key, GameId(1)).unwrap();
    grid.set_counter(key, Counter::Points, 4).unwrap();
    let create = grid.dispatch(key, RowAction::Save).unwrap().unwrap();

    // The POST is still in flight: no second edit, so no PUT either.
    assert_eq!(grid.dispatch(key, RowAction::Edit), Err(GridError::Creating(key)));
    assert_eq!(grid.set_counter(key, Counter::Points, 9), Err(GridError::NotEditing(key)));

    api.fail_with(ApiError::from_status(409, "exists".to_owned()));
    let result = block_on(create.send(&api));
    assert!(matches!(grid.settle(create, result), Err(ApiError::Conflict { .. })));

    let row = grid.row(key).unwrap();
    assert!(row.is_transient());
    assert!(!row.is_creating());
    assert_eq!(row.line(), None);
    assert_eq!(row.mode(), RowMode::Edit);
    assert_eq!(row.counter(Counter::Points), 4);
    assert!(matches!(api.requests().as_slice(), [Request::AddStatLine(_)]));
    assert!(logs_contain("Stat line request failed"));
}

#[test]
fn reload_discards_pending_edits() {
    let api = RecordingApi::with_stat_lines(two_lines());
    let mut grid = loaded(&api, FailurePolicy::Rollback);
    let key = grid.row_keys()[0];

    grid.dispatch(key, RowAction::Edit).unwrap();
    grid.set_counter(key, Counter::Points, 44).unwrap();

    let lines = block_on(api.stat_lines()).unwrap();
    grid.replace_all(lines);

    assert!(grid.row(key).is_none());
    assert!(grid.rows().iter().all(|row| row.mode() == RowMode::View));
    assert_eq!(grid.rows()[0].counter(Counter::Points), 16);
}

#[test]
fn response_after_reload_is_ignored() {
    let api = RecordingApi::with_stat_lines(two_lines());
    let mut grid = loaded(&api, FailurePolicy::Rollback);
    let key = grid.row_keys()[0];

    let mutation = grid.dispatch(key, RowAction::Delete).unwrap().unwrap();
    grid.replace_all(two_lines());

    let result = grid.settle(mutation, Err(ApiError::Transport("offline".to_owned())));

    assert!(result.is_err());
    assert_eq!(grid.len(), 2);
    assert_eq!(grid.rows()[0].line(), Some(&stat_line(1, 1, 16)));
}
