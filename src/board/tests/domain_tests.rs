//! Domain-focused tests for board transitions and invariants.

use super::{date, seeded_board, task};
use crate::board::domain::{Board, BoardDomainError, Status, Task, TaskTitle};
use rstest::rstest;

#[rstest]
fn title_rejects_empty_and_whitespace() {
    assert_eq!(TaskTitle::new(""), Err(BoardDomainError::EmptyTitle));
    assert_eq!(TaskTitle::new("   "), Err(BoardDomainError::EmptyTitle));
}

#[rstest]
fn title_trims_surrounding_whitespace() {
    let title = TaskTitle::new("  buy milk  ").expect("valid title");
    assert_eq!(title.as_str(), "buy milk");
}

#[rstest]
fn new_task_starts_uncompleted_with_unique_id() {
    let first = task("one", Status::Todo);
    let second = task("one", Status::Todo);
    assert!(!first.completed());
    assert_ne!(first.id(), second.id());
}

#[rstest]
fn push_restores_status_to_containing_list() {
    let mut board = Board::new();
    board.push(Status::Doing, task("mislabelled", Status::Todo));
    let stored = board.task_at(Status::Doing, 0).expect("task present");
    assert_eq!(stored.status(), Status::Doing);
}

#[rstest]
fn remove_rejects_out_of_range_index() {
    let mut board = seeded_board();
    let result = board.remove(Status::Todo, 5);
    assert_eq!(
        result,
        Err(BoardDomainError::PositionOutOfRange {
            status: Status::Todo,
            index: 5,
            len: 1,
        })
    );
}

#[rstest]
fn remove_then_re_add_moves_task_to_end() {
    let mut board = Board::new();
    board.push(Status::Todo, task("first", Status::Todo));
    board.push(Status::Todo, task("second", Status::Todo));
    board.push(Status::Todo, task("third", Status::Todo));

    let removed = board.remove(Status::Todo, 0).expect("valid position");
    board.push(Status::Todo, removed.clone());

    let titles: Vec<&str> = board
        .list(Status::Todo)
        .iter()
        .map(|t| t.title().as_str())
        .collect();
    assert_eq!(titles, vec!["second", "third", "first"]);
    assert_eq!(
        board.task_at(Status::Todo, 2),
        Some(&removed),
        "re-added task keeps identical fields"
    );
}

#[rstest]
fn move_between_preserves_fields_and_counts() {
    let mut board = Board::new();
    let original = Task::new(
        TaskTitle::new("write report").expect("valid title"),
        "quarterly numbers",
        Some(date(2024, 6, 10)),
        Status::Todo,
    );
    board.push(Status::Todo, original.clone());
    board.push(Status::Doing, task("other", Status::Doing));

    let total_before = board.total_len();
    board
        .move_between(Status::Todo, Status::Doing, 0)
        .expect("valid position");

    assert!(board.list(Status::Todo).is_empty());
    assert_eq!(board.list(Status::Doing).len(), 2);
    assert_eq!(board.total_len(), total_before);

    let moved = board.task_at(Status::Doing, 1).expect("task present");
    assert_eq!(moved.id(), original.id());
    assert_eq!(moved.title(), original.title());
    assert_eq!(moved.description(), original.description());
    assert_eq!(moved.due_date(), original.due_date());
    assert_eq!(moved.completed(), original.completed());
    assert_eq!(moved.status(), Status::Doing);
}

#[rstest]
fn complete_sets_flag_and_appends_to_done() {
    let mut board = seeded_board();
    let total_before = board.total_len();

    board
        .complete(Status::Doing, 0)
        .expect("valid position");

    assert!(board.list(Status::Doing).is_empty());
    assert_eq!(board.list(Status::Done).len(), 2);
    assert_eq!(board.total_len(), total_before);

    let completed = board.task_at(Status::Done, 1).expect("task present");
    assert!(completed.completed());
    assert_eq!(completed.status(), Status::Done);
    assert_eq!(completed.title().as_str(), "doing task");
}

#[rstest]
fn completed_flag_survives_move_back_to_todo() {
    let mut board = Board::new();
    board.push(Status::Doing, task("almost done", Status::Doing));
    board.complete(Status::Doing, 0).expect("valid position");

    board
        .move_between(Status::Done, Status::Todo, 0)
        .expect("valid position");

    let moved = board.task_at(Status::Todo, 0).expect("task present");
    assert!(moved.completed(), "nothing clears the completion flag");
    assert_eq!(moved.status(), Status::Todo);
}

#[rstest]
fn from_lists_normalises_every_status() {
    let board = Board::from_lists(
        vec![task("a", Status::Done)],
        vec![task("b", Status::Todo)],
        vec![task("c", Status::Doing)],
    );
    assert_eq!(
        board.task_at(Status::Todo, 0).map(Task::status),
        Some(Status::Todo)
    );
    assert_eq!(
        board.task_at(Status::Doing, 0).map(Task::status),
        Some(Status::Doing)
    );
    assert_eq!(
        board.task_at(Status::Done, 0).map(Task::status),
        Some(Status::Done)
    );
}

#[rstest]
#[case("todo", Status::Todo)]
#[case("doing", Status::Doing)]
#[case("done", Status::Done)]
#[case(" DONE ", Status::Done)]
fn status_parses_known_values(#[case] raw: &str, #[case] expected: Status) {
    assert_eq!(Status::try_from(raw), Ok(expected));
}

#[rstest]
fn status_rejects_unknown_values() {
    let result = Status::try_from("archived");
    assert!(result.is_err());
}
