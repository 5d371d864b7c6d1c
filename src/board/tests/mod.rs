//! Test suite for the board module.

mod domain_tests;

use crate::board::domain::{Board, Status, Task, TaskTitle};
use chrono::NaiveDate;

/// Builds a task destined for the given column; panics only on invalid
/// test input.
fn task(title: &str, status: Status) -> Task {
    Task::new(
        TaskTitle::new(title).expect("valid test title"),
        "",
        None,
        status,
    )
}

/// Builds a calendar date from test literals.
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Builds a board with one task per column, titled after its column.
fn seeded_board() -> Board {
    let mut board = Board::new();
    board.push(Status::Todo, task("todo task", Status::Todo));
    board.push(Status::Doing, task("doing task", Status::Doing));
    board.push(Status::Done, task("done task", Status::Done));
    board
}
