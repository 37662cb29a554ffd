use flipbook::stmt::{BoundStatement, Params};
use flipbook::{ExecContext, PageHook};

use rusqlite::Connection;

fn connection_with_users(count: i64) -> Connection {
    let connection = Connection::open_in_memory().unwrap();
    connection
        .execute_batch("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
        .unwrap();

    for i in 1..=count {
        connection
            .execute(
                "INSERT INTO users (id, name) VALUES (?1, ?2)",
                rusqlite::params![i, format!("user-{i}")],
            )
            .unwrap();
    }

    connection
}

fn run(connection: &Connection, cx: &ExecContext) -> Vec<i64> {
    let mut stmt = connection.prepare(cx.statement().sql()).unwrap();
    stmt.query_map([], |row| row.get::<_, i64>(0))
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap()
}

#[test]
fn returns_requested_window() {
    let connection = connection_with_users(10);
    let hook = PageHook::from_database_type("sqlite").unwrap();

    let mut params = Params::new();
    params.insert("page", 3i64).insert("size", 3i64);

    let mut cx = ExecContext::new(BoundStatement::new("SELECT id FROM users ORDER BY id"));
    hook.prepare(&params, &mut cx).unwrap();

    assert_eq!(run(&connection, &cx), [7, 8, 9]);
}

#[test]
fn last_partial_window() {
    let connection = connection_with_users(10);
    let hook = PageHook::from_database_type("sqlite").unwrap();

    let mut params = Params::new();
    params.insert("page", 4i64).insert("size", 3i64);

    let mut cx = ExecContext::new(BoundStatement::new("SELECT id FROM users ORDER BY id"));
    hook.prepare(&params, &mut cx).unwrap();

    assert_eq!(run(&connection, &cx), [10]);
}

#[test]
fn window_past_the_end_is_empty() {
    let connection = connection_with_users(10);
    let hook = PageHook::from_database_type("sqlite").unwrap();

    let mut params = Params::new();
    params.insert("page", 5i64).insert("size", 3i64);

    let mut cx = ExecContext::new(BoundStatement::new("SELECT id FROM users ORDER BY id"));
    hook.prepare(&params, &mut cx).unwrap();

    assert!(run(&connection, &cx).is_empty());
}

#[test]
fn pass_through_returns_all_rows() {
    let connection = connection_with_users(10);
    let hook = PageHook::from_database_type("sqlite").unwrap();

    let mut cx = ExecContext::new(BoundStatement::new("SELECT id FROM users ORDER BY id"));
    hook.prepare(&Params::new(), &mut cx).unwrap();

    assert_eq!(run(&connection, &cx).len(), 10);
}
