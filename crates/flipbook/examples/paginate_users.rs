//! Paginated list query against an in-memory SQLite database.
//!
//! The caller requests a page by putting `page` and `size` into the call's
//! parameter bag; the hook rewrites the statement before it reaches the
//! driver, so the call site never writes dialect-specific SQL.

use flipbook::stmt::{BoundStatement, Params};
use flipbook::{ExecContext, PageHook, StatementContext};

use rusqlite::Connection;

fn main() -> anyhow::Result<()> {
    let connection = Connection::open_in_memory()?;
    connection.execute_batch(
        "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, age INTEGER NOT NULL);
         INSERT INTO users (name, age) VALUES
             ('zs', 18), ('ls', 19), ('ww', 20), ('zl', 21), ('sq', 22);",
    )?;

    let hook = PageHook::from_database_type("sqlite")?;

    let mut params = Params::new();
    params.insert("page", 1i64).insert("size", 2i64);

    let mut cx = ExecContext::new(BoundStatement::new(
        "SELECT id, name, age FROM users ORDER BY id",
    ));
    hook.prepare(&params, &mut cx)?;

    println!("executing: {}", cx.sql());

    let mut stmt = connection.prepare(cx.sql())?;
    let users = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, i64>(2)?,
        ))
    })?;

    for user in users {
        let (id, name, age) = user?;
        println!("user id={id} name={name} age={age}");
    }

    Ok(())
}
