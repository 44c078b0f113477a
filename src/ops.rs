use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, Row};

use crate::model::Task;

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        completed: row.get::<_, i64>(2)? != 0,
    })
}

pub fn list_tasks(conn: &Connection) -> Result<Vec<Task>> {
    let mut stmt = conn.prepare_cached("SELECT id, title, completed FROM tasks ORDER BY id")?;
    let rows = stmt.query_map([], task_from_row)?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(Into::into)
}

pub fn create_task(conn: &Connection, title: &str) -> Result<Task> {
    conn.execute("INSERT INTO tasks (title) VALUES (?1)", [title])?;
    Ok(Task {
        id: conn.last_insert_rowid(),
        title: title.to_string(),
        completed: false,
    })
}

/// Look up a task by id. A missing row is `Ok(None)`, not an error.
pub fn get_task(conn: &Connection, id: i64) -> Result<Option<Task>> {
    let task = conn
        .query_row(
            "SELECT id, title, completed FROM tasks WHERE id = ?1",
            [id],
            task_from_row,
        )
        .optional()?;
    Ok(task)
}

/// Returns `false` if no task has this id.
pub fn update_title(conn: &Connection, id: i64, title: &str) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE tasks SET title = ?1 WHERE id = ?2",
        rusqlite::params![title, id],
    )?;
    Ok(changed > 0)
}

/// Returns `false` if no task has this id.
pub fn delete_task(conn: &Connection, id: i64) -> Result<bool> {
    let changed = conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
    Ok(changed > 0)
}
