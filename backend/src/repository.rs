use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, OptionalExtension, Row, Transaction};

use crate::db;
use crate::error::ApiError;
use crate::models::{Todo, TodoUpdate};

pub fn list_todos(db_path: &Path) -> Result<Vec<Todo>, ApiError> {
    db::with_connection(db_path, |conn| {
        let mut stmt = conn.prepare(
            "SELECT id, title, description, completed, created_at, updated_at
             FROM todos ORDER BY id DESC",
        )?;
        let todos = stmt
            .query_map([], row_to_todo)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    })
}

pub fn get_todo(db_path: &Path, id: i64) -> Result<Option<Todo>, ApiError> {
    db::with_connection(db_path, |conn| Ok(fetch_todo(conn, id)?))
}

/// Inserts a new todo. Both timestamps come from a single clock reading, so a
/// freshly created todo always has `created_at == updated_at`.
pub fn create_todo(
    db_path: &Path,
    title: &str,
    description: &str,
    completed: bool,
) -> Result<Todo, ApiError> {
    db::with_connection(db_path, |conn| {
        let now = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO todos (title, description, completed, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![title, description, completed, now, now],
        )?;
        let id = conn.last_insert_rowid();

        let todo = fetch_todo(conn, id)?.ok_or_else(|| {
            ApiError::Internal(format!("todo {id} missing right after insert"))
        })?;
        tracing::info!(id = todo.id, "todo created");
        Ok(todo)
    })
}

/// Applies the supplied fields to an existing todo and stamps a fresh
/// `updated_at`. An empty update degrades to a plain read; a missing id
/// yields `None`.
pub fn update_todo(db_path: &Path, id: i64, fields: &TodoUpdate) -> Result<Option<Todo>, ApiError> {
    if fields.is_empty() {
        return get_todo(db_path, id);
    }

    db::with_connection(db_path, |conn| {
        let mut set_clauses: Vec<String> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(title) = &fields.title {
            values.push(Value::Text(title.clone()));
            set_clauses.push(format!("title = ?{}", values.len()));
        }
        if let Some(description) = &fields.description {
            values.push(Value::Text(description.clone()));
            set_clauses.push(format!("description = ?{}", values.len()));
        }
        if let Some(completed) = fields.completed {
            values.push(Value::Integer(i64::from(completed)));
            set_clauses.push(format!("completed = ?{}", values.len()));
        }

        values.push(Value::Text(Utc::now().to_rfc3339()));
        set_clauses.push(format!("updated_at = ?{}", values.len()));

        values.push(Value::Integer(id));
        let sql = format!(
            "UPDATE todos SET {} WHERE id = ?{}",
            set_clauses.join(", "),
            values.len()
        );

        let affected = conn.execute(&sql, params_from_iter(values))?;
        if affected == 0 {
            return Ok(None);
        }

        tracing::info!(id, "todo updated");
        Ok(fetch_todo(conn, id)?)
    })
}

pub fn delete_todo(db_path: &Path, id: i64) -> Result<bool, ApiError> {
    db::with_connection(db_path, |conn| {
        let affected = conn.execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        if affected > 0 {
            tracing::info!(id, "todo deleted");
        }
        Ok(affected > 0)
    })
}

fn fetch_todo(conn: &Transaction<'_>, id: i64) -> rusqlite::Result<Option<Todo>> {
    conn.query_row(
        "SELECT id, title, description, completed, created_at, updated_at
         FROM todos WHERE id = ?1",
        params![id],
        row_to_todo,
    )
    .optional()
}

fn row_to_todo(row: &Row<'_>) -> rusqlite::Result<Todo> {
    let completed: i64 = row.get("completed")?;
    Ok(Todo {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row
            .get::<_, Option<String>>("description")?
            .unwrap_or_default(),
        completed: completed != 0,
        created_at: parse_timestamp(4, row.get("created_at")?)?,
        updated_at: parse_timestamp(5, row.get("updated_at")?)?,
    })
}

fn parse_timestamp(idx: usize, raw: String) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}
