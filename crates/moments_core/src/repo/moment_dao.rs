//! Moment persistence port and SQLite implementation.
//!
//! # Responsibility
//! - Provide raw CRUD over the `moments` table, keyed by id, with secondary
//!   lookup by title and by category.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `insert` replaces an existing row with the same id (last write wins).
//! - Title lookups return the first stored match only.
//! - Persisted category integers outside 0..=5 read back as `Other`.

use crate::db::DbError;
use crate::model::category_tag::CategoryTag;
use crate::model::moment::{Moment, MomentId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

const MOMENT_SELECT_SQL: &str = "SELECT id, title, category_tag FROM moments";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error raised by the DAO layer.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(MomentId),
    InvalidData(String),
    /// A thread panicked while holding the connection.
    LockPoisoned,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "moment not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted moment data: {message}"),
            Self::LockPoisoned => write!(f, "moment connection lock poisoned"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Data access contract for the `moments` table.
pub trait MomentDao: Send + Sync {
    /// Inserts a moment, replacing any row with the same id.
    fn insert(&self, moment: &Moment) -> RepoResult<()>;
    /// Overwrites title and category of the row with `moment.id`.
    fn update(&self, moment: &Moment) -> RepoResult<()>;
    /// Returns every row in storage order.
    fn get_all(&self) -> RepoResult<Vec<Moment>>;
    /// Returns the first row whose title equals `title`.
    fn get_by_title(&self, title: &str) -> RepoResult<Option<Moment>>;
    /// Returns the id of the first row whose title equals `title`.
    fn get_id_by_title(&self, title: &str) -> RepoResult<Option<MomentId>>;
    /// Returns all rows tagged with `tag`.
    fn get_by_category(&self, tag: CategoryTag) -> RepoResult<Vec<Moment>>;
    /// Deletes the row matching every field of `moment`.
    fn delete(&self, moment: &Moment) -> RepoResult<()>;
}

/// SQLite-backed moment DAO.
///
/// Owns its connection behind a mutex so a single instance can be shared
/// with blocking worker threads.
pub struct SqliteMomentDao {
    conn: Mutex<Connection>,
}

impl SqliteMomentDao {
    /// Wraps a migrated connection (see `db::open_db`).
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn conn(&self) -> RepoResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| RepoError::LockPoisoned)
    }
}

impl MomentDao for SqliteMomentDao {
    fn insert(&self, moment: &Moment) -> RepoResult<()> {
        self.conn()?.execute(
            "INSERT OR REPLACE INTO moments (id, title, category_tag) VALUES (?1, ?2, ?3);",
            params![
                moment.id.to_string(),
                moment.title.as_str(),
                moment.category_tag.type_id(),
            ],
        )?;
        Ok(())
    }

    fn update(&self, moment: &Moment) -> RepoResult<()> {
        let changed = self.conn()?.execute(
            "UPDATE moments SET title = ?1, category_tag = ?2 WHERE id = ?3;",
            params![
                moment.title.as_str(),
                moment.category_tag.type_id(),
                moment.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(moment.id));
        }
        Ok(())
    }

    fn get_all(&self) -> RepoResult<Vec<Moment>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{MOMENT_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut moments = Vec::new();
        while let Some(row) = rows.next()? {
            moments.push(parse_moment_row(row)?);
        }
        Ok(moments)
    }

    fn get_by_title(&self, title: &str) -> RepoResult<Option<Moment>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "{MOMENT_SELECT_SQL} WHERE title = ?1 ORDER BY rowid ASC LIMIT 1;"
        ))?;
        let mut rows = stmt.query([title])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_moment_row(row)?)),
            None => Ok(None),
        }
    }

    fn get_id_by_title(&self, title: &str) -> RepoResult<Option<MomentId>> {
        let id_text: Option<String> = self
            .conn()?
            .query_row(
                "SELECT id FROM moments WHERE title = ?1 ORDER BY rowid ASC LIMIT 1;",
                [title],
                |row| row.get(0),
            )
            .optional()?;
        id_text.as_deref().map(parse_moment_id).transpose()
    }

    fn get_by_category(&self, tag: CategoryTag) -> RepoResult<Vec<Moment>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "{MOMENT_SELECT_SQL} WHERE category_tag = ?1 ORDER BY rowid ASC;"
        ))?;
        let mut rows = stmt.query([tag.type_id()])?;
        let mut moments = Vec::new();
        while let Some(row) = rows.next()? {
            moments.push(parse_moment_row(row)?);
        }
        Ok(moments)
    }

    fn delete(&self, moment: &Moment) -> RepoResult<()> {
        let changed = self.conn()?.execute(
            "DELETE FROM moments WHERE id = ?1 AND title = ?2 AND category_tag = ?3;",
            params![
                moment.id.to_string(),
                moment.title.as_str(),
                moment.category_tag.type_id(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(moment.id));
        }
        Ok(())
    }
}

fn parse_moment_row(row: &Row<'_>) -> RepoResult<Moment> {
    let id_text: String = row.get("id")?;
    Ok(Moment {
        id: parse_moment_id(&id_text)?,
        title: row.get("title")?,
        category_tag: CategoryTag::from_type_id(row.get("category_tag")?),
    })
}

fn parse_moment_id(value: &str) -> RepoResult<MomentId> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid id value `{value}` in moments.id")))
}
