//! Moment repository over the persistence port.
//!
//! # Responsibility
//! - Translate screen-level CRUD intents into DAO calls.
//! - Add edit-by-current-title and delete-by-title, which the DAO does not
//!   offer as single operations.
//! - Absorb persistence faults at this boundary.
//!
//! # Invariants
//! - No `RepoError` escapes the `MomentRepository` methods; faults are logged
//!   and downgraded to empty reads or no-op writes.
//! - Edits keep the id of the row found by title.
//! - Title lookups act on the first stored match only. Two moments sharing a
//!   title are not disambiguated.
//! - No caching: every read goes to storage.
//!
//! Titles are user content and never appear in log lines; only their length.

use crate::model::category_tag::CategoryTag;
use crate::model::moment::Moment;
use crate::repo::moment_dao::{MomentDao, RepoError};
use log::{debug, error, warn};

/// Read result that keeps "storage failed" apart from "nothing stored".
#[derive(Debug)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Empty,
    Failed(RepoError),
}

impl<T> LoadOutcome<T> {
    /// Collapses the outcome into the value callers display, treating a
    /// failure the same as no data.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Loaded(value) => value,
            Self::Empty | Self::Failed(_) => T::default(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Write result for repository mutations.
#[derive(Debug)]
pub enum MutationOutcome {
    Applied,
    /// The title lookup found no row to act on.
    Missing,
    Failed(RepoError),
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Screen-facing moment persistence contract.
pub trait MomentRepository: Send + Sync {
    /// Inserts a moment; an existing row with the same id is replaced.
    fn insert_moment(&self, moment: &Moment) -> MutationOutcome;
    /// Replaces the first moment titled `current_title` with `new_moment`'s
    /// title and category, keeping the stored id.
    fn edit_moment(&self, current_title: &str, new_moment: &Moment) -> MutationOutcome;
    /// Deletes the first moment titled `title`.
    fn delete_moment(&self, title: &str) -> MutationOutcome;
    fn load_all_moments(&self) -> LoadOutcome<Vec<Moment>>;
    fn load_moments_by_category(&self, tag: CategoryTag) -> LoadOutcome<Vec<Moment>>;

    /// Every stored moment; empty on failure.
    fn get_all_moments(&self) -> Vec<Moment> {
        self.load_all_moments().unwrap_or_default()
    }

    /// Moments tagged with `tag`; empty on failure.
    fn get_moments_by_category(&self, tag: CategoryTag) -> Vec<Moment> {
        self.load_moments_by_category(tag).unwrap_or_default()
    }
}

/// Repository implementation delegating storage to a `MomentDao`.
pub struct DaoMomentRepository<D: MomentDao> {
    dao: D,
}

impl<D: MomentDao> DaoMomentRepository<D> {
    pub fn new(dao: D) -> Self {
        Self { dao }
    }

    pub fn dao(&self) -> &D {
        &self.dao
    }
}

impl<D: MomentDao> MomentRepository for DaoMomentRepository<D> {
    fn insert_moment(&self, moment: &Moment) -> MutationOutcome {
        match self.dao.insert(moment) {
            Ok(()) => {
                debug!(
                    "event=moment_insert module=repo status=ok id={} title_len={}",
                    moment.id,
                    moment.title.chars().count()
                );
                MutationOutcome::Applied
            }
            Err(err) => {
                error!(
                    "event=moment_insert module=repo status=error id={} error={err}",
                    moment.id
                );
                MutationOutcome::Failed(err)
            }
        }
    }

    fn edit_moment(&self, current_title: &str, new_moment: &Moment) -> MutationOutcome {
        let id = match self.dao.get_id_by_title(current_title) {
            Ok(Some(id)) => id,
            Ok(None) => {
                warn!(
                    "event=moment_edit module=repo status=miss title_len={}",
                    current_title.chars().count()
                );
                return MutationOutcome::Missing;
            }
            Err(err) => {
                error!("event=moment_edit module=repo status=error stage=lookup error={err}");
                return MutationOutcome::Failed(err);
            }
        };

        let replacement = Moment::with_id(id, new_moment.title.clone(), new_moment.category_tag);
        match self.dao.update(&replacement) {
            Ok(()) => {
                debug!("event=moment_edit module=repo status=ok id={id}");
                MutationOutcome::Applied
            }
            Err(err) => {
                error!("event=moment_edit module=repo status=error stage=update id={id} error={err}");
                MutationOutcome::Failed(err)
            }
        }
    }

    fn delete_moment(&self, title: &str) -> MutationOutcome {
        let moment = match self.dao.get_by_title(title) {
            Ok(Some(moment)) => moment,
            Ok(None) => {
                warn!(
                    "event=moment_delete module=repo status=miss title_len={}",
                    title.chars().count()
                );
                return MutationOutcome::Missing;
            }
            Err(err) => {
                error!("event=moment_delete module=repo status=error stage=lookup error={err}");
                return MutationOutcome::Failed(err);
            }
        };

        match self.dao.delete(&moment) {
            Ok(()) => {
                debug!("event=moment_delete module=repo status=ok id={}", moment.id);
                MutationOutcome::Applied
            }
            Err(err) => {
                error!(
                    "event=moment_delete module=repo status=error stage=delete id={} error={err}",
                    moment.id
                );
                MutationOutcome::Failed(err)
            }
        }
    }

    fn load_all_moments(&self) -> LoadOutcome<Vec<Moment>> {
        into_load_outcome("moment_list", self.dao.get_all())
    }

    fn load_moments_by_category(&self, tag: CategoryTag) -> LoadOutcome<Vec<Moment>> {
        into_load_outcome("moment_list_by_category", self.dao.get_by_category(tag))
    }
}

fn into_load_outcome(event: &str, result: Result<Vec<Moment>, RepoError>) -> LoadOutcome<Vec<Moment>> {
    match result {
        Ok(moments) if moments.is_empty() => {
            debug!("event={event} module=repo status=ok count=0");
            LoadOutcome::Empty
        }
        Ok(moments) => {
            debug!("event={event} module=repo status=ok count={}", moments.len());
            LoadOutcome::Loaded(moments)
        }
        Err(err) => {
            error!("event={event} module=repo status=error error={err}");
            LoadOutcome::Failed(err)
        }
    }
}
