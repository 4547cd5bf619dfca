//! Search session orchestration.
//!
//! [`SearchSessionController`] drives one professor search at a time:
//! resolve the professor, record the name, fetch and aggregate grades, and
//! publish each step as a complete [`SessionState`] snapshot.

mod state;

pub use state::{ProfessorRecord, SessionState, SessionStatus};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::courses::CourseCode;
use crate::error::SessionError;
use crate::grades::aggregate_courses;
use crate::services::{GradeLookup, ProfessorLookup};
use crate::store::{PersistedStore, RecentSearchStore};

/// Owns the session state for a sequence of searches.
///
/// Every call to [`search`](Self::search) is stamped with a new request
/// number. Responses are committed only if their stamp is still the latest
/// one, so a slow answer to an earlier query never overwrites a newer one.
pub struct SearchSessionController<S> {
    professors: Arc<dyn ProfessorLookup>,
    grades: Arc<dyn GradeLookup>,
    recent: Mutex<RecentSearchStore<S>>,
    state: watch::Sender<SessionState>,
    latest_request: AtomicU64,
}

impl<S: PersistedStore> SearchSessionController<S> {
    pub fn new(
        professors: Arc<dyn ProfessorLookup>,
        grades: Arc<dyn GradeLookup>,
        recent: RecentSearchStore<S>,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::idle());
        Self {
            professors,
            grades,
            recent: Mutex::new(recent),
            state,
            latest_request: AtomicU64::new(0),
        }
    }

    /// Receives every snapshot published from now on.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Names from the recent-search list, newest first.
    pub fn recent_searches(&self) -> Vec<String> {
        self.recent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .to_vec()
    }

    /// Runs a full search for `query`.
    ///
    /// Blank queries are ignored. Otherwise the session moves to `Loading`
    /// and settles on `Loaded` once the professor is found (with or
    /// without grade data), or on `Error` if the professor lookup fails.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            debug!("Ignoring blank search");
            return;
        }

        let request = self.begin_request();
        info!(request, "Search started");

        let found = match self.professors.find_professor(query).await {
            Ok(found) => found,
            Err(e) if e.is_not_found() => {
                info!(request, error = %e, "No professor matched");
                self.commit(request, SessionState::failed(e.to_string()));
                return;
            }
            Err(e) => {
                warn!(request, error = %e, "Professor lookup failed");
                self.commit(request, SessionState::failed(e.to_string()));
                return;
            }
        };

        let professor = ProfessorRecord::from_match(found);
        let name = professor.name.clone();
        if !self.commit(request, SessionState::resolved(professor)) {
            return;
        }
        self.remember(&name);

        let averages = match self.grades.grades_for(&name).await {
            Ok(entries) => aggregate_courses(&entries),
            Err(e) => {
                warn!(request, professor = %name, error = %e, "Grade lookup failed, showing no averages");
                Vec::new()
            }
        };

        // Settle in place; the selection may have changed while grades loaded.
        let settled = self.commit_with(request, |state| {
            *state = std::mem::take(state).loaded(averages);
        });
        if settled {
            info!(request, professor = %name, "Search settled");
        }
    }

    /// Changes the selected course of the loaded professor.
    ///
    /// Only local state changes; every course average was fetched with the
    /// search. Courses the professor does not teach are rejected and leave
    /// the state untouched.
    pub fn select_course(&self, course: &CourseCode) -> Result<(), SessionError> {
        let accepted = self.state.send_if_modified(|state| {
            let teaches = state
                .professor
                .as_ref()
                .is_some_and(|p| p.teaches(course));
            if teaches {
                state.selected_course = Some(course.clone());
            }
            teaches
        });

        if accepted {
            debug!(course = %course, "Course selected");
            Ok(())
        } else {
            Err(SessionError::InvalidSelection {
                course: course.clone(),
            })
        }
    }

    /// Issues a new request number and resets the state to `Loading`.
    ///
    /// Both happen under the channel's write lock so no commit can slip in
    /// between them.
    fn begin_request(&self) -> u64 {
        let mut request = 0;
        self.state.send_modify(|state| {
            request = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
            *state = SessionState::loading();
        });
        request
    }

    /// Publishes `next` if `request` is still the latest search.
    fn commit(&self, request: u64, next: SessionState) -> bool {
        self.commit_with(request, |state| *state = next)
    }

    /// Applies `update` to the current snapshot if `request` is still the
    /// latest search.
    fn commit_with<F>(&self, request: u64, update: F) -> bool
    where
        F: FnOnce(&mut SessionState),
    {
        let committed = self.state.send_if_modified(|state| {
            if self.latest_request.load(Ordering::SeqCst) != request {
                return false;
            }
            update(state);
            true
        });

        if !committed {
            debug!(request, "Discarding response from superseded search");
        }
        committed
    }

    fn remember(&self, name: &str) {
        let mut recent = self.recent.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = recent.record(name) {
            warn!(professor = name, error = %e, "Failed to save recent searches");
        }
    }
}
