//! In-memory editor sessions.
//!
//! Each session owns one document snapshot. A mutation builds a new snapshot,
//! regenerates the markdown, and bumps `revision`, all under the session's map entry
//! lock. Refinement calls run with no lock held; the field they target is marked
//! in-flight so the same field cannot be refined twice at once.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::editor::toggle::certifications_input;
use crate::errors::AppError;
use crate::models::profile::{ProfileData, SkillCategory};
use crate::models::project::ProjectData;
use crate::models::{Document, EditorMode};
use crate::refine::{refine_target, RefineTarget, Refiner};
use crate::render::render_document;

/// How long the "copied" acknowledgment stays up after an export.
pub const DEFAULT_COPY_ACK_MS: i64 = 2000;

/// Sessions untouched for this long are dropped by the sweeper.
pub const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 3600;
pub const DEFAULT_SESSION_SWEEP_SECS: u64 = 60;

pub struct EditorSession {
    id: Uuid,
    document: Document,
    markdown: String,
    revision: u64,
    /// Bumped when the mode switches; refinements started under an older epoch are dropped.
    epoch: u64,
    copied_until: Option<DateTime<Utc>>,
    refining: HashSet<RefineTarget>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    /// Monotonic; any read or write counts as activity.
    last_active: Instant,
}

impl EditorSession {
    fn new(mode: EditorMode, catalog: &Catalog) -> Self {
        let document = Document::initial(mode);
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            markdown: render_document(&document, catalog),
            document,
            revision: 1,
            epoch: 0,
            copied_until: None,
            refining: HashSet::new(),
            created_at: now,
            updated_at: now,
            last_active: Instant::now(),
        }
    }

    fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    fn is_idle_at(&self, now: Instant, ttl: StdDuration) -> bool {
        self.refining.is_empty() && now.saturating_duration_since(self.last_active) >= ttl
    }

    /// Installs a new snapshot and regenerates. One call, one revision.
    fn replace_document(&mut self, document: Document, catalog: &Catalog) {
        self.markdown = render_document(&document, catalog);
        self.document = document;
        self.revision += 1;
        self.updated_at = Utc::now();
        self.touch();
    }

    fn is_copied_at(&self, now: DateTime<Utc>) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }

    fn view_at(&self, now: DateTime<Utc>, catalog: &Catalog) -> SessionView {
        let mut refining: Vec<RefineTarget> = self.refining.iter().copied().collect();
        refining.sort_by_key(|t| t.as_str());

        let form = match &self.document {
            Document::Profile(data) => Some(ProfileForm::new(data, catalog)),
            Document::Project(_) => None,
        };

        SessionView {
            id: self.id,
            document: self.document.clone(),
            markdown: self.markdown.clone(),
            revision: self.revision,
            copied: self.is_copied_at(now),
            refining,
            form,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn view(&self, catalog: &Catalog) -> SessionView {
        self.view_at(Utc::now(), catalog)
    }
}

/// Snapshot of a session as returned to the browser.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: Uuid,
    pub document: Document,
    pub markdown: String,
    pub revision: u64,
    pub copied: bool,
    pub refining: Vec<RefineTarget>,
    /// Profile sessions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<ProfileForm>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What the profile form needs to redraw itself: lit catalog chips and the
/// certification field text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    /// Catalog skill chips currently selected, in catalog order. Categories with
    /// nothing selected are left out.
    pub selected_skills: Vec<SkillCategory>,
    /// Catalog tool chips currently selected, in catalog order.
    pub selected_tools: Vec<String>,
    pub certifications_input: String,
}

impl ProfileForm {
    pub fn new(data: &ProfileData, catalog: &Catalog) -> Self {
        let selected_skills = catalog
            .skills
            .iter()
            .filter_map(|chips| {
                let items: Vec<String> = chips
                    .items
                    .iter()
                    .filter(|item| data.is_skill_selected(&chips.category, item))
                    .cloned()
                    .collect();
                (!items.is_empty()).then(|| SkillCategory {
                    category: chips.category.clone(),
                    items,
                })
            })
            .collect();

        let selected_tools = catalog
            .tools
            .iter()
            .filter(|tool| data.is_tool_selected(tool))
            .cloned()
            .collect();

        Self {
            selected_skills,
            selected_tools,
            certifications_input: certifications_input(&data.certifications),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyReceipt {
    pub markdown: String,
    pub copied: bool,
    pub copied_until: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefineOutcome {
    /// False when there was nothing to refine and the service was not called.
    pub refined: bool,
    pub session: SessionView,
}

/// Clears a field's in-flight marker on drop, including when the request future
/// is dropped mid-call.
pub struct RefinementGuard {
    sessions: Arc<DashMap<Uuid, EditorSession>>,
    id: Uuid,
    target: RefineTarget,
    epoch: u64,
    armed: bool,
}

impl Drop for RefinementGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Some(mut session) = self.sessions.get_mut(&self.id) {
            if session.epoch == self.epoch {
                session.refining.remove(&self.target);
            }
        }
    }
}

enum RefinementStart {
    Skipped(SessionView),
    Started(RefinementGuard, String),
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<Uuid, EditorSession>>,
    catalog: Arc<Catalog>,
    copy_ack: Duration,
}

impl SessionStore {
    pub fn new(catalog: Arc<Catalog>, copy_ack: Duration) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            catalog,
            copy_ack,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn create(&self, mode: EditorMode) -> SessionView {
        let session = EditorSession::new(mode, &self.catalog);
        let view = session.view(&self.catalog);
        info!("Created {} session {}", mode.as_str(), session.id);
        self.sessions.insert(session.id, session);
        view
    }

    pub fn get(&self, id: Uuid) -> Result<SessionView, AppError> {
        let mut session = self.sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        session.touch();
        Ok(session.view(&self.catalog))
    }

    pub fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions.remove(&id).ok_or_else(|| not_found(id))?;
        info!("Discarded session {id}");
        Ok(())
    }

    /// Switching discards the current document and starts over from the new mode's
    /// default. Selecting the mode already active changes nothing.
    pub fn switch_mode(&self, id: Uuid, mode: EditorMode) -> Result<SessionView, AppError> {
        let mut session = self.sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        if session.document.mode() == mode {
            return Ok(session.view(&self.catalog));
        }

        session.epoch += 1;
        session.refining.clear();
        session.copied_until = None;
        session.replace_document(Document::initial(mode), &self.catalog);
        info!("Session {id} switched to {}", mode.as_str());
        Ok(session.view(&self.catalog))
    }

    pub fn update_profile<F>(&self, id: Uuid, edit: F) -> Result<SessionView, AppError>
    where
        F: FnOnce(&ProfileData) -> ProfileData,
    {
        let mut session = self.sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        let Document::Profile(data) = &session.document else {
            return Err(mode_mismatch(EditorMode::Profile, session.document.mode()));
        };
        let next = edit(data);
        session.replace_document(Document::Profile(next), &self.catalog);
        debug!("Session {id} profile updated to revision {}", session.revision);
        Ok(session.view(&self.catalog))
    }

    pub fn update_project<F>(&self, id: Uuid, edit: F) -> Result<SessionView, AppError>
    where
        F: FnOnce(&ProjectData) -> ProjectData,
    {
        let mut session = self.sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        let Document::Project(data) = &session.document else {
            return Err(mode_mismatch(EditorMode::Project, session.document.mode()));
        };
        let next = edit(data);
        session.replace_document(Document::Project(next), &self.catalog);
        debug!("Session {id} project updated to revision {}", session.revision);
        Ok(session.view(&self.catalog))
    }

    /// Hands out the current markdown verbatim and raises the transient "copied" flag.
    pub fn copy(&self, id: Uuid) -> Result<CopyReceipt, AppError> {
        let mut session = self.sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        let copied_until = Utc::now() + self.copy_ack;
        session.copied_until = Some(copied_until);
        session.touch();
        Ok(CopyReceipt {
            markdown: session.markdown.clone(),
            copied: true,
            copied_until,
        })
    }

    /// Drops sessions idle for at least `ttl`. A session with a refinement in flight
    /// is never idle. Returns how many were dropped.
    pub fn evict_idle(&self, ttl: StdDuration) -> usize {
        let now = Instant::now();
        let mut evicted = 0;
        self.sessions.retain(|id, session| {
            if session.is_idle_at(now, ttl) {
                debug!("Evicting idle session {id}");
                evicted += 1;
                false
            } else {
                true
            }
        });
        evicted
    }

    /// Background task running `evict_idle` every `every`. Abandoned editors
    /// never call DELETE, so this is what bounds the map.
    pub fn spawn_idle_sweeper(&self, ttl: StdDuration, every: StdDuration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let evicted = store.evict_idle(ttl);
                if evicted > 0 {
                    info!("Evicted {evicted} idle session(s); {} remain", store.len());
                }
            }
        })
    }

    /// Runs one refinement of `target` and writes the result back.
    ///
    /// On failure the field, the markdown and the revision are untouched and the
    /// error carries the single notice for the user.
    pub async fn refine(
        &self,
        id: Uuid,
        target: RefineTarget,
        refiner: &dyn Refiner,
    ) -> Result<RefineOutcome, AppError> {
        let (guard, text) = match self.begin_refinement(id, target)? {
            RefinementStart::Skipped(session) => {
                debug!("Session {id}: nothing to refine in {target}");
                return Ok(RefineOutcome {
                    refined: false,
                    session,
                });
            }
            RefinementStart::Started(guard, text) => (guard, text),
        };

        let refined = refine_target(refiner, target, &text)
            .await
            .map_err(|source| AppError::Refinement { target, source })?;

        let session = self.finish_refinement(guard, refined)?;
        info!("Session {id}: {target} refined (revision {})", session.revision);
        Ok(RefineOutcome {
            refined: true,
            session,
        })
    }

    fn begin_refinement(
        &self,
        id: Uuid,
        target: RefineTarget,
    ) -> Result<RefinementStart, AppError> {
        let mut session = self.sessions.get_mut(&id).ok_or_else(|| not_found(id))?;

        let text = match (&session.document, target) {
            (Document::Profile(p), RefineTarget::Bio) => p.bio.clone(),
            (Document::Project(p), RefineTarget::Problem) => p.problem.clone(),
            (Document::Project(p), RefineTarget::Action) => p.action.clone(),
            (Document::Project(p), RefineTarget::Outcome) => p.outcome.clone(),
            (document, RefineTarget::Bio) => {
                return Err(mode_mismatch(EditorMode::Profile, document.mode()))
            }
            (document, _) => return Err(mode_mismatch(EditorMode::Project, document.mode())),
        };

        if target == RefineTarget::Bio && text.is_empty() {
            return Ok(RefinementStart::Skipped(session.view(&self.catalog)));
        }

        if !session.refining.insert(target) {
            return Err(AppError::RefinementInProgress(target));
        }

        let guard = RefinementGuard {
            sessions: Arc::clone(&self.sessions),
            id,
            target,
            epoch: session.epoch,
            armed: true,
        };
        Ok(RefinementStart::Started(guard, text))
    }

    /// Writes the refined text into the *current* snapshot, keeping any edits made
    /// to other fields while the call was in flight.
    fn finish_refinement(
        &self,
        mut guard: RefinementGuard,
        refined: String,
    ) -> Result<SessionView, AppError> {
        let id = guard.id;
        let mut session = self.sessions.get_mut(&id).ok_or_else(|| not_found(id))?;

        if session.epoch != guard.epoch {
            return Err(AppError::ModeMismatch(format!(
                "Session {id} switched mode while '{}' was being refined; result discarded",
                guard.target
            )));
        }

        session.refining.remove(&guard.target);
        guard.armed = false;

        let next = match (&session.document, guard.target) {
            (Document::Profile(p), RefineTarget::Bio) => Document::Profile(ProfileData {
                bio: refined,
                ..p.clone()
            }),
            (Document::Project(p), RefineTarget::Problem) => Document::Project(ProjectData {
                problem: refined,
                ..p.clone()
            }),
            (Document::Project(p), RefineTarget::Action) => Document::Project(ProjectData {
                action: refined,
                ..p.clone()
            }),
            (Document::Project(p), RefineTarget::Outcome) => Document::Project(ProjectData {
                outcome: refined,
                ..p.clone()
            }),
            (document, _) => {
                return Err(AppError::ModeMismatch(format!(
                    "Session {id} no longer holds a {} document",
                    document.mode().as_str()
                )))
            }
        };

        session.replace_document(next, &self.catalog);
        Ok(session.view(&self.catalog))
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

fn mode_mismatch(expected: EditorMode, actual: EditorMode) -> AppError {
    AppError::ModeMismatch(format!(
        "Session is in {} mode; this operation needs {} mode",
        actual.as_str(),
        expected.as_str()
    ))
}
