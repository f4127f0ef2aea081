use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::content::application::domain::defaults;
use crate::content::application::domain::entities::{
    ContactInfo, Experience, PersonalInfo, Project, ProjectDraft, Skill, SkillSet,
};
use crate::content::application::ports::outgoing::token_source::TokenSource;
use crate::content::application::saved_notice::SavedNotice;
use crate::modules::api::application::PortfolioApi;
use crate::shared::loading::LoadingGuard;

/// Every content slice, as one consistent value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSnapshot {
    pub personal_info: PersonalInfo,
    pub projects: Vec<Project>,
    pub frontend_skills: Vec<Skill>,
    pub backend_skills: Vec<Skill>,
    pub contact_info: ContactInfo,
    pub experiences: Vec<Experience>,
}

impl Default for ContentSnapshot {
    fn default() -> Self {
        Self {
            personal_info: defaults::personal_info(),
            projects: defaults::projects(),
            frontend_skills: defaults::frontend_skills(),
            backend_skills: defaults::backend_skills(),
            contact_info: defaults::contact_info(),
            experiences: defaults::experiences(),
        }
    }
}

/// Which slices `fetch_all_data` refreshed. A `false` slice kept its prior value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub personal_info: bool,
    pub projects: bool,
    pub skills: bool,
    pub contact_info: bool,
}

impl FetchReport {
    pub fn all_succeeded(&self) -> bool {
        self.personal_info && self.projects && self.skills && self.contact_info
    }

    pub fn any_succeeded(&self) -> bool {
        self.personal_info || self.projects || self.skills || self.contact_info
    }
}

/// Editable portfolio content held in memory.
///
/// ## Semantics
/// - Seeded with built-in defaults; a failed fetch leaves them in place.
/// - Writes are optimistic-on-success: memory changes only after the server
///   accepted the request, never before.
/// - Writes need a token. Without one they return `false` and issue nothing.
/// - A failed write stores a display message (see `error`) and never retries.
pub struct ContentStore {
    api: PortfolioApi,
    tokens: Arc<dyn TokenSource>,
    state: RwLock<ContentSnapshot>,
    error: RwLock<Option<String>>,
    in_flight: AtomicUsize,
    saved: SavedNotice,
}

impl ContentStore {
    pub fn new(api: PortfolioApi, tokens: Arc<dyn TokenSource>, saved: SavedNotice) -> Self {
        Self::with_snapshot(api, tokens, saved, ContentSnapshot::default())
    }

    pub fn with_snapshot(
        api: PortfolioApi,
        tokens: Arc<dyn TokenSource>,
        saved: SavedNotice,
        snapshot: ContentSnapshot,
    ) -> Self {
        Self {
            api,
            tokens,
            state: RwLock::new(snapshot),
            error: RwLock::new(None),
            in_flight: AtomicUsize::new(0),
            saved,
        }
    }

    // ---------------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------------

    /// Refresh all four remote slices concurrently.
    ///
    /// Each slice is applied on its own; a failure in one never blocks or
    /// rolls back another.
    pub async fn fetch_all_data(&self) -> FetchReport {
        let _loading = self.begin();

        let (personal_info, projects, skills, contact_info) = futures::join!(
            self.api.get_personal_info(),
            self.api.get_projects(),
            self.api.get_skills(),
            self.api.get_contact_info(),
        );

        let mut report = FetchReport::default();
        {
            let mut state = self.write_state();

            if let (true, Some(info)) = (personal_info.success, personal_info.data) {
                state.personal_info = info;
                report.personal_info = true;
            }

            if let (true, Some(list)) = (projects.success, projects.data) {
                state.projects = list;
                report.projects = true;
            }

            if let (true, Some(set)) = (skills.success, skills.data) {
                if let Some(frontend) = set.frontend {
                    state.frontend_skills = frontend;
                }
                if let Some(backend) = set.backend {
                    state.backend_skills = backend;
                }
                report.skills = true;
            }

            if let (true, Some(info)) = (contact_info.success, contact_info.data) {
                state.contact_info = info;
                report.contact_info = true;
            }
        }

        if report.any_succeeded() {
            info!("Fetched portfolio content: {:?}", report);
        } else {
            info!("Backend API not available, using demo data");
        }

        report
    }

    pub fn snapshot(&self) -> ContentSnapshot {
        self.read_state().clone()
    }

    pub fn personal_info(&self) -> PersonalInfo {
        self.read_state().personal_info.clone()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.read_state().projects.clone()
    }

    pub fn project(&self, id: &str) -> Option<Project> {
        self.read_state().projects.iter().find(|p| p.id == id).cloned()
    }

    pub fn frontend_skills(&self) -> Vec<Skill> {
        self.read_state().frontend_skills.clone()
    }

    pub fn backend_skills(&self) -> Vec<Skill> {
        self.read_state().backend_skills.clone()
    }

    /// Both skill lists from a single read.
    pub fn skills(&self) -> (Vec<Skill>, Vec<Skill>) {
        let state = self.read_state();
        (state.frontend_skills.clone(), state.backend_skills.clone())
    }

    pub fn contact_info(&self) -> ContactInfo {
        self.read_state().contact_info.clone()
    }

    pub fn experiences(&self) -> Vec<Experience> {
        self.read_state().experiences.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn error(&self) -> Option<String> {
        self.error.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn clear_error(&self) {
        *self.error.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn saved_notice(&self) -> &SavedNotice {
        &self.saved
    }

    // ---------------------------------------------------------------------
    // Writes
    // ---------------------------------------------------------------------

    pub async fn update_personal_info(&self, info: PersonalInfo) -> bool {
        let Some(token) = self.tokens.current_token() else {
            return false;
        };
        let _loading = self.begin();

        let response = self.api.update_personal_info(&info, &token).await;
        if !response.success {
            return self.fail(response.error, "Failed to update personal info");
        }

        self.write_state().personal_info = info;
        self.saved.mark();
        true
    }

    /// Create a project; returns the id it ended up with.
    ///
    /// The server's id wins: a local project already holding that id is
    /// replaced. When the server accepts the project without naming one, a
    /// timestamp id unique within the list is assigned locally.
    pub async fn add_project(&self, draft: ProjectDraft) -> Option<String> {
        let token = self.tokens.current_token()?;
        let _loading = self.begin();

        let response = self.api.create_project(&draft, &token).await;
        if !response.success {
            self.fail(response.error, "Failed to create project");
            return None;
        }

        let mut state = self.write_state();
        let project = match server_assigned_project(response.data, &draft) {
            Some(project) => project,
            None => draft.with_id(fallback_project_id(&state.projects)),
        };
        let id = project.id.clone();
        match state.projects.iter_mut().find(|p| p.id == id) {
            Some(slot) => {
                warn!("Server reused project id {}, replacing the local entry", id);
                *slot = project;
            }
            None => state.projects.push(project),
        }
        drop(state);

        self.saved.mark();
        Some(id)
    }

    /// Replace the project with `id`. An unknown id leaves the list untouched
    /// and still reports what the server said.
    pub async fn update_project(&self, id: &str, draft: ProjectDraft) -> bool {
        let Some(token) = self.tokens.current_token() else {
            return false;
        };
        let _loading = self.begin();

        let response = self.api.update_project(id, &draft, &token).await;
        if !response.success {
            return self.fail(response.error, "Failed to update project");
        }

        let mut state = self.write_state();
        match state.projects.iter_mut().find(|p| p.id == id) {
            Some(slot) => *slot = draft.with_id(id),
            None => debug!("Updated project {} is not in the local list", id),
        }
        drop(state);

        self.saved.mark();
        true
    }

    pub async fn delete_project(&self, id: &str) -> bool {
        let Some(token) = self.tokens.current_token() else {
            return false;
        };
        let _loading = self.begin();

        let response = self.api.delete_project(id, &token).await;
        if !response.success {
            return self.fail(response.error, "Failed to delete project");
        }

        self.write_state().projects.retain(|p| p.id != id);
        true
    }

    /// Local bulk replace; nothing is sent to the server.
    pub fn update_projects(&self, projects: Vec<Project>) {
        self.write_state().projects = projects;
    }

    /// Send both lists as one payload; on success both are swapped under a
    /// single write so no reader sees one list new and the other old.
    pub async fn update_skills(&self, frontend: Vec<Skill>, backend: Vec<Skill>) -> bool {
        let Some(token) = self.tokens.current_token() else {
            return false;
        };
        let _loading = self.begin();

        let payload = SkillSet::new(frontend, backend);
        let response = self.api.update_skills(&payload, &token).await;
        if !response.success {
            return self.fail(response.error, "Failed to update skills");
        }

        let mut state = self.write_state();
        state.frontend_skills = payload.frontend.unwrap_or_default();
        state.backend_skills = payload.backend.unwrap_or_default();
        drop(state);

        self.saved.mark();
        true
    }

    pub async fn update_contact_info(&self, info: ContactInfo) -> bool {
        let Some(token) = self.tokens.current_token() else {
            return false;
        };
        let _loading = self.begin();

        let response = self.api.update_contact_info(&info, &token).await;
        if !response.success {
            return self.fail(response.error, "Failed to update contact info");
        }

        self.write_state().contact_info = info;
        self.saved.mark();
        true
    }

    // ---------------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------------

    fn begin(&self) -> LoadingGuard<'_> {
        self.clear_error();
        LoadingGuard::new(&self.in_flight)
    }

    fn fail(&self, error: Option<String>, default: &str) -> bool {
        let message = error.unwrap_or_else(|| default.to_string());
        warn!("{}: {}", default, message);
        *self.error.write().unwrap_or_else(PoisonError::into_inner) = Some(message);
        false
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ContentSnapshot> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ContentSnapshot> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The project as the server reported it: a full project, or just its id.
fn server_assigned_project(data: Option<Value>, draft: &ProjectDraft) -> Option<Project> {
    let data = data?;

    if let Ok(project) = serde_json::from_value::<Project>(data.clone()) {
        if !project.id.is_empty() {
            return Some(project);
        }
    }

    let id = match data.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => return None,
    };
    Some(draft.clone().with_id(id))
}

fn fallback_project_id(existing: &[Project]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    while existing.iter().any(|p| p.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
