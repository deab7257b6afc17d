//! Profile use-cases: biography, skills and timeline views.
//!
//! # Responsibility
//! - Own the singleton profile and its timeline record set.
//! - Derive skills-by-category and timeline-by-year views.
//!
//! # Invariants
//! - Timeline events live in a `RecordStore`, so ids stay unique.
//! - `profile()` returns the descriptive fields with an empty timeline;
//!   `snapshot()` reassembles the full record.

use crate::model::profile::{Certification, Profile, ProfilePatch, Skill, TimelineEvent};
use crate::model::Record;
use crate::query::filter::{sort_view, SortKey};
use crate::query::group::{group_by_year, skills_by_category};
use crate::repo::record_repo::RepoResult;
use crate::service::store::{RecordStore, SimulatedFetch, StoreError, StoreStatus};
use log::info;
use std::collections::BTreeMap;

pub struct ProfileService {
    profile: Profile,
    timeline: RecordStore<TimelineEvent>,
    status: StoreStatus,
    fetch: SimulatedFetch,
}

impl ProfileService {
    /// Splits `profile` into descriptive fields and a timeline store.
    ///
    /// # Errors
    /// - Returns `RepoError::DuplicateId` when two timeline events share an id.
    pub fn new(mut profile: Profile, fetch: SimulatedFetch) -> RepoResult<Self> {
        let events = std::mem::take(&mut profile.timeline);
        let timeline = RecordStore::from_records(events, fetch)?;
        Ok(Self {
            profile,
            timeline,
            status: StoreStatus::default(),
            fetch,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Full profile including the current timeline.
    pub fn snapshot(&self) -> Profile {
        Profile {
            timeline: self.timeline.list().to_vec(),
            ..self.profile.clone()
        }
    }

    /// Merges descriptive fields; name must stay non-blank.
    pub fn update_profile(&mut self, patch: ProfilePatch) -> Result<&Profile, StoreError> {
        let mut candidate = self.profile.clone();
        candidate.apply_patch(patch);
        if let Err(err) = candidate.validate() {
            let id = self.profile.id.clone();
            return Err(self
                .status
                .fail(Profile::KIND, "update", &id, StoreError::Validation(err)));
        }

        self.profile = candidate;
        self.status.clear_error();
        info!(
            "event=store_update module=store status=ok kind={} id={}",
            Profile::KIND,
            self.profile.id
        );
        Ok(&self.profile)
    }

    pub fn skills(&self) -> &[Skill] {
        &self.profile.skills
    }

    pub fn certifications(&self) -> &[Certification] {
        &self.profile.certifications
    }

    pub fn skills_by_category(&self) -> BTreeMap<String, Vec<&Skill>> {
        skills_by_category(&self.profile.skills)
    }

    pub fn timeline(&self) -> &RecordStore<TimelineEvent> {
        &self.timeline
    }

    pub fn timeline_mut(&mut self) -> &mut RecordStore<TimelineEvent> {
        &mut self.timeline
    }

    /// Timeline events, newest first.
    pub fn sorted_timeline(&self) -> Vec<&TimelineEvent> {
        let mut events: Vec<&TimelineEvent> = self.timeline.list().iter().collect();
        sort_view(&mut events, SortKey::Latest);
        events
    }

    /// Timeline grouped by year; newest first inside each year.
    pub fn timeline_by_year(&self) -> BTreeMap<String, Vec<&TimelineEvent>> {
        group_by_year(self.sorted_timeline())
    }

    /// Simulated profile reload; the profile is left unchanged.
    pub async fn fetch_all(&mut self) -> Result<(), StoreError> {
        self.status.run_fetch(Profile::KIND, &self.fetch).await
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<&StoreError> {
        self.status.error()
    }

    pub fn clear_error(&mut self) {
        self.status.clear_error();
    }
}
