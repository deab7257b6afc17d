//! Explicit application context.
//!
//! # Responsibility
//! - Own every content store, the theme service and the route table.
//! - Build them from config plus embedded seeds in one place.
//!
//! # Invariants
//! - There is exactly one context per session; nothing is global.

use crate::config::PortfolioConfig;
use crate::repo::preference_repo::{PreferenceError, PreferenceRepository};
use crate::repo::record_repo::RepoError;
use crate::routes::RouteTable;
use crate::seed::{self, SeedError};
use crate::service::blog_service::BlogCatalog;
use crate::service::profile_service::ProfileService;
use crate::service::project_service::ProjectCatalog;
use crate::service::store::StoreError;
use crate::service::theme_service::ThemeService;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ContextError {
    Seed(SeedError),
    /// Seed records violated store identity rules.
    Repo(RepoError),
    Preference(PreferenceError),
}

impl Display for ContextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seed(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "invalid seed records: {err}"),
            Self::Preference(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ContextError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Seed(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Preference(err) => Some(err),
        }
    }
}

impl From<SeedError> for ContextError {
    fn from(value: SeedError) -> Self {
        Self::Seed(value)
    }
}

impl From<RepoError> for ContextError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<PreferenceError> for ContextError {
    fn from(value: PreferenceError) -> Self {
        Self::Preference(value)
    }
}

pub struct AppContext<P: PreferenceRepository> {
    projects: ProjectCatalog,
    blog: BlogCatalog,
    profile: ProfileService,
    theme: ThemeService<P>,
    routes: RouteTable,
}

impl<P: PreferenceRepository> AppContext<P> {
    /// Loads the embedded seeds and the stored theme preference.
    pub fn from_seed(config: &PortfolioConfig, preferences: P) -> Result<Self, ContextError> {
        let projects = ProjectCatalog::from_records(seed::load_projects()?, config.fetch.projects())?;
        let blog = BlogCatalog::from_records(seed::load_blog_posts()?, config.fetch.blog())?;
        let profile = ProfileService::new(seed::load_profile()?, config.fetch.profile())?;
        let theme = ThemeService::load(preferences)?;

        info!(
            "event=context_init module=context status=ok projects={} posts={} timeline={}",
            projects.total_count(),
            blog.total_count(),
            profile.timeline().total_count()
        );

        Ok(Self {
            projects,
            blog,
            profile,
            theme,
            routes: RouteTable::new(),
        })
    }

    pub fn projects(&self) -> &ProjectCatalog {
        &self.projects
    }

    pub fn projects_mut(&mut self) -> &mut ProjectCatalog {
        &mut self.projects
    }

    pub fn blog(&self) -> &BlogCatalog {
        &self.blog
    }

    pub fn blog_mut(&mut self) -> &mut BlogCatalog {
        &mut self.blog
    }

    pub fn profile(&self) -> &ProfileService {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ProfileService {
        &mut self.profile
    }

    pub fn theme(&self) -> &ThemeService<P> {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeService<P> {
        &mut self.theme
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Runs every store's simulated fetch in turn.
    ///
    /// All three fetches run even when one fails; the first failure is
    /// returned and each store keeps its own error.
    pub async fn fetch_all(&mut self) -> Result<(), StoreError> {
        let projects = self.projects.store_mut().fetch_all().await;
        let blog = self.blog.store_mut().fetch_all().await;
        let profile = self.profile.fetch_all().await;
        projects.and(blog).and(profile)
    }
}
