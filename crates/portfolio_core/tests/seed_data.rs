use portfolio_core::seed::{load_blog_posts, load_profile, load_projects};
use portfolio_core::service::project_service::ProjectCatalog;
use portfolio_core::{
    AppContext, MemoryPreferenceRepository, PortfolioConfig, ProjectCategory, SimulatedFetch,
    ThemeMode,
};
use std::collections::HashSet;

#[test]
fn seed_projects_have_unique_identity_and_valid_dates() {
    let projects = load_projects().unwrap();
    assert!(!projects.is_empty());

    let ids: HashSet<&str> = projects.iter().map(|p| p.id.as_str()).collect();
    let slugs: HashSet<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(ids.len(), projects.len());
    assert_eq!(slugs.len(), projects.len());
    assert!(projects.iter().all(|project| project.sort_date().is_some()));
}

#[test]
fn seed_projects_decode_optional_fields_with_defaults() {
    let projects = load_projects().unwrap();

    let event = projects
        .iter()
        .find(|project| project.category == ProjectCategory::Event)
        .unwrap();
    assert!(event.status.is_none());
    assert!(event.stack.technologies.is_empty());
    assert!(event.links.is_empty());
}

#[test]
fn nasa_search_finds_seeded_project() {
    let mut catalog =
        ProjectCatalog::from_records(load_projects().unwrap(), SimulatedFetch::immediate())
            .unwrap();
    catalog.query_mut().set_search("nasa");

    let found = catalog.filtered();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].slug, "bioforecast");
}

#[test]
fn seed_blog_posts_decode() {
    let posts = load_blog_posts().unwrap();

    assert_eq!(posts.len(), 3);
    assert!(posts.iter().all(|post| post.published_on().is_some()));
    assert!(posts.iter().any(|post| post.tags.iter().any(|tag| tag == "NASA")));
}

#[test]
fn seed_profile_decodes_with_timeline() {
    let profile = load_profile().unwrap();

    assert!(!profile.name.is_empty());
    assert!(!profile.social.email.is_empty());
    assert_eq!(profile.timeline.len(), 9);
    assert!(profile.timeline.iter().all(|event| event.parsed_date().is_some()));
    assert!(!profile.skills.is_empty());
}

#[test]
fn context_builds_from_seed() {
    let config = PortfolioConfig::default();
    let ctx = AppContext::from_seed(&config, MemoryPreferenceRepository::new()).unwrap();

    assert_eq!(ctx.projects().total_count(), load_projects().unwrap().len());
    assert_eq!(ctx.blog().total_count(), 3);
    assert_eq!(ctx.profile().timeline().total_count(), 9);
    assert_eq!(ctx.theme().mode(), ThemeMode::Light);
    assert_eq!(
        ctx.routes()
            .resolve("/blog/nasa-space-apps-2025")
            .param("slug"),
        Some("nasa-space-apps-2025")
    );
    assert!(ctx.blog().store().get_by_slug("nasa-space-apps-2025").is_some());
    assert_eq!(ctx.blog().store().fetch_settings(), config.fetch.blog());
}
