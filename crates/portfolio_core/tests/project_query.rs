use portfolio_core::model::project::ProjectStack;
use portfolio_core::query::filter::apply_query;
use portfolio_core::query::group::group_by_category;
use portfolio_core::service::project_service::ProjectCatalog;
use portfolio_core::{Project, ProjectCategory, ProjectStatus, QueryState, SimulatedFetch, SortKey};

fn project(id: &str, title: &str, end_date: Option<&str>) -> Project {
    let mut project = Project::with_id(id, title, id, "2024-01-01");
    project.end_date = end_date.map(str::to_string);
    project
}

fn ids<'a>(view: &[&'a Project]) -> Vec<&'a str> {
    view.iter().map(|project| project.id.as_str()).collect()
}

fn sample() -> Vec<Project> {
    let mut bio = project("bio", "BioForecast", Some("2025-10-15"));
    bio.tags = vec!["NASA".to_string(), "Hackathon".to_string()];
    bio.stack = ProjectStack {
        technologies: vec!["Vue 3".to_string(), "Python".to_string()],
        ..ProjectStack::default()
    };
    bio.category = ProjectCategory::Software;
    bio.status = Some(ProjectStatus::Completed);
    bio.featured = true;

    let mut flow = project("flow", "FlowTechAI", Some("2025-06-01"));
    flow.tags = vec!["Hackathon".to_string()];
    flow.stack = ProjectStack {
        tools: vec!["Figma".to_string()],
        ..ProjectStack::default()
    };
    flow.category = ProjectCategory::Product;

    let mut asociat = project("asociat", "asociaT", Some("2024-11-30"));
    asociat.tags = vec!["Leadership".to_string()];
    asociat.category = ProjectCategory::SocialImpact;
    asociat.status = Some(ProjectStatus::Completed);

    let mut course = project("course", "AWS Course Platform", None);
    course.start_date = "2025-01-01".to_string();
    course.stack = ProjectStack {
        platforms: vec!["AWS".to_string()],
        technologies: vec!["python".to_string()],
        ..ProjectStack::default()
    };
    course.category = ProjectCategory::ProjectManagement;
    course.status = Some(ProjectStatus::InProgress);

    vec![bio, flow, asociat, course]
}

fn catalog() -> ProjectCatalog {
    ProjectCatalog::from_records(sample(), SimulatedFetch::immediate()).unwrap()
}

#[test]
fn latest_orders_by_end_date_descending() {
    let projects = vec![
        project("jan", "January", Some("2025-01-01")),
        project("oct", "October", Some("2025-10-01")),
        project("jun", "June", Some("2025-06-01")),
    ];

    let view = apply_query(&projects, &QueryState::default());

    assert_eq!(ids(&view), vec!["oct", "jun", "jan"]);
}

#[test]
fn latest_falls_back_to_start_date_for_ongoing_projects() {
    let catalog = catalog();

    let view = catalog.filtered();

    assert_eq!(ids(&view), vec!["bio", "flow", "course", "asociat"]);
}

#[test]
fn latest_reversed_equals_oldest_for_distinct_dates() {
    let projects = sample();
    let mut query = QueryState::default();

    let mut latest = ids(&apply_query(&projects, &query));
    query.set_sort(SortKey::Oldest);
    let oldest = ids(&apply_query(&projects, &query));
    latest.reverse();

    assert_eq!(latest, oldest);
}

#[test]
fn search_is_case_insensitive_over_tags() {
    let mut catalog = catalog();
    catalog.query_mut().set_search("nasa");

    assert_eq!(ids(&catalog.filtered()), vec!["bio"]);
}

#[test]
fn search_matches_stack_entries_and_trims_input() {
    let mut catalog = catalog();
    catalog.query_mut().set_search("  FIGMA ");

    assert_eq!(ids(&catalog.filtered()), vec!["flow"]);
}

#[test]
fn blank_search_passes_everything() {
    let mut catalog = catalog();
    catalog.query_mut().set_search("   ");

    assert_eq!(catalog.filtered().len(), 4);
}

#[test]
fn filtering_is_idempotent() {
    let projects = sample();
    let mut query = QueryState::default();
    query.set_search("hackathon");
    query.set_sort(SortKey::NameAsc);

    let once = apply_query(&projects, &query);
    let twice = apply_query(once.iter().copied(), &query);

    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn empty_tag_selection_returns_unfiltered_set() {
    let projects = sample();

    let view = apply_query(&projects, &QueryState::default());

    assert_eq!(view.len(), projects.len());
}

#[test]
fn tag_selection_is_a_conjunction_over_tags_and_stack() {
    let mut catalog = catalog();
    catalog.query_mut().toggle_tag("Hackathon");
    assert_eq!(ids(&catalog.filtered()), vec!["bio", "flow"]);

    catalog.query_mut().toggle_tag("Vue 3");
    assert_eq!(ids(&catalog.filtered()), vec!["bio"]);

    catalog.query_mut().toggle_tag("Figma");
    assert!(catalog.filtered().is_empty());
}

#[test]
fn tag_match_is_exact() {
    let mut catalog = catalog();
    catalog.query_mut().toggle_tag("nasa");

    assert!(catalog.filtered().is_empty());
}

#[test]
fn toggling_a_tag_twice_deselects_it() {
    let mut query = QueryState::default();
    query.toggle_tag("NASA");
    query.toggle_tag("NASA");

    assert!(query.selected_tags.is_empty());
    assert!(!query.is_filtering());
}

#[test]
fn category_filter_matches_label_exactly() {
    let mut catalog = catalog();
    catalog
        .query_mut()
        .set_category(Some("social-impact".to_string()));
    assert_eq!(ids(&catalog.filtered()), vec!["asociat"]);

    catalog.query_mut().set_category(Some("Social-Impact".to_string()));
    assert!(catalog.filtered().is_empty());
}

#[test]
fn name_sort_ignores_case() {
    let mut catalog = catalog();
    catalog.query_mut().set_sort(SortKey::NameAsc);
    assert_eq!(ids(&catalog.filtered()), vec!["asociat", "course", "bio", "flow"]);

    catalog.query_mut().set_sort(SortKey::NameDesc);
    assert_eq!(ids(&catalog.filtered()), vec!["flow", "bio", "course", "asociat"]);
}

#[test]
fn name_sort_places_accented_titles_with_their_base_letter() {
    let projects = vec![
        project("z", "Zeta", Some("2024-01-01")),
        project("a", "Ágil Board", Some("2024-02-01")),
        project("b", "Beta", Some("2024-03-01")),
        project("n", "Ñandú Tracker", Some("2024-04-01")),
    ];
    let mut query = QueryState::new();
    query.set_sort(SortKey::NameAsc);
    assert_eq!(ids(&apply_query(&projects, &query)), vec!["a", "b", "n", "z"]);

    query.set_sort(SortKey::NameDesc);
    assert_eq!(ids(&apply_query(&projects, &query)), vec!["z", "n", "b", "a"]);
}

#[test]
fn year_sort_keeps_projects_ending_in_that_year() {
    let mut catalog = catalog();
    catalog.query_mut().set_sort(SortKey::parse("year-2025"));

    assert_eq!(ids(&catalog.filtered()), vec!["bio", "flow"]);
}

#[test]
fn unknown_sort_key_falls_back_to_latest() {
    let mut catalog = catalog();
    catalog.query_mut().set_sort(SortKey::parse("most-starred"));

    assert_eq!(catalog.query().sort, SortKey::Latest);
    assert_eq!(ids(&catalog.filtered())[0], "bio");
}

#[test]
fn invalid_dates_sort_last_under_latest_and_first_under_oldest() {
    let projects = vec![
        project("bad", "Bad date", Some("someday")),
        project("new", "New", Some("2025-05-01")),
        project("old", "Old", Some("2023-05-01")),
    ];
    let mut query = QueryState::default();

    assert_eq!(ids(&apply_query(&projects, &query)), vec!["new", "old", "bad"]);

    query.set_sort(SortKey::Oldest);
    assert_eq!(ids(&apply_query(&projects, &query)), vec!["bad", "old", "new"]);

    query.set_sort(SortKey::Year(2025));
    assert_eq!(ids(&apply_query(&projects, &query)), vec!["new"]);
}

#[test]
fn clear_filters_resets_query_state() {
    let mut catalog = catalog();
    catalog.query_mut().set_search("nasa");
    catalog.query_mut().toggle_tag("Hackathon");
    catalog.query_mut().set_sort(SortKey::NameDesc);

    catalog.query_mut().clear_filters();

    assert_eq!(catalog.query(), &QueryState::default());
    assert_eq!(catalog.filtered().len(), 4);
}

#[test]
fn group_by_category_flattens_to_filtered_set() {
    let mut catalog = catalog();
    catalog.query_mut().set_search("a");
    let filtered = catalog.filtered();

    let groups = group_by_category(filtered.iter().copied());
    let mut flattened: Vec<&str> = groups.values().flatten().map(|p| p.id.as_str()).collect();
    let mut expected = ids(&filtered);
    flattened.sort_unstable();
    expected.sort_unstable();

    assert_eq!(flattened, expected);
}

#[test]
fn catalog_groupings_use_stable_labels() {
    let catalog = catalog();

    let by_category = catalog.group_by_category();
    assert_eq!(
        by_category.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["product", "project-management", "social-impact", "software"]
    );

    let by_year = catalog.group_by_year();
    assert_eq!(ids(&by_year["2025"]), vec!["bio", "flow", "course"]);
    assert_eq!(ids(&by_year["2024"]), vec!["asociat"]);

    let by_status = catalog.group_by_status();
    assert_eq!(ids(&by_status["completed"]), vec!["bio", "asociat"]);
    assert_eq!(ids(&by_status["in-progress"]), vec!["course"]);
    assert_eq!(ids(&by_status["unspecified"]), vec!["flow"]);
}

#[test]
fn accessors_cover_featured_category_and_technology() {
    let catalog = catalog();

    assert_eq!(ids(&catalog.featured()), vec!["bio"]);
    assert_eq!(ids(&catalog.by_category(ProjectCategory::Product)), vec!["flow"]);
    assert_eq!(ids(&catalog.by_technology("PYTHON")), vec!["bio", "course"]);
}

#[test]
fn distinct_values_are_case_sensitive_and_sorted() {
    let catalog = catalog();

    assert_eq!(
        catalog.distinct_tags(),
        vec!["Hackathon", "Leadership", "NASA"]
    );
    assert_eq!(
        catalog.distinct_stack_values(None),
        vec!["AWS", "Figma", "Python", "Vue 3", "python"]
    );
}
