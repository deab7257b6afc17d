//! Query state and the search → tag/category → sort pipeline.
//!
//! # Invariants
//! - An empty (blank) search string and an empty tag selection are
//!   pass-throughs.
//! - Tag selection is a conjunction: every selected value must be present.
//! - Sorting is stable; ties keep their input order.
//! - Records without a valid date order as the earliest possible date:
//!   last under `latest`, first under `oldest`, never inside `year-<N>`.

use crate::query::Queryable;
use chrono::Datelike;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort order for derived views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Newest first.
    #[default]
    Latest,
    Oldest,
    NameAsc,
    NameDesc,
    /// Keep only records dated in the given year, newest first.
    Year(i32),
}

impl SortKey {
    /// Parses a sort label; unknown labels fall back to `Latest`.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value {
            "latest" => Self::Latest,
            "oldest" => Self::Oldest,
            "name-asc" => Self::NameAsc,
            "name-desc" => Self::NameDesc,
            _ => value
                .strip_prefix("year-")
                .and_then(|year| year.parse::<i32>().ok())
                .map_or(Self::Latest, Self::Year),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
            Self::Oldest => write!(f, "oldest"),
            Self::NameAsc => write!(f, "name-asc"),
            Self::NameDesc => write!(f, "name-desc"),
            Self::Year(year) => write!(f, "year-{year}"),
        }
    }
}

/// User-controlled filter/sort parameters for one view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    /// Selected tag/stack values, in selection order.
    pub selected_tags: Vec<String>,
    pub category: Option<String>,
    pub sort: SortKey,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Adds `tag` to the selection, or removes it if already selected.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(index) = self.selected_tags.iter().position(|value| value == tag) {
            self.selected_tags.remove(index);
        } else {
            self.selected_tags.push(tag.to_string());
        }
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Resets search, selection, category and sort to their defaults.
    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }

    /// Whether any filtering stage is active (sorting excluded).
    pub fn is_filtering(&self) -> bool {
        !self.search.trim().is_empty()
            || !self.selected_tags.is_empty()
            || self.category.is_some()
            || matches!(self.sort, SortKey::Year(_))
    }
}

/// Runs the full pipeline over `records` and returns the derived view.
pub fn apply_query<'a, R, I>(records: I, query: &QueryState) -> Vec<&'a R>
where
    R: Queryable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let needle = query.search.trim().to_lowercase();
    let mut view: Vec<&R> = records
        .into_iter()
        .filter(|record| matches_search(*record, &needle))
        .filter(|record| matches_tags(*record, &query.selected_tags))
        .filter(|record| matches_category(*record, query.category.as_deref()))
        .collect();
    sort_view(&mut view, query.sort);
    view
}

/// Case-insensitive substring match over every search field.
///
/// `needle` must already be trimmed and lowercased; empty matches all.
pub fn matches_search<R: Queryable + ?Sized>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

pub fn matches_tags<R: Queryable + ?Sized>(record: &R, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    let values = record.filter_values();
    selected
        .iter()
        .all(|tag| values.iter().any(|value| *value == tag.as_str()))
}

pub fn matches_category<R: Queryable + ?Sized>(record: &R, category: Option<&str>) -> bool {
    match category {
        Some(category) => record.category_label() == Some(category),
        None => true,
    }
}

/// Stable in-place sort of a derived view.
pub fn sort_view<R: Queryable + ?Sized>(view: &mut Vec<&R>, sort: SortKey) {
    match sort {
        SortKey::Latest => view.sort_by(|a, b| b.sort_date().cmp(&a.sort_date())),
        SortKey::Oldest => view.sort_by(|a, b| a.sort_date().cmp(&b.sort_date())),
        SortKey::NameAsc => view.sort_by(|a, b| compare_titles(a.title(), b.title())),
        SortKey::NameDesc => view.sort_by(|a, b| compare_titles(b.title(), a.title())),
        SortKey::Year(year) => {
            view.retain(|record| record.year_filter_date().map(|date| date.year()) == Some(year));
            view.sort_by(|a, b| b.sort_date().cmp(&a.sort_date()));
        }
    }
}

/// Locale-aware title order: accent- and case-folded first, then
/// case-folded with accents, then raw code points.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

fn collation_key(value: &str) -> String {
    value
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{compare_titles, QueryState, SortKey};
    use std::cmp::Ordering;

    #[test]
    fn sort_key_parses_known_labels_and_defaults_to_latest() {
        assert_eq!(SortKey::parse("oldest"), SortKey::Oldest);
        assert_eq!(SortKey::parse("name-desc"), SortKey::NameDesc);
        assert_eq!(SortKey::parse("year-2024"), SortKey::Year(2024));
        assert_eq!(SortKey::parse("year-abc"), SortKey::Latest);
        assert_eq!(SortKey::parse("popular"), SortKey::Latest);
        assert_eq!(SortKey::parse(""), SortKey::Latest);
    }

    #[test]
    fn sort_key_display_matches_parse() {
        for key in [
            SortKey::Latest,
            SortKey::Oldest,
            SortKey::NameAsc,
            SortKey::NameDesc,
            SortKey::Year(2025),
        ] {
            assert_eq!(SortKey::parse(&key.to_string()), key);
        }
    }

    #[test]
    fn toggle_tag_adds_then_removes() {
        let mut query = QueryState::new();
        query.toggle_tag("Rust");
        query.toggle_tag("NASA");
        query.toggle_tag("Rust");
        assert_eq!(query.selected_tags, vec!["NASA".to_string()]);
    }

    #[test]
    fn clear_filters_resets_everything() {
        let mut query = QueryState::new();
        query.set_search("nasa");
        query.toggle_tag("Vue");
        query.set_category(Some("software".to_string()));
        query.set_sort(SortKey::Year(2025));
        assert!(query.is_filtering());

        query.clear_filters();
        assert_eq!(query, QueryState::default());
        assert!(!query.is_filtering());
    }

    #[test]
    fn compare_titles_ignores_case_first() {
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_titles("Apple", "apple"), Ordering::Less);
    }

    #[test]
    fn compare_titles_folds_accents() {
        assert_eq!(compare_titles("Ágil", "Beta"), Ordering::Less);
        assert_eq!(compare_titles("Hackatón", "Hackaton"), Ordering::Greater);
        assert_eq!(compare_titles("Ñandú", "Zeta"), Ordering::Less);
        assert_eq!(compare_titles("éxito", "Éxito"), Ordering::Greater);
    }
}
