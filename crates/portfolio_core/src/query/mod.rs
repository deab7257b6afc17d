//! Filter, sort and grouping engine over record sets.
//!
//! # Responsibility
//! - Derive views (filtered, then sorted) from a record set and query state.
//! - Provide grouping/aggregation helpers shared by every domain.
//!
//! # Invariants
//! - Derived views borrow from the record set; nothing is cloned or mutated.
//! - Every stage is a pure function of its inputs.

pub mod filter;
pub mod group;

use crate::model::blog::BlogPost;
use crate::model::profile::TimelineEvent;
use crate::model::project::Project;
use chrono::NaiveDate;

/// Read-only view of a record as seen by the query engine.
pub trait Queryable {
    /// Title used by name sorting.
    fn title(&self) -> &str;

    /// Free-text fields matched by search, tags and stack entries included.
    fn search_fields(&self) -> Vec<&str>;

    /// Flattened tag/stack values matched by the tag filter.
    fn filter_values(&self) -> Vec<&str>;

    /// Category label matched by the category filter.
    fn category_label(&self) -> Option<&str> {
        None
    }

    /// Date used by `latest`/`oldest`; `None` sorts as the earliest date.
    fn sort_date(&self) -> Option<NaiveDate>;

    /// Date whose year is matched by `year-<N>`.
    fn year_filter_date(&self) -> Option<NaiveDate> {
        self.sort_date()
    }
}

impl Queryable for Project {
    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.short_description.as_str(),
            self.full_description.as_str(),
        ];
        fields.extend(self.tag_and_stack_values());
        fields
    }

    fn filter_values(&self) -> Vec<&str> {
        self.tag_and_stack_values().collect()
    }

    fn category_label(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn sort_date(&self) -> Option<NaiveDate> {
        Project::sort_date(self)
    }

    fn year_filter_date(&self) -> Option<NaiveDate> {
        self.end_date_parsed()
    }
}

impl Queryable for BlogPost {
    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.excerpt.as_str(),
            self.content.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn filter_values(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    fn sort_date(&self) -> Option<NaiveDate> {
        self.published_on()
    }
}

impl Queryable for TimelineEvent {
    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn filter_values(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    fn category_label(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }

    fn sort_date(&self) -> Option<NaiveDate> {
        self.parsed_date()
    }
}
