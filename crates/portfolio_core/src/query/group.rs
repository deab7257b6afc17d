//! Grouping and aggregation helpers.
//!
//! # Invariants
//! - Grouping never drops or duplicates a record: flattening every bucket
//!   yields the input multiset.
//! - Within a bucket, records keep their input order unless a helper
//!   documents a sort (`skills_by_category`).
//! - Bucket keys are ordered (`BTreeMap`) so iteration is deterministic.

use crate::model::date::year_label;
use crate::model::profile::Skill;
use crate::query::Queryable;
use std::collections::{BTreeMap, BTreeSet};

/// Bucket label for records without a category.
pub const OTHER_CATEGORY: &str = "other";

/// Partitions records by `key`, preserving input order inside buckets.
pub fn group_by<'a, R, K, I, F>(records: I, key: F) -> BTreeMap<K, Vec<&'a R>>
where
    R: ?Sized + 'a,
    K: Ord,
    I: IntoIterator<Item = &'a R>,
    F: Fn(&R) -> K,
{
    let mut groups: BTreeMap<K, Vec<&'a R>> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(record);
    }
    groups
}

/// Partitions records by category label (`other` when absent).
pub fn group_by_category<'a, R, I>(records: I) -> BTreeMap<String, Vec<&'a R>>
where
    R: Queryable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    group_by(records, |record: &R| {
        record
            .category_label()
            .unwrap_or(OTHER_CATEGORY)
            .to_string()
    })
}

/// Partitions records by the four-digit year of their sort date.
///
/// Records without a valid date land in the `unknown` bucket.
pub fn group_by_year<'a, R, I>(records: I) -> BTreeMap<String, Vec<&'a R>>
where
    R: Queryable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    group_by(records, |record: &R| year_label(record.sort_date()))
}

/// Case-sensitive unique values in lexicographic order.
pub fn distinct_values<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Unique tag/stack values across all records.
pub fn distinct_filter_values<'a, R, I>(records: I) -> Vec<String>
where
    R: Queryable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    distinct_values(records.into_iter().flat_map(|record| record.filter_values()))
}

/// Partitions skills by category, most proficient first inside a bucket.
///
/// Equal proficiency keeps input order.
pub fn skills_by_category(skills: &[Skill]) -> BTreeMap<String, Vec<&Skill>> {
    let mut groups = group_by(skills.iter(), |skill: &Skill| {
        skill.category_label().to_string()
    });
    for bucket in groups.values_mut() {
        bucket.sort_by(|a, b| b.proficiency.rank().cmp(&a.proficiency.rank()));
    }
    groups
}
