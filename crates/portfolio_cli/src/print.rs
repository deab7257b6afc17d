//! Text and JSON renderers.

use crate::error::CliError;
use portfolio_core::model::profile::{Skill, TimelineEvent};
use portfolio_core::{BlogPost, Project, RouteMatch};
use serde::Serialize;
use std::collections::BTreeMap;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let out = serde_json::to_string_pretty(value).map_err(CliError::Render)?;
    println!("{out}");
    Ok(())
}

pub fn project_line(project: &Project) -> String {
    let date = project.end_date.as_deref().unwrap_or(&project.start_date);
    let star = if project.featured { "*" } else { " " };
    format!(
        "{star} {:<24} {:<10} {:<18} {}",
        project.slug,
        date,
        project.category.as_str(),
        project.title
    )
}

pub fn print_project(project: &Project) {
    println!("{}", project.title);
    println!("  id:        {}", project.id);
    println!("  slug:      {}", project.slug);
    println!("  category:  {}", project.category.as_str());
    if let Some(status) = project.status {
        println!("  status:    {}", status.as_str());
    }
    match &project.end_date {
        Some(end) => println!("  dates:     {} .. {end}", project.start_date),
        None => println!("  dates:     {} .. ongoing", project.start_date),
    }
    if !project.tags.is_empty() {
        println!("  tags:      {}", project.tags.join(", "));
    }
    let stack: Vec<&str> = project.stack.entries().collect();
    if !stack.is_empty() {
        println!("  stack:     {}", stack.join(", "));
    }
    if !project.short_description.is_empty() {
        println!();
        println!("{}", project.short_description);
    }
    for metric in &project.metrics {
        println!("  - {}: {}", metric.label, metric.value);
    }
    for link in &project.links {
        println!("  -> {} <{}>", link.label, link.url);
    }
}

pub fn post_line(post: &BlogPost) -> String {
    let star = if post.featured { "*" } else { " " };
    format!("{star} {:<10} {:<32} {}", post.published_at, post.slug, post.title)
}

pub fn print_post(post: &BlogPost) {
    println!("{}", post.title);
    println!("  by {} on {}", post.author, post.published_at);
    if let Some(updated) = &post.updated_at {
        println!("  updated {updated}");
    }
    if let Some(minutes) = post.reading_time_minutes {
        println!("  {minutes} min read");
    }
    if !post.tags.is_empty() {
        println!("  tags: {}", post.tags.join(", "));
    }
    println!();
    println!("{}", post.content);
}

pub fn print_groups<T>(groups: &BTreeMap<String, Vec<&T>>, line: impl Fn(&T) -> String) {
    for (label, items) in groups {
        println!("{label} ({})", items.len());
        for &item in items {
            println!("  {}", line(item));
        }
    }
}

pub fn skill_line(skill: &Skill) -> String {
    match skill.years_of_experience {
        Some(years) => format!("{:<26} {:<12} {years}y", skill.name, skill.proficiency.as_str()),
        None => format!("{:<26} {}", skill.name, skill.proficiency.as_str()),
    }
}

pub fn timeline_line(event: &TimelineEvent) -> String {
    format!("{:<10} {:<13} {}", event.date, event.kind.as_str(), event.title)
}

pub fn print_route(matched: &RouteMatch<'_>) {
    let route = matched.route;
    println!("{} -> {:?} ({:?})", route.name, route.view, route.layout);
    println!("  title: {}", route.title);
    for (name, value) in &matched.params {
        println!("  {name} = {value}");
    }
    if route.requires_auth || route.requires_admin {
        println!(
            "  requires_auth={} requires_admin={}",
            route.requires_auth, route.requires_admin
        );
    }
}
