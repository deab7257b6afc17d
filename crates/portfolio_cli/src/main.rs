//! `portfolio`: command-line browser over the portfolio content core.
//!
//! # Responsibility
//! - Map CLI flags onto config, query state and store operations.
//! - Render results as aligned text or pretty JSON.

mod args;
mod error;
mod print;

use args::{BlogArgs, Cli, Commands, ProjectGrouping, ProjectsArgs, TagsArgs, ThemeAction, ThemeArg};
use clap::Parser;
use error::CliError;
use log::{error, info, warn};
use portfolio_core::service::blog_service::BlogCatalog;
use portfolio_core::service::project_service::ProjectCatalog;
use portfolio_core::{
    init_logging, AppContext, MemoryPreferenceRepository, PortfolioConfig, PreferenceRepository,
    Project, QueryState, SortKey, SqlitePreferenceRepository, ThemeMode, ThemeService,
};
use print::{
    post_line, print_groups, print_json, print_post, print_project, print_route, project_line,
    skill_line, timeline_line,
};
use std::path::Path;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = resolve_config(&cli)?;
    if let Some(dir) = &config.log_dir {
        init_logging(&config.log_level, &dir.to_string_lossy())?;
    }

    if let Commands::Ping = cli.command {
        println!("portfolio_core ping={}", portfolio_core::ping());
        println!("portfolio_core version={}", portfolio_core::core_version());
        return Ok(());
    }

    match config.preferences_path() {
        Some(path) => {
            let preferences = open_preferences(&path)?;
            execute(cli, AppContext::from_seed(&config, preferences)?, true).await
        }
        None => {
            warn!("event=preferences_fallback module=cli status=memory");
            let preferences = MemoryPreferenceRepository::new();
            execute(cli, AppContext::from_seed(&config, preferences)?, false).await
        }
    }
}

/// Opens the preference database, creating its directory first.
fn open_preferences(path: &Path) -> Result<SqlitePreferenceRepository, CliError> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CliError::PreferenceDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(SqlitePreferenceRepository::open(path)?)
}

/// Config file (or defaults) with command-line overrides applied.
fn resolve_config(cli: &Cli) -> Result<PortfolioConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => PortfolioConfig::load(path)?,
        None => PortfolioConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
    }
    if let Some(db) = &cli.db {
        config.database_path = Some(db.clone());
    }
    if let Commands::Sync { no_delay: true } = cli.command {
        config.fetch = config.fetch.without_delay();
    }
    config.validate()?;
    Ok(config)
}

async fn execute<P: PreferenceRepository>(
    cli: Cli,
    mut ctx: AppContext<P>,
    persistent: bool,
) -> Result<(), CliError> {
    let json = cli.json;
    info!("event=cli_command module=cli status=start json={json}");

    match cli.command {
        Commands::Ping => Ok(()),
        Commands::Projects(args) => list_projects(ctx.projects_mut(), args, json),
        Commands::Project { key } => show_project(ctx.projects(), &key, json),
        Commands::Blog(args) => list_posts(ctx.blog_mut(), args, json),
        Commands::Post { key } => show_post(ctx.blog(), &key, json),
        Commands::Tags(args) => list_tags(&ctx, args, json),
        Commands::Skills => {
            let groups = ctx.profile().skills_by_category();
            if json {
                return print_json(&groups);
            }
            print_groups(&groups, skill_line);
            Ok(())
        }
        Commands::Timeline { by_year } => {
            let profile = ctx.profile();
            if by_year {
                let groups = profile.timeline_by_year();
                if json {
                    return print_json(&groups);
                }
                print_groups(&groups, timeline_line);
                return Ok(());
            }
            let events = profile.sorted_timeline();
            if json {
                return print_json(&events);
            }
            for event in events {
                println!("{}", timeline_line(event));
            }
            Ok(())
        }
        Commands::Theme { action } => {
            let action = action.unwrap_or(ThemeAction::Show);
            let mode = apply_theme(ctx.theme_mut(), action, persistent)?;
            if json {
                return print_json(&mode);
            }
            println!("{mode}");
            Ok(())
        }
        Commands::Route { path } => {
            let matched = ctx.routes().resolve(&path);
            if json {
                return print_json(&matched);
            }
            print_route(&matched);
            Ok(())
        }
        Commands::Sync { .. } => {
            ctx.fetch_all().await?;
            if json {
                return print_json(&serde_json::json!({
                    "projects": ctx.projects().total_count(),
                    "blog": ctx.blog().total_count(),
                    "timeline": ctx.profile().timeline().total_count(),
                }));
            }
            println!(
                "synced projects={} posts={} timeline={}",
                ctx.projects().total_count(),
                ctx.blog().total_count(),
                ctx.profile().timeline().total_count()
            );
            Ok(())
        }
    }
}

/// Mutations are refused when the preference store would not outlive the process.
fn apply_theme<P: PreferenceRepository>(
    theme: &mut ThemeService<P>,
    action: ThemeAction,
    persistent: bool,
) -> Result<ThemeMode, CliError> {
    let mode = match action {
        ThemeAction::Show => return Ok(theme.mode()),
        ThemeAction::Toggle => theme.mode().toggled(),
        ThemeAction::Set { mode: ThemeArg::Light } => ThemeMode::Light,
        ThemeAction::Set { mode: ThemeArg::Dark } => ThemeMode::Dark,
    };
    if !persistent {
        return Err(CliError::PreferencesUnavailable);
    }
    Ok(theme.set_mode(mode)?)
}

fn configure_query(query: &mut QueryState, search: Option<String>, tags: &[String], sort: Option<&str>) {
    if let Some(search) = search {
        query.set_search(search);
    }
    for tag in tags {
        if !query.selected_tags.contains(tag) {
            query.toggle_tag(tag);
        }
    }
    if let Some(sort) = sort {
        query.set_sort(SortKey::parse(sort));
    }
}

fn list_projects(catalog: &mut ProjectCatalog, args: ProjectsArgs, json: bool) -> Result<(), CliError> {
    configure_query(catalog.query_mut(), args.search, &args.tags, args.sort.as_deref());
    catalog
        .query_mut()
        .set_category(args.category.map(|category| category.as_str().to_string()));

    if let Some(grouping) = args.group {
        let groups = match grouping {
            ProjectGrouping::Category => catalog.group_by_category(),
            ProjectGrouping::Year => catalog.group_by_year(),
            ProjectGrouping::Status => catalog.group_by_status(),
        };
        if json {
            return print_json(&groups);
        }
        print_groups(&groups, project_line);
        return Ok(());
    }

    let with_tech: Option<Vec<&str>> = args.tech.as_deref().map(|tech| {
        catalog
            .by_technology(tech)
            .into_iter()
            .map(|project| project.id.as_str())
            .collect()
    });
    let projects: Vec<&Project> = catalog
        .filtered()
        .into_iter()
        .filter(|project| !args.featured || project.featured)
        .filter(|project| {
            with_tech
                .as_ref()
                .map_or(true, |ids| ids.contains(&project.id.as_str()))
        })
        .collect();

    if json {
        return print_json(&projects);
    }
    for project in &projects {
        println!("{}", project_line(project));
    }
    println!("{} of {} projects", projects.len(), catalog.total_count());
    Ok(())
}

fn show_project(catalog: &ProjectCatalog, key: &str, json: bool) -> Result<(), CliError> {
    let store = catalog.store();
    let project = store
        .get_by_id(key)
        .or_else(|| store.get_by_slug(key))
        .ok_or_else(|| CliError::NotFound {
            kind: "project",
            key: key.to_string(),
        })?;
    if json {
        return print_json(project);
    }
    print_project(project);
    Ok(())
}

fn list_posts(catalog: &mut BlogCatalog, args: BlogArgs, json: bool) -> Result<(), CliError> {
    configure_query(catalog.query_mut(), args.search, &args.tags, args.sort.as_deref());

    let posts: Vec<_> = catalog
        .filtered()
        .into_iter()
        .filter(|post| !args.featured || post.featured)
        .collect();

    if json {
        return print_json(&posts);
    }
    for post in &posts {
        println!("{}", post_line(post));
    }
    println!("{} of {} posts", posts.len(), catalog.total_count());
    Ok(())
}

fn show_post(catalog: &BlogCatalog, key: &str, json: bool) -> Result<(), CliError> {
    let store = catalog.store();
    let post = store
        .get_by_slug(key)
        .or_else(|| store.get_by_id(key))
        .ok_or_else(|| CliError::NotFound {
            kind: "post",
            key: key.to_string(),
        })?;
    if json {
        return print_json(post);
    }
    print_post(post);
    Ok(())
}

fn list_tags<P: PreferenceRepository>(
    ctx: &AppContext<P>,
    args: TagsArgs,
    json: bool,
) -> Result<(), CliError> {
    if args.blog {
        let tags = ctx.blog().all_tags();
        if json {
            return print_json(&tags);
        }
        println!("{}", tags.join("\n"));
        return Ok(());
    }

    let projects = ctx.projects();
    if let Some(dimension) = args.dimension {
        let values = projects.distinct_stack_values(Some(dimension.into()));
        if json {
            return print_json(&values);
        }
        println!("{}", values.join("\n"));
        return Ok(());
    }

    let tags = projects.distinct_tags();
    let stack = projects.distinct_stack_values(None);
    if json {
        return print_json(&serde_json::json!({ "tags": tags, "stack": stack }));
    }
    println!("tags: {}", tags.join(", "));
    println!("stack: {}", stack.join(", "));
    Ok(())
}
