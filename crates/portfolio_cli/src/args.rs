//! Command-line surface for `portfolio`.

use clap::{Parser, Subcommand, ValueEnum};
use portfolio_core::{ProjectCategory, StackDimension};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "portfolio", version, about = "Portfolio content browser", long_about = None)]
pub struct Cli {
    /// TOML config file
    #[arg(long, env = "PORTFOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Overrides `log_level` from the config
    #[arg(long)]
    pub log_level: Option<String>,

    /// Absolute directory for log files; overrides `log_dir`
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// SQLite file for preferences; overrides `database_path` and the
    /// platform default
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Core health check
    Ping,
    /// List projects with filters
    Projects(ProjectsArgs),
    /// Show one project by id or slug
    Project { key: String },
    /// List blog posts with filters
    Blog(BlogArgs),
    /// Show one blog post by slug or id
    Post { key: String },
    /// Distinct tag/stack values
    Tags(TagsArgs),
    /// Skills grouped by category
    Skills,
    /// Timeline, newest first
    Timeline {
        #[arg(long)]
        by_year: bool,
    },
    /// Show or change the color scheme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Resolve a path against the route table
    Route { path: String },
    /// Run the simulated fetch on every store
    Sync {
        /// Skip the configured delays
        #[arg(long)]
        no_delay: bool,
    },
}

#[derive(Parser, Debug, Default)]
pub struct ProjectsArgs {
    #[arg(long, short)]
    pub search: Option<String>,
    /// Tag or stack value; repeat to require several
    #[arg(long = "tag", short)]
    pub tags: Vec<String>,
    /// software | product | project-management | event | research | ...
    #[arg(long, value_parser = parse_category)]
    pub category: Option<ProjectCategory>,
    /// latest | oldest | name-asc | name-desc | year-<N>
    #[arg(long)]
    pub sort: Option<String>,
    #[arg(long)]
    pub group: Option<ProjectGrouping>,
    #[arg(long, conflicts_with = "group")]
    pub featured: bool,
    /// Case-insensitive technology match over every stack dimension
    #[arg(long, conflicts_with = "group")]
    pub tech: Option<String>,
}

fn parse_category(value: &str) -> Result<ProjectCategory, String> {
    ProjectCategory::parse(value).ok_or_else(|| {
        let known: Vec<&str> = ProjectCategory::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown category `{value}`; expected one of {}", known.join(", "))
    })
}

#[derive(Parser, Debug, Default)]
pub struct BlogArgs {
    #[arg(long, short)]
    pub search: Option<String>,
    #[arg(long = "tag", short)]
    pub tags: Vec<String>,
    #[arg(long)]
    pub sort: Option<String>,
    #[arg(long)]
    pub featured: bool,
}

#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Blog tags instead of project values
    #[arg(long, conflicts_with = "dimension")]
    pub blog: bool,
    /// Restrict to one stack dimension
    #[arg(long)]
    pub dimension: Option<DimensionArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectGrouping {
    Category,
    Year,
    Status,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionArg {
    Technologies,
    Tools,
    Methodologies,
    Platforms,
    Domains,
    Skills,
}

impl From<DimensionArg> for StackDimension {
    fn from(value: DimensionArg) -> Self {
        match value {
            DimensionArg::Technologies => Self::Technologies,
            DimensionArg::Tools => Self::Tools,
            DimensionArg::Methodologies => Self::Methodologies,
            DimensionArg::Platforms => Self::Platforms,
            DimensionArg::Domains => Self::Domains,
            DimensionArg::Skills => Self::Skills,
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set { mode: ThemeArg },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeArg {
    Light,
    Dark,
}
