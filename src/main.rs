use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showcase::render::{render_community, render_navbar, render_projects};
use showcase::{
    Config, NavbarState, ProjectsQuery, ProjectsView, RenderState, RepositorySource,
    ShowcaseClient, SiteData,
};

/// Open-source showcase: featured and all projects of an organisation.
#[derive(Debug, Parser)]
#[command(author, version, about, rename_all = "kebab-case")]
struct Cli {
    /// Organisation whose repositories are shown (overrides SHOWCASE_ORG).
    #[arg(long)]
    org: Option<String>,

    /// Base URL of the repository API (overrides SHOWCASE_API_URL).
    #[arg(long)]
    api_url: Option<String>,

    /// Site data file with meetups, social links and featured names.
    #[arg(long)]
    site_data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Navigation, featured projects and community.
    Home,
    /// Featured projects only.
    Featured,
    /// Every repository of the organisation.
    All {
        /// Page size requested from the API (overrides SHOWCASE_ALL_PER_PAGE).
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Meetups and social links.
    Community,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showcase=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(org) = cli.org {
        config.org = org;
    }
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(site_data) = cli.site_data {
        config.site_data = Some(site_data);
    }
    config.validate()?;

    let site = SiteData::load_or_builtin(config.site_data.as_deref())?;
    let client = ShowcaseClient::from_config(&config)?;
    let source = Arc::new(client.repos().clone());

    info!(org = %config.org, api = %config.api_url, "showcase starting");

    let mut ok = true;
    match cli.command.unwrap_or(Command::Home) {
        Command::Home => {
            print!("{}", render_navbar(&NavbarState::new()));
            println!();
            let query = ProjectsQuery::Featured(site.allow_list());
            ok = show(source, &config.org, query, "Featured Projects").await?;
            println!();
            print!("{}", render_community(&site));
        }
        Command::Featured => {
            let query = ProjectsQuery::Featured(site.allow_list());
            ok = show(source, &config.org, query, "Featured Projects").await?;
        }
        Command::All { per_page } => {
            let query = ProjectsQuery::all(per_page.unwrap_or(config.all_per_page));
            ok = show(source, &config.org, query, "All Projects").await?;
        }
        Command::Community => {
            print!("{}", render_community(&site));
        }
    }

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Mount a view, load it and print the outcome.
///
/// Ctrl-C while the request is outstanding unmounts the view, which aborts
/// the fetch.
async fn show<S>(
    source: Arc<S>,
    org: &str,
    query: ProjectsQuery,
    heading: &str,
) -> Result<bool, Box<dyn std::error::Error>>
where
    S: RepositorySource + 'static,
{
    let view = ProjectsView::new(org, query);
    let mut handle = view.spawn_load(source);

    tokio::select! {
        joined = &mut handle => {
            let applied = joined?;
            debug!(applied, "load finished");
        }
        _ = tokio::signal::ctrl_c() => {
            view.unmount();
            info!("interrupted, discarding pending response");
            return Ok(false);
        }
    }

    let state = view.render_state();
    print!("{}", render_projects(heading, &state));
    Ok(!matches!(state, RenderState::Error(_)))
}
