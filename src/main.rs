//! CLI entry point for Find My Professor.
//!
//! Looks up a professor on PlanetTerp, prints their profile with per-course
//! letter grades, and keeps a list of recently searched professors.

mod infra;

use crate::infra::planetterp::PlanetTerpClient;
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use find_my_professor::config::Settings;
use find_my_professor::courses::CourseCode;
use find_my_professor::fetch::BasicClient;
use find_my_professor::output::{ProfileView, Star, print_json, print_pretty, to_json};
use find_my_professor::session::{SearchSessionController, SessionStatus};
use find_my_professor::store::{JsonFileStore, RecentSearchStore};
use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "find_my_professor")]
#[command(about = "Look up a professor's rating and course grades", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a professor by name
    Search {
        /// Professor name (partial names are resolved by PlanetTerp)
        #[arg(value_name = "NAME", num_args = 1.., required = true)]
        name: Vec<String>,

        /// Course to show the average for (defaults to the first course)
        #[arg(short, long)]
        course: Option<String>,

        /// Print the profile as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List recently searched professors
    Recent,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let settings = Settings::from_env();

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = settings
        .log_file_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = settings
        .log_file_path
        .file_name()
        .unwrap_or(OsStr::new("find_my_professor.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { name, course, json } => {
            search(&settings, &name.join(" "), course.as_deref(), json).await?;
        }
        Commands::Recent => {
            let recent =
                RecentSearchStore::open(JsonFileStore::new(&settings.recent_searches_path));
            if recent.is_empty() {
                println!("No recent searches");
            }
            for (i, name) in recent.list().iter().enumerate() {
                println!("{:>2}. {}", i + 1, name);
            }
        }
    }

    Ok(())
}

/// Runs one search session and renders the settled state.
#[tracing::instrument(skip(settings))]
async fn search(settings: &Settings, name: &str, course: Option<&str>, json: bool) -> Result<()> {
    let http = BasicClient::with_timeout(settings.http_timeout)?;
    let planetterp = Arc::new(PlanetTerpClient::new(http, settings.api_base_url.clone()));
    let recent = RecentSearchStore::open(JsonFileStore::new(&settings.recent_searches_path));

    let session = SearchSessionController::new(planetterp.clone(), planetterp, recent);
    session.search(name).await;

    if let Some(code) = course.and_then(CourseCode::from_listing) {
        if let Err(e) = session.select_course(&code) {
            warn!(error = %e, "Keeping default course");
        }
    }

    let state = session.snapshot();
    match state.status {
        SessionStatus::Loaded => {}
        SessionStatus::Error => {
            let message = state.error_message.unwrap_or_default();
            error!(error = %message, "Search failed");
            bail!(message);
        }
        SessionStatus::Idle | SessionStatus::Loading => {
            bail!("Search did not complete");
        }
    }

    let Some(view) = ProfileView::from_state(&state, &settings.profile_base_url) else {
        bail!("Search completed without a professor");
    };

    print_pretty(&view);
    if json {
        print_json(&view)?;
        println!("{}", to_json(&view)?);
    } else {
        render(&view);
    }

    info!(professor = %view.name, "Profile shown");
    Ok(())
}

fn render(view: &ProfileView) {
    let stars: String = view
        .stars
        .iter()
        .map(|star| match star {
            Star::Full => '★',
            Star::Half => '☆',
            Star::Empty => '·',
        })
        .collect();

    println!("{stars}");
    println!("{}", view.name);
    println!(
        "Rating: {}  |  Reviews: {}  |  Courses: {}",
        view.rating_display, view.reviews_display, view.course_count
    );

    match &view.selected_course {
        Some(course) => println!("Course average ({course}): {}", view.letter_grade),
        None => println!("Course average: {}", view.letter_grade),
    }
    for course in &view.courses {
        println!("  {:<10} {}", course.course.as_str(), course.letter_grade);
    }

    if let Some(url) = &view.profile_url {
        println!("Profile: {url}");
    }
}
