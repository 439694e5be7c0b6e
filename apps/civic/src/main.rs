use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use civic::api_client::{CivicApiClient, CivicBackend, ReactionKind};
use civic::config::Config;
use civic::discovery::{CandidateDiscovery, FilterState, PositionCategory};
use civic::engagement::{CommunityBoard, QuestionComposer, ReactionController};
use civic::errors::{Acknowledgement, CivicError, SubmitError};
use civic::fixtures;
use civic::models::{CandidateId, QuestionCategory};
use civic::views::{candidates, community, elections, feed, profile};

fn cli() -> Command {
    clap::command!()
        .about("Browse candidates, elections and community questions from the terminal")
        .subcommand_required(true)
        .subcommand(
            Command::new("candidates")
                .about("List candidates, optionally filtered")
                .arg(Arg::new("query").long("query").short('q').action(ArgAction::Set))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .short('c')
                        .help("All, City Council, State Assembly or Congress")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("issue")
                        .long("issue")
                        .short('i')
                        .conflicts_with("link")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("link")
                        .long("link")
                        .help("Deep link carrying an `issue` query parameter")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("ask")
                .about("Ask a candidate a question")
                .arg(Arg::new("candidate").required(true))
                .arg(Arg::new("question").required(true))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .short('c')
                        .default_value("General"),
                ),
        )
        .subcommand(
            Command::new("react")
                .about("Like or dislike a candidate")
                .arg(Arg::new("candidate").required(true))
                .arg(
                    Arg::new("kind")
                        .required(true)
                        .value_parser(["like", "dislike"]),
                ),
        )
        .subcommand(
            Command::new("elections").about("Show elections").arg(
                Arg::new("tab")
                    .long("tab")
                    .short('t')
                    .value_parser(["upcoming", "micro", "past"])
                    .default_value("upcoming"),
            ),
        )
        .subcommand(Command::new("community").about("Show community questions"))
        .subcommand(
            Command::new("feed").about("Show the civic activity feed").arg(
                Arg::new("category")
                    .long("category")
                    .short('c')
                    .value_parser(feed::FEED_FILTERS)
                    .ignore_case(true)
                    .default_value("All"),
            ),
        )
        .subcommand(Command::new("profile").about("Show your profile"))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let matches = cli().get_matches();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting civic v{}", env!("CARGO_PKG_VERSION"));
    debug!("API base: {}", config.api_base);

    let backend: Arc<dyn CivicBackend> = Arc::new(CivicApiClient::new(&config.api_base));

    match matches.subcommand() {
        Some(("candidates", args)) => list_candidates(backend, args).await?,
        Some(("ask", args)) => return ask(backend, args).await,
        Some(("react", args)) => return react(backend, args).await,
        Some(("elections", args)) => {
            let tab: elections::ElectionTab = arg(args, "tab")
                .unwrap_or("upcoming")
                .parse()
                .map_err(CivicError::Validation)?;
            print!("{}", elections::render_elections(&fixtures::elections(), tab));
        }
        Some(("community", _)) => {
            let board = CommunityBoard::new(fixtures::community_questions());
            print!("{}", community::render_questions(&board));
        }
        Some(("feed", args)) => {
            let category = arg(args, "category").unwrap_or("All");
            print!("{}", feed::render_feed(&fixtures::civic_events(), category));
        }
        Some(("profile", _)) => print!("{}", profile::render_profile(&fixtures::user_profile())),
        _ => unreachable!("subcommand_required"),
    }

    Ok(ExitCode::SUCCESS)
}

fn arg<'a>(args: &'a ArgMatches, name: &str) -> Option<&'a str> {
    args.get_one::<String>(name).map(String::as_str)
}

async fn list_candidates(backend: Arc<dyn CivicBackend>, args: &ArgMatches) -> Result<()> {
    let mut filter = match arg(args, "link") {
        Some(link) => FilterState::from_deep_link(link),
        None => FilterState::default().with_issue(arg(args, "issue").unwrap_or_default()),
    };
    if let Some(query) = arg(args, "query") {
        filter = filter.with_query(query);
    }
    if let Some(category) = arg(args, "category") {
        let category: PositionCategory = category.parse().map_err(CivicError::Validation)?;
        filter = filter.with_category(category);
    }

    let discovery = CandidateDiscovery::mount(backend, filter).await;
    print!("{}", candidates::render_discovery(&discovery));
    Ok(())
}

async fn ask(backend: Arc<dyn CivicBackend>, args: &ArgMatches) -> Result<ExitCode> {
    let candidate = CandidateId::parse(arg(args, "candidate").context("candidate is required")?);
    let category: QuestionCategory = arg(args, "category")
        .unwrap_or("General")
        .parse()
        .map_err(CivicError::Validation)?;

    let name = candidate_name(&candidate);
    let composer = QuestionComposer::new(backend, candidate, name);
    composer.set_text(arg(args, "question").unwrap_or_default());
    composer.set_category(category);

    let result = composer.submit().await;
    show(composer.acknowledge(&result));
    Ok(exit_code(&result))
}

async fn react(backend: Arc<dyn CivicBackend>, args: &ArgMatches) -> Result<ExitCode> {
    let candidate = CandidateId::parse(arg(args, "candidate").context("candidate is required")?);
    let kind: ReactionKind = arg(args, "kind")
        .unwrap_or("like")
        .parse()
        .map_err(CivicError::Validation)?;

    let controller = ReactionController::new(backend);
    let result = controller.react(&candidate, kind).await;
    show(ReactionController::acknowledge(kind, &result));
    Ok(exit_code(&result))
}

/// The dialog already told the user what went wrong; only the status is left.
fn exit_code<T>(result: &Result<T, SubmitError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("Submission failed: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Display name for the acknowledgement dialog; falls back to the raw id.
fn candidate_name(id: &CandidateId) -> String {
    fixtures::fallback_candidates()
        .into_iter()
        .find(|c| c.id.to_string() == id.to_string())
        .map(|c| c.name)
        .unwrap_or_else(|| format!("candidate {id}"))
}

fn show(ack: Option<Acknowledgement>) {
    if let Some(ack) = ack {
        println!("{}\n{}", ack.title, ack.message);
    }
}
