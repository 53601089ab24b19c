//! Spaces Explorer - search HuggingFace Spaces from the command line.
//!
//! The `search` command collects the same filters as the search form, runs
//! one catalog query and prints the result table. `options` lists the
//! accepted values for every filter.

mod render;

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use render::OutputFormat;
use spaces_core::{
    option_tables, HubCatalog, HubConfig, SearchConfig, SearchInput, SpacesError, SpacesExplorer,
};
use tracing::{debug, error, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "spaces-explorer")]
#[command(about = "Search HuggingFace Spaces with library, license, tag and hardware filters")]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Hub endpoint (overrides HF_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search spaces and print the results
    Search(SearchArgs),
    /// List the accepted values for each filter
    Options,
}

#[derive(ClapArgs, Debug)]
struct SearchArgs {
    /// Free-text search query
    #[arg(short, long, default_value = "")]
    query: String,

    /// Library filter (All, Gradio, Streamlit, Flask, FastAPI, Transformers, Diffusers)
    #[arg(long, default_value = SearchConfig::ALL)]
    library: String,

    /// License filter (All, Apache-2.0, MIT, BSD-3-Clause, GPL-3.0, ...)
    #[arg(long, default_value = SearchConfig::ALL)]
    license: String,

    /// Comma-separated tags, e.g. "text-generation, image-classification"
    #[arg(short, long)]
    tags: Option<String>,

    /// Visibility filter (All, Public, Private)
    #[arg(long, default_value = SearchConfig::ALL)]
    visibility: String,

    /// Hardware filter (All, CPU, GPU)
    #[arg(long, default_value = SearchConfig::ALL)]
    hardware: String,

    /// Sort key (Last Modified, First Indexed, Likes, Runs)
    #[arg(long, default_value = "Last Modified")]
    sort_by: String,

    /// Sort direction (Descending, Ascending)
    #[arg(long, default_value = "Descending")]
    direction: String,

    /// Maximum number of results
    #[arg(
        short,
        long,
        default_value_t = SearchConfig::DEFAULT_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..=100)
    )]
    limit: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl From<&SearchArgs> for SearchInput {
    fn from(args: &SearchArgs) -> Self {
        SearchInput {
            query: args.query.clone(),
            library: args.library.clone(),
            license: args.license.clone(),
            tags: args.tags.clone(),
            visibility: args.visibility.clone(),
            hardware: args.hardware.clone(),
            sort_by: args.sort_by.clone(),
            direction: args.direction.clone(),
            limit: args.limit,
        }
    }
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only results. RUST_LOG overrides
    // the --debug level.
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));
    FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    if let Err(err) = run(args) {
        error!("{:#}", err);
        let code = err
            .downcast_ref::<SpacesError>()
            .map(SpacesError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Options => {
            println!("{}", render::render_options(&option_tables()));
            Ok(())
        }
        Command::Search(search) => {
            let config = HubConfig::from_env_with_endpoint(args.endpoint.as_deref())?;
            debug!("Hub config: {:?}", config);

            // One client for the life of the process.
            let explorer = SpacesExplorer::new(HubCatalog::new(config)?);

            info!("Searching spaces");
            let rows = explorer.run(&SearchInput::from(&search))?;
            println!("{}", render::render(&rows, search.format)?);
            Ok(())
        }
    }
}
