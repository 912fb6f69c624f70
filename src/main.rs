use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use quizcards::{names, source::DataSource, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding `<level>/index.json` and the question files.
    #[arg(long, env, default_value = "data")]
    data_dir: PathBuf,

    /// Base URL to fetch question data from instead of the data directory.
    #[arg(long, env)]
    data_url: Option<String>,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Levels shown in the level bar, comma separated.
    #[arg(long, env, value_delimiter = ',', default_value = names::DEFAULT_LEVELS)]
    levels: Vec<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "quizcards=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let source = match &args.data_url {
        Some(url) => DataSource::from_url(url),
        None => DataSource::from_dir(args.data_dir),
    };
    let state = AppState {
        source,
        levels: args.levels.into(),
    };

    let address = args.address.parse::<SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, quizcards::router(state)).await?;

    Ok(())
}
