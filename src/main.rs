use std::path::PathBuf;

use clap::Parser;
use lexiquiz::{
    quiz::Scorer,
    store::{QuizLog, WordStore},
    AppState,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding the word-list CSV files and the quiz log.
    #[arg(short, long, env, default_value = "data")]
    data_dir: PathBuf,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,lexiquiz=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let store = WordStore::standard(&args.data_dir);
    for dict in store.dictionaries() {
        if !dict.path.exists() {
            tracing::warn!("word list for '{}' not found at {:?}", dict.id, dict.path);
        }
    }

    let log = QuizLog::new(args.data_dir.join("quiz_log.json"));
    let state = AppState {
        store,
        scorer: Scorer::new(log.clone()),
        log,
    };

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, lexiquiz::router(state)).await?;

    Ok(())
}
