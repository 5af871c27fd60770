use anyhow::Result;
use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};
use topdocs_core::{SearchConfig, MAX_RESULT_DOCUMENT_COUNT};
use topdocs_server::load_app;
use tokio::net::TcpListener;

#[derive(Parser)]
struct Args {
    /// Corpus file or directory (JSON/JSONL)
    #[arg(long, default_value = "./corpus")]
    corpus: String,
    /// Space-separated stop words
    #[arg(long, default_value = "")]
    stop_words: String,
    /// Result cap per query
    #[arg(long, default_value_t = MAX_RESULT_DOCUMENT_COUNT)]
    max_results: usize,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let config = SearchConfig::new(args.max_results)?;
    let app: Router = load_app(&args.corpus, &args.stop_words, config)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
