use std::sync::Arc;

use clap::Parser;
use log::info;

use productivity_api::{serve, InMemoryTimerStore};

/// Serve the Pomodoro timer CRUD API over HTTP.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Address to bind, e.g. 0.0.0.0:3000
    #[arg(long, default_value = "0.0.0.0:3000")]
    addr: String,
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    env_logger::init();
    let args = Args::parse();

    let store = Arc::new(InMemoryTimerStore::new());
    info!("listening on {}", args.addr);
    serve(store, &args.addr).await
}
