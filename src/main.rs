//! Item API service.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                  ITEM API                     │
//!                     │                                               │
//!   Client Request    │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ──────────────────┼─▶│  http   │──▶│ extract  │──▶│ handlers  │  │
//!                     │  │ server  │   │(→ 422)   │   │           │  │
//!                     │  └─────────┘   └──────────┘   └─────┬─────┘  │
//!                     │                                     │        │
//!                     │                                     ▼        │
//!                     │                               ┌───────────┐  │
//!                     │                               │  items    │  │
//!                     │                               │ validate  │  │
//!                     │                               │ catalog   │  │
//!                     │                               │ counter   │  │
//!   Client Response   │  ┌─────────┐                  └─────┬─────┘  │
//!   ◀─────────────────┼──│ ApiError│◀─────────────────────────┘        │
//!                     │  │ / JSON  │                                  │
//!                     │  └─────────┘                                  │
//!                     │                                               │
//!                     │  config · observability · lifecycle           │
//!                     └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use item_api::lifecycle::{self, StartupOptions};

#[derive(Parser)]
#[command(name = "item-api")]
#[command(about = "Small JSON API for items and arithmetic", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    lifecycle::run(StartupOptions {
        config_path: args.config,
        bind_override: args.bind,
    })
    .await?;

    Ok(())
}
