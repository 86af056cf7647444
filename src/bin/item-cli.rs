use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "item-cli")]
#[command(about = "Command-line client for the item API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the service is up
    Health,
    /// Ask for a greeting
    Greet {
        #[arg(long)]
        name: Option<String>,
    },
    /// Echo an item id
    Item { item_id: i64 },
    /// Add two numbers
    Sum { a: f64, b: f64 },
    /// Double an integer
    Double { x: i64 },
    /// Create an item
    CreateItem {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        tax_rate: Option<f64>,
    },
    /// Fetch an item through the bounds-checked endpoint
    SafeItem {
        item_id: i64,
        #[arg(long)]
        limit: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Health => client.get(format!("{base}/")),
        Commands::Greet { name } => {
            let req = client.get(format!("{base}/greet"));
            match name {
                Some(name) => req.query(&[("name", name)]),
                None => req,
            }
        }
        Commands::Item { item_id } => client.get(format!("{base}/items/{item_id}")),
        Commands::Sum { a, b } => client
            .post(format!("{base}/sum"))
            .json(&json!({ "a": a, "b": b })),
        Commands::Double { x } => client.get(format!("{base}/double")).query(&[("x", x)]),
        Commands::CreateItem {
            name,
            price,
            tax_rate,
        } => client.post(format!("{base}/items")).json(&json!({
            "name": name,
            "price": price,
            "tax_rate": tax_rate,
        })),
        Commands::SafeItem { item_id, limit } => {
            let req = client.get(format!("{base}/safe-items/{item_id}"));
            match limit {
                Some(limit) => req.query(&[("limit", limit)]),
                None => req,
            }
        }
    };

    let res = request.send().await?;
    print_response(res).await
}

/// Pretty-print JSON bodies; anything else is shown as-is.
fn render_body(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(json) => serde_json::to_string_pretty(&json).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if !text.is_empty() {
            eprintln!("{}", render_body(&text));
        }
        std::process::exit(1);
    }

    println!("{}", render_body(&text));
    Ok(())
}
