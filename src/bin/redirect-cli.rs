use clap::{Parser, Subcommand};
use serde_json::Value;

use md_redirect::engine::target::extract_original;
use md_redirect::engine::{decide, NavigationRequest, RequestKind};
use md_redirect::host::BlockingResponse;

#[derive(Parser)]
#[command(name = "redirect-cli")]
#[command(about = "Inspect Markdown redirect decisions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the listener response for one navigation
    Decide {
        /// Absolute URL being navigated to
        url: String,

        /// Request type as the browser reports it
        #[arg(short, long, default_value = "main_frame")]
        kind: RequestKind,
    },
    /// Recover the original URL from a redirect target
    Decode {
        target: String,
    },
    /// Check a running decision service
    Status {
        #[arg(short, long, default_value = "http://127.0.0.1:2402")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decide { url, kind } => {
            let decision = decide(&NavigationRequest::new(url, kind))?;
            let response = BlockingResponse::from(decision);
            println!("{}", serde_json::to_string(&response)?);
        }
        Commands::Decode { target } => {
            println!("{}", extract_original(&target)?);
        }
        Commands::Status { url } => {
            let res = reqwest::Client::new()
                .get(format!("{}/health", url.trim_end_matches('/')))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: decision service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
