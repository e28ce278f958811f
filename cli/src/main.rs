//! OpenDesk CLI
//!
//! Posts a dataset file to a running OpenDesk API and prints a sample of the
//! returned assignments.
//!
//! # Usage
//!
//! ```bash
//! opendesk dataset.json
//! opendesk --api-url http://staging:8000 --sample 10 dataset.json
//! ```

use clap::Parser;
use colored::Colorize;
use serde::Deserialize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "opendesk")]
#[command(version = "0.1.0")]
#[command(about = "OpenDesk ticket assignment client", long_about = None)]
struct Cli {
    /// API endpoint URL
    #[arg(long, env = "OPENDESK_API_URL", default_value = "http://127.0.0.1:8000")]
    api_url: String,

    /// Number of assignments to print before summarizing the rest
    #[arg(long, short, default_value_t = 5)]
    sample: usize,

    /// Dataset file with agents and tickets
    dataset: PathBuf,
}

#[derive(Deserialize)]
struct AssignmentResponse {
    assignments: Vec<AssignmentDto>,
}

#[derive(Deserialize)]
struct AssignmentDto {
    ticket_id: String,
    assigned_agent_id: String,
    rationale: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let content = match std::fs::read_to_string(&cli.dataset) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{} {}: {}", "error:".red().bold(), cli.dataset.display(), e);
            return ExitCode::FAILURE;
        }
    };
    let payload: serde_json::Value = match serde_json::from_str(&content) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("{} invalid dataset file: {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let url = format!("{}/v1/ticket-assignment", cli.api_url.trim_end_matches('/'));
    println!("Posting {} to {}", cli.dataset.display(), url);

    let response = match reqwest::Client::new().post(&url).json(&payload).send().await {
        Ok(response) => response,
        Err(e) => {
            eprintln!(
                "{} connection failed (is the API running?): {}",
                "error:".red().bold(),
                e
            );
            return ExitCode::FAILURE;
        }
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        eprintln!("{} API returned {}\n{}", "error:".red().bold(), status, body);
        return ExitCode::FAILURE;
    }

    let results: AssignmentResponse = match response.json().await {
        Ok(results) => results,
        Err(e) => {
            eprintln!("{} unexpected response body: {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{} received {} assignments",
        "ok:".green().bold(),
        results.assignments.len()
    );
    for assignment in results.assignments.iter().take(cli.sample) {
        println!(
            "  {} -> {}",
            assignment.ticket_id.bold(),
            assignment.assigned_agent_id
        );
        println!("    {}", assignment.rationale.dimmed());
    }
    if results.assignments.len() > cli.sample {
        println!("  ... and {} more", results.assignments.len() - cli.sample);
    }

    ExitCode::SUCCESS
}
