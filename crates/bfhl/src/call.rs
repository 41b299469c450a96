use crate::prelude::{eprintln, println, *};
use bfhl_core::response::BfhlRequest;
use serde_json::Value;

/// Tokens sent when none are given on the command line
pub const SAMPLE_DATA: [&str; 6] = ["a", "1", "334", "4", "R", "$"];

#[derive(Debug, clap::Parser)]
#[command(name = "call")]
#[command(about = "Send a data array to a running server and print the response")]
pub struct App {
    /// Endpoint to POST to
    #[arg(long, env = "BFHL_URL", default_value = "http://localhost:8000/api/bfhl")]
    pub url: String,

    /// Tokens to send as strings (defaults to a sample array)
    #[arg(value_name = "TOKEN")]
    pub tokens: Vec<String>,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let request = build_request(&app.tokens);

    if global.verbose {
        eprintln!("POST {} with {} tokens", app.url, request.data.len());
    }

    let client = reqwest::Client::new();
    let (status, body) = send(&client, &app.url, &request).await?;

    println!("Status Code: {}", status.as_u16());
    println!("Response: {}", serde_json::to_string_pretty(&body)?);

    Ok(())
}

fn build_request(tokens: &[String]) -> BfhlRequest {
    let data = if tokens.is_empty() {
        SAMPLE_DATA.iter().map(|s| Value::from(*s)).collect()
    } else {
        tokens.iter().cloned().map(Value::String).collect()
    };

    BfhlRequest { data }
}

/// POST the request and return the status code with the decoded JSON body
async fn send(
    client: &reqwest::Client,
    url: &str,
    request: &BfhlRequest,
) -> Result<(reqwest::StatusCode, Value)> {
    let response = client
        .post(url)
        .json(request)
        .send()
        .await
        .with_context(|| f!("Failed to reach {url}"))?;

    let status = response.status();
    let body: Value = response
        .json()
        .await
        .context("Failed to parse response body")?;

    Ok((status, body))
}
