use crate::config::IdentityArgs;
use crate::prelude::{eprintln, println, *};
use bfhl_core::classify::{classify, stringify, token_kind, TokenKind};
use bfhl_core::response::{BfhlRequest, BfhlResponse, Identity};
use colored::Colorize;
use serde_json::Value;
use tokio::io::AsyncReadExt;

#[derive(Debug, clap::Parser)]
#[command(name = "classify")]
#[command(about = "Classify tokens locally without starting a server")]
pub struct App {
    /// Tokens to classify, taken verbatim as strings
    #[arg(value_name = "TOKEN")]
    pub tokens: Vec<String>,

    /// Read a JSON array or a {"data": [...]} document from a file ("-" for stdin)
    #[arg(short, long, conflicts_with = "tokens")]
    pub input: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[clap(flatten)]
    pub identity: IdentityArgs,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let data = match &app.input {
        Some(path) => parse_data(&read_input(path).await?)?,
        None => app.tokens.iter().cloned().map(Value::String).collect(),
    };

    if global.verbose {
        eprintln!("Classifying {} tokens...", data.len());
    }

    let identity: Identity = app.identity.into();
    let outcome = classify(&data);
    if let Err(err) = &outcome {
        log::error!("Error processing BFHL data: {err}");
    }
    let response = BfhlResponse::from_outcome(&identity, outcome);

    if app.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", format_response_text(&data, &response));
    }

    Ok(())
}

async fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("Failed to read stdin")?;
        Ok(buffer)
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| f!("Failed to read {path}"))
    }
}

/// Accept either a bare JSON array or a request document with a `data` array.
fn parse_data(input: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(input).context("Input is not valid JSON")?;

    match value {
        Value::Array(items) => Ok(items),
        Value::Object(_) => {
            let request: BfhlRequest = serde_json::from_value(value)
                .map_err(|e| Error::InvalidInput(f!("expected a \"data\" array: {e}")))?;
            Ok(request.data)
        }
        other => Err(Error::InvalidInput(f!("expected a JSON array, got {other}")).into()),
    }
}

fn kind_label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Integer => "integer",
        TokenKind::Letter => "letter",
        TokenKind::Word => "word",
        TokenKind::Special => "special",
    }
}

fn format_response_text(data: &[Value], response: &BfhlResponse) -> String {
    let mut result = String::new();

    result.push_str(&f!("\n{}\n", "TOKENS".bright_cyan().bold()));
    if data.is_empty() {
        result.push_str(&f!("{}\n", "No tokens given.".yellow()));
    } else {
        let mut tokens = new_table();
        for (idx, value) in data.iter().enumerate() {
            let token = stringify(value);
            let kind = kind_label(token_kind(&token));
            tokens.add_row(prettytable::row![idx + 1, f!("{token:?}"), kind]);
        }
        result.push_str(&tokens.to_string());
    }

    result.push_str(&f!("\n{}\n", "RESULT".bright_cyan().bold()));
    let mut summary = new_table();
    summary.add_row(prettytable::row!["Success", response.is_success]);
    summary.add_row(prettytable::row!["User ID", response.user_id]);
    summary.add_row(prettytable::row!["Email", response.email]);
    summary.add_row(prettytable::row!["Roll Number", response.roll_number]);
    summary.add_row(prettytable::row!["Odd Numbers", response.odd_numbers.join(", ")]);
    summary.add_row(prettytable::row!["Even Numbers", response.even_numbers.join(", ")]);
    summary.add_row(prettytable::row!["Alphabets", response.alphabets.join(", ")]);
    summary.add_row(prettytable::row![
        "Special Characters",
        response.special_characters.join(", ")
    ]);
    summary.add_row(prettytable::row!["Sum", response.sum]);
    summary.add_row(prettytable::row!["Concat String", response.concat_string]);
    result.push_str(&summary.to_string());

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfhl_core::classify::classify_strings;
    use serde_json::json;

    #[test]
    fn test_parse_data_array() {
        let data = parse_data(r#"["a", 1, true]"#).unwrap();
        assert_eq!(data, vec![json!("a"), json!(1), json!(true)]);
    }

    #[test]
    fn test_parse_data_request_document() {
        let data = parse_data(r#"{"data": ["R", "$"]}"#).unwrap();
        assert_eq!(data, vec![json!("R"), json!("$")]);
    }

    #[test]
    fn test_parse_data_rejects_scalar() {
        let err = parse_data("42").unwrap_err();
        assert!(err.to_string().contains("expected a JSON array"));
    }

    #[test]
    fn test_parse_data_rejects_object_without_data() {
        let err = parse_data(r#"{"items": []}"#).unwrap_err();
        assert!(err.to_string().contains("expected a \"data\" array"));
    }

    #[test]
    fn test_parse_data_rejects_invalid_json() {
        assert!(parse_data("[1, 2").is_err());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(kind_label(token_kind("-12")), "integer");
        assert_eq!(kind_label(token_kind("a")), "letter");
        assert_eq!(kind_label(token_kind("abc")), "word");
        assert_eq!(kind_label(token_kind("a-c")), "special");
    }

    #[test]
    fn test_format_response_text() {
        let data: Vec<Value> = ["a", "1", "334", "4", "R", "$"]
            .into_iter()
            .map(|s| json!(s))
            .collect();
        let result = classify_strings(["a", "1", "334", "4", "R", "$"]).unwrap();
        let response = BfhlResponse::success(&Identity::default(), result);

        let text = format_response_text(&data, &response);

        assert!(text.contains("TOKENS"));
        assert!(text.contains("\"334\""));
        assert!(text.contains("integer"));
        assert!(text.contains("special"));
        assert!(text.contains("334, 4"));
        assert!(text.contains("339"));
        assert!(text.contains("rA"));
        assert!(text.contains("john_doe_17091999"));
    }

    #[test]
    fn test_format_response_text_empty() {
        let result = classify_strings(Vec::<String>::new()).unwrap();
        let response = BfhlResponse::success(&Identity::default(), result);
        let text = format_response_text(&[], &response);
        assert!(text.contains("No tokens given."));
    }
}
