use crate::prelude::*;
use clap::Parser;

mod call;
mod classify;
mod config;
mod error;
mod prelude;
mod serve;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Classify mixed arrays of numbers, letters and symbols over HTTP"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "BFHL_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Start the HTTP API server
    Serve(crate::serve::App),

    /// Classify tokens locally without starting a server
    Classify(crate::classify::App),

    /// Send a data array to a running server
    Call(crate::call::App),
}

/// Logger reading `RUST_LOG`, falling back to `info`.
fn logger() -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment and defaults still apply.
    dotenvy::dotenv().ok();
    logger().init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(sub_app) => crate::serve::run(sub_app, app.global).await,
        SubCommands::Classify(sub_app) => crate::classify::run(sub_app, app.global).await,
        SubCommands::Call(sub_app) => crate::call::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        App::command().debug_assert();
    }

    #[test]
    fn test_logger_defaults_to_info() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        let logger = logger().build();
        assert_eq!(logger.filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_serve_flags() {
        let app = App::try_parse_from([
            "bfhl",
            "serve",
            "--port",
            "9000",
            "--cors-origins",
            "*",
            "--roll-number",
            "XYZ9",
        ])
        .unwrap();

        match app.command {
            SubCommands::Serve(serve) => {
                assert_eq!(serve.port, 9000);
                assert_eq!(serve.cors_origins, "*");
                assert_eq!(serve.identity.roll_number, "XYZ9");
            }
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn test_classify_rejects_tokens_with_input() {
        let result = App::try_parse_from(["bfhl", "classify", "a", "--input", "data.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_call_tokens() {
        let app = App::try_parse_from(["bfhl", "--verbose", "call", "a", "1"]).unwrap();

        assert!(app.global.verbose);
        match app.command {
            SubCommands::Call(call) => assert_eq!(call.tokens, vec!["a", "1"]),
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }
}
