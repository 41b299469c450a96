use crate::config::IdentityArgs;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Start the HTTP API server")]
pub struct App {
    /// Host to bind to
    #[arg(long, env = "BFHL_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "BFHL_PORT", default_value = "8000")]
    pub port: u16,

    /// Comma-separated list of allowed CORS origins ("*" allows any origin)
    #[arg(long, env = "CORS_ORIGINS", default_value = "http://localhost:3000")]
    pub cors_origins: String,

    #[clap(flatten)]
    pub identity: IdentityArgs,
}
