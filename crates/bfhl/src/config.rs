use bfhl_core::response::{Identity, DEFAULT_EMAIL, DEFAULT_ROLL_NUMBER, DEFAULT_USER_ID};

/// Identity fields echoed in every response
#[derive(Debug, Clone, clap::Args)]
pub struct IdentityArgs {
    /// User id reported in responses
    #[arg(long, env = "BFHL_USER_ID", default_value = DEFAULT_USER_ID)]
    pub user_id: String,

    /// Email reported in responses
    #[arg(long, env = "BFHL_EMAIL", default_value = DEFAULT_EMAIL)]
    pub email: String,

    /// Roll number reported in responses
    #[arg(long, env = "BFHL_ROLL_NUMBER", default_value = DEFAULT_ROLL_NUMBER)]
    pub roll_number: String,
}

impl From<IdentityArgs> for Identity {
    fn from(args: IdentityArgs) -> Self {
        Identity::new(args.user_id, args.email, args.roll_number)
    }
}
