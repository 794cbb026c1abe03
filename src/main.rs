use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod account;
mod cli;
mod prompter;
mod provider;
mod storage;

use cli::args::ConfigureArgs;

#[derive(Parser)]
#[command(
    name = "fedcfg",
    about = "Manage identity provider accounts for federated AWS logins"
)]
struct Cli {
    /// Path to the account file (default: ~/.fedcfg)
    #[arg(long, global = true, env = "FEDCFG_CONFIGFILE")]
    config: Option<String>,

    /// Name of the IDP account to use
    #[arg(
        short = 'a',
        long,
        global = true,
        env = "FEDCFG_IDP_ACCOUNT",
        default_value = "default"
    )]
    idp_account: String,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or update an IDP account
    Configure(ConfigureArgs),

    /// Print the settings of an IDP account
    Show {
        /// Print JSON instead of the summary
        #[arg(long)]
        json: bool,
    },

    /// List configured IDP accounts
    List,

    /// List supported identity providers
    Providers,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    let idp_account = cli.idp_account.as_str();

    let result = match cli.command {
        Commands::Configure(args) => cli::commands::cmd_configure(config, idp_account, args),
        Commands::Show { json } => cli::commands::cmd_show(config, idp_account, json),
        Commands::List => cli::commands::cmd_list(config),
        Commands::Providers => cli::commands::cmd_providers(),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
