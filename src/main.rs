use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::cli::send::SendInput;

/// folio - personal portfolio site
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio site and contact form client", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit a message through the contact form endpoint
    Send {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        message: String,

        /// Submission endpoint (overrides config file)
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = folio::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    folio::observability::init_observability(
        "folio",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => folio::cli::server::serve(config, host, port).await,
        Commands::Send {
            name,
            email,
            subject,
            message,
            endpoint,
        } => {
            folio::cli::send::send(
                config,
                SendInput {
                    name,
                    email,
                    subject,
                    message,
                    endpoint,
                },
            )
            .await
        }
    }
}
