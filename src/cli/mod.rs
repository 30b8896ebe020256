mod commands;


use std::net::IpAddr;

use clap::{ArgAction, Args, Parser, Subcommand};
use miette::Result;

use crate::api::{self, DEFAULT_PORT};

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about = "Portfolio website backend", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the REST API server
    Serve {
        #[command(flatten)]
        database: DatabaseArgs,

        /// Host address to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, env = "FOLIO_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Serve the OpenAPI reference at /api/docs
        #[arg(long)]
        docs: bool,

        /// Skip seeding empty collections at startup
        #[arg(long)]
        no_seed: bool,
    },
    /// Seed empty collections with the default portfolio content and exit
    Seed {
        #[command(flatten)]
        database: DatabaseArgs,
    },
}

/// Where the document store lives.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DatabaseArgs {
    /// Document store URL, e.g. sqlite://folio.db or sqlite::memory:
    #[arg(long, env = "FOLIO_DATABASE_URL")]
    pub database_url: String,

    /// Database name every document is scoped to
    #[arg(long, env = "FOLIO_DATABASE_NAME")]
    pub database_name: String,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    api::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve {
            database,
            host,
            port,
            docs,
            no_seed,
        } => {
            let config = api::Config {
                host,
                port,
                enable_docs: docs,
            };
            commands::serve::run(&database, config, !no_seed).await
        }
        Commands::Seed { database } => commands::seed::run(&database).await.map(|_| ()),
    }
}
