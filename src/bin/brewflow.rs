//! Command-line front end for a BrewFlow session

use anyhow::{anyhow, Result};
use brewflow::{
    config::{load_config, Config},
    core::description::{
        create_ai_description, DescriptionOutcome, DescriptionRequest, OpenRouterGenerator,
    },
    session::{Command, Mode, Session},
};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Cafe point of sale
#[derive(Parser, Debug)]
#[command(name = "brewflow", version, about, long_about = None)]
struct Cli {
    /// Path to a config file (defaults to <config dir>/brewflow/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the menu
    Menu,
    /// Show the kitchen board grouped by status
    Orders,
    /// List the table ordering links
    Tables,
    /// Print the bill of an order
    Bill {
        /// Order number
        number: u32,
    },
    /// Generate a menu description with AI
    Describe {
        /// Ingredients of the item
        #[arg(short, long)]
        ingredients: String,
        /// Style of the item (e.g., sweet, comforting)
        #[arg(short, long)]
        style: String,
        /// Model override
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Start an interactive session
    Session,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Menu => {
            let session = Session::load(&config).await;
            println!("{}", session.render_menu());
        }
        Commands::Orders => {
            let session = Session::load(&config).await;
            println!("{}", session.render_board(Utc::now()));
        }
        Commands::Tables => {
            let session = Session::load(&config).await;
            println!("{}", session.render_tables());
        }
        Commands::Bill { number } => {
            let session = Session::load(&config).await;
            println!("{}", session.staff().bill(number, &config.currency)?);
        }
        Commands::Describe {
            ingredients,
            style,
            model,
        } => describe(&config, ingredients, style, model).await?,
        Commands::Session => run_session(&config).await?,
    }

    Ok(())
}

async fn describe(
    config: &Config,
    ingredients: String,
    style: String,
    model: Option<String>,
) -> Result<()> {
    let request = DescriptionRequest::new(ingredients, style);
    // Reject bad input before asking for a key
    if let Err(errors) = request.validate() {
        for (field, messages) in errors {
            eprintln!("{}: {}", field, messages.join(" "));
        }
        return Err(anyhow!("invalid description request"));
    }

    let generator = OpenRouterGenerator::new(config.api_key()?)
        .with_base_url(&config.base_url)
        .with_model(model.unwrap_or_else(|| config.model.clone()));

    match create_ai_description(&generator, &request).await {
        DescriptionOutcome::Generated(text) => println!("{}", text),
        DescriptionOutcome::Invalid(errors) => {
            return Err(anyhow!("invalid description request: {:?}", errors))
        }
        DescriptionOutcome::Failed(message) => return Err(anyhow!(message)),
    }
    Ok(())
}

async fn run_session(config: &Config) -> Result<()> {
    let mut session = Session::load(config).await;
    println!("BrewFlow session. Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match session.mode() {
            Mode::Staff => print!("staff> "),
            Mode::Table(table) => print!("table {}> ", table),
        }
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match Command::parse(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(e)) => {
                eprintln!("{}", e);
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        match session.execute(command) {
            Ok(output) => println!("{}", output),
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}
