use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use timetally::OutputFormat;
use timetally::commands;
use timetally::config;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Total the durations of time ranges like 08:25-14:50")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Comma-separated ranges (08:25-12:00,12:45-17:10) or '+'-joined
    /// durations (2h30m+45m); 'now' stands for the current time
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Reject ranges that end before they start instead of assuming
    /// they cross midnight
    #[arg(long)]
    no_wrap: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or edit configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Set { key: String, value: String },
    Get { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load()?;

    match &cli.command {
        Some(Commands::Config(args)) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Set { key, value } => commands::config::set(key, value)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
        None => match &cli.expression {
            Some(expression) => {
                commands::calc::total(&config, expression, cli.no_wrap, cli.format)?;
            }
            None => bail!("Expected a time expression like '08:25-14:50' (see --help)"),
        },
    }

    Ok(())
}
