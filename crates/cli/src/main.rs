use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use output::{OutputFormat, print_error};
use prokit_platform::Dialect;

/// prokit - path resolution and argument quoting for build-file evaluation
#[derive(Parser)]
#[command(name = "prokit")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Dialect for path rules and quoting: posix or windows-cmd (default: host)
  #[arg(long, global = true, env = "PROKIT_DIALECT")]
  dialect: Option<Dialect>,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Resolve a path against a base directory and normalize it
  Resolve {
    /// Path to resolve; an empty path resolves to nothing
    path: String,

    /// Base directory for relative paths (default: current directory)
    #[arg(short, long)]
    base: Option<String>,
  },

  /// Report whether paths are files, directories or missing (always uses host path rules)
  Probe {
    #[arg(required = true)]
    paths: Vec<String>,
  },

  /// Quote arguments into a single command line
  Quote {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
  },

  /// Print the part of a path after its last '/'
  Segment { path: String },

  /// Show the host dialect and each dialect's special characters
  Info,
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  if let Err(err) = run(cli) {
    print_error(&format!("{:#}", err));
    std::process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  let dialect = cli.dialect.unwrap_or_default();

  match cli.command {
    Commands::Resolve { path, base } => cmd::cmd_resolve(&path, base.as_deref(), dialect, cli.output),
    Commands::Probe { paths } => cmd::cmd_probe(&paths, cli.output),
    Commands::Quote { args } => cmd::cmd_quote(&args, dialect, cli.output),
    Commands::Segment { path } => cmd::cmd_segment(&path, cli.output),
    Commands::Info => cmd::cmd_info(cli.output),
  }
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}
