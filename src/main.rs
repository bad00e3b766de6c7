use clap::{Parser, Subcommand, ValueEnum};
use cron_expand::render;
use cron_expand::{CronExpression, assemble, crontab};
use tracing_subscriber::EnvFilter;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "cron-expand")]
#[command(about = "Expand cron expressions into explicit field values", long_about = None)]
struct Cli {
    /// Log parse steps to stderr (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand one expression, e.g. `parse "*/15 0 1,15 * 1-5 /usr/bin/find"`.
    Parse {
        /// Expression words; joined with single spaces when given unquoted.
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Validate every expression in a crontab-style file.
    Check {
        path: String,

        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn format_expression(expr: &CronExpression, format: Format) -> Result<String> {
    match format {
        Format::Table => Ok(render::render_table(expr)),
        Format::Json => render::render_json(expr),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Parse { expression, format } => {
            let line = expression.join(" ");
            let expr = assemble(&line)?;
            println!("{}", format_expression(&expr, format)?);
        }
        Commands::Check { path, format } => {
            let entries = crontab::check_crontab_file(&path)?;
            for entry in &entries {
                println!("# line {}", entry.line);
                println!("{}", format_expression(&entry.expression, format)?);
            }
            println!("{}: {} expression(s) ok", path, entries.len());
        }
    }

    Ok(())
}
