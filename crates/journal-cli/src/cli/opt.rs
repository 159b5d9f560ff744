use clap::{Args, Parser, Subcommand};

pub(crate) const DEFAULT_DATABASE_URL: &str = "sqlite://journal.sqlite?mode=rwc";

#[derive(Debug, Parser)]
#[command(name = "journal", about = "A personal journal in your terminal")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Open the interactive journal shell
    Run(Run),
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Db {
    #[arg(long, env = "JOURNAL_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub(crate) database_url: String,

    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,

    #[arg(long, help = "Seconds to wait for a free connection before a call fails")]
    pub(crate) db_acquire_timeout: Option<u64>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(short, long)]
    pub(crate) debug: bool,

    #[command(flatten)]
    pub(crate) db: Db,

    #[arg(long = "sentry-dsn", env = "JOURNAL_SENTRY_DSN", help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(long, default_value = "dev", help = "Set the environment reported to sentry")]
    pub(crate) env: String,
}
