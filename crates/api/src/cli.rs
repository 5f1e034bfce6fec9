use clap::{Parser, Subcommand};

/// filmcrew - actors and directors, managed over HTTP
#[derive(Debug, Parser)]
#[command(name = "filmcrew-api")]
#[command(version)]
pub struct Cli {
    /// Override `DATABASE_URL` for this invocation.
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Apply pending migrations and serve HTTP (the default)
    Serve,
    /// Schema migration tasks
    Db {
        #[command(subcommand)]
        task: DbCommands,
    },
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum DbCommands {
    /// Apply every pending migration
    Migrate,
    /// Undo applied migrations newer than `target`
    Revert {
        /// Version to revert down to; 0 reverts everything
        #[arg(long, default_value_t = 0)]
        target: i64,
    },
}

impl Cli {
    /// The subcommand to run; a bare invocation serves.
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}
