use clap::{Parser, Subcommand};

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Parser)]
#[command(name = "tasklist", about = "Minimal task list web application")]
pub struct Cli {
    /// Path to the SQLite database [default: ./tasks.db]
    #[arg(long, env = "TASKLIST_DB", global = true)]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server
    Serve {
        /// Address to listen on
        #[arg(long, env = "TASKLIST_BIND", default_value = DEFAULT_BIND)]
        bind: String,
        /// Directory served under /static
        #[arg(long, env = "TASKLIST_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
        static_dir: String,
    },

    /// Create database and tables (idempotent)
    Init,

    /// List tasks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve {
            bind: DEFAULT_BIND.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["tasklist"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(Command::default(), Command::Serve { .. }));
    }

    #[test]
    fn list_json_flag() {
        let cli = Cli::try_parse_from(["tasklist", "--db", "x.db", "list", "--json"]).unwrap();
        assert_eq!(cli.db.as_deref(), Some("x.db"));
        assert!(matches!(cli.command, Some(Command::List { json: true })));
    }
}
