//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Drone Delivery API - fleet, missions and orders over HTTP
#[derive(Parser, Debug)]
#[command(name = "drone-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Manage user accounts
    Users(UsersArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (defaults to the HOST setting)
    #[arg(short = 'H', long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (defaults to the PORT setting)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// User management actions
#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// Create an account with a hashed password
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// Login e-mail
        #[arg(long)]
        mail: String,
        /// Plain text password, at least 8 characters
        #[arg(long)]
        password: String,
        /// `cliente` or `admin`
        #[arg(long, default_value = "cliente")]
        role: String,
    },
    /// List accounts
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_users_create() {
        let cli = Cli::parse_from([
            "drone-api",
            "users",
            "create",
            "--name",
            "Anna",
            "--mail",
            "anna@example.com",
            "--password",
            "SecurePass123",
        ]);
        match cli.command {
            Commands::Users(UsersArgs {
                action: UsersAction::Create { role, mail, .. },
            }) => {
                assert_eq!(role, "cliente");
                assert_eq!(mail, "anna@example.com");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["drone-api", "migrate", "status", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Migrate(MigrateArgs {
                action: MigrateAction::Status
            })
        ));
    }
}
