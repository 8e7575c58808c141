//! Users command - Account management from the shell.

use std::sync::Arc;

use crate::cli::args::{UsersAction, UsersArgs};
use crate::config::Config;
use crate::domain::CreateUser;
use crate::errors::AppResult;
use crate::infra::{DbSession, MySqlConnector, Persistence};
use crate::services::{AuthService, Authenticator};

/// Execute the users command
pub async fn execute(args: UsersArgs, config: Config) -> AppResult<()> {
    let session = DbSession::new(Arc::new(MySqlConnector::new(&config.database)?));
    let auth = Authenticator::new(Arc::new(Persistence::new(session.clone())));

    let result = run(&auth, args.action).await;
    session.disconnect().await;
    result
}

async fn run(auth: &dyn AuthService, action: UsersAction) -> AppResult<()> {
    match action {
        UsersAction::Create {
            name,
            mail,
            password,
            role,
        } => {
            let user = auth
                .register(CreateUser {
                    name,
                    mail,
                    password,
                    role: Some(role),
                })
                .await?;
            println!("Created user {} <{}> ({})", user.id, user.mail, user.role);
        }
        UsersAction::List => {
            for user in auth.list_users().await? {
                println!("{:>5}  {:<30} {:<20} {}", user.id, user.mail, user.name, user.role);
            }
        }
    }
    Ok(())
}
