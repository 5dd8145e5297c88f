//! Current user commands.

use crosspost::Session;

use crate::output::OutputFormat;

/// Run the `whoami` command
pub async fn whoami(
    session: &Session,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let current = session.refresh_current_user().await?;

    match format {
        OutputFormat::Human => match &current.user {
            Some(user) => {
                println!("Account ID:  {}", user.account_id());
                println!("Twitter ID:  {}", user.twitter_id());
            }
            None => {
                println!("Not logged in. Run `crosspost login-url` to start.");
            }
        },
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&current)?);
        }
    }

    Ok(())
}

/// Run the `logout` command
pub async fn logout(
    session: &Session,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    session.logout_current_user().await?;

    match format {
        OutputFormat::Human => println!("Logged out."),
        OutputFormat::Json => {
            let value = serde_json::json!({ "logged_out": true });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
