//! Login URL command - prints where to start the identity provider flow.

use crosspost::Session;

use crate::output::OutputFormat;

/// Run the `login-url` command
pub fn run(session: &Session, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let url = session.login_url();

    match format {
        OutputFormat::Human => {
            println!("Open this URL in a browser to log in with Twitter:");
            println!();
            println!("  {url}");
            println!();
            println!("Then copy the value of the `sessionID` cookie into CROSSPOST_SESSION.");
        }
        OutputFormat::Json => {
            let value = serde_json::json!({ "login_url": url.as_str() });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
