//! Linked public key commands.

use crosspost::{Session, api::Npub};

use crate::output::OutputFormat;

/// Run the `keys list` command
pub async fn list(
    session: &Session,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let keys = session.public_keys().await?;

    match format {
        OutputFormat::Human => {
            if keys.is_empty() {
                println!("No public keys linked.");
                return Ok(());
            }
            for key in &keys {
                println!("{}", key.npub);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&keys)?);
        }
    }

    Ok(())
}

/// Run the `keys add` command
pub async fn add(
    session: &Session,
    npub: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let npub = Npub::from(npub.trim());
    if !npub.looks_valid() && format == OutputFormat::Human {
        eprintln!("warning: {npub} does not start with npub1");
    }

    session.add_public_key(&npub).await?;
    print_done(format, "linked", &npub)
}

/// Run the `keys delete` command
pub async fn delete(
    session: &Session,
    npub: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let npub = Npub::from(npub.trim());
    session.delete_public_key(&npub).await?;
    print_done(format, "unlinked", &npub)
}

fn print_done(
    format: OutputFormat,
    action: &str,
    npub: &Npub,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => println!("Public key {action}: {npub}"),
        OutputFormat::Json => {
            let value = serde_json::json!({ "npub": npub, "action": action });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}
