use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gangway::{BootSettings, HostValue, UserAttributes, Value, normalize};

#[derive(Parser, Debug)]
#[command(
    name = "gangway-cli",
    about = "Inspect JSON payloads the way the messenger bridge sees them",
    version
)]
struct Args {
    /// Interpret the payload as a user-attribute map and print the resolved schema
    #[arg(long, conflicts_with = "boot")]
    attributes: bool,

    /// Validate the payload as boot options
    #[arg(long)]
    boot: bool,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let payload: serde_json::Value = serde_json::from_str(&buf).context("input is not valid JSON")?;
    let tree = normalize(&HostValue::from(payload))?;

    if args.attributes {
        print_attributes(&tree)?;
    } else if args.boot {
        print_boot(&tree)?;
    } else {
        let json = tree.to_json();
        if args.pretty {
            println!("{}", serde_json::to_string_pretty(&json)?);
        } else {
            println!("{}", serde_json::to_string(&json)?);
        }
    }
    Ok(())
}

fn print_attributes(tree: &Value) -> Result<()> {
    let Some(map) = tree.as_map() else {
        bail!("attribute payload must be a map, got {}", tree.tag());
    };
    let attrs = UserAttributes::from_map(map)?;

    if let Some(email) = &attrs.email {
        println!("email: {email}");
    }
    if let Some(user_id) = &attrs.user_id {
        println!("userId: {user_id}");
    }
    if let Some(name) = &attrs.name {
        println!("name: {name}");
    }
    if let Some(phone) = &attrs.phone {
        println!("phone: {phone}");
    }
    if let Some(language) = &attrs.language_override {
        println!("languageOverride: {language}");
    }
    if let Some(signed_up_at) = &attrs.signed_up_at {
        println!("signedUpAt: {}", signed_up_at.to_rfc3339());
    }
    if let Some(unsubscribed) = attrs.unsubscribed_from_emails {
        println!("unsubscribedFromEmails: {unsubscribed}");
    }
    for (key, value) in &attrs.custom {
        println!("custom.{key}: {value}");
    }
    Ok(())
}

fn print_boot(tree: &Value) -> Result<()> {
    let Some(map) = tree.as_map() else {
        bail!("boot payload must be a map, got {}", tree.tag());
    };
    let settings = BootSettings::from_map(map)?;
    let kind = if settings.is_identified() {
        "identified"
    } else {
        "anonymous"
    };
    println!("boot options ok: app {} ({} user)", settings.app_id, kind);
    Ok(())
}
