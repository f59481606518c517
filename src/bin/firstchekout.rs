//! FirstChekout command line helper
//!
//! Reads merchant credentials from the environment and runs a single operation.
//!
//! ```text
//! firstchekout form [amount] [email]
//! firstchekout requery <reference>
//! firstchekout reversal <reference>
//! firstchekout settlements <reference>...
//! ```

use firstchekout::{CheckoutOptions, FirstChekoutClient};
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

const USAGE: &str = "usage: firstchekout <form [amount] [email] | requery <ref> | reversal <ref> | settlements <ref>...>";

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };

    let client = FirstChekoutClient::from_env()?;
    tracing::info!(
        "Using FirstChekout in {} mode",
        client.config().mode.as_str()
    );

    match (command.as_str(), &args[1..]) {
        ("form", rest) => {
            let mut options = CheckoutOptions::new();
            if let Some(amount) = rest.first() {
                options = options.with_amount(Decimal::from_str(amount)?);
            }
            if let Some(email) = rest.get(1) {
                options = options.with_email(email.as_str());
            }
            print!("{}", client.form(&options));
        }
        ("requery", [reference]) => {
            let data = client.re_query(reference).await?;
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        ("reversal", [reference]) => {
            let data = client.reversal(reference).await?;
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        ("settlements", references) if !references.is_empty() => {
            let data = client.settlements(references.iter().cloned()).await?;
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}
