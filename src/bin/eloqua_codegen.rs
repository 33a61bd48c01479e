//! Generate a typed Rust wrapper for an Eloqua custom object.
//!
//! Reads credentials from the environment, introspects the custom object and
//! prints the generated source (or the schema binding as JSON) to stdout.
//!
//! ```sh
//! export ELOQUA_COMPANY=Acme ELOQUA_USERNAME=jane.doe ELOQUA_PASSWORD=...
//! cargo run --bin eloqua-codegen -- DogOwner > src/dog_owner.rs
//! cargo run --bin eloqua-codegen -- '#47' Owner --json > dog_owner.json
//! ```

use anyhow::{bail, Context};
use eloqua_api::rest::{CodegenOptions, CustomObjectLookup, EloquaRestClient};
use eloqua_api::EloquaCredentials;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: eloqua-codegen <custom-object-name | #id> [TypeName] [--json]";

struct Args {
    lookup: CustomObjectLookup,
    type_name: Option<String>,
    json: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut json = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}\n{USAGE}"),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let lookup = positional
        .next()
        .with_context(|| USAGE.to_string())?
        .parse::<CustomObjectLookup>()?;
    let type_name = positional.next();
    if positional.next().is_some() {
        bail!("too many arguments\n{USAGE}");
    }

    Ok(Args {
        lookup,
        type_name,
        json,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    let creds = EloquaCredentials::from_env()
        .context("set ELOQUA_COMPANY, ELOQUA_USERNAME and ELOQUA_PASSWORD")?;
    let client = EloquaRestClient::connect(&creds).await?;
    info!(base_url = client.base_url(), "Connected");

    let binding = client
        .introspect_custom_object(&args.lookup, args.type_name.as_deref())
        .await?;

    if args.json {
        println!("{}", binding.to_json_pretty()?);
    } else {
        let options = CodegenOptions::default();
        print!("{}", eloqua_api::rest::generate_model_source(&binding, &options)?);
    }

    Ok(())
}
