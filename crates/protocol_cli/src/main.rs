//! Command-line driver for the protocol engine.
//!
//! # Responsibility
//! - List supported entity kinds.
//! - Materialize one JSON payload against a configured record store.

use clap::{Parser, Subcommand};
use protocol_core::{
    init_logging, open_db, Department, EngineConfig, KindRegistry, ProtocolId, ProtocolService,
    Submission, TenantId,
};
use std::error::Error;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "protocol")]
#[command(about = "Materialize municipal protocol submissions into records")]
struct Cli {
    /// Config file (TOML); PROTOCOL_* variables override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported entity kinds
    Kinds {
        /// Only kinds of this department (e.g. health, public_works)
        #[arg(short, long)]
        department: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Materialize one payload
    Submit {
        /// Entity kind tag, e.g. Vaccination
        #[arg(short, long)]
        kind: String,

        #[arg(short, long)]
        tenant: String,

        #[arg(short, long)]
        protocol: String,

        /// Human-facing protocol number
        #[arg(long)]
        protocol_number: Option<String>,

        /// JSON payload file; reads stdin when omitted
        #[arg(long)]
        payload: Option<PathBuf>,

        /// Overrides the configured database path
        #[arg(long)]
        database: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = EngineConfig::load(cli.config.as_deref())?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }
    let registry = KindRegistry::municipal()?;

    match cli.command {
        Commands::Kinds { department, json } => list_kinds(&registry, department.as_deref(), json),
        Commands::Submit {
            kind,
            tenant,
            protocol,
            protocol_number,
            payload,
            database,
        } => {
            let payload: serde_json::Value = match payload {
                Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
                None => {
                    let mut text = String::new();
                    std::io::stdin().read_to_string(&mut text)?;
                    serde_json::from_str(&text)?
                }
            };
            let mut submission =
                Submission::from_json(TenantId::new(tenant), ProtocolId::new(protocol), payload)?;
            if let Some(number) = protocol_number {
                submission = submission.with_protocol_number(number);
            }

            let mut conn = open_db(database.unwrap_or(config.database_path))?;
            let record = ProtocolService::new(&registry).submit_tag(&mut conn, &kind, &submission)?;
            log::info!("event=cli_submit module=cli status=ok record_id={}", record.id);
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
    }
}

fn list_kinds(
    registry: &KindRegistry,
    department: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let kinds = match department {
        Some(name) => {
            let department = Department::parse(name)
                .ok_or_else(|| format!("unknown department `{name}`"))?;
            registry.kinds_in(department)
        }
        None => registry.kinds(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&kinds)?);
        return Ok(());
    }
    for kind in kinds {
        let Some(schema) = registry.schema(kind) else {
            continue;
        };
        println!(
            "{:<32} {:<18} required: {}",
            kind.as_str(),
            schema.department.as_str(),
            schema.required_names().join(", ")
        );
    }
    Ok(())
}
