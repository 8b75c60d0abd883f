use clap::Parser;
use miette::{IntoDiagnostic, Result};
use serde_json::{Value, json};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tender_registry::application::registry::TenderRegistry;
use tender_registry::domain::tender::Principal;
use tender_registry::error::RegistryError;
use tender_registry::infrastructure::in_memory::{
    InMemoryAgencyRegistry, InMemoryTenderStore, RecordingFeeTransfer,
};
use tender_registry::interfaces::csv::tender_writer::TenderWriter;
use tender_registry::interfaces::json::command_reader::{Command, CommandReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input command file, one JSON operation per line
    input: PathBuf,

    /// Principal to seed into the verified-agency allow list (repeatable)
    #[arg(long = "agency", value_name = "PRINCIPAL")]
    agencies: Vec<String>,

    /// Capacity ceiling for the registry
    #[arg(long)]
    max_tenders: Option<u64>,
}

async fn execute(registry: &mut TenderRegistry, command: Command) -> Result<Value, RegistryError> {
    let value = match command {
        Command::SetOwner { principal } => json!(registry.configure_owner(principal)?),
        Command::SetFee { amount } => json!(registry.configure_fee(amount)?),
        Command::Create { caller, at, draft } => {
            json!(registry.create_tender(&caller, draft, at).await?)
        }
        Command::Update {
            caller,
            at,
            id,
            revision,
        } => json!(registry.update_tender(&caller, id, revision, at).await?),
        Command::Get { id } => serde_json::to_value(registry.get_tender(id).await)?,
        Command::GetUpdate { id } => serde_json::to_value(registry.get_tender_update(id).await)?,
        Command::Count => json!(registry.get_tender_count().await),
        Command::Exists { description } => {
            json!(registry.check_tender_existence(&description).await)
        }
    };
    Ok(value)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let agencies = cli.agencies.iter().map(|a| Principal::from(a.as_str()));
    let mut registry = TenderRegistry::new(
        Box::new(InMemoryTenderStore::new()),
        Box::new(InMemoryAgencyRegistry::new(agencies)),
        Box::new(RecordingFeeTransfer::new()),
    );
    if let Some(max_tenders) = cli.max_tenders {
        registry = registry.with_max_tenders(max_tenders);
    }

    // Process commands, one result line per command.
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = CommandReader::new(BufReader::new(file));
    for command_result in reader.commands() {
        match command_result {
            Ok(command) => match execute(&mut registry, command).await {
                Ok(value) => println!("{}", json!({ "ok": value })),
                Err(RegistryError::Rule(rule)) => println!("{}", json!({ "err": rule.code() })),
                Err(e) => eprintln!("Error executing command: {e}"),
            },
            Err(e) => eprintln!("Error reading command: {e}"),
        }
    }

    // Output final registry state.
    let tenders = registry.all_tenders().await;
    let stdout = io::stdout();
    let mut writer = TenderWriter::new(stdout.lock());
    writer.write_tenders(&tenders).into_diagnostic()?;

    Ok(())
}
