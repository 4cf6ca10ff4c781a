//! `salon` demonstration CLI.
//!
//! # Responsibility
//! - Build clients through the core factories and print them.
//! - Keep output deterministic for quick local sanity checks.

use clap::{Parser, Subcommand};
use log::info;
use salon_core::{default_log_level, init_logging, Client, ShortClient, DEFAULT_CLIENT_ID};
use std::error::Error;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "salon", version, about = "Salon client records")]
struct Cli {
    #[arg(long, global = true, help = "Print clients as JSON")]
    json: bool,
    #[arg(
        long,
        global = true,
        env = "SALON_LOG_LEVEL",
        help = "trace|debug|info|warn|error (defaults by build mode)"
    )]
    log_level: Option<String>,
    #[arg(
        long,
        global = true,
        env = "SALON_LOG_DIR",
        help = "Absolute directory for rotating log files; stderr when unset"
    )]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a client from "<surname> <given name> [patronymic]".
    Parse {
        full_name: String,
        #[arg(long, default_value_t = DEFAULT_CLIENT_ID)]
        id: i64,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        registered: Option<String>,
    },
    /// Decode a client from JSON text, read from stdin when omitted.
    Decode { input: Option<String> },
    /// Print a fixed set of sample clients.
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());

    if let Err(err) = init_logging(&level, cli.log_dir.as_deref()) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    let clients = match &cli.command {
        Commands::Parse {
            full_name,
            id,
            phone,
            email,
            registered,
        } => {
            let identity = ShortClient::from_full_name(full_name, *id)?;
            vec![Client::new(
                identity.id(),
                identity.surname(),
                identity.given_name(),
                identity.patronymic(),
                phone.as_deref(),
                email.as_deref(),
                registered.as_deref(),
            )?]
        }
        Commands::Decode { input } => {
            let text = match input {
                Some(text) => text.clone(),
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };
            vec![Client::from_json(&text)?]
        }
        Commands::Demo => demo_clients()?,
    };

    info!(
        "event=cli_render module=cli status=ok clients={} json={}",
        clients.len(),
        cli.json
    );
    Ok(render(&clients, cli.json))
}

fn demo_clients() -> Result<Vec<Client>, Box<dyn Error>> {
    Ok(vec![
        Client::new(
            1,
            "Иванов",
            "Иван",
            Some("Иванович"),
            Some("+79161234567"),
            Some("ivanov@mail.ru"),
            Some("2024-01-15"),
        )?,
        Client::from_name_and_phone("Петров", "Петр", "+79161234567", 2)?,
        Client::from_full_name("Сидоров Алексей Николаевич", 3)?,
        Client::new(4, "Сидорова", "Мария", None, None, Some("sidorova@mail.ru"), None)?,
    ])
}

fn render(clients: &[Client], json: bool) -> String {
    if json {
        let values: Vec<serde_json::Value> = clients
            .iter()
            .map(|client| serde_json::Value::Object(client.to_structured()))
            .collect();
        if let [single] = values.as_slice() {
            return format!("{single:#}");
        }
        return format!("{:#}", serde_json::Value::Array(values));
    }

    clients
        .iter()
        .map(|client| format!("{}\n{}", client.short_info(), client.full_info()))
        .collect::<Vec<_>>()
        .join("\n\n")
}
