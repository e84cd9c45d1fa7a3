use anyhow::{Context, Result};
use chainsetup_config::{
    entry_rpc, ConnectionStore, FileLoader, NetworkClass, NetworkRegistry, SettingsLoader, SetupSettings,
};
use chainsetup_rpc::{EndpointProber, RegistryClient, RpcProber};
use chainsetup_utils::logging::init_logging_with_level;
use chainsetup_wizard::{Orchestrator, RunSummary, TerminalPrompter};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Subcommand)]
pub enum Commands {
    /// Discover, probe and select endpoints, then write the connection file
    Configure(ConfigureArgs),
    /// List known networks of a class and whether they are configured
    Networks(NetworksArgs),
    /// Probe a single endpoint and print its block height
    Probe(ProbeArgs),
}

/// Settings shared by every subcommand
#[derive(Args, Debug, Default, Clone)]
pub struct SettingsArgs {
    /// TOML settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Directory holding the per-class connection files
    #[arg(long)]
    deploy_root: Option<PathBuf>,

    /// Registry URL template, `{id}` is replaced by the chain id
    #[arg(long)]
    registry_url: Option<String>,

    /// Probe budget in milliseconds
    #[arg(long)]
    probe_timeout_ms: Option<u64>,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ConfigureArgs {
    /// Network class to configure; asked interactively when omitted
    #[arg(short, long)]
    network: Option<NetworkClass>,

    /// JSON list of networks replacing the built-in registry
    #[arg(long)]
    networks: Option<PathBuf>,

    #[command(flatten)]
    settings: SettingsArgs,
}

#[derive(Args, Debug, Clone)]
pub struct NetworksArgs {
    /// Network class to list
    #[arg(short, long, default_value = "mainnet")]
    network: NetworkClass,

    /// JSON list of networks replacing the built-in registry
    #[arg(long)]
    networks: Option<PathBuf>,

    #[command(flatten)]
    settings: SettingsArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    /// Endpoint to probe
    url: String,

    #[command(flatten)]
    settings: SettingsArgs,
}

pub async fn execute(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Configure(args) => configure(args).await,
        Commands::Networks(args) => list_networks(args).await,
        Commands::Probe(args) => probe(args).await,
    }
}

/// Settings with precedence: CLI flags > env vars > settings file > defaults
async fn resolve_settings(args: &SettingsArgs) -> Result<SetupSettings> {
    let mut settings = SettingsLoader::new()
        .load(args.settings.as_ref())
        .await
        .context("failed to load settings")?;

    if let Some(root) = &args.deploy_root {
        settings.deploy_root = root.clone();
    }
    if let Some(url) = &args.registry_url {
        settings.registry_url = url.clone();
    }
    if let Some(timeout) = args.probe_timeout_ms {
        settings.probe_timeout_ms = timeout;
    }
    if let Some(level) = &args.log_level {
        settings.log_level = level.clone();
    }

    settings.validate().context("invalid settings")?;
    init_logging_with_level(&settings.log_level);
    debug!(?settings, "Resolved settings");

    Ok(settings)
}

async fn load_registry(path: Option<&PathBuf>) -> Result<NetworkRegistry> {
    match path {
        Some(path) => FileLoader::load_networks(path)
            .await
            .with_context(|| format!("failed to load networks from {}", path.display())),
        None => Ok(NetworkRegistry::builtin()),
    }
}

async fn configure(args: ConfigureArgs) -> Result<ExitCode> {
    let settings = resolve_settings(&args.settings).await?;
    let networks = load_registry(args.networks.as_ref()).await?;

    let source = RegistryClient::new(settings.registry_url.clone())?;
    let prober = RpcProber::new(settings.probe_timeout())?;
    let mut orchestrator = Orchestrator::new(
        networks,
        source,
        prober,
        TerminalPrompter::stdio(),
        settings.deploy_root.clone(),
    );

    let class = match args.network {
        Some(class) => class,
        None => orchestrator.choose_class().await?,
    };
    println!("Configuring {} networks", class);

    let summary = orchestrator
        .run(class)
        .await
        .with_context(|| format!("{} configuration failed", class))?;

    print_summary(&summary);
    Ok(ExitCode::SUCCESS)
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("Configuration saved to {}", summary.path.display());
    println!("  configured:         {}", summary.configured.len());
    println!("  already configured: {}", summary.already_configured.len());
    println!("  skipped:            {}", summary.skipped.len());
    println!("  no endpoints:       {}", summary.unavailable.len());
    if summary.interrupted {
        println!("  input closed before every network was visited");
    }
    if !summary.failed.is_empty() {
        println!("  failed:             {} ({})", summary.failed.len(), summary.failed.join(", "));
    }
}

async fn list_networks(args: NetworksArgs) -> Result<ExitCode> {
    let settings = resolve_settings(&args.settings).await?;
    let networks = load_registry(args.networks.as_ref()).await?;

    let path = settings.config_path(args.network);
    let mapping = ConnectionStore::new(&path).load().await?;

    println!("{} networks ({}):", args.network.label(), path.display());
    for network in networks.for_class(args.network) {
        let slug = network.slug();
        match mapping.get(&slug) {
            Some(entry) => println!(
                "  ✅ {} ({}) -> {}",
                slug,
                network.id,
                entry_rpc(entry).unwrap_or("?")
            ),
            None => println!("  ⬜ {} ({}) not configured", slug, network.id),
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn probe(args: ProbeArgs) -> Result<ExitCode> {
    let settings = resolve_settings(&args.settings).await?;
    let prober = RpcProber::new(settings.probe_timeout())?;

    let result = prober.probe(&args.url).await;
    match result.observed_height {
        Some(height) if result.valid => {
            println!("✅ {} is live at block {}", args.url, height);
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            println!("❌ {} is invalid", args.url);
            Ok(ExitCode::FAILURE)
        }
    }
}
