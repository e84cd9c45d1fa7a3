//! Per-class configuration pass

use crate::presenter::{Selection, SelectionPresenter};
use crate::prompt::Prompter;
use chainsetup_config::{ConnectionEntry, ConnectionStore, NetworkClass, NetworkDescriptor, NetworkRegistry};
use chainsetup_rpc::{CandidateSource, EndpointProber};
use chainsetup_utils::{SetupError, SetupResult};
use std::path::PathBuf;
use tracing::{info, warn};

/// What happened to each network during one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// File the mapping was written to
    pub path: PathBuf,
    /// Newly added slugs
    pub configured: Vec<String>,
    /// Present before the run and left untouched
    pub already_configured: Vec<String>,
    /// Operator skipped, or nothing validated and no URL was supplied
    pub skipped: Vec<String>,
    /// Registry had no candidates
    pub unavailable: Vec<String>,
    /// Aborted by an unexpected error
    pub failed: Vec<String>,
    /// Operator input ended before every network was visited
    pub interrupted: bool,
}

enum NetworkOutcome {
    Configured(ConnectionEntry),
    Skipped,
    Unavailable,
}

/// Runs discovery, probing and selection for every network of a class
pub struct Orchestrator<S, P, U> {
    networks: NetworkRegistry,
    source: S,
    prober: P,
    prompter: U,
    deploy_root: PathBuf,
}

impl<S, P, U> Orchestrator<S, P, U>
where
    S: CandidateSource,
    P: EndpointProber,
    U: Prompter,
{
    pub fn new(
        networks: NetworkRegistry,
        source: S,
        prober: P,
        prompter: U,
        deploy_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            networks,
            source,
            prober,
            prompter,
            deploy_root: deploy_root.into(),
        }
    }

    pub fn prompter(&self) -> &U {
        &self.prompter
    }

    pub fn config_path(&self, class: NetworkClass) -> PathBuf {
        self.deploy_root.join(class.config_file_name())
    }

    /// Ask the operator which class to configure
    pub async fn choose_class(&mut self) -> SetupResult<NetworkClass> {
        let choices: Vec<String> = NetworkClass::ALL
            .iter()
            .map(|class| class.label().to_string())
            .collect();

        let index = self
            .prompter
            .select_one("Are you configuring for Mainnet or Testnet?", &choices)
            .await?;

        NetworkClass::ALL
            .get(index)
            .copied()
            .ok_or_else(|| SetupError::Invalid(format!("no network class at index {}", index)))
    }

    /// One full pass over `class`, ending with a single save.
    ///
    /// A failure inside one network is logged and the pass moves on; only
    /// loading and saving the file can fail the run. When operator input
    /// ends, the remaining networks are left out and what was gathered so
    /// far is saved.
    pub async fn run(&mut self, class: NetworkClass) -> SetupResult<RunSummary> {
        let path = self.config_path(class);
        let store = ConnectionStore::new(&path);
        let mut mapping = store.load().await?;

        let mut summary = RunSummary {
            path: path.clone(),
            ..Default::default()
        };

        for network in self.networks.for_class(class) {
            let slug = network.slug();

            if mapping.contains_key(&slug) {
                info!(network = %network.name, chain_id = %network.id, "Already configured, skipping");
                summary.already_configured.push(slug);
                continue;
            }

            match self.configure_network(&network, &slug).await {
                Ok(NetworkOutcome::Configured(entry)) => {
                    info!(network = %network.name, rpc = %entry.rpc, "Network configured");
                    mapping.insert(slug.clone(), entry.into_value());
                    summary.configured.push(slug);
                }
                Ok(NetworkOutcome::Skipped) => {
                    self.prompter
                        .notify(&format!("Skipping configuration for {}.", network.name));
                    summary.skipped.push(slug);
                }
                Ok(NetworkOutcome::Unavailable) => {
                    summary.unavailable.push(slug);
                }
                Err(SetupError::InputClosed) => {
                    warn!(network = %network.name, "Input closed, ending pass early");
                    self.prompter
                        .notify("Input closed; saving the networks configured so far.");
                    summary.failed.push(slug);
                    summary.interrupted = true;
                    break;
                }
                Err(e) => {
                    warn!(network = %network.name, chain_id = %network.id, error = %e, "Failed to configure network");
                    self.prompter
                        .notify(&format!("Failed to configure {}: {}", network.name, e));
                    summary.failed.push(slug);
                }
            }
        }

        store.save(&mapping).await?;
        info!(path = %path.display(), entries = mapping.len(), "Configuration saved");

        Ok(summary)
    }

    async fn configure_network(&mut self, network: &NetworkDescriptor, slug: &str) -> SetupResult<NetworkOutcome> {
        self.prompter.notify(&format!(
            "\nConfiguring chain: {} ({})",
            network.name, network.id
        ));

        let candidates = match self.source.fetch_candidates(&network.id).await {
            Some(candidates) if !candidates.is_empty() => candidates,
            _ => {
                self.prompter
                    .notify(&format!("No RPC URLs available for {}.", network.name));
                return Ok(NetworkOutcome::Unavailable);
            }
        };

        let mut valid = Vec::new();
        for url in candidates {
            let result = self.prober.probe(&url).await;
            if result.valid {
                info!(network = %network.name, url = %url, height = ?result.observed_height, "Endpoint valid");
                valid.push(url);
            } else {
                self.prompter.notify(&format!("{} - Invalid", url));
            }
        }

        let selection = SelectionPresenter::new(&self.prober, &mut self.prompter)
            .select(&network.name, valid)
            .await?;

        Ok(match selection {
            Selection::Chosen(rpc) => {
                NetworkOutcome::Configured(ConnectionEntry::new(network.id.clone(), slug, rpc))
            }
            Selection::Skipped => NetworkOutcome::Skipped,
        })
    }
}
