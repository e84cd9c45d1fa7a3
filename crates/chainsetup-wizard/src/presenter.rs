//! Endpoint selection for one network

use crate::prompt::Prompter;
use chainsetup_rpc::EndpointProber;
use chainsetup_utils::{SetupError, SetupResult};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;
use url::Url;

pub const CUSTOM_CHOICE: &str = "Custom RPC URL";
pub const SKIP_CHOICE: &str = "Skip this chain";

/// Terminal outcome of selecting an endpoint for one network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(String),
    Skipped,
}

/// Drives the choice between validated candidates, a custom URL or skipping.
///
/// Manually supplied URLs only come back as [`Selection::Chosen`] after they
/// pass a probe of their own.
pub struct SelectionPresenter<'a, P: ?Sized, U: ?Sized> {
    prober: &'a P,
    prompter: &'a mut U,
}

impl<'a, P, U> SelectionPresenter<'a, P, U>
where
    P: EndpointProber + ?Sized,
    U: Prompter + ?Sized,
{
    pub fn new(prober: &'a P, prompter: &'a mut U) -> Self {
        Self { prober, prompter }
    }

    pub async fn select(&mut self, network_name: &str, mut validated: Vec<String>) -> SetupResult<Selection> {
        if validated.is_empty() {
            self.prompter
                .notify(&format!("No valid RPC URLs found for {}.", network_name));
            return self.manual_entry(network_name, true).await;
        }

        shuffle_candidates(&mut validated, &mut rand::thread_rng());

        let candidate_count = validated.len();
        let mut choices = validated;
        choices.push(CUSTOM_CHOICE.to_string());
        choices.push(SKIP_CHOICE.to_string());

        let index = self
            .prompter
            .select_one(
                &format!("Select an RPC URL for {} or enter a custom URL:", network_name),
                &choices,
            )
            .await?;

        if index < candidate_count {
            Ok(Selection::Chosen(choices.swap_remove(index)))
        } else if index == candidate_count {
            self.manual_entry(network_name, false).await
        } else if index == candidate_count + 1 {
            Ok(Selection::Skipped)
        } else {
            Err(SetupError::Invalid(format!(
                "selection {} out of range for {} choices",
                index,
                choices.len()
            )))
        }
    }

    /// Prompt until a URL passes the probe gate.
    ///
    /// Empty input skips the network only when `allow_skip` is set, i.e. when
    /// no candidate validated.
    async fn manual_entry(&mut self, network_name: &str, allow_skip: bool) -> SetupResult<Selection> {
        let message = if allow_skip {
            format!(
                "Enter a custom RPC URL for {} (press enter to skip):",
                network_name
            )
        } else {
            "Enter your custom RPC URL:".to_string()
        };

        loop {
            let input = self.prompter.input_text(&message).await?;

            if input.is_empty() {
                if allow_skip {
                    return Ok(Selection::Skipped);
                }
                self.prompter.notify("Invalid RPC URL");
                continue;
            }

            if let Err(reason) = validate_endpoint_url(&input) {
                self.prompter
                    .notify(&format!("Invalid RPC URL: {}", reason));
                continue;
            }

            let result = self.prober.probe(&input).await;
            if result.valid {
                debug!(network = network_name, url = %input, height = ?result.observed_height, "Custom endpoint accepted");
                return Ok(Selection::Chosen(input));
            }

            self.prompter
                .notify(&format!("Invalid RPC URL: {} did not respond", input));
        }
    }
}

/// Unbiased in-place permutation of the candidate list
pub fn shuffle_candidates<R: Rng + ?Sized>(candidates: &mut [String], rng: &mut R) {
    candidates.shuffle(rng);
}

/// Syntax check applied before a custom URL is probed
pub fn validate_endpoint_url(input: &str) -> Result<(), String> {
    let url = Url::parse(input).map_err(|e| e.to_string())?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme '{}'", other)),
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err("missing host".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_endpoint_url() {
        assert!(validate_endpoint_url("https://rpc.example").is_ok());
        assert!(validate_endpoint_url("http://127.0.0.1:8545").is_ok());
        assert!(validate_endpoint_url("wss://rpc.example").is_err());
        assert!(validate_endpoint_url("rpc.example").is_err());
        assert!(validate_endpoint_url("not a url").is_err());
    }
}
