use regex::Regex;

use super::config::RemoteConfig;
use super::normalizer::normalize;
use super::types::{ExecuteRequest, ExecutionOutcome};
use crate::simulation::engine;
use crate::simulation::error::SimulationError;
use crate::simulation::parser::sanitize_referencias;
use crate::simulation::types::Algorithm;

/// Client for the external algorithms microservice.
///
/// Owns the HTTP connection pool and the runtime configuration; one instance
/// is shared across all requests.
pub struct RemoteClient {
    config: RemoteConfig,
    http_client: reqwest::Client,
}

impl RemoteClient {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Runs a simulation remotely, trying each candidate endpoint in order.
    ///
    /// The first successful response is normalized and returned; no further
    /// candidates are tried. When every candidate fails (bad status, transport
    /// error or timeout), the local engine computes the result instead, so the
    /// only error this can surface is input validation.
    pub async fn execute(
        &self,
        algorithm: Algorithm,
        referencias: &str,
        marcos: usize,
    ) -> Result<ExecutionOutcome, SimulationError> {
        let clean = sanitize_referencias(referencias);
        let payload = ExecuteRequest {
            referencias: clean.clone(),
            marcos,
        };

        for base in build_candidates(&self.config.base_url, &self.config.candidate_ports) {
            let url = format!("{}/{}", base, algorithm.as_path());
            let response = self
                .http_client
                .post(&url)
                .json(&payload)
                .timeout(self.config.attempt_timeout)
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => match resp.json::<serde_json::Value>().await {
                    Ok(data) => {
                        tracing::debug!("Remote {} answered at {}", algorithm, base);
                        return Ok(ExecutionOutcome::Remote(normalize(&data, &clean, marcos)));
                    }
                    Err(e) => {
                        tracing::warn!("Remote {} at {} returned unreadable body: {}", algorithm, base, e);
                    }
                },
                Ok(resp) => {
                    tracing::warn!(
                        "Remote {} at {} answered with status {}",
                        algorithm,
                        base,
                        resp.status()
                    );
                }
                Err(e) => {
                    tracing::warn!("Remote {} attempt at {} failed: {}", algorithm, base, e);
                }
            }
        }

        tracing::warn!(
            "Remote {} failed on every candidate endpoint, computing locally",
            algorithm
        );
        Ok(ExecutionOutcome::Local(engine::run(
            algorithm,
            referencias,
            marcos,
        )?))
    }
}

/// Builds the ordered, de-duplicated candidate base URLs: the configured
/// address's own port first, then each alternate port substituted into it,
/// preserving scheme, host and path.
///
/// If the base cannot be parsed as a URL, falls back to naive string port
/// substitution: the raw base first, then one entry per alternate port.
pub fn build_candidates(base: &str, ports: &[u16]) -> Vec<String> {
    match reqwest::Url::parse(base) {
        Ok(url) => {
            let original_port = url.port().unwrap_or(80);
            let mut unique_ports = Vec::new();
            for port in std::iter::once(original_port).chain(ports.iter().copied()) {
                if !unique_ports.contains(&port) {
                    unique_ports.push(port);
                }
            }

            unique_ports
                .into_iter()
                .map(|port| {
                    let mut candidate = url.clone();
                    let _ = candidate.set_port(Some(port));
                    let rendered = candidate.to_string();
                    rendered
                        .strip_suffix('/')
                        .map(str::to_string)
                        .unwrap_or(rendered)
                })
                .collect()
        }
        Err(_) => {
            let port_pattern = Regex::new(r":\d+").unwrap();
            let mut candidates = vec![base.to_string()];
            for port in ports {
                candidates.push(
                    port_pattern
                        .replace(base, format!(":{}", port).as_str())
                        .into_owned(),
                );
            }
            candidates
        }
    }
}
