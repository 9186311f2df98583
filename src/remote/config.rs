use std::time::Duration;

/// Primary endpoint tried first, matching the docker-compose service name of
/// the algorithms microservice.
pub const DEFAULT_BASE_URL: &str = "http://algoritmos-service:8081/api/algoritmos/pagereplacement";

/// Well-known alternate ports tried in order when the primary's port fails.
pub const CANDIDATE_PORTS: [u16; 3] = [8081, 8080, 8082];

/// Wall-clock bound for a single candidate attempt. The underlying connection
/// is dropped when it elapses.
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_millis(1500);

/// Runtime configuration for remote execution.
///
/// Built once in `main` and passed by reference into the client; nothing reads
/// the process environment after startup.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base address of the external service; candidates are derived from it.
    pub base_url: String,
    /// Alternate ports substituted into `base_url`, in attempt order.
    pub candidate_ports: Vec<u16>,
    /// Timeout applied independently to each candidate attempt.
    pub attempt_timeout: Duration,
    /// When set, remote execution is bypassed and everything runs locally.
    pub local_mode: bool,
}

impl RemoteConfig {
    /// Reads the configuration from the process environment.
    ///
    /// `MICROSERVICE_URL` overrides the base address and `LOCAL_ALGOS=true`
    /// forces local computation.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("MICROSERVICE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let local_mode = std::env::var("LOCAL_ALGOS")
            .map(|value| value == "true")
            .unwrap_or(false);

        Self {
            base_url,
            candidate_ports: CANDIDATE_PORTS.to_vec(),
            attempt_timeout: ATTEMPT_TIMEOUT,
            local_mode,
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            candidate_ports: CANDIDATE_PORTS.to_vec(),
            attempt_timeout: ATTEMPT_TIMEOUT,
            local_mode: false,
        }
    }
}
