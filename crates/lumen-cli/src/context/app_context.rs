use anyhow::Context;
use lumen_config::{HistoryConfig, LumenConfig};
use lumen_gateway::HttpGateway;
use lumen_skills::Analyzer;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub analyzer: Analyzer<HttpGateway>,
    /// The history store is opened on demand, after a result has been printed.
    pub history: HistoryConfig,
}

impl AppContext {
    /// Build the gateway. Performs no I/O.
    pub fn init(config: LumenConfig) -> anyhow::Result<Self> {
        let gateway =
            HttpGateway::new(&config.inference).context("failed to build inference gateway")?;
        Ok(Self {
            analyzer: Analyzer::new(gateway, config.models),
            history: config.history,
        })
    }
}
