use lumen_config::LumenConfig;

/// Emit warnings for missing credentials and likely mistyped env var keys.
pub fn warn_unconfigured(config: &LumenConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LumenConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.inference.is_configured() {
        if has_env_prefix(&env_keys, "LUMEN_INFERENCE") {
            warnings.push(
                "Inference config appears default while LUMEN_INFERENCE* env vars exist. Use double underscores (example: LUMEN_INFERENCE__API_KEY)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "No inference API key configured; every analysis will fail. Set LUMEN_INFERENCE__API_KEY."
                    .to_string(),
            );
        }
    }

    if !config.history.is_configured() && has_env_prefix(&env_keys, "LUMEN_HISTORY") {
        warnings.push(
            "History config appears default while LUMEN_HISTORY* env vars exist. Use double underscores (example: LUMEN_HISTORY__URL)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
