use anyhow::Context;
use lumen_config::LumenConfig;

/// Load `.env` from the current directory (if any), then the layered config.
pub fn load_config() -> anyhow::Result<LumenConfig> {
    load_dotenv()?;
    let config = LumenConfig::load().context("failed to load lumen configuration")?;
    config
        .inference
        .validate()
        .context("invalid inference configuration")?;
    Ok(config)
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;

    // Prefer the project's own .env next to `.lumen/` when invoked from a subdirectory.
    for dir in cwd.ancestors() {
        if dir.join(".lumen").is_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).with_context(|| {
                    format!("failed to load dotenv file at {}", env_path.display())
                })?;
                return Ok(());
            }
            break;
        }
    }

    dotenvy::dotenv().ok();
    Ok(())
}
