use anyhow::Context;

/// Load layered configuration, reading `.env` first so `ARENA_*` values set
/// there participate in the environment layer.
pub fn load_config() -> anyhow::Result<arena_config::ArenaConfig> {
    let config = arena_config::ArenaConfig::load_with_dotenv()
        .context("failed to load arena configuration")?;
    tracing::debug!(api = %config.api.base_url, persist = config.session.persist, "configuration loaded");
    Ok(config)
}
