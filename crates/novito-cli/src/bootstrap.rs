use anyhow::Context;
use novito_config::NovitoConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered config, then apply flag overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<NovitoConfig> {
    load_dotenv()?;

    let mut config = NovitoConfig::load().context("failed to load novito configuration")?;
    if let Some(workspace) = flags.workspace {
        config.workspace.id = workspace;
        config
            .validate()
            .context("invalid --workspace value")?;
    }
    Ok(config)
}

fn load_dotenv() -> anyhow::Result<()> {
    let env_path = std::env::current_dir()
        .context("failed to determine current directory")?
        .join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
