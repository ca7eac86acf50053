use std::path::Path;

use anyhow::Context;
use hl_config::HlConfig;

/// Load `.env` from the working directory (if any), then the layered config.
pub fn load_config() -> anyhow::Result<HlConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_dotenv(&cwd)?;
    HlConfig::load().context("failed to load hyperlocal configuration")
}

fn load_dotenv(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        tracing::debug!(path = %env_path.display(), "loaded dotenv");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::load_dotenv;

    #[test]
    fn missing_dotenv_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        load_dotenv(dir.path()).unwrap();
    }

    #[test]
    fn malformed_dotenv_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "NOT A VALID LINE 'unterminated\n").unwrap();
        let err = load_dotenv(dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed to load dotenv file"));
    }
}
