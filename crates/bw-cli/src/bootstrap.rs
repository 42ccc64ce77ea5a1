use std::path::Path;

use anyhow::Context;

use crate::cli::GlobalFlags;

/// Load `.env` and the layered config, including the `--config` file if given.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<bw_config::BewellConfig> {
    let explicit = flags.config.as_deref().map(Path::new);
    bw_config::BewellConfig::load_with_dotenv(explicit).with_context(|| match explicit {
        Some(path) => format!("failed to load bewell config from {}", path.display()),
        None => "failed to load bewell config".to_string(),
    })
}
