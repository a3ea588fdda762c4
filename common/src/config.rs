use std::env;
use std::path::{Path, PathBuf};

use config::{ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::debug;

use crate::inventory::{DEFAULT_NAMESPACE, SiteId};

const CONFIG_SUBDIR: &str = "knetctl";
const CONFIG_FILE_NAME: &str = "knetctl.yaml";
const ENV_PREFIX: &str = "KNETCTL";

pub const DEFAULT_REGION: &str = "region1";
pub const DEFAULT_SITE: &str = "site1";

/// What to do with a link whose endpoints cannot be resolved.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    /// Stop at the first bad link and produce no links at all.
    #[default]
    Abort,
    /// Drop the bad link and keep going.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Region assigned to nodes without a region label.
    pub region: String,
    /// Site assigned to nodes without a site label.
    pub site: String,
    /// Namespace written into every resource's metadata.
    pub namespace: String,
    pub link_policy: LinkPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            site: DEFAULT_SITE.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            link_policy: LinkPolicy::default(),
        }
    }
}

/// Values given explicitly on the command line. They win over everything else.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub region: Option<String>,
    pub site: Option<String>,
    pub namespace: Option<String>,
    pub link_policy: Option<LinkPolicy>,
}

impl Config {
    /// Loads the configuration.
    ///
    /// Sources, lowest precedence first: built-in defaults, the config file,
    /// `KNETCTL_*` environment variables, then `overrides`.
    ///
    /// `path` selects the config file. Without it the file in the user's
    /// config directory is read if it exists.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Yaml).required(true),
            None => {
                let default_path = default_config_path();
                debug!("Looking for config file at {}", default_path.display());
                File::from(default_path.as_path())
                    .format(FileFormat::Yaml)
                    .required(false)
            }
        };

        let defaults = Config::default();
        let cfg: Config = config::Config::builder()
            .set_default("region", defaults.region)?
            .set_default("site", defaults.site)?
            .set_default("namespace", defaults.namespace)?
            .set_default("link_policy", "abort")?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        Ok(cfg.apply(overrides))
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(region) = overrides.region {
            self.region = region;
        }
        if let Some(site) = overrides.site {
            self.site = site;
        }
        if let Some(namespace) = overrides.namespace {
            self.namespace = namespace;
        }
        if let Some(link_policy) = overrides.link_policy {
            self.link_policy = link_policy;
        }
        self
    }

    pub fn site_id(&self) -> SiteId {
        SiteId::new(&self.region, &self.site)
    }
}

/// `$XDG_CONFIG_HOME/knetctl/knetctl.yaml`, falling back to `$HOME/.config`.
pub fn default_config_path() -> PathBuf {
    let base = env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_SUBDIR).join(CONFIG_FILE_NAME)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
