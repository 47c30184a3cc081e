use ahash::{HashMap, HashSet};
use config::{File, FileFormat, Source};
use config::builder::DefaultState;
use serde::Deserialize;
use tracing::warn;

use crate::config::deployment::DeploymentConfig;
use crate::error::{Error, Result};
use crate::REFERENCE;

/// The `akka.actor` section as far as routing is concerned.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Keyed by router path, with the case the path was written in.
    #[serde(default)]
    pub deployment: HashMap<String, DeploymentConfig>,
}

impl Settings {
    pub fn new(config: &config::Config) -> Result<Self> {
        let settings: Self = config.get("akka.actor")?;
        Ok(settings)
    }

    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// The config crate folds keys to lowercase while merging sources. Router
    /// paths are case sensitive, so every deployment key written in a toml
    /// source is put back under its original spelling. Paths that differ only
    /// in case would have been merged into one section and are rejected.
    fn restore_deployment_keys(&mut self, keys: &[String]) -> Result<()> {
        let mut seen: HashMap<String, &String> = HashMap::default();
        for key in keys {
            if let Some(other) = seen.insert(key.to_lowercase(), key) {
                if other != key {
                    return Err(Error::DeploymentCollision(format!("{} and {}", other, key)));
                }
            }
        }
        let written: HashSet<&String> = keys.iter().collect();
        for key in keys {
            if self.deployment.contains_key(key) {
                continue;
            }
            let folded = key.to_lowercase();
            if let Some(deployment) = self.deployment.get(&folded).cloned() {
                if !written.contains(&folded) {
                    self.deployment.remove(&folded);
                }
                self.deployment.insert(key.clone(), deployment);
            } else {
                warn!("deployment {} missing from merged config", key);
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct SettingsBuilder {
    builder: config::ConfigBuilder<DefaultState>,
    deployment_keys: Vec<String>,
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        let builder = config::Config::builder().add_source(File::from_str(REFERENCE, FileFormat::Toml));
        Self { builder, deployment_keys: Vec::new() }
    }
}

impl SettingsBuilder {
    /// Sources added later override earlier ones, the bundled reference
    /// config always comes first. Deployment keys of sources other than
    /// [`SettingsBuilder::add_toml`] are lowercase.
    pub fn add_source<T>(self, source: T) -> Self where T: Source + Send + Sync + 'static {
        Self { builder: self.builder.add_source(source), ..self }
    }

    pub fn add_toml(mut self, toml: &str) -> Result<Self> {
        self.deployment_keys.extend(deployment_keys(toml)?);
        Ok(self.add_source(File::from_str(toml, FileFormat::Toml)))
    }

    pub fn build(self) -> Result<Settings> {
        let config = self.builder.build()?;
        let mut settings = Settings::new(&config)?;
        settings.restore_deployment_keys(&self.deployment_keys)?;
        Ok(settings)
    }
}

fn deployment_keys(text: &str) -> Result<Vec<String>> {
    let table: toml::Table = text.parse()?;
    let keys = table
        .get("akka")
        .and_then(|akka| akka.get("actor"))
        .and_then(|actor| actor.get("deployment"))
        .and_then(|deployment| deployment.as_table())
        .map(|deployment| deployment.keys().cloned().collect())
        .unwrap_or_default();
    Ok(keys)
}

#[cfg(test)]
mod test {
    use crate::config::settings::Settings;
    use crate::error::Error;

    #[test]
    fn test_reference_settings() -> anyhow::Result<()> {
        let settings = Settings::builder().build()?;
        assert!(settings.deployment.is_empty());
        Ok(())
    }

    #[test]
    fn test_user_deployment_merged() -> anyhow::Result<()> {
        let settings = Settings::builder()
            .add_toml(r#"
                [akka.actor.deployment."/workers"]
                router = "pool"
                nr-of-instances = 3

                [akka.actor.deployment."/lookup"]
                router = "group"
                routees.paths = ["/user/a", "/user/b"]
            "#)?
            .build()?;
        assert_eq!(settings.deployment.len(), 2);
        assert_eq!(settings.deployment["/workers"].nr_of_instances, Some(3));
        assert_eq!(settings.deployment["/lookup"].routees.paths, ["/user/a", "/user/b"]);
        Ok(())
    }

    #[test]
    fn test_deployment_keys_keep_case() -> anyhow::Result<()> {
        let settings = Settings::builder()
            .add_toml(r#"
                [akka.actor.deployment."/Workers"]
                router = "pool"
                nr-of-instances = 2
            "#)?
            .add_toml(r#"
                [akka.actor.deployment."/Workers"]
                nr-of-instances = 4
            "#)?
            .build()?;
        assert_eq!(settings.deployment.keys().collect::<Vec<_>>(), ["/Workers"]);
        assert_eq!(settings.deployment["/Workers"].router, "pool");
        assert_eq!(settings.deployment["/Workers"].nr_of_instances, Some(4));
        Ok(())
    }

    #[test]
    fn test_keys_differing_in_case_rejected() -> anyhow::Result<()> {
        let result = Settings::builder()
            .add_toml(r#"
                [akka.actor.deployment."/Workers"]
                router = "pool"
                nr-of-instances = 2

                [akka.actor.deployment."/workers"]
                router = "pool"
                nr-of-instances = 3
            "#)?
            .build();
        assert!(matches!(result, Err(Error::DeploymentCollision(_))));
        Ok(())
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(Settings::builder().add_toml("[akka"), Err(Error::Toml(_))));
    }
}
