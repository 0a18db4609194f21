//! Values read from the process environment.
//!
//! Connection strings and keys never come from the config file. They are
//! read once at startup; missing values are reported, not rejected, and
//! surface later when the dependent client fails to connect.

use tracing::info;

pub const APPINSIGHTS_KEY: &str = "APPINSIGHTS_KEY";
pub const CHALLENGE_APPINSIGHTS_KEY: &str = "CHALLENGEAPPINSIGHTS_KEY";
pub const MONGO_URL: &str = "MONGOURL";
pub const AMQP_URL: &str = "AMQPURL";
pub const TEAM_NAME: &str = "TEAMNAME";
pub const SOURCE: &str = "SOURCE";

/// Connection strings, keys and labels taken from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Application Insights key for the team's own dashboard (optional).
    pub insights_key: String,
    /// Application Insights key for the challenge dashboard.
    pub challenge_insights_key: String,
    /// MongoDB or CosmosDB connection URL.
    pub mongo_url: String,
    /// RabbitMQ or Event Hubs connection URL.
    pub amqp_url: String,
    /// Team label stamped on events and messages.
    pub team_name: String,
    /// Fallback for orders submitted without a source.
    pub default_source: String,
}

impl Environment {
    /// Read every value from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read every value through `lookup`; absent values become empty.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).unwrap_or_default();
        Self {
            insights_key: read(APPINSIGHTS_KEY),
            challenge_insights_key: read(CHALLENGE_APPINSIGHTS_KEY),
            mongo_url: read(MONGO_URL),
            amqp_url: read(AMQP_URL),
            team_name: read(TEAM_NAME),
            default_source: read(SOURCE),
        }
    }

    /// Names of the required variables that are unset.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        self.named()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Log each required variable and its value.
    pub fn report(&self) {
        for (name, value) in self.named() {
            if value.is_empty() {
                info!("The environment variable {name} has not been set");
            } else {
                info!("The environment variable {name} is {value}");
            }
        }
    }

    fn named(&self) -> [(&'static str, &str); 5] {
        [
            (APPINSIGHTS_KEY, &self.insights_key),
            (CHALLENGE_APPINSIGHTS_KEY, &self.challenge_insights_key),
            (MONGO_URL, &self.mongo_url),
            (AMQP_URL, &self.amqp_url),
            (TEAM_NAME, &self.team_name),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn reads_every_variable() {
        let env = Environment::from_lookup(lookup(&[
            ("APPINSIGHTS_KEY", "custom"),
            ("CHALLENGEAPPINSIGHTS_KEY", "challenge"),
            ("MONGOURL", "mongodb://localhost"),
            ("AMQPURL", "amqp://localhost"),
            ("TEAMNAME", "team-1"),
            ("SOURCE", "aks"),
        ]));

        assert_eq!(env.insights_key, "custom");
        assert_eq!(env.challenge_insights_key, "challenge");
        assert_eq!(env.mongo_url, "mongodb://localhost");
        assert_eq!(env.amqp_url, "amqp://localhost");
        assert_eq!(env.team_name, "team-1");
        assert_eq!(env.default_source, "aks");
        assert!(env.missing().is_empty());
    }

    #[test]
    fn absent_variables_are_empty_not_errors() {
        let env = Environment::from_lookup(lookup(&[("TEAMNAME", "team-1")]));
        assert!(env.mongo_url.is_empty());
        assert_eq!(
            env.missing(),
            vec!["APPINSIGHTS_KEY", "CHALLENGEAPPINSIGHTS_KEY", "MONGOURL", "AMQPURL"]
        );
        env.report();
    }

    #[test]
    fn source_is_not_a_required_variable() {
        let env = Environment::from_lookup(lookup(&[
            ("APPINSIGHTS_KEY", "a"),
            ("CHALLENGEAPPINSIGHTS_KEY", "b"),
            ("MONGOURL", "c"),
            ("AMQPURL", "d"),
            ("TEAMNAME", "e"),
        ]));
        assert!(env.missing().is_empty());
        assert!(env.default_source.is_empty());
    }
}
