use crate::{
    exact::{ExactInteger, ExactText},
    secret::{NonIntegerPolicy, SecretText},
};
use math_lib::{modular::Modulus, polynomial::point::Point};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_with::{serde_as, DeserializeAs};
use shamir_sharing::{AuditConfig, ThresholdConfig};

/// The configuration used to split a secret.
#[serde_as]
#[derive(Deserialize, Debug)]
pub struct SplitConfig {
    /// The secret to be shared.
    #[serde_as(as = "ExactText")]
    pub secret: SecretText,

    /// How secrets with a fractional part are handled.
    #[serde(default)]
    pub non_integer: NonIntegerPolicy,

    /// The threshold and the number of shares to produce.
    #[serde(flatten)]
    pub threshold: ThresholdConfig,

    /// The prime to use. The smallest suitable prime is selected when this is missing.
    #[serde_as(as = "Option<ExactInteger>")]
    pub prime: Option<Modulus>,
}

impl SplitConfig {
    /// Loads the config from a file path.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        load(config::File::with_name(path))
    }

    /// Loads the config from a YAML document.
    pub fn from_yaml(document: &str) -> Result<Self, config::ConfigError> {
        load(config::File::from_str(document, config::FileFormat::Yaml))
    }
}

/// The configuration used to reconstruct or audit a set of shares.
#[serde_as]
#[derive(Deserialize, Debug)]
pub struct RecoverConfig {
    /// The prime the shares were generated with. This is `P`.
    #[serde_as(as = "ExactInteger")]
    pub prime: Modulus,

    /// The number of shares needed to recover the secret.
    pub threshold: usize,

    /// The shares themselves.
    #[serde_as(as = "Vec<ShareEntry>")]
    pub shares: Vec<Point>,

    /// Limits applied when auditing.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl RecoverConfig {
    /// Loads the config from a file path.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        load(config::File::with_name(path))
    }

    /// Loads the config from a YAML document.
    pub fn from_yaml(document: &str) -> Result<Self, config::ConfigError> {
        load(config::File::from_str(document, config::FileFormat::Yaml))
    }
}

/// A share as written in a configuration file.
#[serde_as]
#[derive(Deserialize)]
struct ShareEntry {
    #[serde_as(as = "ExactInteger")]
    x: u64,

    #[serde_as(as = "ExactInteger")]
    y: u64,
}

impl<'de> DeserializeAs<'de, Point> for ShareEntry {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<Point, D::Error> {
        let entry = ShareEntry::deserialize(deserializer)?;
        Ok(Point::new(entry.x, entry.y))
    }
}

fn load<T, S>(source: S) -> Result<T, config::ConfigError>
where
    T: DeserializeOwned,
    S: config::Source + Send + Sync + 'static,
{
    let mut builder = config::Config::builder();
    builder = builder.add_source(source);
    builder.build()?.try_deserialize()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod test {
    use super::*;

    #[test]
    fn split_config() {
        let config = SplitConfig::from_yaml(
            r#"
secret: 123
threshold: 3
share_count: 5
"#,
        )
        .unwrap();
        assert_eq!(config.secret.resolve(config.non_integer), Ok(123));
        assert_eq!(config.threshold, ThresholdConfig::new(3, 5).unwrap());
        assert_eq!(config.prime, None);
    }

    #[test]
    fn split_config_with_prime_and_policy() {
        let config = SplitConfig::from_yaml(
            r#"
secret: "6.33"
non_integer: truncate
threshold: 2
share_count: 4
prime: 127
"#,
        )
        .unwrap();
        assert_eq!(config.non_integer, NonIntegerPolicy::Truncate);
        assert_eq!(config.secret.resolve(config.non_integer), Ok(6));
        assert_eq!(config.prime.map(|p| p.value()), Some(127));
    }

    #[test]
    fn split_config_rejects_non_prime() {
        let result = SplitConfig::from_yaml(
            r#"
secret: 10
threshold: 2
share_count: 3
prime: 91
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn split_config_rejects_negative_secret() {
        let result = SplitConfig::from_yaml(
            r#"
secret: "-4"
threshold: 2
share_count: 3
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn recover_config() {
        let config = RecoverConfig::from_yaml(
            r#"
prime: 127
threshold: 3
shares:
  - { x: 1, y: 1 }
  - { x: 2, y: 10 }
  - { x: 3, y: 24 }
audit:
  max_subsets: 100
  parallel: false
"#,
        )
        .unwrap();
        assert_eq!(config.prime.value(), 127);
        assert_eq!(config.threshold, 3);
        assert_eq!(config.shares, vec![Point::new(1, 1), Point::new(2, 10), Point::new(3, 24)]);
        assert_eq!(config.audit.max_subsets, Some(100));
        assert!(!config.audit.parallel);
    }

    #[test]
    fn split_config_large_secret() {
        let document = "secret: SECRET\nthreshold: 2\nshare_count: 3\n";
        let rounded = SplitConfig::from_yaml(&document.replace("SECRET", "12345678901234567891"));
        assert!(rounded.is_err());

        let config = SplitConfig::from_yaml(&document.replace("SECRET", "\"12345678901234567891\"")).unwrap();
        assert_eq!(config.secret.resolve(config.non_integer), Ok(12345678901234567891));
    }

    #[test]
    fn split_config_fractional_secret_is_kept() {
        let config = SplitConfig::from_yaml("secret: 6.5\nthreshold: 2\nshare_count: 3\n").unwrap();
        assert!(config.secret.resolve(NonIntegerPolicy::Reject).is_err());
        assert_eq!(config.secret.resolve(NonIntegerPolicy::Truncate), Ok(6));
    }

    #[test]
    fn recover_config_large_prime() {
        let document = "prime: PRIME\nthreshold: 2\nshares:\n  - { x: 1, y: 3 }\n  - { x: 2, y: 5 }\n";
        let rounded = RecoverConfig::from_yaml(&document.replace("PRIME", "18446744073709551557")).unwrap_err();
        assert!(!rounded.to_string().contains("18446744073709551615"));

        let config = RecoverConfig::from_yaml(&document.replace("PRIME", "\"127\"")).unwrap();
        assert_eq!(config.prime.value(), 127);
    }

    #[test]
    fn recover_config_large_coordinates() {
        let document = "prime: 127\nthreshold: 2\nshares:\n  - { x: 1, y: Y }\n  - { x: 2, y: 5 }\n";
        assert!(RecoverConfig::from_yaml(&document.replace("Y", "18446744073709551615")).is_err());

        let config = RecoverConfig::from_yaml(&document.replace("Y", "\"18446744073709551615\"")).unwrap();
        assert_eq!(config.shares[0], Point::new(1, u64::MAX));
    }

    #[test]
    fn recover_config_default_audit() {
        let config = RecoverConfig::from_yaml(
            r#"
prime: 13
threshold: 2
shares:
  - { x: 1, y: 3 }
  - { x: 2, y: 5 }
"#,
        )
        .unwrap();
        assert_eq!(config.audit, AuditConfig::default());
    }
}
