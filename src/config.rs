mod config {
    use super::{ApiConfig, SuggestionsConfig};

    use std::fmt::{Display, Formatter, Result as FormatResult};
    use std::fs::File;
    use std::io::{Error as IOError, ErrorKind as IOErrorKind};
    use std::path::PathBuf;

    use serde::Deserialize;
    use serde_yaml::Error as YamlParseError;

    #[derive(Deserialize, Debug, Default, Clone, Eq, PartialEq)]
    pub struct Config {
        #[serde(default)]
        api: ApiConfig,
        #[serde(default)]
        suggestions: SuggestionsConfig,
    }

    impl Config {
        /// Return the default path of the file that configuration is loaded from.
        pub fn default_path() -> ConfigDefaultPathResult {
            let mut path: PathBuf = match dirs::home_dir() {
                Some(path) => path,
                None => {
                    return Err(ConfigDefaultPathError::CannotDetermineHomeDirectory);
                }
            };
            path.push(".lupe-config.yaml");
            Ok(path)
        }

        /// Return the `Config` loaded from the default file if it exists or the default config
        /// if the file does not exist. If there is an error then return a `ConfigLoadError`.
        pub fn load() -> ConfigLoadResult {
            let path: PathBuf = match Self::default_path() {
                Ok(path) => path,
                Err(error) => {
                    return Err(ConfigLoadError::ConfigDefaultPathError(error));
                }
            };

            let file: File = match File::open(path.clone()) {
                Ok(file) => file,
                Err(error) => match error.kind() {
                    IOErrorKind::NotFound => {
                        return Ok(Config::default());
                    }
                    IOErrorKind::PermissionDenied => {
                        return Err(ConfigLoadError::PermissionDeniedError(path));
                    }
                    _ => {
                        return Err(ConfigLoadError::OtherFileReadError { path, error });
                    }
                },
            };

            match serde_yaml::from_reader(file) {
                Ok(config) => Ok(config),
                Err(error) => Err(ConfigLoadError::ParseError { path, error }),
            }
        }

        /// Return the API configuration.
        pub fn api(&self) -> &ApiConfig {
            &self.api
        }

        /// Return the suggestions configuration.
        pub fn suggestions(&self) -> &SuggestionsConfig {
            &self.suggestions
        }
    }

    type ConfigDefaultPathResult = Result<PathBuf, ConfigDefaultPathError>;

    pub enum ConfigDefaultPathError {
        CannotDetermineHomeDirectory,
    }

    type ConfigLoadResult = Result<Config, ConfigLoadError>;

    #[allow(clippy::enum_variant_names)]
    pub enum ConfigLoadError {
        ConfigDefaultPathError(ConfigDefaultPathError),
        PermissionDeniedError(PathBuf),
        OtherFileReadError {
            path: PathBuf,
            error: IOError,
        },
        ParseError {
            path: PathBuf,
            error: YamlParseError,
        },
    }

    impl Display for ConfigLoadError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
            match self {
                Self::ConfigDefaultPathError(error) => match error {
                    ConfigDefaultPathError::CannotDetermineHomeDirectory => {
                        write!(f, "Failed to load the configuration because the home directory could not be determined.")
                    }
                },
                Self::PermissionDeniedError(path) => {
                    write!(
                        f,
                        "Failed to load the configuration file \"{}\" because permission was denied.",
                        path.display()
                    )
                }
                Self::OtherFileReadError { path, error } => {
                    write!(
                        f,
                        "Failed to load the configuration file \"{}\" because of an IO error: {}",
                        path.display(),
                        error
                    )
                }
                Self::ParseError { path, error } => {
                    write!(
                        f,
                        "Failed to parse the configuration file \"{}\": {}",
                        path.display(),
                        error
                    )
                }
            }
        }
    }
}
pub use config::{Config, ConfigLoadError};

mod api {
    use serde::Deserialize;

    /// The photo search endpoint. The default access key is a public demo key with a low
    /// rate limit.
    #[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
    pub struct ApiConfig {
        #[serde(default = "default_base_url")]
        base_url: String,
        #[serde(default = "default_access_key")]
        access_key: String,
    }

    impl Default for ApiConfig {
        fn default() -> Self {
            Self {
                base_url: default_base_url(),
                access_key: default_access_key(),
            }
        }
    }

    impl ApiConfig {
        pub fn base_url(&self) -> &str {
            &self.base_url
        }

        pub fn access_key(&self) -> &str {
            &self.access_key
        }
    }

    fn default_base_url() -> String {
        String::from("https://api.unsplash.com")
    }

    fn default_access_key() -> String {
        String::from("8dbebf7510c980a9ba6d0bf24df2c976f44e24669932eae317a0fcd77444fa12")
    }
}
pub use api::ApiConfig;

mod suggestions {
    use serde::Deserialize;

    #[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
    pub struct SuggestionsConfig {
        /// The maximum number of suggestions offered for a partial search.
        #[serde(default = "default_limit")]
        limit: usize,
    }

    impl Default for SuggestionsConfig {
        fn default() -> Self {
            Self {
                limit: default_limit(),
            }
        }
    }

    impl SuggestionsConfig {
        /// Return the maximum number of suggestions offered for a partial search.
        pub fn limit(&self) -> usize {
            self.limit
        }
    }

    fn default_limit() -> usize {
        5
    }
}
pub use suggestions::SuggestionsConfig;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_the_default_config() {
        let config: Config = serde_yaml::from_str("{}").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.suggestions().limit(), 5);
        assert_eq!(config.api().base_url(), "https://api.unsplash.com");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: Config = serde_yaml::from_str("suggestions:\n  limit: 3\n").unwrap();

        assert_eq!(config.suggestions().limit(), 3);
        assert_eq!(config.api().base_url(), "https://api.unsplash.com");
    }
}
