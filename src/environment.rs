use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Environment variable consulted for the API base URL when no flag is given.
pub const API_URL_ENV_VAR: &str = "ADWATCH_API_URL";

/// Represents the metrics backend the dashboard points at.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development backend.
    #[default]
    Local,
    /// An explicitly supplied backend URL.
    Custom { api_base_url: String },
}

impl Environment {
    /// Returns the metrics API base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8000".to_string(),
            Environment::Custom { api_base_url } => api_base_url.clone(),
        }
    }

    /// Resolves the environment from an explicit URL override, falling back to
    /// the `ADWATCH_API_URL` environment variable, then to [`Environment::Local`].
    pub fn resolve(api_url: Option<String>) -> Self {
        api_url
            .or_else(|| std::env::var(API_URL_ENV_VAR).ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(());
        }
        match trimmed.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            _ => Ok(Environment::Custom {
                api_base_url: trimmed.to_string(),
            }),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_points_at_local_backend() {
        assert_eq!(Environment::default(), Environment::Local);
        assert_eq!(Environment::Local.api_base_url(), "http://localhost:8000");
    }

    #[test]
    fn parses_local_keyword_case_insensitively() {
        assert_eq!("local".parse(), Ok(Environment::Local));
        assert_eq!("LOCAL".parse(), Ok(Environment::Local));
    }

    #[test]
    fn parses_anything_else_as_custom_url() {
        let env: Environment = "https://metrics.example.com".parse().unwrap();
        assert_eq!(env.api_base_url(), "https://metrics.example.com");
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!("".parse::<Environment>(), Err(()));
        assert_eq!("   ".parse::<Environment>(), Err(()));
    }

    #[test]
    fn explicit_url_override_wins() {
        let env = Environment::resolve(Some("http://10.0.0.5:9000".to_string()));
        assert_eq!(env.api_base_url(), "http://10.0.0.5:9000");
    }
}
