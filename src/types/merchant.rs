//! Merchant credentials and gateway mode

use super::constants::env_vars;
use crate::{FirstChekoutError, Result};
use std::env;

/// Which side of the gateway the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Test,
    Live,
}

impl Mode {
    /// Map the test-mode flag onto a mode
    pub fn from_test_flag(test_mode: bool) -> Self {
        if test_mode {
            Mode::Test
        } else {
            Mode::Live
        }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, Mode::Test)
    }

    /// Pick the variant matching this mode
    pub fn select<T>(&self, test: T, live: T) -> T {
        match self {
            Mode::Test => test,
            Mode::Live => live,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Test => "test",
            Mode::Live => "live",
        }
    }
}

/// Credentials issued on the FirstChekout dashboard
#[derive(Clone, PartialEq, Eq)]
pub struct MerchantProfile {
    pub test_secret: String,
    pub live_secret: String,
    /// Merchant code, appended to every signature
    pub code: String,
    pub test_callback_url: String,
    pub live_callback_url: String,
    pub test_mode: bool,
}

impl std::fmt::Debug for MerchantProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerchantProfile")
            .field("test_secret", &"<redacted>")
            .field("live_secret", &"<redacted>")
            .field("code", &self.code)
            .field("test_callback_url", &self.test_callback_url)
            .field("live_callback_url", &self.live_callback_url)
            .field("test_mode", &self.test_mode)
            .finish()
    }
}

impl MerchantProfile {
    /// Create a profile in test mode with both callbacks set to the default URL
    pub fn new(
        test_secret: impl Into<String>,
        live_secret: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            test_secret: test_secret.into(),
            live_secret: live_secret.into(),
            code: code.into(),
            test_callback_url: env_vars::DEFAULT_CALLBACK_URL.to_string(),
            live_callback_url: env_vars::DEFAULT_CALLBACK_URL.to_string(),
            test_mode: true,
        }
    }

    /// Load the profile from the process environment
    ///
    /// The merchant code and the secret for the selected mode are required; the other
    /// secret may be left unset and stays empty. Callback URLs fall back to
    /// `http://www.example.com/callback` and test mode defaults to on.
    ///
    /// `FIRST_CHEKOUT_TEST_MODE` is read as a switch, not by string truthiness: `false`,
    /// `0`, `no`, `off` and the empty string select live mode, so `no` and `off` run live
    /// even though they are non-empty strings.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load the profile through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let required = |key: &str| {
            optional(key).ok_or_else(|| {
                FirstChekoutError::config(format!("{} environment variable is required", key))
            })
        };

        let test_mode = lookup(env_vars::TEST_MODE)
            .map(|value| parse_flag(&value))
            .unwrap_or(true);

        let (test_secret, live_secret) = if test_mode {
            (
                required(env_vars::TEST_SECRET)?,
                optional(env_vars::LIVE_SECRET).unwrap_or_default(),
            )
        } else {
            (
                optional(env_vars::TEST_SECRET).unwrap_or_default(),
                required(env_vars::LIVE_SECRET)?,
            )
        };
        let code = required(env_vars::CODE)?;

        let test_callback_url = lookup(env_vars::TEST_CALLBACK_URL)
            .unwrap_or_else(|| env_vars::DEFAULT_CALLBACK_URL.to_string());
        let live_callback_url = lookup(env_vars::LIVE_CALLBACK_URL)
            .unwrap_or_else(|| env_vars::DEFAULT_CALLBACK_URL.to_string());

        Ok(Self {
            test_secret,
            live_secret,
            code,
            test_callback_url,
            live_callback_url,
            test_mode,
        })
    }

    /// Set the test callback URL
    pub fn with_test_callback_url(mut self, url: impl Into<String>) -> Self {
        self.test_callback_url = url.into();
        self
    }

    /// Set the live callback URL
    pub fn with_live_callback_url(mut self, url: impl Into<String>) -> Self {
        self.live_callback_url = url.into();
        self
    }

    /// Set whether the sandbox is used
    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn mode(&self) -> Mode {
        Mode::from_test_flag(self.test_mode)
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_profile_from_lookup_defaults() {
        let profile = MerchantProfile::from_lookup(lookup_from(&[
            (env_vars::TEST_SECRET, "ts"),
            (env_vars::LIVE_SECRET, "ls"),
            (env_vars::CODE, "M001"),
        ]))
        .unwrap();

        assert_eq!(profile.test_secret, "ts");
        assert_eq!(profile.live_secret, "ls");
        assert_eq!(profile.code, "M001");
        assert_eq!(profile.test_callback_url, "http://www.example.com/callback");
        assert_eq!(profile.live_callback_url, "http://www.example.com/callback");
        assert!(profile.test_mode);
    }

    #[test]
    fn test_profile_from_lookup_live_mode() {
        for flag in ["false", "0", "off", "No", ""] {
            let profile = MerchantProfile::from_lookup(lookup_from(&[
                (env_vars::TEST_SECRET, "ts"),
                (env_vars::LIVE_SECRET, "ls"),
                (env_vars::CODE, "M001"),
                (env_vars::TEST_MODE, flag),
            ]))
            .unwrap();
            assert_eq!(profile.mode(), Mode::Live, "flag {:?}", flag);
        }
    }

    #[test]
    fn test_profile_missing_code() {
        let err = MerchantProfile::from_lookup(lookup_from(&[
            (env_vars::TEST_SECRET, "ts"),
            (env_vars::LIVE_SECRET, "ls"),
        ]))
        .unwrap_err();

        assert!(matches!(err, FirstChekoutError::Config { .. }));
        assert!(err.to_string().contains(env_vars::CODE));
    }

    #[test]
    fn test_sandbox_profile_without_live_secret() {
        let profile = MerchantProfile::from_lookup(lookup_from(&[
            (env_vars::TEST_SECRET, "ts"),
            (env_vars::CODE, "M001"),
        ]))
        .unwrap();

        assert_eq!(profile.mode(), Mode::Test);
        assert_eq!(profile.test_secret, "ts");
        assert_eq!(profile.live_secret, "");
    }

    #[test]
    fn test_live_profile_requires_live_secret() {
        let err = MerchantProfile::from_lookup(lookup_from(&[
            (env_vars::TEST_SECRET, "ts"),
            (env_vars::CODE, "M001"),
            (env_vars::TEST_MODE, "false"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(env_vars::LIVE_SECRET));

        let profile = MerchantProfile::from_lookup(lookup_from(&[
            (env_vars::LIVE_SECRET, "ls"),
            (env_vars::CODE, "M001"),
            (env_vars::TEST_MODE, "false"),
        ]))
        .unwrap();
        assert_eq!(profile.test_secret, "");
        assert_eq!(profile.live_secret, "ls");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let profile = MerchantProfile::new("very-secret-test", "very-secret-live", "M001");
        let rendered = format!("{:?}", profile);
        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("M001"));
    }

    #[test]
    fn test_mode_select() {
        assert_eq!(Mode::Test.select("a", "b"), "a");
        assert_eq!(Mode::Live.select("a", "b"), "b");
        assert_eq!(Mode::from_test_flag(true), Mode::Test);
    }
}
