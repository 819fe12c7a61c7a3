use crate::application::ports::{ApiKey, ApiKeySource};

/// Reads the key from the process environment on every call.
pub struct EnvApiKeySource {
    var_name: String,
}

impl EnvApiKeySource {
    pub const DEFAULT_VAR: &'static str = "API_KEY";

    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }
}

impl Default for EnvApiKeySource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VAR)
    }
}

impl ApiKeySource for EnvApiKeySource {
    fn api_key(&self) -> Option<ApiKey> {
        std::env::var(&self.var_name).ok().and_then(ApiKey::new)
    }
}

/// Fixed key, or none at all.
pub struct StaticApiKeySource(Option<ApiKey>);

impl StaticApiKeySource {
    pub fn new(key: &str) -> Self {
        Self(ApiKey::new(key))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl ApiKeySource for StaticApiKeySource {
    fn api_key(&self) -> Option<ApiKey> {
        self.0.clone()
    }
}
