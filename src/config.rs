//! Client configuration.
//!
//! Raw, unresolved settings for the Loyalicos API: the host plus either a
//! ready API key or an OAuth client/secret pair. Values come from explicit
//! setters or the `LOYALICOS_*` environment variables; resolution into a
//! bearer credential happens in [`crate::auth::Credentials`].

const ENV_HOST: &str = "LOYALICOS_API_HOST";
const ENV_API_KEY: &str = "LOYALICOS_API_KEY";
const ENV_CLIENT_ID: &str = "LOYALICOS_API_CLIENT";
const ENV_CLIENT_SECRET: &str = "LOYALICOS_API_SECRET";

#[derive(Debug, Clone, Default)]
pub struct Config {
    host: Option<String>,
    api_key: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl Config {
    /// Read all settings from the `LOYALICOS_*` environment variables.
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            host: env_to_str(ENV_HOST),
            api_key: env_to_str(ENV_API_KEY),
            client_id: env_to_str(ENV_CLIENT_ID),
            client_secret: env_to_str(ENV_CLIENT_SECRET),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    pub fn set_host<T: Into<String>>(&mut self, value: T) {
        self.host = Some(value.into());
    }

    pub fn set_api_key<T: Into<String>>(&mut self, value: T) {
        self.api_key = Some(value.into());
    }

    pub fn set_client_credentials<T: Into<String>>(&mut self, client_id: T, client_secret: T) {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
    }
}

fn env_to_str(env_key: &str) -> Option<String> {
    std::env::var(env_key).ok().filter(|s| !s.is_empty())
}
