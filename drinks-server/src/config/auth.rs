//! Identity provider configuration

use confique::Config;
use url::Url;

/// Settings the token verifier checks incoming bearer tokens against
#[derive(Debug, Config, Clone)]
pub struct AuthConfig {
    /// Identity provider domain, e.g. `coffee.eu.auth0.com`
    #[config(env = "DRINKS_AUTH_DOMAIN")]
    pub domain: String,

    /// Expected `aud` claim
    #[config(env = "DRINKS_AUTH_AUDIENCE")]
    pub audience: String,

    /// Signing algorithm tokens must use (default: RS256)
    #[config(env = "DRINKS_AUTH_ALGORITHM", default = "RS256")]
    pub algorithm: String,

    /// Expected `iss` claim (default: `https://{domain}/`)
    #[config(env = "DRINKS_AUTH_ISSUER")]
    pub issuer: Option<String>,

    /// Location of the signing key set (default: `https://{domain}/.well-known/jwks.json`)
    #[config(env = "DRINKS_AUTH_JWKS_URL")]
    pub jwks_url: Option<String>,

    /// Timeout for fetching the signing key set in seconds (default: 5)
    #[config(env = "DRINKS_AUTH_JWKS_TIMEOUT", default = 5)]
    pub jwks_timeout: u64,

    /// How long a fetched key set stays cached in seconds.
    /// Unset keeps it for the lifetime of the process.
    #[config(env = "DRINKS_AUTH_JWKS_CACHE_TTL")]
    pub jwks_cache_ttl: Option<u64>,

    /// Clock skew tolerated when checking `exp`, in seconds (default: 0)
    #[config(env = "DRINKS_AUTH_LEEWAY", default = 0)]
    pub leeway: u64,
}

impl AuthConfig {
    /// The issuer tokens must carry
    pub fn issuer(&self) -> String {
        self.issuer
            .clone()
            .unwrap_or_else(|| format!("https://{}/", self.domain))
    }

    /// The URL the signing key set is fetched from
    pub fn jwks_url(&self) -> Result<Url, url::ParseError> {
        match &self.jwks_url {
            Some(url) => Url::parse(url),
            None => Url::parse(&format!("https://{}/.well-known/jwks.json", self.domain)),
        }
    }
}
