//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::KeyExtractor,
};

use crate::config::RateLimitConfig;

/// Governor layer keyed by `K`.
pub type RateLimitLayer<K> = GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a per-client rate limiter.
///
/// One token is replenished every `settings.replenish_secs` seconds and up to
/// `settings.burst` requests may be made back to back. Requests exceeding the
/// limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Pass `PeerIpKeyExtractor` to key on the socket peer address, or
/// `SmartIpKeyExtractor` to read `X-Forwarded-For` / `X-Real-IP` when running
/// behind a trusted reverse proxy. Either way the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if the replenish interval or burst size is zero.
pub fn layer<K>(key_extractor: K, settings: RateLimitConfig) -> Result<RateLimitLayer<K>>
where
    K: KeyExtractor,
{
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(settings.replenish_secs)
        .burst_size(settings.burst)
        .key_extractor(key_extractor)
        .finish()
        .context("Invalid rate limit settings")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_governor::key_extractor::PeerIpKeyExtractor;

    #[test]
    fn test_default_settings_build() {
        assert!(layer(PeerIpKeyExtractor, RateLimitConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_burst_is_rejected() {
        let settings = RateLimitConfig {
            replenish_secs: 1,
            burst: 0,
        };
        assert!(layer(PeerIpKeyExtractor, settings).is_err());
    }
}
