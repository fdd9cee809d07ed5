//! Page Configuration
//!
//! Settings the server passes along with the cart data. Every field has a default.

use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "/reservations/api/cartitems";
pub const DEFAULT_CHECKOUT_URL: &str = "/reservations/checkout";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CartConfig {
    /// Collection path of the cart items API; item ids are appended
    pub api_base: String,
    /// Link target of the checkout button (None hides it)
    pub checkout_url: Option<String>,
    /// `tracing` level name for the console subscriber
    pub log_level: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            checkout_url: Some(DEFAULT_CHECKOUT_URL.into()),
            log_level: "info".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: CartConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CartConfig::default());
        assert_eq!(config.api_base, "/reservations/api/cartitems");
    }

    #[test]
    fn test_partial_override() {
        let config: CartConfig =
            serde_json::from_str(r#"{"apiBase":"/api/v2/cartitems","checkoutUrl":null}"#).unwrap();
        assert_eq!(config.api_base, "/api/v2/cartitems");
        assert_eq!(config.checkout_url, None);
        assert_eq!(config.log_level, "info");
    }
}
