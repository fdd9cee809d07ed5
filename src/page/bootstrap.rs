//! Page Bootstrap
//!
//! The server renders the cart into a JSON data island:
//! `<script id="cart-data" type="application/json">{"config":{...},"lines":[...]}</script>`

use serde::Deserialize;

use crate::config::CartConfig;
use crate::error::CartError;
use crate::models::CartLine;

pub const DATA_ELEMENT_ID: &str = "cart-data";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub config: CartConfig,
    #[serde(default)]
    pub lines: Vec<CartLine>,
}

impl PageData {
    pub fn from_json(text: &str) -> Result<Self, CartError> {
        serde_json::from_str(text).map_err(|e| CartError::PageData(e.to_string()))
    }
}

/// Read the data island from the current document
pub fn load() -> Result<PageData, CartError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CartError::MissingElement("document".into()))?;
    let island = document
        .get_element_by_id(DATA_ELEMENT_ID)
        .ok_or_else(|| CartError::MissingElement(DATA_ELEMENT_ID.into()))?;
    PageData::from_json(&island.text_content().unwrap_or_default())
}
