//! Cart Item Requests
//!
//! `PUT {api_base}/{id}` with a JSON integer body, `DELETE {api_base}/{id}`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::{CartRequest, Method};
use crate::models::{ItemId, Quantity};

/// Characters that cannot appear raw in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn item_path(api_base: &str, item: &ItemId) -> String {
    format!(
        "{}/{}",
        api_base.trim_end_matches('/'),
        utf8_percent_encode(item.as_str(), PATH_SEGMENT)
    )
}

/// The body is the quantity as a bare JSON integer, e.g. `5`
pub fn update_quantity(api_base: &str, item: &ItemId, quantity: Quantity) -> CartRequest {
    CartRequest {
        method: Method::Put,
        path: item_path(api_base, item),
        content_type: Some("application/json"),
        body: Some(quantity.to_string()),
    }
}

pub fn remove_item(api_base: &str, item: &ItemId) -> CartRequest {
    CartRequest {
        method: Method::Delete,
        path: item_path(api_base, item),
        content_type: None,
        body: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_API_BASE;

    #[test]
    fn test_update_request() {
        let quantity = Quantity::parse("3").unwrap();
        let req = update_quantity(DEFAULT_API_BASE, &ItemId::new("42"), quantity);
        assert_eq!(req.method, Method::Put);
        assert_eq!(req.path, "/reservations/api/cartitems/42");
        assert_eq!(req.content_type, Some("application/json"));
        assert_eq!(req.body.as_deref(), Some("3"));
        assert_eq!(req.body.as_deref(), Some(serde_json::to_string(&quantity).unwrap().as_str()));
    }

    #[test]
    fn test_remove_request() {
        let req = remove_item(DEFAULT_API_BASE, &ItemId::new("42"));
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.path, "/reservations/api/cartitems/42");
        assert_eq!(req.content_type, None);
        assert_eq!(req.body, None);
    }

    #[test]
    fn test_trailing_slash_and_escaping() {
        let req = remove_item("/api/cartitems/", &ItemId::new("a/b c"));
        assert_eq!(req.path, "/api/cartitems/a%2Fb%20c");
    }
}
