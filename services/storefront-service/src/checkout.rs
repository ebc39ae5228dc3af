use axum::{Json, extract::State};
use is_api_types::{CartLine, CheckoutQuoteRequest, CheckoutQuoteResponse, ItemKey};
use is_storefront_core::{Cart, ShippingPolicy};
use std::sync::Arc;
use tracing::debug;

use crate::{ApiResult, AppState, bad_request, epoch_ms, internal_error};

const MAX_QUOTE_LINES: usize = 200;

/// Price a bag sent by the browser against the catalog. When complete contact
/// details come along, also build the order message and WhatsApp link. The
/// service keeps nothing.
pub(crate) async fn quote(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CheckoutQuoteRequest>,
) -> ApiResult<CheckoutQuoteResponse> {
    if request.lines.len() > MAX_QUOTE_LINES {
        return Err(bad_request("too many lines in quote request"));
    }

    let mut unknown_keys = Vec::new();
    let mut resolved = Vec::with_capacity(request.lines.len());
    for line in &request.lines {
        let summary = line
            .key
            .parse::<ItemKey>()
            .ok()
            .and_then(|key| is_catalog::purchasable_summary(&key).ok());
        match summary {
            Some(item) => resolved.push(CartLine {
                item,
                quantity: line.quantity.max(1),
            }),
            None => unknown_keys.push(line.key.clone()),
        }
    }

    let cart = Cart::from_lines(resolved);
    let totals = ShippingPolicy::default().quote(cart.subtotal());

    let mut response = CheckoutQuoteResponse {
        lines: cart.lines().to_vec(),
        unknown_keys,
        totals,
        missing_fields: Vec::new(),
        reference: None,
        message: None,
        whatsapp_url: None,
    };

    if let Some(details) = &request.details {
        response.missing_fields = details
            .missing_fields()
            .into_iter()
            .map(str::to_owned)
            .collect();

        if response.missing_fields.is_empty() && !cart.is_empty() {
            let now_ms = epoch_ms().map_err(internal_error)?;
            let order = is_handoff::prepare_order(
                &state.whatsapp,
                cart.lines(),
                details,
                &totals,
                now_ms,
            );
            response.reference = Some(order.reference);
            response.message = Some(order.message);
            response.whatsapp_url = Some(order.url);
        }
    }

    debug!(
        lines = response.lines.len(),
        unknown = response.unknown_keys.len(),
        total = response.totals.total,
        "checkout quote"
    );
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use is_api_types::CheckoutQuoteResponse;
    use is_storefront_core::{Cart, ShippingPolicy};
    use serde_json::json;

    fn post(body: serde_json::Value) -> anyhow::Result<Request<Body>> {
        Ok(Request::builder()
            .method("POST")
            .uri("/checkout/quote")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?)
    }

    async fn quote(body: serde_json::Value) -> anyhow::Result<(StatusCode, CheckoutQuoteResponse)> {
        let dir = tempfile::tempdir()?;
        let (status, bytes) = send(test_app(dir.path()), post(body)?).await?;
        Ok((status, serde_json::from_slice(&bytes)?))
    }

    #[tokio::test]
    async fn quote_matches_core_totals() -> anyhow::Result<()> {
        let (status, response) = quote(json!({
            "lines": [
                { "key": "product:7001", "quantity": 2 },
                { "key": "7001" },
                { "key": "painting:OP17", "quantity": 0 }
            ]
        }))
        .await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.lines.len(), 2);
        assert_eq!(response.lines[0].quantity, 3);
        assert_eq!(response.lines[1].quantity, 1);

        let core = Cart::from_lines(response.lines.clone());
        assert_eq!(response.totals, ShippingPolicy::default().quote(core.subtotal()));
        assert!(response.message.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn huge_duplicate_quantities_saturate() -> anyhow::Result<()> {
        let (status, response) = quote(json!({
            "lines": [
                { "key": "product:1001", "quantity": 4294967295u32 },
                { "key": "1001", "quantity": 4294967295u32 }
            ]
        }))
        .await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.lines[0].quantity, u32::MAX);
        assert_eq!(response.totals.subtotal, response.lines[0].line_total());
        assert_eq!(response.totals.shipping, 0);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_and_print_keys_are_reported() -> anyhow::Result<()> {
        let (_, response) = quote(json!({
            "lines": [
                { "key": "product:9999" },
                { "key": "print:PR1" },
                { "key": "bogus" },
                { "key": "product:1001" }
            ]
        }))
        .await?;
        assert_eq!(response.unknown_keys, vec!["product:9999", "print:PR1", "bogus"]);
        assert_eq!(response.lines.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn complete_details_produce_a_handoff() -> anyhow::Result<()> {
        let (_, response) = quote(json!({
            "lines": [{ "key": "product:1001" }],
            "details": {
                "first_name": "Rima",
                "last_name": "Haddad",
                "phone": "03 123 456",
                "address": "Rue Gouraud",
                "city": "Beirut"
            }
        }))
        .await?;
        assert!(response.missing_fields.is_empty());
        let reference = response.reference.unwrap_or_default();
        assert!(reference.starts_with("INS-"));
        let message = response.message.unwrap_or_default();
        assert!(message.ends_with(&format!("Order Reference: {reference}")));
        assert!(response
            .whatsapp_url
            .is_some_and(|url| url.starts_with("https://wa.me/96181773588?text=")));
        Ok(())
    }

    #[tokio::test]
    async fn incomplete_details_list_missing_fields() -> anyhow::Result<()> {
        let (_, response) = quote(json!({
            "lines": [{ "key": "product:1001" }],
            "details": { "first_name": "Rima", "city": " " }
        }))
        .await?;
        assert_eq!(
            response.missing_fields,
            vec!["last_name", "phone", "address", "city"]
        );
        assert!(response.whatsapp_url.is_none());
        Ok(())
    }
}
