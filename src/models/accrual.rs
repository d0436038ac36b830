use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload for an earn-points transaction (`PUT /points/accrue`).
///
/// Unset optional fields are serialized as JSON `null`, which the upstream
/// service treats as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Accrual {
    pub partner_code: String,
    pub external_id: String,
    pub date_activity: Option<DateTime<Utc>>,
    pub channel: String,
    pub subchannel: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "subtype")]
    pub subkind: Option<String>,
    pub activity: String,
    pub subactivity: Option<String>,
    pub currency: Option<String>,
    /// Line items, upstream-defined shape.
    pub items: Vec<Value>,
}

/// Accrual response. Only `trx_id` is read; everything else the upstream
/// service returns is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AccrualReceipt {
    pub trx_id: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn unset_fields_serialize_as_null() {
        let accrual = Accrual {
            partner_code: "ACME".to_string(),
            external_id: "alice".to_string(),
            channel: "store".to_string(),
            kind: "purchase".to_string(),
            activity: "checkout".to_string(),
            items: vec![json!({ "sku": "A-1", "qty": 2 })],
            ..Accrual::default()
        };

        assert_eq!(
            serde_json::to_value(&accrual).unwrap(),
            json!({
                "partner_code": "ACME",
                "external_id": "alice",
                "date_activity": null,
                "channel": "store",
                "subchannel": null,
                "type": "purchase",
                "subtype": null,
                "activity": "checkout",
                "subactivity": null,
                "currency": null,
                "items": [{ "sku": "A-1", "qty": 2 }],
            })
        );
    }

    #[test]
    fn receipt_requires_trx_id() {
        let receipt: AccrualReceipt =
            serde_json::from_value(json!({ "trx_id": "T1", "points": 10 })).unwrap();
        assert_eq!(receipt.trx_id, "T1");

        assert!(serde_json::from_value::<AccrualReceipt>(json!({ "points": 10 })).is_err());
    }
}
