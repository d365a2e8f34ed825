use crate::config::Config;
use crate::records::{ContactStore, NewContactRecord, StoreError};
use reqwest::blocking::Client;
use serde_json::{json, Value};

const AIRTABLE_API_BASE: &str = "https://api.airtable.com/v0";

/// Thin client for the Airtable REST API: name lookup via
/// filterByFormula, insert via a `fields` payload.
pub struct AirtableStore {
    base_id: String,
    table: String,
    token: String,
    client: Client,
}

impl AirtableStore {
    pub fn new(cfg: &Config) -> Self {
        Self {
            base_id: cfg.airtable_base_id.clone(),
            table: cfg.airtable_table.clone(),
            token: cfg.airtable_token.clone(),
            client: Client::new(),
        }
    }

    fn table_url(&self) -> String {
        format!(
            "{AIRTABLE_API_BASE}/{}/{}",
            self.base_id,
            urlencoding::encode(&self.table)
        )
    }
}

impl ContactStore for AirtableStore {
    fn find_by_name(&self, name: &str) -> Result<bool, StoreError> {
        let formula = format!("{{Name}} = '{}'", name.replace('\'', "\\'"));

        let resp = self
            .client
            .get(self.table_url())
            .bearer_auth(&self.token)
            .query(&[("filterByFormula", formula.as_str()), ("maxRecords", "1")])
            .send()
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(StoreError::ApiError(format!("HTTP {status}: {text}")));
        }

        let body: Value =
            serde_json::from_str(&text).map_err(|e| StoreError::ApiError(e.to_string()))?;

        Ok(body
            .get("records")
            .and_then(Value::as_array)
            .map(|records| !records.is_empty())
            .unwrap_or(false))
    }

    fn insert(&self, record: &NewContactRecord) -> Result<(), StoreError> {
        let payload = json!({
            "fields": {
                "Name": record.name,
                "URL": record.url,
                "Lot Size": record.lot_size,
                "Price": record.price,
                "Photo": [{ "url": record.photo_url }],
                "NTM Map": record.ntm_map_url,
                "Zoning Map": record.zoning_map_url
            }
        });

        let resp = self
            .client
            .post(self.table_url())
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(StoreError::ApiError(format!("HTTP {status}: {body}")));
        }

        Ok(())
    }
}
