// SPDX-License-Identifier: MPL-2.0
//! Restaurant records from the listing endpoint.
//!
//! The backend is loose about field names and types, so the raw JSON object
//! is kept and display fields are derived on demand. A field counts as
//! present only if it is "truthy": not null, not `false`, not `0`, not an
//! empty string.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_NAME: &str = "Restaurant";
const DEFAULT_RATING: f64 = 4.5;
const DEFAULT_COST: &str = "$ 200";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Restaurant(Value);

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn joined(value: &Value) -> String {
    match value {
        Value::Array(items) => items.iter().map(text).collect::<Vec<_>>().join(", "),
        other => text(other),
    }
}

impl Restaurant {
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.0
    }

    fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| truthy(v))
    }

    fn first(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().find_map(|key| self.field(key))
    }

    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.first(&["restaurant_id", "id"]).map(text)
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.first(&["restaurant_name", "name"])
            .map_or_else(|| DEFAULT_NAME.to_string(), text)
    }

    /// Full address with the backend's stray `null` token removed.
    #[must_use]
    pub fn address(&self) -> String {
        if let Some(complete) = self.field("address_complete") {
            return text(complete).replacen("null", "", 1);
        }
        self.first(&["address", "location"])
            .map(text)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn rating(&self) -> f64 {
        self.first(&["rating", "avg_rating"])
            .and_then(|v| match v {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
            .unwrap_or(DEFAULT_RATING)
    }

    /// Price label, e.g. `$ 350`.
    #[must_use]
    pub fn cost_for_two(&self) -> String {
        if let Some(cost) = self.field("cost_for_two") {
            return format!("$ {}", text(cost));
        }
        self.field("cost")
            .map_or_else(|| DEFAULT_COST.to_string(), text)
    }

    #[must_use]
    pub fn cuisines(&self) -> String {
        self.first(&["cuisines", "cuisine", "categories", "tags"])
            .map(joined)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn image_url(&self) -> Option<String> {
        if let Some(cover) = self.field("cover_image") {
            return Some(text(cover));
        }
        let first_image = self
            .0
            .pointer("/images/0/url")
            .filter(|v| truthy(v))
            .map(text);
        first_image.or_else(|| self.field("logo").map(text))
    }

    /// File name for the shared image, e.g. `Pizza_Palace.png`.
    #[must_use]
    pub fn share_file_name(&self) -> String {
        let name = self
            .field("restaurant_name")
            .map_or_else(|| "restaurant".to_string(), text);
        share_file_name(&name)
    }
}

/// Turns a restaurant name into a plain file name, e.g. `Pizza_Palace.png`.
///
/// Whitespace runs become a single `_`. Path separators, control characters
/// and leading dots become `_` each, so the result never names a directory
/// or a hidden file.
#[must_use]
pub fn share_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        let leading_dot = c == '.' && out.chars().all(|p| p == '_');
        if c == '/' || c == '\\' || c.is_control() || leading_dot {
            out.push('_');
        } else {
            out.push(c);
        }
    }
    if out.is_empty() {
        out.push_str("restaurant");
    }
    out.push_str(".png");
    out
}

/// Extracts the restaurant list from a listing response.
///
/// The list may sit at `data.data.results`, `data.results` or `results`, and
/// is sometimes itself a JSON-encoded string. Anything else yields nothing.
#[must_use]
pub fn parse_results(body: &Value) -> Vec<Restaurant> {
    let found = ["/data/data/results", "/data/results", "/results"]
        .iter()
        .find_map(|path| body.pointer(path).filter(|v| truthy(v)));

    let decoded;
    let list = match found {
        Some(Value::String(encoded)) => {
            decoded = serde_json::from_str::<Value>(encoded).unwrap_or(Value::Null);
            &decoded
        }
        Some(value) => value,
        None => return Vec::new(),
    };

    match list {
        Value::Array(items) => items.iter().cloned().map(Restaurant::from_value).collect(),
        _ => Vec::new(),
    }
}
