// src/model.rs
//
// The record shape of a year's offerings file and the canonical, read-only
// dataset built from it.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One submitted offering. Every field is optional; an empty string in the
/// source file reads as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Offering {
    #[serde(rename = "Your Name", default, deserialize_with = "lenient_text")]
    name: Option<String>,

    #[serde(rename = "Name of City you are from", default, deserialize_with = "lenient_text")]
    city: Option<String>,

    #[serde(rename = "country", default, deserialize_with = "lenient_text")]
    country: Option<String>,

    #[serde(rename = "Your Offering", default, deserialize_with = "lenient_text")]
    body: Option<String>,
}

/// Strings pass through, other scalars become their text form, and
/// anything else (null, arrays, objects) is treated as missing.
fn lenient_text<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn non_empty(v: impl Into<String>) -> Option<String> {
    let v = v.into();
    if v.is_empty() { None } else { Some(v) }
}

impl Offering {
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }
    pub fn city(&self) -> Option<&str> { self.city.as_deref() }
    pub fn country(&self) -> Option<&str> { self.country.as_deref() }
    pub fn body(&self) -> Option<&str> { self.body.as_deref() }

    pub fn with_name(mut self, v: impl Into<String>) -> Self { self.name = non_empty(v); self }
    pub fn with_city(mut self, v: impl Into<String>) -> Self { self.city = non_empty(v); self }
    pub fn with_country(mut self, v: impl Into<String>) -> Self { self.country = non_empty(v); self }
    pub fn with_body(mut self, v: impl Into<String>) -> Self { self.body = non_empty(v); self }

    /// The fields free-text search looks at, in display order.
    pub fn searchable(&self) -> [Option<&str>; 4] {
        [self.name(), self.city(), self.country(), self.body()]
    }
}

/// Authoritative dataset for the session.
/// Loaded once; nothing mutates it afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Offering>,
}

impl Dataset {
    pub fn new(records: Vec<Offering>) -> Self { Self { records } }

    /// Parse a JSON array of offering objects. Unknown keys are ignored.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<Offering> = serde_json::from_str(text)?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn get(&self, ix: usize) -> Option<&Offering> { self.records.get(ix) }
    pub fn records(&self) -> &[Offering] { &self.records }
    pub fn iter(&self) -> std::slice::Iter<'_, Offering> { self.records.iter() }
}

impl From<Vec<Offering>> for Dataset {
    fn from(records: Vec<Offering>) -> Self { Self::new(records) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys_and_ignores_extras() {
        let ds = Dataset::from_json(r#"[
            {"Your Name": "Ana", "Name of City you are from": "Lima",
             "country": "Peru", "Your Offering": "Bread", "Timestamp": "x"}
        ]"#).unwrap();
        let o = ds.get(0).unwrap();
        assert_eq!(o.name(), Some("Ana"));
        assert_eq!(o.city(), Some("Lima"));
        assert_eq!(o.country(), Some("Peru"));
        assert_eq!(o.body(), Some("Bread"));
    }

    #[test]
    fn missing_empty_and_odd_values_degrade() {
        let ds = Dataset::from_json(r#"[
            {"Your Name": "", "country": null, "Name of City you are from": 1988,
             "Your Offering": ["not", "text"]},
            {}
        ]"#).unwrap();
        assert_eq!(ds.len(), 2);
        let o = ds.get(0).unwrap();
        assert_eq!(o.name(), None);
        assert_eq!(o.country(), None);
        assert_eq!(o.city(), Some("1988"));
        assert_eq!(o.body(), None);
        assert_eq!(ds.get(1), Some(&Offering::default()));
    }

    #[test]
    fn non_array_document_is_an_error() {
        assert!(Dataset::from_json(r#"{"Your Name": "Ana"}"#).is_err());
        assert!(Dataset::from_json("not json").is_err());
    }
}
