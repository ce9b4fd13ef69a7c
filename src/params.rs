use std::collections::BTreeMap;
use url::form_urlencoded;

/// Params is an ordered set of form fields sent to the Nagios XI API.
///
/// Nagios expects configuration attributes as URL-encoded key/value pairs,
/// either in the request body (GET/POST/DELETE) or appended to the URL (PUT).
/// Insertion order is preserved, and the same field name may appear more than
/// once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    fields: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Params { fields: Vec::new() }
    }

    /// Add a string field. Empty values are skipped entirely: Nagios treats
    /// an absent field and an empty field the same way.
    pub fn append_str(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.fields.push((name.to_string(), value.to_string()));
        }
    }

    /// Add an integer field in decimal form. Integers are always included;
    /// there is no "unset" decimal representation.
    pub fn append_int(&mut self, name: &str, value: i64) {
        self.fields.push((name.to_string(), value.to_string()));
    }

    /// Add a list field as a single comma-joined value, preserving element
    /// order. `None` means the field is absent and nothing is added; an empty
    /// list still produces an entry with an empty value.
    pub fn append_list(&mut self, name: &str, values: Option<&[String]>) {
        if let Some(values) = values {
            self.fields.push((name.to_string(), values.join(",")));
        }
    }

    /// Add free-form variables, one field per map entry. Keys pass through
    /// verbatim as wire field names.
    pub fn append_map(&mut self, values: Option<&BTreeMap<String, String>>) {
        if let Some(values) = values {
            for (key, value) in values {
                self.fields.push((key.clone(), value.clone()));
            }
        }
    }

    /// Iterate over the fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields in the set
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the set contains no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the first value recorded for a field name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// URL-encode the fields into a form body
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter())
            .finish()
    }
}

/// Conversion from a typed configuration record to its wire parameters.
///
/// Each record type provides an explicit field-to-parameter mapping built
/// from the `append_*` helpers on [`Params`], so the set of supported field
/// kinds is fixed at compile time.
pub trait ToParams {
    /// Produce the ordered parameter set for this record
    fn to_params(&self) -> Params;
}
