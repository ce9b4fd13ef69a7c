use crate::client::Client;
use crate::endpoint::Category;
use crate::error::{NagiosError, Result};
use crate::params::{Params, ToParams};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

const OBJECT_TYPE: &str = "host";

/// Host contains all available attributes of a Nagios host object.
///
/// Scalar attributes are strings on the wire (Nagios returns every value as
/// a string, booleans included, encoded as `"0"`/`"1"`); an empty string
/// means the attribute is unset and is omitted from requests. List
/// attributes use `None` for absent and comma-joined values on the wire.
/// `free_variables` holds custom `_VARNAME` attributes that pass through
/// verbatim as extra fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Host {
    #[serde(rename = "host_name", default)]
    pub host_name: String,

    #[serde(rename = "address", default)]
    pub address: String,

    #[serde(rename = "display_name", default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    #[serde(rename = "max_check_attempts", default)]
    pub max_check_attempts: String,

    #[serde(rename = "check_period", default)]
    pub check_period: String,

    #[serde(rename = "notification_interval", default)]
    pub notification_interval: String,

    #[serde(rename = "notification_period", default)]
    pub notification_period: String,

    #[serde(rename = "contacts", default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<String>>,

    #[serde(rename = "alias", default, skip_serializing_if = "String::is_empty")]
    pub alias: String,

    /// Templates this host inherits from (`use` on the wire)
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<String>>,

    #[serde(rename = "check_command", default, skip_serializing_if = "String::is_empty")]
    pub check_command: String,

    #[serde(rename = "contact_groups", default, skip_serializing_if = "Option::is_none")]
    pub contact_groups: Option<Vec<String>>,

    #[serde(rename = "notes", default, skip_serializing_if = "String::is_empty")]
    pub notes: String,

    #[serde(rename = "notes_url", default, skip_serializing_if = "String::is_empty")]
    pub notes_url: String,

    #[serde(rename = "action_url", default, skip_serializing_if = "String::is_empty")]
    pub action_url: String,

    #[serde(rename = "initial_state", default, skip_serializing_if = "String::is_empty")]
    pub initial_state: String,

    #[serde(rename = "retry_interval", default, skip_serializing_if = "String::is_empty")]
    pub retry_interval: String,

    #[serde(rename = "passive_checks_enabled", default, skip_serializing_if = "String::is_empty")]
    pub passive_checks_enabled: String,

    #[serde(rename = "active_checks_enabled", default, skip_serializing_if = "String::is_empty")]
    pub active_checks_enabled: String,

    #[serde(rename = "obsess_over_host", default, skip_serializing_if = "String::is_empty")]
    pub obsess_over_host: String,

    #[serde(rename = "event_handler", default, skip_serializing_if = "String::is_empty")]
    pub event_handler: String,

    #[serde(rename = "event_handler_enabled", default, skip_serializing_if = "String::is_empty")]
    pub event_handler_enabled: String,

    #[serde(rename = "flap_detection_enabled", default, skip_serializing_if = "String::is_empty")]
    pub flap_detection_enabled: String,

    #[serde(rename = "flap_detection_options", default, skip_serializing_if = "Option::is_none")]
    pub flap_detection_options: Option<Vec<String>>,

    #[serde(rename = "low_flap_threshold", default, skip_serializing_if = "String::is_empty")]
    pub low_flap_threshold: String,

    #[serde(rename = "high_flap_threshold", default, skip_serializing_if = "String::is_empty")]
    pub high_flap_threshold: String,

    #[serde(rename = "process_perf_data", default, skip_serializing_if = "String::is_empty")]
    pub process_perf_data: String,

    #[serde(rename = "retain_status_information", default, skip_serializing_if = "String::is_empty")]
    pub retain_status_information: String,

    #[serde(rename = "retain_nonstatus_information", default, skip_serializing_if = "String::is_empty")]
    pub retain_nonstatus_information: String,

    #[serde(rename = "check_freshness", default, skip_serializing_if = "String::is_empty")]
    pub check_freshness: String,

    #[serde(rename = "freshness_threshold", default, skip_serializing_if = "String::is_empty")]
    pub freshness_threshold: String,

    #[serde(rename = "first_notification_delay", default, skip_serializing_if = "String::is_empty")]
    pub first_notification_delay: String,

    #[serde(rename = "notification_options", default, skip_serializing_if = "String::is_empty")]
    pub notification_options: String,

    #[serde(rename = "notifications_enabled", default, skip_serializing_if = "String::is_empty")]
    pub notifications_enabled: String,

    #[serde(rename = "stalking_options", default, skip_serializing_if = "String::is_empty")]
    pub stalking_options: String,

    #[serde(rename = "icon_image", default, skip_serializing_if = "String::is_empty")]
    pub icon_image: String,

    #[serde(rename = "icon_image_alt", default, skip_serializing_if = "String::is_empty")]
    pub icon_image_alt: String,

    #[serde(rename = "vrml_image", default, skip_serializing_if = "String::is_empty")]
    pub vrml_image: String,

    #[serde(rename = "statusmap_image", default, skip_serializing_if = "String::is_empty")]
    pub statusmap_image: String,

    #[serde(rename = "2d_coords", default, skip_serializing_if = "String::is_empty")]
    pub two_d_coords: String,

    #[serde(rename = "3d_coords", default, skip_serializing_if = "String::is_empty")]
    pub three_d_coords: String,

    #[serde(rename = "register", default, skip_serializing_if = "String::is_empty")]
    pub register: String,

    /// Custom object variables, sent verbatim as extra fields
    #[serde(rename = "free_variables", default, skip_serializing_if = "Option::is_none")]
    pub free_variables: Option<BTreeMap<String, String>>,
}

impl ToParams for Host {
    fn to_params(&self) -> Params {
        let mut params = Params::new();

        params.append_str("host_name", &self.host_name);
        params.append_str("address", &self.address);
        params.append_str("display_name", &self.display_name);
        params.append_str("max_check_attempts", &self.max_check_attempts);
        params.append_str("check_period", &self.check_period);
        params.append_str("notification_interval", &self.notification_interval);
        params.append_str("notification_period", &self.notification_period);
        params.append_list("contacts", self.contacts.as_deref());
        params.append_str("alias", &self.alias);
        params.append_list("use", self.templates.as_deref());
        params.append_str("check_command", &self.check_command);
        params.append_list("contact_groups", self.contact_groups.as_deref());
        params.append_str("notes", &self.notes);
        params.append_str("notes_url", &self.notes_url);
        params.append_str("action_url", &self.action_url);
        params.append_str("initial_state", &self.initial_state);
        params.append_str("retry_interval", &self.retry_interval);
        params.append_str("passive_checks_enabled", &self.passive_checks_enabled);
        params.append_str("active_checks_enabled", &self.active_checks_enabled);
        params.append_str("obsess_over_host", &self.obsess_over_host);
        params.append_str("event_handler", &self.event_handler);
        params.append_str("event_handler_enabled", &self.event_handler_enabled);
        params.append_str("flap_detection_enabled", &self.flap_detection_enabled);
        params.append_list("flap_detection_options", self.flap_detection_options.as_deref());
        params.append_str("low_flap_threshold", &self.low_flap_threshold);
        params.append_str("high_flap_threshold", &self.high_flap_threshold);
        params.append_str("process_perf_data", &self.process_perf_data);
        params.append_str("retain_status_information", &self.retain_status_information);
        params.append_str("retain_nonstatus_information", &self.retain_nonstatus_information);
        params.append_str("check_freshness", &self.check_freshness);
        params.append_str("freshness_threshold", &self.freshness_threshold);
        params.append_str("first_notification_delay", &self.first_notification_delay);
        params.append_str("notification_options", &self.notification_options);
        params.append_str("notifications_enabled", &self.notifications_enabled);
        params.append_str("stalking_options", &self.stalking_options);
        params.append_str("icon_image", &self.icon_image);
        params.append_str("icon_image_alt", &self.icon_image_alt);
        params.append_str("vrml_image", &self.vrml_image);
        params.append_str("statusmap_image", &self.statusmap_image);
        params.append_str("2d_coords", &self.two_d_coords);
        params.append_str("3d_coords", &self.three_d_coords);
        params.append_str("register", &self.register);
        params.append_map(self.free_variables.as_ref());

        params
    }
}

/// Best-effort extraction of custom variables from a list response body.
/// `free_variables` is optional server-side, so any parse failure is an
/// accepted outcome, not an error.
fn parse_free_variables(body: &[u8]) -> Option<BTreeMap<String, String>> {
    let objects: Vec<serde_json::Map<String, Value>> = serde_json::from_slice(body).ok()?;
    let raw = objects.into_iter().next()?.remove("free_variables")?;
    serde_json::from_value(raw).ok()
}

impl Client {
    /// Create a host object in Nagios XI, then apply the configuration.
    ///
    /// Returns the raw response body of the create call. If applying the
    /// configuration fails the whole operation fails, even though the host
    /// was already created; the creation is not rolled back.
    pub fn create_host(&self, host: &Host) -> Result<Vec<u8>> {
        let url = self.build_url(Category::Config, OBJECT_TYPE, &Method::POST, &[])?;

        let body = self.post(url, &host.to_params())?;

        self.apply_config()?;

        Ok(body)
    }

    /// Retrieve an existing host by name.
    ///
    /// The server returns a list even for exact-name lookups; an empty list
    /// yields [`NagiosError::NotFound`].
    pub fn get_host(&self, name: &str) -> Result<Host> {
        let mut url = self.build_url(Category::Config, OBJECT_TYPE, &Method::GET, &[])?;

        // The server returns every host unless filtered by name
        url.query_pairs_mut().append_pair("host_name", name);

        let body = self.get(url, &Params::new())?;

        let mut hosts: Vec<Host> = serde_json::from_slice(&body)?;

        if hosts.is_empty() {
            return Err(NagiosError::NotFound {
                object_type: OBJECT_TYPE.to_string(),
                name: name.to_string(),
            });
        }

        let mut host = hosts.remove(0);

        if host.free_variables.is_none() {
            host.free_variables = parse_free_variables(&body);
        }

        Ok(host)
    }

    /// Update an existing host, addressed by its current name.
    ///
    /// The new attribute values ride in the PUT URL's query string; the
    /// request carries no body. The configuration is applied afterwards.
    pub fn update_host(&self, host: &Host, current_name: &str) -> Result<()> {
        let mut url = self.build_url(Category::Config, OBJECT_TYPE, &Method::PUT, &[current_name])?;

        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in host.to_params().iter() {
                pairs.append_pair(name, value);
            }
        }

        self.put(url)?;

        self.apply_config()?;

        Ok(())
    }

    /// Delete a host by name, then apply the configuration.
    /// The name addresses the object in the URL and is repeated as a form
    /// parameter, as the API expects.
    pub fn delete_host(&self, name: &str) -> Result<Vec<u8>> {
        let url = self.build_url(Category::Config, OBJECT_TYPE, &Method::DELETE, &[name])?;

        let mut params = Params::new();
        params.append_str("host_name", name);

        let body = self.delete(url, &params)?;

        self.apply_config()?;

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_host() -> Host {
        Host {
            host_name: "host1".to_string(),
            address: "127.0.0.1".to_string(),
            max_check_attempts: "5".to_string(),
            check_period: "24x7".to_string(),
            notification_interval: "10".to_string(),
            notification_period: "24x7".to_string(),
            contacts: Some(vec!["nagiosadmin".to_string()]),
            templates: Some(vec!["generic-host".to_string()]),
            ..Host::default()
        }
    }

    #[test]
    fn test_host_to_params() {
        let params = sample_host().to_params();

        assert_eq!(params.get("host_name"), Some("host1"));
        assert_eq!(params.get("address"), Some("127.0.0.1"));
        assert_eq!(params.get("max_check_attempts"), Some("5"));
        assert_eq!(params.get("check_period"), Some("24x7"));
        assert_eq!(params.get("notification_interval"), Some("10"));
        assert_eq!(params.get("notification_period"), Some("24x7"));
        assert_eq!(params.get("contacts"), Some("nagiosadmin"));
        assert_eq!(params.get("use"), Some("generic-host"));
    }

    #[test]
    fn test_host_to_params_skips_unset_fields() {
        let params = sample_host().to_params();

        assert_eq!(params.get("alias"), None);
        assert_eq!(params.get("check_command"), None);
        assert_eq!(params.get("contact_groups"), None);
        assert_eq!(params.len(), 8);
    }

    #[test]
    fn test_host_to_params_free_variables() {
        let mut host = sample_host();
        let mut vars = BTreeMap::new();
        vars.insert("_SNMP_COMMUNITY".to_string(), "public".to_string());
        host.free_variables = Some(vars);

        let params = host.to_params();
        assert_eq!(params.get("_SNMP_COMMUNITY"), Some("public"));
    }

    #[test]
    fn test_host_to_params_idempotent() {
        let host = sample_host();
        assert_eq!(host.to_params(), host.to_params());
    }

    #[test]
    fn test_host_deserialization() {
        let body = br#"[{"host_name": "host1", "address": "127.0.0.1"}]"#;

        let hosts: Vec<Host> = serde_json::from_slice(body).unwrap();
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].host_name, "host1");
        assert_eq!(hosts[0].address, "127.0.0.1");
        assert!(hosts[0].alias.is_empty());
        assert!(hosts[0].contacts.is_none());
    }

    #[test]
    fn test_parse_free_variables() {
        let body = br#"[{"host_name": "host1", "free_variables": {"_RACK": "r12"}}]"#;

        let vars = parse_free_variables(body).unwrap();
        assert_eq!(vars.get("_RACK"), Some(&"r12".to_string()));
    }

    #[test]
    fn test_parse_free_variables_best_effort() {
        assert!(parse_free_variables(br#"[]"#).is_none());
        assert!(parse_free_variables(br#"[{"host_name": "host1"}]"#).is_none());
        assert!(parse_free_variables(br#"{"error": "nope"}"#).is_none());
        assert!(parse_free_variables(b"not json").is_none());
    }

    #[test]
    fn test_boolean_toggles_encode_as_strings() {
        let mut host = sample_host();
        host.passive_checks_enabled = "0".to_string();
        host.active_checks_enabled = "1".to_string();

        let params = host.to_params();
        assert_eq!(params.get("passive_checks_enabled"), Some("0"));
        assert_eq!(params.get("active_checks_enabled"), Some("1"));
    }
}
