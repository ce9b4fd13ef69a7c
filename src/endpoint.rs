use crate::error::{NagiosError, Result};
use reqwest::Method;
use url::Url;

/// API category selecting the top-level endpoint group.
///
/// Configuration objects live under `config`, server-level operations such
/// as applying pending configuration live under `system`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// `config`: configuration objects (hosts, services, contacts, ...)
    Config,
    /// `system`: server operations (applyconfig, info, status, ...)
    System,
}

impl Category {
    /// The category's path segment
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Config => "config",
            Category::System => "system",
        }
    }
}

/// Build the URL for a Nagios XI API request.
///
/// The path is `{base}/api/v1/{category}/{object_type}/`. For PUT and DELETE
/// the object is addressed in the path: the first identifier is appended, and
/// for the `service` object type a second identifier (the service
/// description) follows it. Identifiers are ignored for every other method.
/// The API token rides along as the `apikey` query parameter together with
/// the fixed `pretty=1` flag.
///
/// Path segments and query values are percent-encoded here, once, for every
/// method, so identifiers may contain spaces or reserved characters.
pub fn build_url(
    base: &str,
    token: &str,
    category: Category,
    object_type: &str,
    method: &Method,
    identifiers: &[&str],
) -> Result<Url> {
    let mut url = Url::parse(base)?;

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| NagiosError::RequestBuild(format!("base URL cannot have a path: {}", base)))?;
        // A base with a trailing slash would otherwise yield an empty segment
        segments.pop_if_empty();
        segments.push("api").push("v1").push(category.as_str()).push(object_type);

        if (method == Method::PUT || method == Method::DELETE) && !identifiers.is_empty() {
            segments.push(identifiers[0]);
            // Services are addressed by host name plus service description
            if object_type == "service" && identifiers.len() > 1 {
                segments.push(identifiers[1]);
            }
        } else {
            // Trailing slash, matching the documented endpoint form
            segments.push("");
        }
    }

    url.query_pairs_mut()
        .append_pair("apikey", token)
        .append_pair("pretty", "1");

    Ok(url)
}
