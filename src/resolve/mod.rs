//! Package-registry to source-repository resolution.
//!
//! Package URLs (npm) are mapped to the source repository declared in the
//! registry's metadata. Resolution never fails: a URL that does not belong
//! to a known registry, a metadata lookup error, or a missing repository
//! field all yield the input URL unchanged. At most one outbound lookup is
//! performed, with no retries.

use crate::Result;
use core::time::Duration;
use serde::Deserialize;
use url::Url;

const LOG_TARGET: &str = "   resolve";

/// Default registry metadata endpoint
const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Hosts recognized as package-registry URLs
const REGISTRY_HOSTS: &[&str] = &["npmjs.com", "www.npmjs.com", "registry.npmjs.org"];

/// Registry metadata with only the fields we need
#[derive(Debug, Deserialize)]
struct PackageMetadata {
    repository: Option<RepositoryField>,
}

/// The registry allows the repository descriptor as a bare string or an object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RepositoryField {
    Descriptor {
        url: String,
    },
    Plain(String),
}

impl RepositoryField {
    fn url(&self) -> &str {
        match self {
            Self::Descriptor { url } | Self::Plain(url) => url,
        }
    }
}

/// Resolves package-registry URLs to their declared source repositories.
#[derive(Debug, Clone)]
pub struct Resolver {
    client: reqwest::Client,
    registry_base: String,
}

impl Resolver {
    /// Create a resolver, optionally overriding the registry endpoint.
    pub fn new(registry_url: Option<&str>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("repo-trust")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            registry_base: registry_url.unwrap_or(DEFAULT_REGISTRY_URL).trim_end_matches('/').to_string(),
        })
    }

    /// Resolve `url` to its declared source repository, or return it unchanged.
    pub async fn resolve(&self, url: &Url) -> Url {
        let Some(package) = package_name(url) else {
            return url.clone();
        };

        log::info!(target: LOG_TARGET, "Looking up registry metadata for package '{package}'");

        match self.lookup_repository(&package).await {
            Ok(Some(repo_url)) => {
                log::info!(target: LOG_TARGET, "Resolved '{url}' to '{repo_url}'");
                repo_url
            }
            Ok(None) => {
                log::debug!(target: LOG_TARGET, "No usable repository declared for package '{package}'");
                url.clone()
            }
            Err(e) => {
                // Resolution failure never blocks downstream processing.
                log::debug!(target: LOG_TARGET, "Registry lookup failed for package '{package}': {e:#}");
                url.clone()
            }
        }
    }

    async fn lookup_repository(&self, package: &str) -> Result<Option<Url>> {
        let endpoint = format!("{}/{package}", self.registry_base);
        let metadata: PackageMetadata = self
            .client
            .get(&endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(metadata.repository.as_ref().and_then(|field| clean_repository_url(field.url())))
    }
}

/// Extract the package identifier from a registry URL path, or `None` if the
/// URL does not belong to a known registry. Scoped packages keep their
/// `@scope/name` form.
fn package_name(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    if !REGISTRY_HOSTS.contains(&host) {
        return None;
    }

    let mut segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();

    // Package pages nest the identifier under a "package" segment;
    // the metadata endpoint uses the identifier directly.
    if segments.first() == Some(&"package") {
        let _ = segments.remove(0);
    }

    match segments.as_slice() {
        [name] => Some((*name).to_string()),
        [scope, name] if scope.starts_with('@') => Some(format!("{scope}/{name}")),
        _ => None,
    }
}

/// Strip the `git+` protocol marker and `.git` suffix from a declared
/// repository URL, returning `None` when the remainder is not a valid URL.
fn clean_repository_url(raw: &str) -> Option<Url> {
    let cleaned = raw.strip_prefix("git+").unwrap_or(raw);
    let cleaned = cleaned.strip_suffix(".git").unwrap_or(cleaned);
    Url::parse(cleaned).ok()
}
