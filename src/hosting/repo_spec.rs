use crate::Result;
use core::fmt::{Display, Formatter};
use ohno::{IntoAppError, bail};
use std::sync::Arc;
use url::Url;

/// A repository identified by host, owner, and name.
///
/// Parsed from a resolved URL; extra path segments and a trailing `.git`
/// suffix are discarded so two URLs pointing into the same repository
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    url: Arc<Url>,
    host: Arc<str>,
    owner: Arc<str>,
    repo: Arc<str>,
}

impl RepoSpec {
    pub fn parse(url: &Url) -> Result<Self> {
        let path_segments: Vec<_> = url.path_segments().map(Iterator::collect).unwrap_or_default();

        if path_segments.len() < 2 {
            bail!("URL does not identify a repository: {url}");
        }

        if path_segments[0].is_empty() || path_segments[1].is_empty() {
            bail!("URL has an empty owner or repository name: {url}");
        }

        let host = url.host_str().unwrap_or_default();
        let owner = path_segments[0];
        let repo = path_segments[1].trim_end_matches(".git");
        let scheme = url.scheme();

        // Reconstruct a clean URL with only scheme://host/owner/repo
        let clean_url = Url::parse(&format!("{scheme}://{host}/{owner}/{repo}"))
            .into_app_err("reconstructing repository URL")?;

        Ok(Self {
            host: Arc::from(host),
            owner: Arc::from(owner),
            repo: Arc::from(repo),
            url: Arc::new(clean_url),
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.url)
    }
}
