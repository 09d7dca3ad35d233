use crate::Result;
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use ohno::{IntoAppError, bail};
use std::sync::Arc;
use url::Url;

/// A repository identified by owner and name.
///
/// Parsed from either `owner/repo` or a repository URL such as
/// `https://github.com/owner/repo`. Extra path segments and a trailing `.git`
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    owner: Arc<str>,
    repo: Arc<str>,
}

impl RepoSpec {
    pub fn new(owner: &str, repo: &str) -> Result<Self> {
        let repo = repo.trim_end_matches(".git");

        if owner.is_empty() || repo.is_empty() {
            bail!("invalid repository: empty owner or repo name in '{owner}/{repo}'");
        }

        if !is_valid_name(owner) || !is_valid_name(repo) {
            bail!("invalid repository: unexpected characters in '{owner}/{repo}'");
        }

        Ok(Self {
            owner: Arc::from(owner),
            repo: Arc::from(repo),
        })
    }

    pub fn parse_url(url: &Url) -> Result<Self> {
        let path_segments: Vec<_> = url.path_segments().map(Iterator::collect).unwrap_or_default();

        if path_segments.len() < 2 {
            bail!("invalid repository URL format: {url}");
        }

        Self::new(path_segments[0], path_segments[1])
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

fn is_valid_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl FromStr for RepoSpec {
    type Err = ohno::AppError;

    fn from_str(s: &str) -> Result<Self> {
        if s.contains("://") {
            let url = Url::parse(s).into_app_err_with(|| format!("invalid repository URL '{s}'"))?;
            return Self::parse_url(&url);
        }

        match s.split_once('/') {
            Some((owner, repo)) if !repo.contains('/') => Self::new(owner, repo),
            _ => bail!("invalid repository '{s}': expected 'owner/repo' or a repository URL"),
        }
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
