//! Hosted repository URL resolution
//!
//! Converts a manifest `repository` field (URL or shorthand) into a
//! canonical browsable web URL for a known forge, then derives the matching
//! commit history URL. Handles:
//! - https/git/ssh URLs, with or without `git+` prefix and `.git` suffix
//! - scp-style addresses: `git@github.com:owner/repo.git`
//! - forge shorthands: `github:owner/repo`, `gist:id`, ...
//! - bare `owner/repo` (defaults to GitHub)

use crate::error::RepositoryError;
use serde::Deserialize;
use url::Url;

/// The `repository` field of a package manifest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RepositoryField {
    /// Bare URL or shorthand form
    Url(String),
    /// Object form with an optional subdirectory inside the repository
    Detailed {
        url: String,
        directory: Option<String>,
    },
}

impl RepositoryField {
    /// The URL or shorthand carried by the field
    pub fn url(&self) -> &str {
        match self {
            RepositoryField::Url(url) => url,
            RepositoryField::Detailed { url, .. } => url,
        }
    }

    /// Subdirectory of the repository the package lives in, if declared
    pub fn directory(&self) -> Option<&str> {
        match self {
            RepositoryField::Url(_) => None,
            RepositoryField::Detailed { directory, .. } => directory.as_deref(),
        }
    }
}

/// Forges with a known browse/history URL scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Forge {
    GitHub,
    GitLab,
    Bitbucket,
    SourceHut,
    Gist,
}

impl Forge {
    fn from_host(host: &str) -> Option<Self> {
        match host {
            "github.com" => Some(Forge::GitHub),
            "gitlab.com" => Some(Forge::GitLab),
            "bitbucket.org" => Some(Forge::Bitbucket),
            "git.sr.ht" => Some(Forge::SourceHut),
            "gist.github.com" => Some(Forge::Gist),
            _ => None,
        }
    }

    fn from_shorthand(prefix: &str) -> Option<Self> {
        match prefix {
            "github" => Some(Forge::GitHub),
            "gitlab" => Some(Forge::GitLab),
            "bitbucket" => Some(Forge::Bitbucket),
            "sourcehut" => Some(Forge::SourceHut),
            "gist" => Some(Forge::Gist),
            _ => None,
        }
    }

    fn domain(&self) -> &'static str {
        match self {
            Forge::GitHub => "github.com",
            Forge::GitLab => "gitlab.com",
            Forge::Bitbucket => "bitbucket.org",
            Forge::SourceHut => "git.sr.ht",
            Forge::Gist => "gist.github.com",
        }
    }
}

/// Per-forge substitution turning a browse URL into a commit history URL.
/// The first occurrence of the browse segment is replaced; gists are
/// handled separately since they append a revisions path instead.
const HISTORY_SEGMENTS: &[(Forge, &str, &str)] = &[
    (Forge::GitHub, "tree", "commits"),
    (Forge::Bitbucket, "src", "history-node"),
    (Forge::GitLab, "tree", "commits"),
    (Forge::SourceHut, "tree", "logs"),
];

/// A repository resolved to a known forge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedRepository {
    forge: Forge,
    owner: Option<String>,
    name: String,
}

impl HostedRepository {
    /// Resolves a repository URL or shorthand.
    ///
    /// Returns `Ok(None)` for a well-formed URL on an unrecognized host;
    /// returns an error when the value cannot be interpreted at all.
    pub fn from_url(raw: &str) -> Result<Option<Self>, RepositoryError> {
        let trimmed = raw.trim();
        let stripped = trimmed.strip_prefix("git+").unwrap_or(trimmed);
        let stripped = stripped.strip_suffix(".git").unwrap_or(stripped);

        if stripped.is_empty() {
            return Err(invalid(raw));
        }

        // Forge shorthand: github:owner/repo, gist:id, ...
        if let Some((prefix, rest)) = stripped.split_once(':') {
            if let Some(forge) = Forge::from_shorthand(prefix) {
                return Self::from_path(forge, rest).map(Some).ok_or_else(|| invalid(raw));
            }
        }

        // scp-style: git@host:owner/repo
        if let Some(rest) = stripped.strip_prefix("git@") {
            let (host, path) = rest.split_once(':').ok_or_else(|| invalid(raw))?;
            return match Forge::from_host(host) {
                Some(forge) => Self::from_path(forge, path).map(Some).ok_or_else(|| invalid(raw)),
                None => Ok(None),
            };
        }

        // Bare owner/repo defaults to GitHub.
        if !stripped.contains(':') && !stripped.contains('@') {
            let segments: Vec<&str> = stripped.split('/').collect();
            if segments.len() == 2 && segments.iter().all(|s| !s.is_empty()) {
                return Self::from_path(Forge::GitHub, stripped)
                    .map(Some)
                    .ok_or_else(|| invalid(raw));
            }
        }

        let url = Url::parse(stripped).map_err(|_| invalid(raw))?;
        let host = url.host_str().ok_or_else(|| invalid(raw))?;

        match Forge::from_host(host) {
            Some(forge) => Self::from_path(forge, url.path())
                .map(Some)
                .ok_or_else(|| invalid(raw)),
            None => Ok(None),
        }
    }

    fn from_path(forge: Forge, path: &str) -> Option<Self> {
        let mut segments = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty());
        let first = segments.next()?.to_string();
        let second = segments.next();

        match (forge, second) {
            // A gist can be addressed by id alone.
            (Forge::Gist, None) => Some(Self {
                forge,
                owner: None,
                name: first,
            }),
            (_, Some(name)) => Some(Self {
                forge,
                owner: Some(first),
                name: name.to_string(),
            }),
            (_, None) => None,
        }
    }

    /// Canonical browsable web URL, pointing into `directory` when given
    pub fn browse_url(&self, directory: Option<&str>) -> String {
        let base = match &self.owner {
            Some(owner) => format!("https://{}/{}/{}", self.forge.domain(), owner, self.name),
            None => format!("https://{}/{}", self.forge.domain(), self.name),
        };

        let directory = match directory {
            Some(dir) if !dir.is_empty() => dir,
            _ => return base,
        };

        match self.forge {
            Forge::GitHub | Forge::GitLab => format!("{}/tree/HEAD/{}", base, directory),
            Forge::Bitbucket => format!("{}/src/HEAD/{}", base, directory),
            Forge::SourceHut => format!("{}/tree/HEAD/item/{}", base, directory),
            // Gists have no subdirectory browsing.
            Forge::Gist => base,
        }
    }

    /// Commit history URL derived from the browse URL
    pub fn history_url(&self, directory: Option<&str>) -> String {
        let browse = self.browse_url(directory);

        if self.forge == Forge::Gist {
            return match browse.find(&['#', '?'][..]) {
                Some(i) => format!("{}/revisions{}", &browse[..i], &browse[i..]),
                None => format!("{}/revisions", browse),
            };
        }

        match HISTORY_SEGMENTS
            .iter()
            .find(|(forge, _, _)| *forge == self.forge)
        {
            Some((_, from, to)) => browse.replacen(from, to, 1),
            None => browse,
        }
    }
}

/// Resolves a repository field to a commit history hyperlink.
///
/// Returns `Ok(None)` when the host is not a recognized forge.
pub fn history_link(field: &RepositoryField) -> Result<Option<String>, RepositoryError> {
    let repo = match HostedRepository::from_url(field.url())? {
        Some(repo) => repo,
        None => return Ok(None),
    };
    Ok(Some(repo.history_url(field.directory())))
}

fn invalid(url: &str) -> RepositoryError {
    RepositoryError::InvalidUrl {
        url: url.to_string(),
    }
}
