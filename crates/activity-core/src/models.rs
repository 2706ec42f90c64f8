//! Serde models for the exported repository-activity records.
//!
//! The documents come from a GraphQL export of commit history, so list
//! fields arrive wrapped in a `{ "nodes": [...] }` connection object and
//! nearly every field can be absent or null. Every optional field is
//! modelled as explicitly nullable; missing data never raises here.

use serde::Deserialize;

/// The GraphQL connection wrapper `{ "nodes": [...] }`.
///
/// A missing wrapper or a missing `nodes` field both resolve to an empty
/// list.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeList<T> {
    #[serde(default)]
    pub nodes: Vec<T>,
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// An actor identity (author, merger, reviewer).
///
/// The surrounding field may be null, and a present identity may still lack
/// a login. Both cases resolve to "no identity".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub login: Option<String>,
}

impl Identity {
    /// The login handle, or `None` when absent or empty.
    pub fn login(&self) -> Option<&str> {
        self.login.as_deref().filter(|l| !l.is_empty())
    }
}

/// Resolve the login of a possibly-absent identity. Null input resolves to
/// `None`, as does a present identity without a usable login.
pub fn resolve_login(identity: Option<&Identity>) -> Option<&str> {
    identity.and_then(Identity::login)
}

/// One entry of a commit's author list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommitAuthor {
    /// Display name of the author, when known.
    pub name: Option<String>,
}

/// A single review attached to a pull request.
///
/// Only the author identity matters: it decides whether the review came
/// from someone other than the pull-request author.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReviewRecord {
    pub author: Option<Identity>,
}

/// A pull request associated with a commit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PullRequestRecord {
    pub author: Option<Identity>,
    #[serde(rename = "mergedBy")]
    pub merged_by: Option<Identity>,
    /// Lifecycle state, e.g. `"MERGED"`, `"CLOSED"`, `"OPEN"`.
    pub state: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "mergedAt")]
    pub merged_at: Option<String>,
    pub reviews: NodeList<ReviewRecord>,
}

impl PullRequestRecord {
    /// Defensive conversion from a raw associated-pull-request node.
    ///
    /// The exported node lists are heterogeneous; anything that is not a
    /// JSON object, or does not fit the pull-request shape, is discarded by
    /// returning `None`.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}

/// One commit record as found in the exported documents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommitRecord {
    pub authors: NodeList<CommitAuthor>,
    /// ISO-8601 committed timestamp, when present.
    #[serde(rename = "committedDate")]
    pub committed_date: Option<String>,
    /// Associated pull requests as raw values; filtered per node in the
    /// aggregator via [`PullRequestRecord::from_value`].
    #[serde(rename = "associatedPullRequests")]
    pub associated_pull_requests: NodeList<serde_json::Value>,
}
