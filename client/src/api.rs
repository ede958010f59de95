//! HTTP client for the archive API.
//!
//! All requests carry the browser session cookie (credentials included on
//! wasm; native callers are test/tooling only). Read failures are reported
//! with the response body included so the log line is enough to debug.

use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;

use common::archive_query::{ApiLang, QueryFilters};
use common::archive_records::{Accession, Collection, ResourcePage, Subject};
use common::user_admin::{CreateUserPayload, UpdateUserPayload, User, UserRole};

/// Whether a request targets the public or the authenticated endpoint
/// variant of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Public,
    Private,
}

/// Accessions use the private endpoint whenever the caller is authenticated,
/// regardless of the `is_private` filter value.
pub fn accessions_access(is_logged_in: bool) -> AccessMode {
    if is_logged_in {
        AccessMode::Private
    } else {
        AccessMode::Public
    }
}

/// Collections use the private endpoint only when the caller is
/// authenticated AND asked for private collections. The asymmetry with
/// accessions is deliberate, mirroring the deployed API.
pub fn collections_access(is_logged_in: bool, is_private: bool) -> AccessMode {
    if is_logged_in && is_private {
        AccessMode::Private
    } else {
        AccessMode::Public
    }
}

/// Wire encoding of a filter set: one `key=value` pair per set field, unset
/// fields omitted, `metadata_subjects` repeated per element in the order the
/// caller holds them (the fingerprint sorts, the wire does not need to).
pub fn query_pairs(filters: &QueryFilters) -> Vec<(&'static str, String)> {
    let mut pairs: Vec<(&'static str, String)> = vec![
        ("page", filters.page.to_string()),
        ("per_page", filters.per_page.to_string()),
    ];
    if let Some(lang) = filters.lang {
        pairs.push(("lang", lang.to_string()));
    }
    if !filters.query_term.is_empty() {
        pairs.push(("query_term", filters.query_term.clone()));
    }
    if !filters.url_filter.is_empty() {
        pairs.push(("url_filter", filters.url_filter.clone()));
    }
    if !filters.date_from.is_empty() {
        pairs.push(("date_from", filters.date_from.clone()));
    }
    if !filters.date_to.is_empty() {
        pairs.push(("date_to", filters.date_to.clone()));
    }
    if let Some(is_private) = filters.is_private {
        pairs.push(("is_private", is_private.to_string()));
    }
    for subject in &filters.metadata_subjects {
        pairs.push(("metadata_subjects", subject.to_string()));
    }
    if let Some(inclusive) = filters.metadata_subjects_inclusive_filter {
        pairs.push(("metadata_subjects_inclusive_filter", inclusive.to_string()));
    }
    if !filters.email.is_empty() {
        pairs.push(("email", filters.email.clone()));
    }
    pairs
}

/// Extracts the role from the `/auth` probe body, a plain-text line of the
/// form `... Role: Admin ...`.
pub fn parse_session_role(body: &str) -> Option<UserRole> {
    let rest = body.split("Role:").nth(1)?;
    let word = rest.split_whitespace().next()?;
    word.parse().ok()
}

#[derive(Debug, Clone)]
pub struct ArchiveApi {
    http: reqwest::Client,
    base_url: String,
}

impl ArchiveApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let builder = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");
        with_credentials(builder)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        pairs: &[(&'static str, String)],
    ) -> anyhow::Result<T> {
        let response = self
            .get(&url)
            .query(pairs)
            .send()
            .await
            .with_context(|| format!("request failed: {url}"))?;
        let status = response.status();
        let body = response.text().await.context("reading response body")?;
        if status.is_client_error() || status.is_server_error() {
            tracing::error!("GET {url} failed: {status}");
            anyhow::bail!("{url}: {status}: {body}");
        }
        serde_json::from_str(&body).with_context(|| format!("decoding response from {url}"))
    }

    async fn expect_success(url: &str, response: reqwest::Response) -> anyhow::Result<()> {
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("{url} failed: {status}");
            anyhow::bail!("{url}: {status}: {body}");
        }
        Ok(())
    }

    pub async fn list_accessions(
        &self,
        filters: &QueryFilters,
        access: AccessMode,
    ) -> anyhow::Result<ResourcePage<Accession>> {
        let path = match access {
            AccessMode::Private => "accessions/private",
            AccessMode::Public => "accessions",
        };
        self.get_json(self.url(path), &query_pairs(filters)).await
    }

    pub async fn list_collections(
        &self,
        filters: &QueryFilters,
        access: AccessMode,
    ) -> anyhow::Result<ResourcePage<Collection>> {
        let path = match access {
            AccessMode::Private => "collections/private",
            AccessMode::Public => "collections",
        };
        self.get_json(self.url(path), &query_pairs(filters)).await
    }

    pub async fn get_collection(&self, id: u64, lang: ApiLang) -> anyhow::Result<Collection> {
        let url = self.url(&format!("collections/{id}"));
        self.get_json(url, &[("lang", lang.to_string())]).await
    }

    pub async fn list_subjects(&self, lang: ApiLang) -> anyhow::Result<ResourcePage<Subject>> {
        let url = self.url("metadata-subjects");
        self.get_json(
            url,
            &[
                ("page", "0".to_string()),
                ("per_page", "50".to_string()),
                ("lang", lang.to_string()),
            ],
        )
        .await
    }

    pub async fn create_subject(&self, name: &str, lang: ApiLang) -> anyhow::Result<Subject> {
        #[derive(Serialize)]
        struct NewSubject<'a> {
            metadata_subject: &'a str,
            lang: ApiLang,
        }
        let url = self.url("metadata-subjects");
        let response = with_credentials(self.http.post(&url))
            .json(&NewSubject {
                metadata_subject: name,
                lang,
            })
            .send()
            .await
            .with_context(|| format!("request failed: {url}"))?;
        let status = response.status();
        let body = response.text().await.context("reading response body")?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("{url}: {status}: {body}");
        }
        serde_json::from_str(&body).with_context(|| format!("decoding response from {url}"))
    }

    pub async fn delete_subject(&self, id: u64, lang: ApiLang) -> anyhow::Result<()> {
        #[derive(Serialize)]
        struct DeleteSubject {
            lang: ApiLang,
        }
        let url = self.url(&format!("metadata-subjects/{id}"));
        let response = with_credentials(self.http.delete(&url))
            .json(&DeleteSubject { lang })
            .send()
            .await
            .with_context(|| format!("request failed: {url}"))?;
        Self::expect_success(&url, response).await
    }

    pub async fn list_users(&self, filters: &QueryFilters) -> anyhow::Result<ResourcePage<User>> {
        let mut pairs = vec![
            ("page", filters.page.to_string()),
            ("per_page", filters.per_page.to_string()),
        ];
        if !filters.email.is_empty() {
            pairs.push(("email", filters.email.clone()));
        }
        self.get_json(self.url("auth/users"), &pairs).await
    }

    pub async fn create_user(&self, payload: &CreateUserPayload) -> anyhow::Result<()> {
        let url = self.url("auth/users");
        let response = with_credentials(self.http.post(&url))
            .json(payload)
            .send()
            .await
            .with_context(|| format!("request failed: {url}"))?;
        Self::expect_success(&url, response).await
    }

    pub async fn update_user(
        &self,
        user_id: &str,
        payload: &UpdateUserPayload,
    ) -> anyhow::Result<()> {
        let url = self.url(&format!("auth/users/{user_id}"));
        let response = with_credentials(self.http.put(&url))
            .json(payload)
            .send()
            .await
            .with_context(|| format!("request failed: {url}"))?;
        Self::expect_success(&url, response).await
    }

    pub async fn delete_user(&self, user_id: &str) -> anyhow::Result<()> {
        let url = self.url(&format!("auth/users/{user_id}"));
        let response = with_credentials(self.http.delete(&url))
            .send()
            .await
            .with_context(|| format!("request failed: {url}"))?;
        Self::expect_success(&url, response).await
    }

    pub async fn login(&self, email: &str, password: &str) -> anyhow::Result<()> {
        #[derive(Serialize)]
        struct Credentials<'a> {
            email: &'a str,
            password: &'a str,
        }
        let url = self.url("auth/login");
        let response = with_credentials(self.http.post(&url))
            .json(&Credentials { email, password })
            .send()
            .await
            .with_context(|| format!("request failed: {url}"))?;
        Self::expect_success(&url, response).await
    }

    /// Probes the session: `None` when the cookie is missing/expired or the
    /// body carries no role.
    pub async fn session_role(&self) -> anyhow::Result<Option<UserRole>> {
        let url = self.url("auth");
        let response = with_credentials(self.http.get(&url))
            .send()
            .await
            .with_context(|| format!("request failed: {url}"))?;
        if !response.status().is_success() {
            return Ok(None);
        }
        let body = response.text().await.context("reading response body")?;
        Ok(parse_session_role(&body))
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessions_go_private_whenever_logged_in() {
        assert_eq!(accessions_access(true), AccessMode::Private);
        assert_eq!(accessions_access(false), AccessMode::Public);
    }

    #[test]
    fn collections_go_private_only_when_logged_in_and_asked_to() {
        assert_eq!(collections_access(true, true), AccessMode::Private);
        assert_eq!(collections_access(true, false), AccessMode::Public);
        assert_eq!(collections_access(false, true), AccessMode::Public);
        assert_eq!(collections_access(false, false), AccessMode::Public);
    }

    #[test]
    fn query_pairs_omit_unset_fields() {
        let filters = QueryFilters::default();
        let pairs = query_pairs(&filters);
        assert_eq!(
            pairs,
            vec![
                ("page", "0".to_string()),
                ("per_page", "50".to_string()),
            ]
        );
    }

    #[test]
    fn query_pairs_repeat_subjects_and_spell_booleans_out() {
        let filters = QueryFilters {
            lang: Some(ApiLang::Arabic),
            query_term: "flood".to_string(),
            is_private: Some(false),
            metadata_subjects: vec![7, 3],
            metadata_subjects_inclusive_filter: Some(true),
            ..Default::default()
        };
        let pairs = query_pairs(&filters);
        assert!(pairs.contains(&("lang", "arabic".to_string())));
        assert!(pairs.contains(&("query_term", "flood".to_string())));
        assert!(pairs.contains(&("is_private", "false".to_string())));
        assert!(pairs.contains(&("metadata_subjects_inclusive_filter", "true".to_string())));
        let subjects: Vec<&String> = pairs
            .iter()
            .filter(|(key, _)| *key == "metadata_subjects")
            .map(|(_, value)| value)
            .collect();
        assert_eq!(subjects, vec!["7", "3"], "wire order is the caller's order");
    }

    #[test]
    fn session_role_parses_from_the_probe_body() {
        let body = "Verifying your account... Your data: UserId: a@b.c Expiry: None Role: Admin";
        assert_eq!(parse_session_role(body), Some(UserRole::Admin));
        assert_eq!(parse_session_role("Role: contributor"), Some(UserRole::Contributor));
        assert_eq!(parse_session_role("no role here"), None);
        assert_eq!(parse_session_role("Role: superuser"), None);
    }

    #[test]
    fn urls_join_without_double_slashes() {
        let api = ArchiveApi::new("https://archive.example/api/v1/");
        assert_eq!(
            api.url("accessions/private"),
            "https://archive.example/api/v1/accessions/private"
        );
    }
}
