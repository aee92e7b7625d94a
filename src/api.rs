use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::time_range::TimeRange;

pub const SEARCH_ENDPOINT: &str = "https://api.github.com/search/repositories";

// GitHub API response structures
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub owner: Owner,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    pub login: String,
    pub avatar_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub total_count: u32,
    pub items: Vec<Repository>,
}

/// The `q` parameter of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchClause {
    Text(String),
    CreatedAfter(NaiveDate),
}

impl SearchClause {
    /// A non-blank query wins over the creation window and is sent as typed.
    pub fn new(query: &str, range: TimeRange, today: NaiveDate) -> Self {
        if query.trim().is_empty() {
            SearchClause::CreatedAfter(range.since(today))
        } else {
            SearchClause::Text(query.to_string())
        }
    }

    pub fn as_query(&self) -> String {
        match self {
            SearchClause::Text(text) => text.clone(),
            SearchClause::CreatedAfter(date) => format!("created:>{}", date.format("%Y-%m-%d")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub clause: SearchClause,
    pub per_page: usize,
}

impl SearchRequest {
    pub fn new(query: &str, range: TimeRange, today: NaiveDate, per_page: usize) -> Self {
        Self {
            clause: SearchClause::new(query, range, today),
            per_page,
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{}?sort=stars&order=desc&per_page={}&q={}",
            SEARCH_ENDPOINT,
            self.per_page,
            urlencoding::encode(&self.clause.as_query())
        )
    }
}

pub async fn search_repositories(request: &SearchRequest) -> Result<SearchResponse, FetchError> {
    let response = reqwasm::http::Request::get(&request.url())
        .header("Accept", "application/vnd.github.v3+json")
        .send()
        .await
        .map_err(|e| FetchError::Network(format!("{:?}", e)))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(format!("{:?}", e)))?;

    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn empty_query_searches_by_creation_window() {
        let request = SearchRequest::new("", TimeRange::Week, today(), 32);
        assert_eq!(
            request.clause,
            SearchClause::CreatedAfter(NaiveDate::from_ymd_opt(2024, 6, 8).unwrap())
        );
        assert_eq!(request.clause.as_query(), "created:>2024-06-08");
        assert_eq!(
            request.url(),
            "https://api.github.com/search/repositories?sort=stars&order=desc&per_page=32&q=created%3A%3E2024-06-08"
        );
    }

    #[test]
    fn text_query_replaces_date_clause() {
        let request = SearchRequest::new("web framework", TimeRange::Year, today(), 24);
        assert_eq!(request.clause, SearchClause::Text("web framework".into()));
        assert!(request.url().ends_with("&q=web%20framework"));
        assert!(!request.url().contains("created"));
    }

    #[test]
    fn query_is_encoded_verbatim() {
        let request = SearchRequest::new("c++ & rust", TimeRange::Day, today(), 24);
        let expected = format!("&q={}", urlencoding::encode("c++ & rust"));
        assert!(request.url().ends_with(&expected));
    }

    #[test]
    fn surrounding_whitespace_is_sent_as_typed() {
        let request = SearchRequest::new(" rust ", TimeRange::Day, today(), 24);
        assert_eq!(request.clause, SearchClause::Text(" rust ".into()));
        assert!(request.url().ends_with("&q=%20rust%20"));
    }

    #[test]
    fn blank_query_counts_as_empty() {
        let request = SearchRequest::new("   ", TimeRange::Day, today(), 24);
        assert_eq!(request.clause.as_query(), "created:>2024-06-14");
    }

    #[test]
    fn decodes_search_response() {
        let body = r#"{
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                {
                    "id": 1,
                    "name": "leptos",
                    "full_name": "leptos-rs/leptos",
                    "html_url": "https://github.com/leptos-rs/leptos",
                    "description": "Build fast web applications with Rust.",
                    "language": "Rust",
                    "stargazers_count": 18000,
                    "forks_count": 700,
                    "watchers_count": 18000,
                    "owner": {
                        "login": "leptos-rs",
                        "avatar_url": "https://avatars.githubusercontent.com/u/1",
                        "type": "Organization"
                    }
                },
                {
                    "id": 2,
                    "name": "dotfiles",
                    "full_name": "someone/dotfiles",
                    "html_url": "https://github.com/someone/dotfiles",
                    "description": null,
                    "language": null,
                    "stargazers_count": 3,
                    "forks_count": 0,
                    "owner": {
                        "login": "someone",
                        "avatar_url": "https://avatars.githubusercontent.com/u/2"
                    }
                }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_count, 2);
        assert_eq!(response.items[0].owner.login, "leptos-rs");
        assert_eq!(response.items[0].language.as_deref(), Some("Rust"));
        assert_eq!(response.items[1].description, None);
        assert_eq!(response.items[1].language, None);
    }

    #[test]
    fn decodes_empty_result_set() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"total_count": 0, "incomplete_results": false, "items": []}"#)
                .unwrap();
        assert_eq!(response.total_count, 0);
        assert!(response.items.is_empty());
    }
}
