//! Client for the randomuser.me demo API. The wire types stay private;
//! callers only see [`Record`], the flattened display model.

use leptos_paged::{FetchFailure, Page};
use serde::Deserialize;

/// The public demo endpoint serving random user pages.
pub const ENDPOINT: &str = "https://randomuser.me/api/";

/// Fixed number of records requested per page.
pub const PAGE_SIZE: u32 = 16;

/// One user as rendered: immutable once received, sourced verbatim from the
/// remote response. `email` doubles as the render key; the API can hand back
/// overlapping records across pages and those are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// "{first} {last}".
    pub display_name: String,
    /// Unique within a page; the list key.
    pub email: String,
    /// Free-form phone string.
    pub phone: String,
    /// URL of the thumbnail portrait.
    pub thumbnail_url: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    results: Vec<ApiUser>,
    info: ApiInfo,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    name: ApiName,
    email: String,
    picture: ApiPicture,
    phone: String,
}

#[derive(Debug, Deserialize)]
struct ApiName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct ApiPicture {
    thumbnail: String,
}

#[derive(Debug, Deserialize)]
struct ApiInfo {
    page: u32,
    pages: u32,
}

impl From<ApiUser> for Record {
    fn from(user: ApiUser) -> Self {
        Self {
            display_name: format!("{} {}", user.name.first, user.name.last),
            email: user.email,
            phone: user.phone,
            thumbnail_url: user.picture.thumbnail,
        }
    }
}

/// Parse one response body into a page of records.
///
/// Any deviation from the expected shape — missing fields, wrong types,
/// invalid JSON — is a [`FetchFailure::Decode`].
pub fn parse_page(body: &str) -> Result<Page<Record>, FetchFailure> {
    let response: ApiResponse =
        serde_json::from_str(body).map_err(|err| FetchFailure::Decode(err.to_string()))?;
    Ok(Page {
        items: response.results.into_iter().map(Record::from).collect(),
        page: response.info.page,
        pages: response.info.pages,
    })
}

/// Fetch one page of users from the demo API.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_users(
    request: leptos_paged::PageRequest,
) -> Result<Page<Record>, FetchFailure> {
    use gloo_net::http::Request;

    let url = format!(
        "{ENDPOINT}?page={}&results={}",
        request.page, request.per_page
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| FetchFailure::Network(err.to_string()))?;
    if !response.ok() {
        return Err(FetchFailure::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|err| FetchFailure::Network(err.to_string()))?;
    parse_page(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [
            {
                "name": { "title": "Ms", "first": "Ada", "last": "Lovelace" },
                "email": "ada.lovelace@example.com",
                "phone": "013-245-9876",
                "picture": {
                    "large": "https://example.com/ada-large.jpg",
                    "thumbnail": "https://example.com/ada-thumb.jpg"
                }
            },
            {
                "name": { "first": "Alan", "last": "Turing" },
                "email": "alan.turing@example.com",
                "phone": "020-777-1234",
                "picture": { "thumbnail": "https://example.com/alan-thumb.jpg" }
            }
        ],
        "info": { "seed": "abc", "results": 2, "page": 3, "pages": 7 }
    }"#;

    #[test]
    fn parses_records_and_cursor_info() {
        let page = parse_page(SAMPLE).expect("sample parses");
        assert_eq!(page.page, 3);
        assert_eq!(page.pages, 7);
        assert!(page.has_more());

        assert_eq!(
            page.items,
            vec![
                Record {
                    display_name: "Ada Lovelace".into(),
                    email: "ada.lovelace@example.com".into(),
                    phone: "013-245-9876".into(),
                    thumbnail_url: "https://example.com/ada-thumb.jpg".into(),
                },
                Record {
                    display_name: "Alan Turing".into(),
                    email: "alan.turing@example.com".into(),
                    phone: "020-777-1234".into(),
                    thumbnail_url: "https://example.com/alan-thumb.jpg".into(),
                },
            ]
        );
    }

    #[test]
    fn empty_results_still_parse() {
        let page = parse_page(r#"{ "results": [], "info": { "page": 7, "pages": 7 } }"#)
            .expect("empty page parses");
        assert!(page.items.is_empty());
        assert!(!page.has_more());
    }

    #[test]
    fn missing_field_is_a_decode_failure() {
        let body = r#"{
            "results": [ { "name": { "first": "Ada", "last": "Lovelace" }, "phone": "1" } ],
            "info": { "page": 1, "pages": 1 }
        }"#;
        assert!(matches!(parse_page(body), Err(FetchFailure::Decode(_))));
    }

    #[test]
    fn malformed_json_is_a_decode_failure() {
        assert!(matches!(
            parse_page("<html>rate limited</html>"),
            Err(FetchFailure::Decode(_))
        ));
    }
}
