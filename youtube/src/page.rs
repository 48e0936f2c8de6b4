use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result, StatusCode};

/// A single resource returned by the API (a search result or a playlist
/// item). The client never looks inside; the accessors are for callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(pub Value);

impl Item {
    /// The id of the video this item refers to, if it refers to one.
    pub fn video_id(&self) -> Option<&str> {
        let item = &self.0;
        match &item["id"] {
            Value::String(id) if item["kind"] == "youtube#video" => return Some(id.as_str()),
            Value::Object(id) => {
                if let Some(id) = id.get("videoId").and_then(Value::as_str) {
                    return Some(id);
                }
            }
            _ => {}
        }
        item["contentDetails"]["videoId"]
            .as_str()
            .or_else(|| item["snippet"]["resourceId"]["videoId"].as_str())
    }

    pub fn title(&self) -> Option<&str> { self.0["snippet"]["title"].as_str() }

    /// `https://www.youtube.com/watch?v=<id>`, handed to the downloader.
    pub fn watch_url(&self) -> Option<String> {
        self.video_id()
            .map(|id| format!("https://www.youtube.com/watch?v={}", id))
    }
}

/// One parsed page.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub items: Vec<Item>,
    pub total_results: u64,
    pub next_page_token: Option<String>,
    /// The rest of the response object, `items` removed.
    pub raw: Map<String, Value>,
}

impl Page {
    pub fn parse(status: StatusCode, body: &str) -> Result<Page> {
        let value = serde_json::from_str::<Value>(body)?;
        Page::from_value(status, value)
    }

    pub fn from_value(status: StatusCode, value: Value) -> Result<Page> {
        let mut raw = match value {
            Value::Object(map) => map,
            other => {
                return Err(Error::MalformedResponse(format!(
                    "expected a JSON object, got {}",
                    other
                )))
            }
        };

        if let Some(error) = raw.get("error") {
            let message = error["message"]
                .as_str()
                .map(String::from)
                .unwrap_or_else(|| error.to_string());
            return Err(Error::Api { status, message });
        }

        let items = match raw.remove("items") {
            Some(Value::Array(items)) => items.into_iter().map(Item).collect(),
            Some(other) => {
                return Err(Error::MalformedResponse(format!(
                    "`items` is not an array: {}",
                    other
                )))
            }
            None => return Err(Error::MalformedResponse("missing `items`".into())),
        };

        let total_results = match raw.get("pageInfo").map(|info| &info["totalResults"]) {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
            _ => None,
        }
        .ok_or_else(|| Error::MalformedResponse("missing or invalid `pageInfo.totalResults`".into()))?;

        let next_page_token = raw
            .get("nextPageToken")
            .and_then(Value::as_str)
            .map(String::from);

        Ok(Page {
            items,
            total_results,
            next_page_token,
            raw,
        })
    }
}

/// The merged result of walking one or more pages.
#[derive(Clone, Debug, PartialEq)]
pub struct Aggregated {
    /// Every item of every fetched page, in fetch order.
    pub items: Vec<Item>,
    /// The total reported by the first page. This is the server's estimate
    /// of all matches and is usually not `items.len()`.
    pub total_results: u64,
    /// Status code of the last page request.
    pub status: StatusCode,
    pub pages: usize,
    /// The last page's response object, without `items`.
    pub raw: Map<String, Value>,
}

impl Aggregated {
    pub fn is_success(&self) -> bool { self.status.is_success() }

    /// The last page's response object with `items` replaced by the merged
    /// item list.
    pub fn into_json(self) -> Value {
        let mut raw = self.raw;
        raw.insert(
            "items".into(),
            Value::Array(self.items.into_iter().map(|item| item.0).collect()),
        );
        Value::Object(raw)
    }
}
