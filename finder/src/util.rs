use std::fmt::{self, Write as _};

use youtube::{Aggregated, Item, StatusCode};

/// Collapses the final status of a call into what the user gets to see.
pub fn status_label(status: StatusCode) -> &'static str {
    if status.is_success() {
        "success"
    } else {
        "fail"
    }
}

fn describe(item: &Item) -> (String, String) {
    let title = item.title().unwrap_or("<untitled>").to_owned();
    match item.watch_url() {
        Some(url) => (title, url),
        None => {
            let kind = item.0["id"]["kind"]
                .as_str()
                .or_else(|| item.0["kind"].as_str())
                .unwrap_or("unknown");
            (title, format!("({})", kind))
        }
    }
}

pub fn render(result: &Aggregated) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "{} ({}): fetched {} of {} results in {} page(s)",
        status_label(result.status),
        result.status,
        result.items.len(),
        result.total_results,
        result.pages
    )?;
    let width = result.items.len().to_string().len();
    for (i, item) in result.items.iter().enumerate() {
        let (title, link) = describe(item);
        writeln!(out, "{:>width$}. {}", i + 1, title, width = width)?;
        writeln!(out, "{:>width$}  {}", "", link, width = width)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn aggregated(items: Vec<serde_json::Value>, status: StatusCode) -> Aggregated {
        Aggregated {
            items: items.into_iter().map(Item).collect(),
            total_results: 1000,
            status,
            pages: 1,
            raw: Map::new(),
        }
    }

    #[test]
    fn coarse_status() {
        assert_eq!(status_label(StatusCode::OK), "success");
        assert_eq!(status_label(StatusCode::NO_CONTENT), "success");
        assert_eq!(status_label(StatusCode::FORBIDDEN), "fail");
        assert_eq!(status_label(StatusCode::INTERNAL_SERVER_ERROR), "fail");
    }

    #[test]
    fn renders_videos_and_other_results() {
        let result = aggregated(
            vec![
                json!({ "id": { "kind": "youtube#video", "videoId": "abc" }, "snippet": { "title": "First" } }),
                json!({ "id": { "kind": "youtube#channel", "channelId": "UC1" }, "snippet": { "title": "A channel" } }),
            ],
            StatusCode::OK,
        );
        let out = render(&result).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "success (200 OK): fetched 2 of 1000 results in 1 page(s)");
        assert_eq!(lines[1], "1. First");
        assert_eq!(lines[2], "   https://www.youtube.com/watch?v=abc");
        assert_eq!(lines[3], "2. A channel");
        assert_eq!(lines[4], "   (youtube#channel)");
    }

    #[test]
    fn renders_failures() {
        let out = render(&aggregated(vec![], StatusCode::SERVICE_UNAVAILABLE)).unwrap();
        assert!(out.starts_with("fail (503 Service Unavailable)"));
    }
}
