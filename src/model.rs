// src/model.rs
// Wire shapes for the news API. Decoding is deliberately tolerant: the
// upstream feed has been observed to ship `score` as null or a string and
// `links` as anything from a proper array to a bare string, and a detail
// record must still render.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One news detail record as served by `GET /api/news/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsItem {
    pub id: String,
    pub event_summary: String,
    /// ISO-parseable timestamp, display only — never mutated.
    pub date: String,
    /// Rating, when the feed has one. Anything that is not a JSON number
    /// decodes to `None` instead of failing the record.
    #[serde(default, deserialize_with = "de_score")]
    pub score: Option<f64>,
    /// Pre-formatted block, embedded verbatim into the overlay body.
    #[serde(default)]
    pub content: String,
    /// Related absolute URLs, in feed order. Absent / null / non-array
    /// decodes to empty; non-string entries are dropped.
    #[serde(default, deserialize_with = "de_links")]
    pub links: Vec<String>,
}

/// Sidebar input shape as served by `GET /api/news`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsSummary {
    pub id: String,
    pub event_summary: String,
    pub date: String,
}

fn de_score<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.as_ref().and_then(Value::as_f64))
}

fn de_links<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    let Some(Value::Array(items)) = v else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|it| match it {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(v: serde_json::Value) -> NewsItem {
        serde_json::from_value(v).expect("decode NewsItem")
    }

    #[test]
    fn full_record_decodes() {
        let it = item(json!({
            "id": "n1",
            "event_summary": "Rate decision",
            "date": "2025-01-01T10:00:00Z",
            "score": 7.25,
            "content": "<p>body</p>",
            "links": ["https://example.com/a", "https://news.example.org/b"]
        }));
        assert_eq!(it.score, Some(7.25));
        assert_eq!(it.links.len(), 2);
    }

    #[test]
    fn score_null_string_or_absent_decodes_to_none() {
        for score in [json!(null), json!("high"), json!({"v": 1})] {
            let it = item(json!({
                "id": "n1", "event_summary": "s", "date": "d",
                "score": score, "content": ""
            }));
            assert_eq!(it.score, None);
        }
        let it = item(json!({"id": "n1", "event_summary": "s", "date": "d"}));
        assert_eq!(it.score, None);
    }

    #[test]
    fn links_non_array_decodes_to_empty() {
        for links in [json!(null), json!("https://example.com"), json!(42)] {
            let it = item(json!({
                "id": "n1", "event_summary": "s", "date": "d", "links": links
            }));
            assert!(it.links.is_empty());
        }
    }

    #[test]
    fn links_keep_order_and_drop_non_strings() {
        let it = item(json!({
            "id": "n1", "event_summary": "s", "date": "d",
            "links": ["https://a.example", 7, "https://b.example", null]
        }));
        assert_eq!(it.links, vec!["https://a.example", "https://b.example"]);
    }
}
