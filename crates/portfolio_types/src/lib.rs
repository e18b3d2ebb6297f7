//! Core types for the creative-coding portfolio.
//!
//! This crate defines the week record model and the rules the site
//! applies to it: resolving a week from a route segment, computing
//! previous/next navigation, and building asset URLs. Nothing here
//! depends on the UI framework.

mod copy_ack;
mod site;
mod store;

pub use copy_ack::{AckTicket, COPY_ACK_WINDOW_MS, CopyAck, CopyState};
pub use site::SiteProfile;
pub use store::{Adjacent, ValidationError, WeekStore};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Numeric identifier of a week. Also the ordering key.
pub type WeekId = u32;

/// Host that renders placeholder previews when a sketch image is missing.
pub const PLACEHOLDER_HOST: &str = "https://placehold.co";

/// Errors from resolving a week out of a route segment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("invalid week id: {0:?}")]
    InvalidId(String),

    #[error("no week with id {0}")]
    NotFound(WeekId),
}

/// Result type for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;

/// One week's project write-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRecord {
    /// Week number
    pub id: WeekId,
    /// Project title
    pub title: String,
    /// Short comma-separated list of topics
    pub topics: String,
    /// What the project is about
    pub description: String,
    /// Preview image, relative to the asset directory
    #[serde(rename = "gifPath")]
    pub image_path: String,
    /// Live sketch URL
    pub sketch_url: String,
    /// Lessons learned, in display order
    #[serde(default)]
    pub learnings: Vec<String>,
    /// What was hard this week
    #[serde(default)]
    pub challenges: String,
    /// Source excerpt shown verbatim
    #[serde(default)]
    pub code_snippet: String,
}

impl WeekRecord {
    /// Create a new week record with empty learnings, challenges and snippet.
    pub fn new(
        id: WeekId,
        title: impl Into<String>,
        topics: impl Into<String>,
        description: impl Into<String>,
        image_path: impl Into<String>,
        sketch_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            topics: topics.into(),
            description: description.into(),
            image_path: image_path.into(),
            sketch_url: sketch_url.into(),
            learnings: Vec::new(),
            challenges: String::new(),
            code_snippet: String::new(),
        }
    }

    /// Set the learnings list, keeping the given order.
    pub fn with_learnings<I, S>(mut self, learnings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.learnings = learnings.into_iter().map(Into::into).collect();
        self
    }

    /// Set the challenges note.
    pub fn with_challenges(mut self, challenges: impl Into<String>) -> Self {
        self.challenges = challenges.into();
        self
    }

    /// Set the code snippet.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code_snippet = code.into();
        self
    }

    /// Heading used on the detail page, e.g. `Week 3: Functions & Randomness`.
    pub fn heading(&self) -> String {
        format!("Week {}: {}", self.id, self.title)
    }
}

/// Parse a raw route segment into a week id.
///
/// The whole segment must be a non-negative integer that fits a [`WeekId`];
/// `"3abc"`, `"-1"` and `""` are all rejected.
pub fn parse_week_id(raw: &str) -> Result<WeekId> {
    raw.parse::<WeekId>()
        .map_err(|_| LookupError::InvalidId(raw.to_string()))
}

/// Preview image sizes used by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewSize {
    /// Home grid card (400x300)
    Card,
    /// Detail page preview (400x400)
    Detail,
}

impl PreviewSize {
    /// Width and height in pixels.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Card => (400, 300),
            Self::Detail => (400, 400),
        }
    }
}

/// Placeholder image URL shown when a week's preview fails to load.
pub fn placeholder_image_url(id: WeekId, size: PreviewSize) -> String {
    let (width, height) = size.dimensions();
    format!("{PLACEHOLDER_HOST}/{width}x{height}/333/666?text=Week+{id}")
}

/// Resolve an asset path against the site's asset base.
///
/// Absolute URLs pass through untouched. A leading `/` on `path` is
/// dropped so assets stay relative to wherever the site is hosted.
pub fn resolve_asset(base: &str, path: &str) -> String {
    if path.contains("://") || path.starts_with("data:") {
        return path.to_string();
    }

    let path = path.trim_start_matches('/');
    let base = base.trim_end_matches('/');

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeekRecord {
        WeekRecord::new(
            3,
            "Functions & Randomness",
            "Custom functions, parameters, random(), noise()",
            "Creating reusable code blocks.",
            "/gifs/week3-functions.gif",
            "https://editor.p5js.org/someone/sketches/abc",
        )
        .with_learnings(["first", "second", "third"])
        .with_challenges("random() vs noise()")
        .with_code("function setup() {\n  createCanvas(400, 400);\n}")
    }

    #[test]
    fn test_parse_week_id_accepts_plain_integers() {
        assert_eq!(parse_week_id("0"), Ok(0));
        assert_eq!(parse_week_id("3"), Ok(3));
        assert_eq!(parse_week_id("10"), Ok(10));
    }

    #[test]
    fn test_parse_week_id_rejects_non_numeric() {
        for raw in ["abc", "", " 3", "3 ", "3.0", "three"] {
            assert_eq!(
                parse_week_id(raw),
                Err(LookupError::InvalidId(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_week_id_rejects_numeric_prefix() {
        // A prefix match would resolve "3abc" to week 3
        assert!(parse_week_id("3abc").is_err());
        assert!(parse_week_id("1e2").is_err());
    }

    #[test]
    fn test_parse_week_id_rejects_negative_and_overflow() {
        assert!(parse_week_id("-1").is_err());
        assert!(parse_week_id("99999999999").is_err());
    }

    #[test]
    fn test_week_record_builder_preserves_learning_order() {
        let week = sample();

        assert_eq!(week.learnings, vec!["first", "second", "third"]);
        assert_eq!(week.challenges, "random() vs noise()");
        assert!(week.code_snippet.contains('\n'));
    }

    #[test]
    fn test_week_record_heading() {
        assert_eq!(sample().heading(), "Week 3: Functions & Randomness");
    }

    #[test]
    fn test_week_record_uses_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["gifPath"], "/gifs/week3-functions.gif");
        assert!(json.get("sketchUrl").is_some());
        assert!(json.get("codeSnippet").is_some());
        assert!(json.get("image_path").is_none());
    }

    #[test]
    fn test_week_record_deserializes_without_optional_fields() {
        let json = r#"{
            "id": 1,
            "title": "Canvas & Shapes",
            "topics": "Coordinate system",
            "description": "Drawing on the canvas.",
            "gifPath": "gifs/week1-canvas.gif",
            "sketchUrl": "https://editor.p5js.org/x"
        }"#;

        let week: WeekRecord = serde_json::from_str(json).unwrap();

        assert_eq!(week.id, 1);
        assert!(week.learnings.is_empty());
        assert!(week.code_snippet.is_empty());
    }

    #[test]
    fn test_week_record_rejects_negative_id() {
        let json = r#"{"id": -1, "title": "", "topics": "", "description": "",
                       "gifPath": "", "sketchUrl": ""}"#;

        assert!(serde_json::from_str::<WeekRecord>(json).is_err());
    }

    #[test]
    fn test_placeholder_image_url() {
        assert_eq!(
            placeholder_image_url(4, PreviewSize::Card),
            "https://placehold.co/400x300/333/666?text=Week+4"
        );
        assert_eq!(
            placeholder_image_url(10, PreviewSize::Detail),
            "https://placehold.co/400x400/333/666?text=Week+10"
        );
    }

    #[test]
    fn test_resolve_asset_strips_leading_slash() {
        assert_eq!(
            resolve_asset("", "/gifs/week3-functions.gif"),
            "gifs/week3-functions.gif"
        );
        assert_eq!(
            resolve_asset("", "gifs/week0-environment.gif"),
            "gifs/week0-environment.gif"
        );
    }

    #[test]
    fn test_resolve_asset_joins_base() {
        assert_eq!(
            resolve_asset("/portfolio/", "/gifs/a.gif"),
            "/portfolio/gifs/a.gif"
        );
        assert_eq!(resolve_asset("static", "gifs/a.gif"), "static/gifs/a.gif");
    }

    #[test]
    fn test_resolve_asset_keeps_absolute_urls() {
        let url = "https://cdn.example.com/a.gif";
        assert_eq!(resolve_asset("static", url), url);
    }
}
