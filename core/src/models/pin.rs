use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{iso8601, null_as_default, Board, Image};

/// Fields requested when the caller does not narrow the selection.
pub const PIN_FIELDS: &[&str] = &[
    "id",
    "link",
    "url",
    "board",
    "created_at",
    "note",
    "color",
    "counts",
    "media",
    "attribution",
    "image",
    "metadata",
];

/// Free-form metadata attached to a pin (article, recipe, product...).
pub type PinMetadata = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pin {
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub board: Board,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub note: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub counts: PinCounts,
    #[serde(deserialize_with = "null_as_default")]
    pub media: Media,
    #[serde(deserialize_with = "null_as_default")]
    pub attribution: Attribution,
    #[serde(deserialize_with = "null_as_default")]
    pub image: PinImage,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: PinMetadata,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinCounts {
    pub likes: i32,
    pub comments: i32,
    pub repins: i32,
}

/// Content classification, e.g. `"image"` or `"video"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Credit for content pinned from another site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribution {
    pub title: String,
    pub url: String,
    pub provider_icon_url: String,
    pub author_name: String,
    pub provider_favicon_url: String,
    pub author_url: String,
    pub provider_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinImage {
    #[serde(deserialize_with = "null_as_default")]
    pub original: Image,
}

/// Payload for `POST /pins/`. Exactly one image source should be set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePin {
    /// Target board as `username/board-slug`.
    pub board: String,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}

/// Payload for `PATCH /pins/{id}/`. Omitted fields remain unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    const PIN_JSON: &str = r##"{
        "id": "123",
        "link": "https://example.com/pie",
        "url": "https://www.pinterest.com/pin/123/",
        "board": {"id": "77", "name": "Recipes", "url": "https://www.pinterest.com/alice/recipes/"},
        "created_at": "2017-08-02T18:30:29",
        "note": "Apple pie",
        "color": "#c8a165",
        "counts": {"likes": 4, "comments": 1, "repins": 12},
        "media": {"type": "image"},
        "attribution": {
            "title": "Pie",
            "url": "https://example.com/pie",
            "provider_icon_url": "https://example.com/icon.png",
            "author_name": "Bob",
            "provider_favicon_url": "https://example.com/favicon.ico",
            "author_url": "https://example.com/bob",
            "provider_name": "Example"
        },
        "image": {"original": {"url": "https://i.pinimg.com/originals/pie.jpg", "width": 600, "height": 900}},
        "metadata": {"recipe": {"servings": {"serves": "8"}}}
    }"##;

    #[test]
    fn decodes_every_canonical_field() {
        let pin: Pin = serde_json::from_str(PIN_JSON).unwrap();
        assert_eq!(pin.id, "123");
        assert_eq!(pin.link, "https://example.com/pie");
        assert_eq!(pin.board.name, "Recipes");
        assert_eq!(pin.created_at.to_rfc3339(), "2017-08-02T18:30:29+00:00");
        assert_eq!(pin.color, "#c8a165");
        assert_eq!(
            pin.counts,
            PinCounts {
                likes: 4,
                comments: 1,
                repins: 12
            }
        );
        assert_eq!(pin.media.kind, "image");
        assert_eq!(pin.attribution.author_name, "Bob");
        assert_eq!(pin.image.original.width, 600);
        assert_eq!(pin.metadata["recipe"]["servings"]["serves"], "8");
    }

    #[test]
    fn reencodes_to_the_source_values() {
        let mut source: serde_json::Value = serde_json::from_str(PIN_JSON).unwrap();
        source["board"] = fixtures::board();
        let pin: Pin = serde_json::from_value(source.clone()).unwrap();
        let encoded = serde_json::to_value(&pin).unwrap();
        for field in PIN_FIELDS {
            assert_eq!(encoded[*field], source[*field], "field {field}");
        }
        assert_eq!(encoded, source);
    }

    #[test]
    fn partial_response_leaves_zero_values() {
        let pin: Pin = serde_json::from_str(r#"{"id": "9", "note": "only note"}"#).unwrap();
        assert_eq!(pin.id, "9");
        assert_eq!(pin.note, "only note");
        assert!(pin.link.is_empty());
        assert_eq!(pin.counts, PinCounts::default());
        assert_eq!(pin.created_at, DateTime::<Utc>::default());
    }

    #[test]
    fn null_fields_decode_to_defaults() {
        let pin: Pin = serde_json::from_str(
            r#"{"id": "9", "link": null, "attribution": null, "metadata": null, "created_at": null}"#,
        )
        .unwrap();
        assert!(pin.link.is_empty());
        assert_eq!(pin.attribution, Attribution::default());
        assert!(pin.metadata.is_empty());
    }

    #[test]
    fn create_pin_omits_unset_image_sources() {
        let input = CreatePin {
            board: "alice/recipes".to_string(),
            note: "Pie".to_string(),
            image_url: Some("https://example.com/pie.jpg".to_string()),
            ..CreatePin::default()
        };
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(body["board"], "alice/recipes");
        assert!(body.get("image_base64").is_none());
        assert!(body.get("link").is_none());
    }
}
