// src/api/payloads.rs
//! Serialize-only request payloads for the two Notion write paths.
//!
//! The wire shapes follow the versioned API contract: a paragraph block
//! carries a `rich_text` array, and a database row is created as a page
//! whose parent is the database, with a title-type `Name` property.

use serde::Serialize;

/// One paragraph block, ready for a children-append request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParagraphBlock {
    object: &'static str,
    #[serde(rename = "type")]
    block_type: &'static str,
    paragraph: RichTextBody,
}

impl ParagraphBlock {
    /// Builds a paragraph block whose entire content is `text`.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            object: "block",
            block_type: "paragraph",
            paragraph: RichTextBody {
                rich_text: vec![RichTextItem::plain(text)],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct RichTextBody {
    rich_text: Vec<RichTextItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct RichTextItem {
    #[serde(rename = "type")]
    item_type: &'static str,
    text: TextContent,
}

impl RichTextItem {
    fn plain(content: impl Into<String>) -> Self {
        Self {
            item_type: "text",
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct TextContent {
    content: String,
}

/// Body of a `blocks/{id}/children` append request.
#[derive(Debug, Serialize)]
pub(crate) struct AppendChildren {
    pub children: Vec<ParagraphBlock>,
}

/// Properties of a database row to be created.
///
/// Only the `Name` title property is set; the database's other columns
/// keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowProperties {
    #[serde(rename = "Name")]
    name: TitleProperty,
}

impl RowProperties {
    /// Builds row properties whose title is `text`.
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            name: TitleProperty {
                title: vec![TitleSegment {
                    text: TextContent {
                        content: text.into(),
                    },
                }],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct TitleProperty {
    title: Vec<TitleSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct TitleSegment {
    text: TextContent,
}

/// Body of a `pages` create request parented to a database.
#[derive(Debug, Serialize)]
pub(crate) struct CreateRow {
    pub parent: DatabaseParent,
    pub properties: RowProperties,
}

#[derive(Debug, Serialize)]
pub(crate) struct DatabaseParent {
    pub database_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn paragraph_block_serializes_to_the_versioned_shape() {
        let block = ParagraphBlock::from_text("https://example.com/x");
        let value = serde_json::to_value(&block).unwrap();

        assert_eq!(
            value,
            json!({
                "object": "block",
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [
                        { "type": "text", "text": { "content": "https://example.com/x" } }
                    ]
                }
            })
        );
    }

    #[test]
    fn row_properties_set_only_the_name_title() {
        let properties = RowProperties::titled("L1");
        let value = serde_json::to_value(&properties).unwrap();

        assert_eq!(
            value,
            json!({
                "Name": {
                    "title": [ { "text": { "content": "L1" } } ]
                }
            })
        );
    }
}
