//! Item schemas.
//!
//! Items are learning content nodes. `parent_id` links an item to its parent
//! to form a tree; the schema only checks that it is an integer.

use serde::{Deserialize, Deserializer, Serialize};

use super::fields::Fields;
use super::{RawFields, Schema, ValidationError};
use crate::types::DbId;

/// Item type used when a create request omits `type`.
pub const DEFAULT_ITEM_TYPE: &str = "step";

fn default_item_type() -> String {
    DEFAULT_ITEM_TYPE.to_string()
}

// `null` on an optional text field means the same as leaving it out, on both
// the serde path and `construct`.

fn item_type_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_item_type))
}

fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Input for creating an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCreate {
    pub title: String,
    /// Defaults to [`DEFAULT_ITEM_TYPE`].
    #[serde(
        rename = "type",
        default = "default_item_type",
        deserialize_with = "item_type_or_default"
    )]
    pub item_type: String,
    /// Any integer is accepted, including `0` and negatives.
    #[serde(default)]
    pub parent_id: Option<DbId>,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub description: String,
}

impl Schema for ItemCreate {
    fn construct(fields: &RawFields) -> Result<Self, ValidationError> {
        let f = Fields::new(fields);
        Ok(Self {
            title: f.text("title")?,
            item_type: f.text_or("type", DEFAULT_ITEM_TYPE)?,
            parent_id: f.optional_integer("parent_id")?,
            description: f.text_or("description", "")?,
        })
    }
}

/// Input for revising an item.
///
/// Absent fields take their default (`""`) rather than keeping the stored
/// value: an update replaces `title` and `description` wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub description: String,
}

impl Schema for ItemUpdate {
    fn construct(fields: &RawFields) -> Result<Self, ValidationError> {
        let f = Fields::new(fields);
        Ok(Self {
            title: f.text_or("title", "")?,
            description: f.text_or("description", "")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::{json, Value};

    use super::*;
    use crate::schema::FieldType;

    fn item_create(value: Value) -> Result<ItemCreate, ValidationError> {
        ItemCreate::construct(value.as_object().expect("object"))
    }

    fn item_update(value: Value) -> Result<ItemUpdate, ValidationError> {
        ItemUpdate::construct(value.as_object().expect("object"))
    }

    // -- ItemCreate --------------------------------------------------------

    #[test]
    fn empty_title_is_accepted() {
        let item = item_create(json!({"title": ""})).unwrap();
        assert_eq!(item.title, "");
    }

    #[test]
    fn long_titles_keep_their_length() {
        for len in [255, 500, 1000] {
            let item = item_create(json!({"title": "A".repeat(len)})).unwrap();
            assert_eq!(item.title.chars().count(), len);
        }
    }

    #[test]
    fn thousand_char_title_gets_defaults() {
        let item = item_create(json!({"title": "A".repeat(1000)})).unwrap();
        assert_eq!(item.title.len(), 1000);
        assert_eq!(item.item_type, "step");
        assert_eq!(item.parent_id, None);
        assert_eq!(item.description, "");
    }

    #[test]
    fn default_type_is_step() {
        let item = item_create(json!({"title": "Test Item"})).unwrap();
        assert_eq!(item.item_type, DEFAULT_ITEM_TYPE);
    }

    #[test]
    fn explicit_type_is_kept() {
        let item = item_create(json!({"title": "Quiz", "type": "task"})).unwrap();
        assert_eq!(item.item_type, "task");
    }

    #[test]
    fn parent_id_zero_is_accepted() {
        let item = item_create(json!({"title": "Test Item", "parent_id": 0})).unwrap();
        assert_eq!(item.parent_id, Some(0));
    }

    #[test]
    fn parent_id_at_i32_boundaries() {
        let large = item_create(json!({"title": "Test", "parent_id": 2147483647})).unwrap();
        let negative = item_create(json!({"title": "Test", "parent_id": -2147483648_i64})).unwrap();
        assert_eq!(large.parent_id, Some(2_147_483_647));
        assert_eq!(negative.parent_id, Some(-2_147_483_648));
    }

    #[test]
    fn missing_title_is_rejected() {
        let err = item_create(json!({"type": "step"})).unwrap_err();
        assert_matches!(
            err,
            ValidationError { field: "title", expected: FieldType::Text, found: "missing" }
        );
    }

    #[test]
    fn non_integer_parent_id_is_rejected() {
        let err = item_create(json!({"title": "x", "parent_id": "3"})).unwrap_err();
        assert_eq!(err.field, "parent_id");
        assert_eq!(err.expected, FieldType::Integer);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let item = item_create(json!({"title": "x", "colour": "red"})).unwrap();
        assert_eq!(item.title, "x");
    }

    #[test]
    fn construction_is_deterministic() {
        let input = json!({"title": "Same", "parent_id": 4, "type": "lesson"});
        assert_eq!(item_create(input.clone()).unwrap(), item_create(input).unwrap());
    }

    #[test]
    fn deserialize_matches_construct() {
        let input = json!({"title": "Typed", "parent_id": 0});
        let typed: ItemCreate = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(typed, item_create(input).unwrap());
    }

    #[test]
    fn null_optionals_deserialize_like_construct() {
        let input = json!({"title": "x", "type": null, "parent_id": null, "description": null});
        let typed: ItemCreate = serde_json::from_value(input.clone()).unwrap();
        let built = item_create(input).unwrap();
        assert_eq!(typed, built);
        assert_eq!(typed.item_type, DEFAULT_ITEM_TYPE);
        assert_eq!(typed.description, "");
    }

    #[test]
    fn text_fields_accept_any_length() {
        for len in [0, 100, 255, 500, 1000] {
            let text = "x".repeat(len);
            let item = item_create(json!({
                "title": text,
                "type": text,
                "description": text,
            }))
            .unwrap();
            assert_eq!(item.title, text, "title at {len}");
            assert_eq!(item.item_type, text, "type at {len}");
            assert_eq!(item.description, text, "description at {len}");
        }
    }

    // -- ItemUpdate --------------------------------------------------------

    #[test]
    fn update_empty_title_is_accepted() {
        let item = item_update(json!({"title": ""})).unwrap();
        assert_eq!(item.title, "");
    }

    #[test]
    fn update_empty_description_is_accepted() {
        let item = item_update(json!({"title": "Valid Title", "description": ""})).unwrap();
        assert_eq!(item.description, "");
    }

    #[test]
    fn update_default_description_is_empty_string() {
        let item = item_update(json!({"title": "Title"})).unwrap();
        assert_eq!(item.description, "");
    }

    #[test]
    fn update_absent_fields_fill_defaults() {
        assert_eq!(item_update(json!({})).unwrap(), ItemUpdate::default());
    }

    #[test]
    fn update_rejects_wrong_description_type() {
        let err = item_update(json!({"title": "t", "description": ["a"]})).unwrap_err();
        assert_eq!(err.field, "description");
        assert_eq!(err.found, "array");
    }

    #[test]
    fn update_null_fields_deserialize_like_construct() {
        let input = json!({"title": null, "description": null});
        let typed: ItemUpdate = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(typed, item_update(input).unwrap());
        assert_eq!(typed, ItemUpdate::default());
    }

    #[test]
    fn update_text_fields_accept_any_length() {
        for len in [0, 100, 255, 500, 1000] {
            let text = "x".repeat(len);
            let item = item_update(json!({"title": text, "description": text})).unwrap();
            assert_eq!(item.title, text, "title at {len}");
            assert_eq!(item.description, text, "description at {len}");
        }
    }

    #[test]
    fn update_construction_is_deterministic() {
        let input = json!({"title": "Same", "description": "Body"});
        assert_eq!(item_update(input.clone()).unwrap(), item_update(input).unwrap());
    }
}
