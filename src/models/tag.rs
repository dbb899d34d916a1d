use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ValidationError;
use crate::models::patch::Patch;
use crate::validate::{TagRules, Validate};

/// Fields every tag carries, whether it is being created or returned.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct TagBase {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl TagBase {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Validate for TagBase {
    fn validate(&self, rules: &TagRules) -> Result<(), ValidationError> {
        rules.check_name(&self.name)?;
        rules.check_color(&self.color)
    }
}

/// Body of a create call. Server-assigned fields (`id`, timestamps) are
/// not part of the shape and are dropped if a client sends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCreate(pub TagBase);

impl TagCreate {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self(TagBase::new(name, color))
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self(self.0.with_description(description))
    }

    pub fn into_inner(self) -> TagBase {
        self.0
    }
}

impl Deref for TagCreate {
    type Target = TagBase;

    fn deref(&self) -> &TagBase {
        &self.0
    }
}

impl From<TagBase> for TagCreate {
    fn from(base: TagBase) -> Self {
        Self(base)
    }
}

impl Validate for TagCreate {
    fn validate(&self, rules: &TagRules) -> Result<(), ValidationError> {
        self.0.validate(rules)
    }
}

/// Body of an update call. Only the fields that are set should be touched
/// by whoever applies it; `description: null` clears the description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub color: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub description: Patch<String>,
}

impl TagUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Patch::Value(name.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Patch::Value(color.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Patch::Value(description.into());
        self
    }

    pub fn clear_description(mut self) -> Self {
        self.description = Patch::Null;
        self
    }

    /// True when applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_unset() && self.color.is_unset() && self.description.is_unset()
    }
}

impl Validate for TagUpdate {
    fn validate(&self, rules: &TagRules) -> Result<(), ValidationError> {
        match &self.name {
            Patch::Null => return Err(ValidationError::NullField { field: "name" }),
            Patch::Value(name) => rules.check_name(name)?,
            Patch::Unset => {}
        }
        match &self.color {
            Patch::Null => return Err(ValidationError::NullField { field: "color" }),
            Patch::Value(color) => rules.check_color(color)?,
            Patch::Unset => {}
        }
        Ok(())
    }
}

/// A stored tag as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: TagBase,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tag {
    /// Build a tag from anything that exposes the tag's fields.
    pub fn from_attributes<A: TagAttributes + ?Sized>(source: &A) -> Self {
        Self {
            id: source.id(),
            base: TagBase {
                name: source.name().to_owned(),
                color: source.color().to_owned(),
                description: source.description().map(str::to_owned),
            },
            created_at: source.created_at(),
            updated_at: source.updated_at(),
        }
    }
}

impl Validate for Tag {
    fn validate(&self, rules: &TagRules) -> Result<(), ValidationError> {
        self.base.validate(rules)
    }
}

impl Deref for Tag {
    type Target = TagBase;

    fn deref(&self) -> &TagBase {
        &self.base
    }
}

/// Attribute-style access to a stored tag, for records that are not `Tag`
/// themselves (ORM entities, joined rows, test doubles).
pub trait TagAttributes {
    fn id(&self) -> i64;
    fn name(&self) -> &str;
    fn color(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
}

impl TagAttributes for Tag {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.base.name
    }

    fn color(&self) -> &str {
        &self.base.color
    }

    fn description(&self) -> Option<&str> {
        self.base.description.as_deref()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::validate::from_json;

    #[test]
    fn create_with_name_and_color() {
        let tag: TagCreate =
            from_json(r##"{"name": "bug", "color": "#ff0000"}"##, &TagRules::default()).unwrap();

        assert_eq!(tag, TagCreate::new("bug", "#ff0000"));
        assert_eq!(tag.description, None);
    }

    #[test]
    fn create_round_trips_description() {
        let tag = TagCreate::new("docs", "#123456").with_description("Documentation work");
        let value = serde_json::to_value(&tag).unwrap();

        assert_eq!(
            value,
            json!({"name": "docs", "color": "#123456", "description": "Documentation work"})
        );
        assert_eq!(serde_json::from_value::<TagCreate>(value).unwrap(), tag);
    }

    #[rstest]
    #[case::missing_name(r##"{"color": "#ff0000"}"##)]
    #[case::missing_color(r#"{"name": "bug"}"#)]
    #[case::wrong_type(r##"{"name": 5, "color": "#ff0000"}"##)]
    #[case::null_name(r##"{"name": null, "color": "#ff0000"}"##)]
    fn create_rejects_bad_shapes(#[case] body: &str) {
        let err = from_json::<TagCreate>(body, &TagRules::default()).unwrap_err();
        assert!(matches!(err, ValidationError::Invalid(_)), "{err:?}");
    }

    #[test]
    fn create_rejects_blank_name() {
        let err = TagCreate::new("   ", "#ff0000")
            .validate(&TagRules::default())
            .unwrap_err();
        assert_eq!(err, ValidationError::Blank { field: "name" });
    }

    #[test]
    fn create_ignores_server_assigned_fields() {
        let tag: TagCreate = from_json(
            r##"{"id": 99, "name": "bug", "color": "#ff0000", "created_at": "2024-01-01T00:00:00Z"}"##,
            &TagRules::default(),
        )
        .unwrap();

        assert_eq!(serde_json::to_value(&tag).unwrap(), json!({"name": "bug", "color": "#ff0000", "description": null}));
    }

    #[rstest]
    #[case::empty("{}", false, false, false)]
    #[case::name(r#"{"name": "a"}"#, true, false, false)]
    #[case::color(r##"{"color": "#00ff00"}"##, false, true, false)]
    #[case::description(r#"{"description": "d"}"#, false, false, true)]
    #[case::name_color(r##"{"name": "a", "color": "#00ff00"}"##, true, true, false)]
    #[case::name_description(r#"{"name": "a", "description": "d"}"#, true, false, true)]
    #[case::color_description(r##"{"color": "#00ff00", "description": "d"}"##, false, true, true)]
    #[case::all(r##"{"name": "a", "color": "#00ff00", "description": "d"}"##, true, true, true)]
    fn update_accepts_any_subset(
        #[case] body: &str,
        #[case] name: bool,
        #[case] color: bool,
        #[case] description: bool,
    ) {
        let update: TagUpdate = from_json(body, &TagRules::default()).unwrap();

        assert_eq!(update.name.is_set(), name);
        assert_eq!(update.color.is_set(), color);
        assert_eq!(update.description.is_set(), description);
        assert!(!update.name.is_null() && !update.color.is_null() && !update.description.is_null());
    }

    #[test]
    fn update_color_only() {
        let update: TagUpdate =
            from_json(r##"{"color": "#00ff00"}"##, &TagRules::default()).unwrap();

        assert_eq!(update, TagUpdate::default().color("#00ff00"));
        assert_eq!(update.name, Patch::Unset);
        assert_eq!(update.description, Patch::Unset);
        assert_eq!(serde_json::to_string(&update).unwrap(), r##"{"color":"#00ff00"}"##);
    }

    #[test]
    fn update_distinguishes_cleared_description() {
        let cleared: TagUpdate =
            from_json(r#"{"description": null}"#, &TagRules::default()).unwrap();
        let untouched: TagUpdate = from_json("{}", &TagRules::default()).unwrap();

        assert_eq!(cleared, TagUpdate::default().clear_description());
        assert!(untouched.is_empty());
        assert!(!cleared.is_empty());
        assert_eq!(serde_json::to_string(&cleared).unwrap(), r#"{"description":null}"#);
    }

    #[rstest]
    #[case::null_name(r#"{"name": null}"#, ValidationError::NullField { field: "name" })]
    #[case::null_color(r#"{"color": null}"#, ValidationError::NullField { field: "color" })]
    #[case::blank_name(r#"{"name": ""}"#, ValidationError::Blank { field: "name" })]
    fn update_rejects_non_nullable_values(#[case] body: &str, #[case] expected: ValidationError) {
        let err = from_json::<TagUpdate>(body, &TagRules::default()).unwrap_err();
        assert_eq!(err, expected);
    }

    #[test]
    fn update_rejects_wrong_type() {
        let err = from_json::<TagUpdate>(r#"{"description": 12}"#, &TagRules::default()).unwrap_err();
        assert!(matches!(err, ValidationError::Invalid(_)));
    }

    struct Record {
        pk: i64,
        label: String,
        hue: String,
        note: Option<String>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    }

    impl TagAttributes for Record {
        fn id(&self) -> i64 {
            self.pk
        }
        fn name(&self) -> &str {
            &self.label
        }
        fn color(&self) -> &str {
            &self.hue
        }
        fn description(&self) -> Option<&str> {
            self.note.as_deref()
        }
        fn created_at(&self) -> DateTime<Utc> {
            self.created
        }
        fn updated_at(&self) -> DateTime<Utc> {
            self.modified
        }
    }

    #[test]
    fn tag_from_attributes_copies_every_field() {
        let record = Record {
            pk: 42,
            label: "feature".to_string(),
            hue: "#336699".to_string(),
            note: Some("New work".to_string()),
            created: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            modified: Utc.with_ymd_and_hms(2024, 3, 2, 10, 30, 0).unwrap(),
        };

        let tag = Tag::from_attributes(&record);

        assert_eq!(tag.id, 42);
        assert_eq!(tag.name, "feature");
        assert_eq!(tag.color, "#336699");
        assert_eq!(tag.description.as_deref(), Some("New work"));
        assert_eq!(tag.created_at, record.created);
        assert_eq!(tag.updated_at, record.modified);
        assert_eq!(Tag::from_attributes(&tag), tag);
    }

    #[test]
    fn tag_serializes_flat_with_null_description() {
        let tag = Tag {
            id: 1,
            base: TagBase::new("bug", "#ff0000"),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        };

        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            json!({
                "id": 1,
                "name": "bug",
                "color": "#ff0000",
                "description": null,
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-02T00:00:00Z",
            })
        );
    }
}
