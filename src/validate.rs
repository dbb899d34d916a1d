use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// Checks that run after a payload has been decoded into its shape.
pub trait Validate {
    fn validate(&self, rules: &TagRules) -> Result<(), ValidationError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorFormat {
    /// Any string is accepted.
    #[default]
    Any,
    /// `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    Hex,
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "hex" => Ok(Self::Hex),
            other => Err(format!("unknown color format {other:?}, expected \"any\" or \"hex\"")),
        }
    }
}

impl ColorFormat {
    pub fn accepts(self, color: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Hex => color.strip_prefix('#').is_some_and(|digits| {
                matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
            }),
        }
    }
}

/// Field rules shared by create and update payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRules {
    pub color_format: ColorFormat,
    pub name_max_len: Option<usize>,
}

impl TagRules {
    pub fn check_name(&self, name: &str) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::Blank { field: "name" });
        }
        if let Some(max) = self.name_max_len.filter(|&max| name.chars().count() > max) {
            return Err(ValidationError::TooLong { field: "name", max });
        }
        Ok(())
    }

    pub fn check_color(&self, color: &str) -> Result<(), ValidationError> {
        if self.color_format.accepts(color) {
            Ok(())
        } else {
            Err(ValidationError::InvalidColor {
                value: color.to_string(),
            })
        }
    }
}

/// Decode a JSON payload into `T` and run its checks.
pub fn from_json<T>(input: &str, rules: &TagRules) -> Result<T, ValidationError>
where
    T: DeserializeOwned + Validate,
{
    let payload: T = serde_json::from_str(input)?;
    payload.validate(rules)?;
    Ok(payload)
}
