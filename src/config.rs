use std::env;

use crate::validate::{ColorFormat, TagRules};

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rules: TagRules,
    pub pretty: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            rules: TagRules {
                color_format: env::var("TAG_COLOR_FORMAT")
                    .ok()
                    .and_then(|v| {
                        v.parse::<ColorFormat>()
                            .inspect_err(|e| tracing::warn!("ignoring TAG_COLOR_FORMAT: {e}"))
                            .ok()
                    })
                    .unwrap_or_default(),
                name_max_len: env::var("TAG_NAME_MAX_LEN")
                    .ok()
                    .and_then(|v| {
                        v.parse::<usize>()
                            .inspect_err(|e| tracing::warn!("ignoring TAG_NAME_MAX_LEN: {e}"))
                            .ok()
                    })
                    .filter(|&n| n > 0),
            },
            pretty: env::var("TAG_SCHEMA_PRETTY")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}
