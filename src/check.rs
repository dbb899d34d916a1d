use clap::ValueEnum;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ValidationError;
use crate::models::project_tag::{AddTagToProjectRequest, ProjectsByTagParams};
use crate::models::response::DataResponse;
use crate::models::tag::{Tag, TagCreate, TagUpdate};
use crate::validate::{TagRules, Validate, from_json};

/// Shapes a payload can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadKind {
    Create,
    Update,
    Tag,
    AddToProject,
    ProjectsByTag,
}

/// Outcome of checking one payload: the envelope to print and whether the
/// payload was accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub body: Value,
    pub accepted: bool,
}

/// Validate `input` as `kind` and return it normalized inside a success
/// envelope.
pub fn check(kind: PayloadKind, input: &str, rules: &TagRules) -> Result<Value, ValidationError> {
    match kind {
        PayloadKind::Create => normalized::<TagCreate>(input, rules),
        PayloadKind::Update => normalized::<TagUpdate>(input, rules),
        PayloadKind::Tag => normalized::<Tag>(input, rules),
        PayloadKind::AddToProject => normalized::<AddTagToProjectRequest>(input, rules),
        PayloadKind::ProjectsByTag => normalized::<ProjectsByTagParams>(input, rules),
    }
}

pub fn report(kind: PayloadKind, input: &str, rules: &TagRules) -> Report {
    match check(kind, input, rules) {
        Ok(body) => {
            tracing::info!(?kind, "payload accepted");
            Report {
                body,
                accepted: true,
            }
        }
        Err(e) => {
            tracing::warn!(?kind, "payload rejected: {e}");
            match serde_json::to_value(e.to_envelope()) {
                Ok(body) => Report {
                    body,
                    accepted: false,
                },
                Err(encode) => {
                    tracing::error!("failed to encode error envelope: {encode}");
                    Report {
                        body: Value::Null,
                        accepted: false,
                    }
                }
            }
        }
    }
}

fn normalized<T>(input: &str, rules: &TagRules) -> Result<Value, ValidationError>
where
    T: DeserializeOwned + Serialize + Validate,
{
    let payload: T = from_json(input, rules)?;
    Ok(serde_json::to_value(DataResponse::ok(payload))?)
}
