//! Request and response shapes for the tag API: payload validation,
//! partial-update semantics and the `{code, msg, ...}` response envelope.

pub mod check;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod validate;

pub use error::ValidationError;
pub use extract::Valid;
pub use models::patch::Patch;
pub use models::project_tag::{AddTagToProjectRequest, ProjectTag, ProjectsByTagParams};
pub use models::response::{
    AddTagToProjectResponse, BaseResponse, CreateTagResponse, DataResponse, DeleteTagResponse,
    ErrorResponse, MessageResponse, RemoveTagFromProjectResponse, TagResponse, TagsResponse,
    UpdateTagResponse,
};
pub use models::tag::{Tag, TagAttributes, TagBase, TagCreate, TagUpdate};
pub use validate::{ColorFormat, TagRules, Validate, from_json};
