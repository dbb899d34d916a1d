pub mod patch;
pub mod project_tag;
pub mod response;
pub mod tag;
