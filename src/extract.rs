use std::ops::Deref;

use axum::Json;
use axum::extract::{FromRef, FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::ValidationError;
use crate::validate::{TagRules, Validate};

/// JSON body extractor that also runs the payload's checks.
///
/// The rules come from router state via `FromRef`, so a router whose state
/// is `TagRules` (or contains one) can take `Valid<TagCreate>` directly.
#[derive(Debug, Clone)]
pub struct Valid<T>(pub T);

impl<T> Valid<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Valid<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
    TagRules: FromRef<S>,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await?;
        let rules = TagRules::from_ref(state);
        payload.validate(&rules)?;
        tracing::debug!(payload = std::any::type_name::<T>(), "payload accepted");
        Ok(Self(payload))
    }
}
