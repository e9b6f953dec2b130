// src/utils/extract.rs

use axum::{
    Json,
    extract::{FromRef, FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use serde_json::Value;

use crate::{
    config::Config,
    error::AppError,
    validation::{RawInput, Schema},
};

/// A JSON body that has been run through its schema.
///
/// Malformed JSON is a plain 400; well-formed JSON that breaks the schema is
/// a 400 listing every offending field.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: Schema,
    Config: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let options = Config::from_ref(state).parse_options();
        let value = T::from_json_with(body, &options)?;
        Ok(ValidatedJson(value))
    }
}

/// Query parameters that have been run through their schema.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: Schema,
    Config: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let input = RawInput::from_query(parts.uri.query().unwrap_or_default());
        let options = Config::from_ref(state).parse_options();
        let value = T::parse(input, &options)?;
        Ok(ValidatedQuery(value))
    }
}
