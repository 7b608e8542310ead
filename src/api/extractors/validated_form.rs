//! Validated form extractor - Combines form decoding with validation.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
};
use axum_extra::extract::Form;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// URL-encoded form extractor that validates the decoded value.
///
/// Repeated keys (such as several `genres` values) decode into a `Vec`.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use books_app::api::extractors::ValidatedForm;
///
/// #[derive(Deserialize, Validate)]
/// struct GenreForm {
///     #[validate(length(min = 3, max = 80))]
///     name: String,
/// }
///
/// async fn create_genre(ValidatedForm(form): ValidatedForm<GenreForm>) {
///     // form is already validated
/// }
/// ```
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Form<T>: FromRequest<S>,
    <Form<T> as FromRequest<S>>::Rejection: std::fmt::Display,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.to_string()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedForm(value))
    }
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();

    messages.sort();
    messages.join(", ")
}
