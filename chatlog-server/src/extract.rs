//! Request extractors.

use axum::extract::FromRequest;

use crate::error::ServerError;

/// JSON body extractor whose rejections are [`ServerError`]s.
///
/// A body that parses but does not match `T` becomes
/// [`ServerError::InvalidRecord`]; anything that is not JSON keeps the
/// rejection's own 4xx status. Either way the handler never runs.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ValidatedJson<T>(pub T);
