use core::fmt::Debug;
use std::ops::Deref;

use crate::domain::error::AppError;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::{JsonBody, Payload};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;
use validator::Validate;

const PAYLOAD_LIMIT: usize = 32_768;

/// JSON body that has passed its `validator` rules. Malformed JSON is a 400,
/// failed rules a 422 listing every offending field.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

fn is_json(mime: mime::Mime) -> bool {
    mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON)
}

impl<T> FromRequest for Json<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        JsonBody::new(req, payload, Some(&is_json), true)
            .limit(PAYLOAD_LIMIT)
            .map(|res: Result<T, _>| match res {
                Ok(body) => body.validate().map(|_| Json(body)).map_err(AppError::from),
                Err(err) => Err(AppError::from(err)),
            })
            .boxed_local()
    }
}
