//! JSON request body helpers.

use salvo::{
    Request,
    http::header::CONTENT_TYPE,
    prelude::StatusError,
};
use serde::de::DeserializeOwned;

use crate::extensions::*;

const JSON_MEDIA_TYPE: &str = "application/json";

pub(crate) trait JsonRequestExt {
    /// Fail with a 415 unless the request declares a JSON body.
    fn require_json(&self) -> Result<(), StatusError>;

    /// Check the content type, then deserialize the body.
    async fn json_payload<T: DeserializeOwned>(&mut self) -> Result<T, StatusError>;
}

impl JsonRequestExt for Request {
    fn require_json(&self) -> Result<(), StatusError> {
        let declared = self
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());

        if declared.is_some_and(is_json_media_type) {
            return Ok(());
        }

        Err(StatusError::unsupported_media_type()
            .brief(format!("Content-Type must be {JSON_MEDIA_TYPE}")))
    }

    async fn json_payload<T: DeserializeOwned>(&mut self) -> Result<T, StatusError> {
        self.require_json()?;

        self.parse_json::<T>()
            .await
            .or_400("request body is not a valid product document")
    }
}

fn is_json_media_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case(JSON_MEDIA_TYPE))
}
