//! Standalone file-upload helper, outside the resource families.

use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, MultipartBodyHTTPRequestType, RequestError,
};
use crate::http_response::response_common::UnwrappedPayload;
use reqwest::multipart;
use std::io;
use std::path::Path;

/// Request type for `POST /api/upload`: the file goes under the
/// caller-chosen field name (`"resume"`, `"avatar"`, ...).
///
/// Unlike every catalog request this one resolves to the bare JSON
/// payload rather than the response envelope; the historical contract of
/// this endpoint is kept as-is for compatibility.
#[derive(Debug)]
pub struct UploadFileRequest {
    field_name: String,
    file_path: String,
}

impl UploadFileRequest {
    pub fn new<P: AsRef<Path>>(file_path: P, field_name: &str) -> Result<Self, io::Error> {
        let path = file_path.as_ref();
        if !path.exists() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "File path does not exist"));
        }
        if !path.is_file() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "Path is not a valid file"));
        }
        Ok(Self {
            field_name: field_name.to_string(),
            file_path: path.to_string_lossy().to_string(),
        })
    }
}

impl MultipartBodyHTTPRequestType for UploadFileRequest {
    async fn multipart_body(&self) -> Result<multipart::Form, RequestError> {
        let file_part = multipart::Part::file(&self.file_path).await?;
        Ok(multipart::Form::new().part(self.field_name.clone(), file_part))
    }
}

impl HTTPRequestType for UploadFileRequest {
    type Response = UnwrappedPayload;
    fn endpoint(&self) -> String { "/api/upload".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_a_missing_source_file() {
        let err = UploadFileRequest::new("/no/such/file", "resume").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn rejects_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = UploadFileRequest::new(dir.path(), "resume").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
