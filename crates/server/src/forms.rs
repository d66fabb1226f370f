// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Multipart form decoding for the routes that accept a resume.

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use std::collections::HashMap;
use talent_bridge_api::ResumeUpload;
use tracing::debug;

use crate::HttpError;

/// Name of the file part carrying a resume.
pub const RESUME_FIELD: &str = "resume";

/// The text parts of a multipart form plus an optional resume.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    pub resume: Option<ResumeUpload>,
}

impl MultipartForm {
    /// Drains every part of the request.
    ///
    /// A resume part with an empty file name is treated as absent, which is
    /// what browsers send when no file was chosen. A named part is kept even
    /// when it has no content, so its file name is still validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid multipart data or exceeds
    /// the body limit.
    pub async fn read(mut multipart: Multipart) -> Result<Self, HttpError> {
        let mut form: Self = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name: String = field.name().unwrap_or_default().to_string();

            if name == RESUME_FIELD {
                let filename: String = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                if filename.is_empty() {
                    debug!("Empty resume part ignored");
                    continue;
                }
                form.resume = Some(ResumeUpload {
                    filename,
                    bytes: bytes.to_vec(),
                });
            } else {
                let value: String = field.text().await.map_err(multipart_error)?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Removes and returns a text field.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// Removes and returns a text field, or an empty string when absent.
    pub fn take_or_empty(&mut self, name: &str) -> String {
        self.take(name).unwrap_or_default()
    }
}

fn multipart_error(err: MultipartError) -> HttpError {
    HttpError::new(err.status(), err.body_text())
}
