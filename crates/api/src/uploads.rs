// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resume file storage.
//!
//! Uploaded resumes are written under one directory as
//! `<32 hex chars>_<sanitized original name>`. The random prefix keeps two
//! uploads of `resume.pdf` from overwriting each other.

use std::path::{Path, PathBuf};
use talent_bridge_domain::{DomainError, sanitize_filename, validate_resume_filename};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default upload size limit: 16 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Errors raised while storing or removing a resume.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The file name or extension is not acceptable.
    #[error("{0}")]
    Rejected(DomainError),

    /// The file exceeds the configured size limit.
    #[error("File is {size} bytes; the limit is {max} bytes")]
    TooLarge { size: usize, max: usize },

    /// The file system refused the operation.
    #[error("Failed to store file: {0}")]
    Io(#[from] std::io::Error),
}

/// A resume received with a request, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    /// Name the client gave the file.
    pub filename: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// Stores resumes in a directory on disk.
#[derive(Debug, Clone)]
pub struct ResumeStore {
    root: PathBuf,
    max_bytes: usize,
}

impl ResumeStore {
    /// Creates a store rooted at `root`. The directory is created on first
    /// save if it does not exist.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Checks an upload without writing it.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Rejected` for a disallowed name and
    /// `UploadError::TooLarge` when over the size limit.
    pub fn check(&self, upload: &ResumeUpload) -> Result<(), UploadError> {
        validate_resume_filename(&upload.filename).map_err(UploadError::Rejected)?;
        if upload.bytes.len() > self.max_bytes {
            return Err(UploadError::TooLarge {
                size: upload.bytes.len(),
                max: self.max_bytes,
            });
        }
        Ok(())
    }

    /// Validates and writes an upload, returning the stored name.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload fails `check` or cannot be written.
    pub fn save(&self, upload: &ResumeUpload) -> Result<String, UploadError> {
        self.check(upload)?;
        let sanitized: String = sanitize_filename(&upload.filename)
            .ok_or(UploadError::Rejected(DomainError::MissingFileName))?;
        // Sanitizing can strip the extension off a hostile name
        validate_resume_filename(&sanitized).map_err(UploadError::Rejected)?;

        let stored_name: String = format!("{:032x}_{sanitized}", rand::random::<u128>());

        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.root.join(&stored_name), &upload.bytes)?;

        info!(
            stored_name = %stored_name,
            size = upload.bytes.len(),
            "Resume stored"
        );
        Ok(stored_name)
    }

    /// Removes a stored resume. A file that is already gone is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a plain file name or the file
    /// exists but cannot be removed.
    pub fn delete(&self, stored_name: &str) -> Result<bool, UploadError> {
        let path: PathBuf = self.path_for(stored_name)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                debug!(stored_name = %stored_name, "Resume removed");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(UploadError::Io(e)),
        }
    }

    /// Removes a stored resume, logging instead of failing.
    pub fn discard(&self, stored_name: &str) {
        if let Err(e) = self.delete(stored_name) {
            warn!(stored_name = %stored_name, error = %e, "Failed to remove resume");
        }
    }

    /// Resolves a stored name to its path inside the store.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Rejected` if the name would leave the directory.
    pub fn path_for(&self, stored_name: &str) -> Result<PathBuf, UploadError> {
        if stored_name.is_empty()
            || stored_name.contains(['/', '\\'])
            || stored_name.starts_with('.')
        {
            return Err(UploadError::Rejected(DomainError::InvalidField {
                field: "resume",
                reason: format!("'{stored_name}' is not a stored file name"),
            }));
        }
        Ok(self.root.join(stored_name))
    }
}
