// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application and job status tags.
//!
//! Reviewers may move an application between any two known statuses;
//! the only lifecycle rule enforced here is that an applicant cannot
//! withdraw once an offer or a rejection has been issued.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle state of a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Freshly submitted, awaiting review
    Submitted,
    /// At least one interview has been scheduled
    Interview,
    /// An offer has been extended
    Offer,
    /// The application was turned down
    Rejected,
    /// The applicant pulled the application
    Withdrawn,
}

impl ApplicationStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 5] = [
        Self::Submitted,
        Self::Interview,
        Self::Offer,
        Self::Rejected,
        Self::Withdrawn,
    ];

    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
        }
    }

    /// Returns the capitalized label shown to applicants.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
            Self::Withdrawn => "Withdrawn",
        }
    }

    /// Returns true if an applicant may still withdraw from this status.
    #[must_use]
    pub const fn allows_withdrawal(&self) -> bool {
        !matches!(self, Self::Offer | Self::Rejected)
    }
}

impl FromStr for ApplicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(Self::Submitted),
            "interview" => Ok(Self::Interview),
            "offer" => Ok(Self::Offer),
            "rejected" => Ok(Self::Rejected),
            "withdrawn" => Ok(Self::Withdrawn),
            other => Err(DomainError::InvalidApplicationStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Publication state of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Active,
    Closed,
    Draft,
}

impl JobStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
            Self::Draft => "draft",
        }
    }
}

impl FromStr for JobStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "closed" => Ok(Self::Closed),
            "draft" => Ok(Self::Draft),
            other => Err(DomainError::InvalidJobStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
