// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! Every function takes a `SqliteConnection` and converts stored rows into
//! domain values. A stored tag that no longer parses surfaces as
//! `PersistenceError::CorruptRecord`.

pub mod applications;
pub mod interviews;
pub mod jobs;
pub mod notifications;
pub mod sessions;
pub mod users;
