// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for privilege authorization.

use privilege_core::PrivilegeError;
use thiserror::Error;

/// Result type for authorization operations.
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Errors surfaced while resolving a context for authorization.
///
/// A denied check is not an error; it is reported as
/// [`AuthorizationOutcome::Failed`](crate::AuthorizationOutcome::Failed).
#[derive(Debug, Error)]
pub enum AuthzError {
	/// The context provider could not produce a context.
	#[error("context provider failed: {0}")]
	Provider(String),

	/// The provider failed while assembling rules.
	#[error(transparent)]
	Privilege(#[from] PrivilegeError),
}
