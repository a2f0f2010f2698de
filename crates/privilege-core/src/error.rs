// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for privilege rule construction.

use thiserror::Error;

/// Result type for privilege operations.
pub type Result<T> = std::result::Result<T, PrivilegeError>;

/// Errors raised while assembling a privilege context.
///
/// Queries never fail: malformed or unmatched queries resolve to "not allowed".
/// Only builder misuse and configuration parsing produce these errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrivilegeError {
	#[error("rule action must not be empty")]
	EmptyAction,

	#[error("rule subject must not be empty")]
	EmptySubject,

	/// Qualifier list contains an empty entry.
	#[error("rule qualifier must not be empty")]
	EmptyQualifier,

	#[error("alias name must not be empty")]
	EmptyAliasName,

	/// Alias declared without any value.
	#[error("alias `{0}` must have at least one value")]
	EmptyAliasValues(String),

	/// Alias value list contains an empty entry.
	#[error("alias `{0}` must not contain an empty value")]
	EmptyAliasValue(String),

	/// Unknown string comparer name in configuration.
	#[error("invalid comparer: {0}")]
	InvalidComparer(String),
}
