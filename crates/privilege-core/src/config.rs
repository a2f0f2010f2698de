// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for building privilege contexts.

use crate::comparer::Comparer;
use crate::error::Result;

/// Environment variable selecting the string comparer
/// (`ordinal` or `ordinal_ignore_case`).
pub const COMPARER_ENV_VAR: &str = "PRIVILEGE_COMPARER";

/// Settings applied to every context built from this configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrivilegeConfig {
	/// Comparer used for every subject, action, qualifier and alias comparison.
	pub comparer: Comparer,
}

impl PrivilegeConfig {
	/// Create a new PrivilegeConfig with default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create PrivilegeConfig from environment variables.
	///
	/// Reads `PRIVILEGE_COMPARER`; when unset the case-insensitive default is used.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Create PrivilegeConfig from an arbitrary key lookup.
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let comparer = match lookup(COMPARER_ENV_VAR) {
			Some(value) if !value.trim().is_empty() => value.parse()?,
			_ => Comparer::default(),
		};

		Ok(Self { comparer })
	}

	/// Set the comparer.
	pub fn with_comparer(mut self, comparer: Comparer) -> Self {
		self.comparer = comparer;
		self
	}
}
