// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! String comparison policy applied to every subject, action, qualifier and
//! alias comparison inside a [`PrivilegeContext`](crate::PrivilegeContext).

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PrivilegeError;

/// How two privilege strings are compared.
///
/// For both variants `equals(a, b)` holds exactly when
/// `normalize(a) == normalize(b)`, which lets the context pre-index rules by
/// their normalized subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparer {
	/// Exact, case-sensitive comparison.
	Ordinal,
	/// Case-insensitive comparison using per-character lowercase folding.
	#[default]
	OrdinalIgnoreCase,
}

impl Comparer {
	/// Returns true if the two values are equal under this comparer.
	pub fn equals(self, left: &str, right: &str) -> bool {
		match self {
			Comparer::Ordinal => left == right,
			Comparer::OrdinalIgnoreCase => left == right || fold(left).eq(fold(right)),
		}
	}

	/// Returns the canonical form of `value` used as a lookup key.
	pub fn normalize(self, value: &str) -> Cow<'_, str> {
		match self {
			Comparer::Ordinal => Cow::Borrowed(value),
			Comparer::OrdinalIgnoreCase => {
				if fold(value).eq(value.chars()) {
					Cow::Borrowed(value)
				} else {
					Cow::Owned(fold(value).collect())
				}
			}
		}
	}

	/// Returns true if any entry of `values` equals `needle`.
	pub fn contains<S: AsRef<str>>(self, values: &[S], needle: &str) -> bool {
		values.iter().any(|value| self.equals(value.as_ref(), needle))
	}

	/// Name used in configuration.
	pub fn as_str(self) -> &'static str {
		match self {
			Comparer::Ordinal => "ordinal",
			Comparer::OrdinalIgnoreCase => "ordinal_ignore_case",
		}
	}
}

fn fold(value: &str) -> impl Iterator<Item = char> + '_ {
	value.chars().flat_map(char::to_lowercase)
}

impl FromStr for Comparer {
	type Err = PrivilegeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"ordinal" | "case_sensitive" => Ok(Comparer::Ordinal),
			"ordinal_ignore_case" | "case_insensitive" => Ok(Comparer::OrdinalIgnoreCase),
			_ => Err(PrivilegeError::InvalidComparer(s.to_string())),
		}
	}
}

impl std::fmt::Display for Comparer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
