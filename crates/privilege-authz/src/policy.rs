// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! String-encoded privilege requirements.
//!
//! A policy name has the form `Privilege:<action>:<subject>[:<qualifier>]`.
//! Names that do not follow this grammar are not privilege policies and are
//! left for other policy resolvers.

use std::fmt;

use privilege_core::HasPermission;
use serde::{Deserialize, Deserializer, Serialize};

/// Prefix that marks a policy name as a privilege requirement.
pub const POLICY_PREFIX: &str = "Privilege:";

const SEPARATOR: char = ':';

/// A privilege requirement decoded from (or encoded into) a policy name.
///
/// The qualifier is never `Some("")`; every constructor, including
/// deserialization, collapses an empty qualifier to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrivilegePolicy {
	action: String,
	subject: String,
	#[serde(
		default,
		skip_serializing_if = "Option::is_none",
		deserialize_with = "non_empty_qualifier"
	)]
	qualifier: Option<String>,
}

fn non_empty_qualifier<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let qualifier = Option::<String>::deserialize(deserializer)?;
	Ok(qualifier.filter(|q| !q.is_empty()))
}

impl PrivilegePolicy {
	pub fn new(action: impl Into<String>, subject: impl Into<String>) -> Self {
		Self {
			action: action.into(),
			subject: subject.into(),
			qualifier: None,
		}
	}

	/// Builder: set the qualifier. An empty string clears it.
	pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
		let qualifier = qualifier.into();
		self.qualifier = (!qualifier.is_empty()).then_some(qualifier);
		self
	}

	/// Decodes a policy name.
	///
	/// Returns `None` unless the name starts with [`POLICY_PREFIX`] and the
	/// remainder splits on `:` into two or three segments with a non-empty
	/// action and subject. An empty qualifier segment decodes as no qualifier;
	/// whitespace is kept verbatim.
	pub fn parse(name: &str) -> Option<Self> {
		let rest = name.strip_prefix(POLICY_PREFIX)?;
		let segments: Vec<&str> = rest.split(SEPARATOR).collect();

		let (action, subject, qualifier) = match segments.as_slice() {
			[action, subject] => (*action, *subject, None),
			[action, subject, qualifier] => (*action, *subject, Some(*qualifier)),
			_ => return None,
		};

		if action.is_empty() || subject.is_empty() {
			return None;
		}

		Some(Self {
			action: action.to_string(),
			subject: subject.to_string(),
			qualifier: qualifier.filter(|q| !q.is_empty()).map(str::to_string),
		})
	}

	/// The encoded policy name.
	pub fn name(&self) -> String {
		self.to_string()
	}

	pub fn action(&self) -> &str {
		&self.action
	}

	pub fn subject(&self) -> &str {
		&self.subject
	}

	pub fn qualifier(&self) -> Option<&str> {
		self.qualifier.as_deref()
	}

	/// Checks this requirement against anything that answers privilege queries.
	pub fn evaluate(&self, permissions: &impl HasPermission) -> bool {
		permissions.has_permission(&self.action, &self.subject, self.qualifier())
	}
}

impl fmt::Display for PrivilegePolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{POLICY_PREFIX}{}{SEPARATOR}{}", self.action, self.subject)?;
		if let Some(qualifier) = self.qualifier() {
			write!(f, "{SEPARATOR}{qualifier}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use privilege_core::PrivilegeBuilder;
	use proptest::prelude::*;

	mod encoding {
		use super::*;

		#[test]
		fn with_qualifier() {
			let policy = PrivilegePolicy::new("write", "Post").with_qualifier("title");
			assert_eq!(policy.name(), "Privilege:write:Post:title");
		}

		#[test]
		fn without_qualifier() {
			let policy = PrivilegePolicy::new("read", "User");
			assert_eq!(policy.name(), "Privilege:read:User");
		}

		#[test]
		fn empty_qualifier_collapses() {
			let policy = PrivilegePolicy::new("read", "User").with_qualifier("");
			assert_eq!(policy.qualifier(), None);
			assert_eq!(policy.name(), "Privilege:read:User");
			assert_eq!(policy, PrivilegePolicy::new("read", "User"));
		}

		#[test]
		fn deserialized_empty_qualifier_collapses() {
			let policy: PrivilegePolicy = serde_json::from_value(serde_json::json!({
				"action": "read",
				"subject": "User",
				"qualifier": "",
			}))
			.unwrap();
			assert_eq!(policy.qualifier(), None);
			assert_eq!(policy, PrivilegePolicy::new("read", "User"));

			let policy: PrivilegePolicy =
				serde_json::from_value(serde_json::json!({ "action": "read", "subject": "User" })).unwrap();
			assert_eq!(policy.qualifier(), None);
		}

		#[test]
		fn serializes_without_absent_qualifier() {
			let json = serde_json::to_value(PrivilegePolicy::new("read", "User")).unwrap();
			assert_eq!(json, serde_json::json!({ "action": "read", "subject": "User" }));

			let policy = PrivilegePolicy::new("write", "Post").with_qualifier("title");
			let back: PrivilegePolicy = serde_json::from_value(serde_json::to_value(&policy).unwrap()).unwrap();
			assert_eq!(back, policy);
		}

		#[test]
		fn whitespace_qualifier_is_kept() {
			let policy = PrivilegePolicy::new("read", "User").with_qualifier(" ");
			assert_eq!(policy.name(), "Privilege:read:User: ");
		}
	}

	mod decoding {
		use super::*;

		#[test]
		fn three_segments() {
			let policy = PrivilegePolicy::parse("Privilege:write:Post:title").unwrap();
			assert_eq!(policy, PrivilegePolicy::new("write", "Post").with_qualifier("title"));
		}

		#[test]
		fn two_segments() {
			let policy = PrivilegePolicy::parse("Privilege:read:User").unwrap();
			assert_eq!(policy.action(), "read");
			assert_eq!(policy.subject(), "User");
			assert_eq!(policy.qualifier(), None);
		}

		#[test]
		fn empty_qualifier_segment_is_absent() {
			let policy = PrivilegePolicy::parse("Privilege:read:User:").unwrap();
			assert_eq!(policy.qualifier(), None);
		}

		#[test]
		fn whitespace_qualifier_segment_is_literal() {
			let policy = PrivilegePolicy::parse("Privilege:read:User:  ").unwrap();
			assert_eq!(policy.qualifier(), Some("  "));
		}

		#[test]
		fn rejects_other_shapes() {
			for name in [
				"",
				"Privilege",
				"Privilege:",
				"Privilege:read",
				"Privilege::Post",
				"Privilege:read:",
				"Privilege:read:Post:title:extra",
				"privilege:read:Post",
				"Permission:read:Post",
				"read:Post",
			] {
				assert_eq!(PrivilegePolicy::parse(name), None, "{name:?}");
			}
		}
	}

	#[test]
	fn evaluate_against_context() {
		let context = PrivilegeBuilder::new()
			.allow_qualified("update", "Post", ["title"])
			.unwrap()
			.build();

		assert!(PrivilegePolicy::new("update", "Post").evaluate(&context));
		assert!(PrivilegePolicy::new("update", "Post")
			.with_qualifier("title")
			.evaluate(&context));
		assert!(!PrivilegePolicy::new("update", "Post")
			.with_qualifier("status")
			.evaluate(&context));
	}

	proptest! {
		#[test]
		fn encoded_names_decode_to_same_policy(
			action in "[^:]{1,12}",
			subject in "[^:]{1,12}",
			qualifier in proptest::option::of("[^:]{0,12}"),
		) {
			let mut policy = PrivilegePolicy::new(action, subject);
			if let Some(qualifier) = qualifier {
				policy = policy.with_qualifier(qualifier);
			}

			prop_assert_eq!(PrivilegePolicy::parse(&policy.name()), Some(policy));
		}

		#[test]
		fn names_without_prefix_are_not_policies(name in "[a-zA-Z:]{0,24}") {
			prop_assume!(!name.starts_with(POLICY_PREFIX));
			prop_assert_eq!(PrivilegePolicy::parse(&name), None);
		}
	}
}
