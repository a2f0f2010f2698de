// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Type definitions for privilege evaluation.
//!
//! - [`PrivilegeRule`]: one allow or deny declaration over (action, subject, qualifiers)
//! - [`PrivilegeAlias`]: a symbolic name standing for a group of concrete values
//! - [`PrivilegeScope`]: which rule dimension an alias expands
//!
//! Rules and aliases are immutable once created by the
//! [`PrivilegeBuilder`](crate::PrivilegeBuilder); all types serialize to JSON
//! so decisions can be logged and audited.

use serde::{Deserialize, Serialize};

use crate::comparer::Comparer;

/// Reserved subject that matches every requested subject.
pub const ALL_SUBJECTS: &str = "*";

/// Reserved action that matches every requested action.
pub const ALL_ACTIONS: &str = "*";

/// The rule dimension an alias applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivilegeScope {
	Subject,
	Action,
	Qualifier,
}

/// A single allow or deny declaration.
///
/// An empty qualifier list means the rule applies to every qualifier,
/// including queries that carry no qualifier at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivilegeRule {
	action: String,
	subject: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	qualifiers: Vec<String>,
	#[serde(default)]
	denied: bool,
}

impl PrivilegeRule {
	pub(crate) fn new(action: String, subject: String, qualifiers: Vec<String>, denied: bool) -> Self {
		Self {
			action,
			subject,
			qualifiers,
			denied,
		}
	}

	pub fn action(&self) -> &str {
		&self.action
	}

	pub fn subject(&self) -> &str {
		&self.subject
	}

	/// Qualifiers this rule is restricted to, in declaration order.
	pub fn qualifiers(&self) -> &[String] {
		&self.qualifiers
	}

	/// Returns true for a deny (`forbid`) rule.
	pub fn is_denied(&self) -> bool {
		self.denied
	}

	/// Returns true if the rule carries no qualifier restriction.
	pub fn is_unqualified(&self) -> bool {
		self.qualifiers.is_empty()
	}

	/// Copy of this rule with its qualifier set de-duplicated under `comparer`.
	pub(crate) fn deduplicated(&self, comparer: Comparer) -> Self {
		Self {
			qualifiers: ordered_set(&self.qualifiers, comparer),
			..self.clone()
		}
	}
}

/// A named group of values usable in place of a literal subject, action or
/// qualifier entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivilegeAlias {
	name: String,
	scope: PrivilegeScope,
	values: Vec<String>,
}

impl PrivilegeAlias {
	pub(crate) fn new(name: String, scope: PrivilegeScope, values: Vec<String>) -> Self {
		Self {
			name,
			scope,
			values,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn scope(&self) -> PrivilegeScope {
		self.scope
	}

	pub fn values(&self) -> &[String] {
		&self.values
	}

	/// Returns true if this alias, in `scope`, is named `name`.
	pub fn is_named(&self, scope: PrivilegeScope, name: &str, comparer: Comparer) -> bool {
		self.scope == scope && comparer.equals(&self.name, name)
	}

	/// Returns true if `value` is one of the alias values.
	pub fn contains(&self, value: &str, comparer: Comparer) -> bool {
		comparer.contains(&self.values, value)
	}

	/// Copy of this alias with its values de-duplicated under `comparer`.
	pub(crate) fn deduplicated(&self, comparer: Comparer) -> Self {
		Self {
			values: ordered_set(&self.values, comparer),
			..self.clone()
		}
	}
}

/// Returns `values` without entries that equal an earlier entry under
/// `comparer`, keeping first-seen order.
pub(crate) fn ordered_set(values: &[String], comparer: Comparer) -> Vec<String> {
	let mut set: Vec<String> = Vec::with_capacity(values.len());
	for value in values {
		if !comparer.contains(&set, value) {
			set.push(value.clone());
		}
	}
	set
}
