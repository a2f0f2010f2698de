// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Privilege evaluation against an immutable rule set.
//!
//! Evaluation is last-match-wins:
//!
//! 1. **Match**: collect every rule whose subject, action and qualifier match
//!    the query, in declaration order
//! 2. **Decide**: the last matching rule decides; a deny rule yields `false`,
//!    an allow rule yields `true`
//! 3. **Default deny**: no match, or an empty action/subject, yields `false`
//!
//! A context never changes after it is built, so it can be shared across
//! threads behind an `Arc` without locking.

use tracing::{debug, instrument, trace};

use crate::comparer::Comparer;
use crate::matcher::{rule_matches, SubjectIndex};
use crate::types::{PrivilegeAlias, PrivilegeRule};

/// An immutable set of privilege rules and aliases with its query API.
#[derive(Debug, Clone, Default)]
pub struct PrivilegeContext {
	rules: Box<[PrivilegeRule]>,
	aliases: Box<[PrivilegeAlias]>,
	comparer: Comparer,
	index: SubjectIndex,
}

impl PrivilegeContext {
	pub(crate) fn new(
		rules: Box<[PrivilegeRule]>,
		aliases: Box<[PrivilegeAlias]>,
		comparer: Comparer,
	) -> Self {
		let index = SubjectIndex::build(&rules, &aliases, comparer);
		Self {
			rules,
			aliases,
			comparer,
			index,
		}
	}

	/// A context without rules; every query is denied.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Rules in declaration (precedence) order.
	pub fn rules(&self) -> &[PrivilegeRule] {
		&self.rules
	}

	pub fn aliases(&self) -> &[PrivilegeAlias] {
		&self.aliases
	}

	pub fn comparer(&self) -> Comparer {
		self.comparer
	}

	/// Returns true if the context holds no rules.
	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Evaluates whether `action` on `subject` (optionally narrowed to
	/// `qualifier`) is allowed.
	///
	/// Returns `false` when `action` or `subject` is empty or when no rule
	/// matches. A `None` or empty qualifier matches every rule regardless of
	/// the rule's own qualifier restriction.
	#[instrument(
		level = "debug",
		skip(self),
		fields(rules = self.rules.len())
	)]
	pub fn allowed(&self, action: &str, subject: &str, qualifier: Option<&str>) -> bool {
		match self.deciding(action, subject, qualifier) {
			Some((position, rule)) => {
				let allowed = !rule.is_denied();
				debug!(position, denied = rule.is_denied(), allowed, "privilege decided by rule");
				allowed
			}
			None => {
				debug!(allowed = false, "no privilege rule matched");
				false
			}
		}
	}

	/// Logical negation of [`allowed`](Self::allowed).
	pub fn forbidden(&self, action: &str, subject: &str, qualifier: Option<&str>) -> bool {
		!self.allowed(action, subject, qualifier)
	}

	/// Every rule matching the query, in declaration order.
	///
	/// Empty when `action` or `subject` is empty.
	pub fn match_rules(&self, action: &str, subject: &str, qualifier: Option<&str>) -> Vec<&PrivilegeRule> {
		self
			.candidates(action, subject)
			.into_iter()
			.map(|position| &self.rules[position])
			.filter(|rule| self.is_match(rule, action, subject, qualifier))
			.collect()
	}

	/// The rule that decides the query: the last matching rule, if any.
	pub fn decision(&self, action: &str, subject: &str, qualifier: Option<&str>) -> Option<&PrivilegeRule> {
		self
			.deciding(action, subject, qualifier)
			.map(|(_, rule)| rule)
	}

	fn deciding(&self, action: &str, subject: &str, qualifier: Option<&str>) -> Option<(usize, &PrivilegeRule)> {
		let candidates = self.candidates(action, subject);
		trace!(candidates = candidates.len(), "scanning privilege rule candidates");

		candidates
			.into_iter()
			.rev()
			.map(|position| (position, &self.rules[position]))
			.find(|(_, rule)| self.is_match(rule, action, subject, qualifier))
	}

	/// Positions of rules whose subject may match, ascending.
	fn candidates(&self, action: &str, subject: &str) -> Vec<usize> {
		if action.is_empty() || subject.is_empty() {
			return Vec::new();
		}
		self.index.candidates(subject, self.comparer)
	}

	fn is_match(&self, rule: &PrivilegeRule, action: &str, subject: &str, qualifier: Option<&str>) -> bool {
		rule_matches(rule, action, subject, qualifier, &self.aliases, self.comparer)
	}
}
