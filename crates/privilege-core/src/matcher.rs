// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-dimension rule matching and the build-time subject index.
//!
//! A rule matches a query when its subject, action and qualifier all match.
//! Alias expansion is a single level: an alias value is never looked up as
//! another alias name.

use std::collections::HashMap;

use crate::comparer::Comparer;
use crate::types::{PrivilegeAlias, PrivilegeRule, PrivilegeScope, ALL_ACTIONS, ALL_SUBJECTS};

/// Matches a rule value (literal, wildcard or alias name) against a requested value.
fn value_matches(
	rule_value: &str,
	requested: &str,
	wildcard: &str,
	scope: PrivilegeScope,
	aliases: &[PrivilegeAlias],
	comparer: Comparer,
) -> bool {
	comparer.equals(rule_value, requested)
		|| comparer.equals(rule_value, wildcard)
		|| expands_to(rule_value, requested, scope, aliases, comparer)
}

fn expands_to(
	name: &str,
	requested: &str,
	scope: PrivilegeScope,
	aliases: &[PrivilegeAlias],
	comparer: Comparer,
) -> bool {
	aliases
		.iter()
		.any(|alias| alias.is_named(scope, name, comparer) && alias.contains(requested, comparer))
}

pub fn subject_matches(
	rule: &PrivilegeRule,
	subject: &str,
	aliases: &[PrivilegeAlias],
	comparer: Comparer,
) -> bool {
	value_matches(
		rule.subject(),
		subject,
		ALL_SUBJECTS,
		PrivilegeScope::Subject,
		aliases,
		comparer,
	)
}

pub fn action_matches(
	rule: &PrivilegeRule,
	action: &str,
	aliases: &[PrivilegeAlias],
	comparer: Comparer,
) -> bool {
	value_matches(
		rule.action(),
		action,
		ALL_ACTIONS,
		PrivilegeScope::Action,
		aliases,
		comparer,
	)
}

/// Qualifier scoping is opt-in: a query without a qualifier, or a rule without
/// qualifiers, always matches on this dimension.
pub fn qualifier_matches(
	rule: &PrivilegeRule,
	qualifier: Option<&str>,
	aliases: &[PrivilegeAlias],
	comparer: Comparer,
) -> bool {
	let Some(qualifier) = qualifier.filter(|q| !q.is_empty()) else {
		return true;
	};

	if rule.is_unqualified() {
		return true;
	}

	rule.qualifiers().iter().any(|entry| {
		comparer.equals(entry, qualifier)
			|| expands_to(entry, qualifier, PrivilegeScope::Qualifier, aliases, comparer)
	})
}

/// Returns true if `rule` matches on all three dimensions.
pub fn rule_matches(
	rule: &PrivilegeRule,
	action: &str,
	subject: &str,
	qualifier: Option<&str>,
	aliases: &[PrivilegeAlias],
	comparer: Comparer,
) -> bool {
	subject_matches(rule, subject, aliases, comparer)
		&& action_matches(rule, action, aliases, comparer)
		&& qualifier_matches(rule, qualifier, aliases, comparer)
}

/// Rule positions grouped by the normalized subjects each rule can match.
///
/// Wildcard-subject rules live in their own bucket. Both buckets hold rule
/// positions in ascending order, so a merged lookup preserves declaration order.
#[derive(Debug, Clone, Default)]
pub(crate) struct SubjectIndex {
	buckets: HashMap<String, Vec<usize>>,
	wildcard: Vec<usize>,
}

impl SubjectIndex {
	pub(crate) fn build(
		rules: &[PrivilegeRule],
		aliases: &[PrivilegeAlias],
		comparer: Comparer,
	) -> Self {
		let mut index = Self::default();

		for (position, rule) in rules.iter().enumerate() {
			if comparer.equals(rule.subject(), ALL_SUBJECTS) {
				index.wildcard.push(position);
				continue;
			}

			let mut keys = vec![comparer.normalize(rule.subject()).into_owned()];
			for alias in aliases
				.iter()
				.filter(|alias| alias.is_named(PrivilegeScope::Subject, rule.subject(), comparer))
			{
				keys.extend(
					alias
						.values()
						.iter()
						.map(|value| comparer.normalize(value).into_owned()),
				);
			}
			keys.sort_unstable();
			keys.dedup();

			for key in keys {
				index.buckets.entry(key).or_default().push(position);
			}
		}

		index
	}

	/// Positions of every rule whose subject can match `subject`, ascending.
	pub(crate) fn candidates(&self, subject: &str, comparer: Comparer) -> Vec<usize> {
		let exact = self
			.buckets
			.get(comparer.normalize(subject).as_ref())
			.map(Vec::as_slice)
			.unwrap_or_default();

		merge_ascending(exact, &self.wildcard)
	}
}

fn merge_ascending(left: &[usize], right: &[usize]) -> Vec<usize> {
	let mut merged = Vec::with_capacity(left.len() + right.len());
	let (mut i, mut j) = (0, 0);
	while i < left.len() && j < right.len() {
		if left[i] <= right[j] {
			merged.push(left[i]);
			i += 1;
		} else {
			merged.push(right[j]);
			j += 1;
		}
	}
	merged.extend_from_slice(&left[i..]);
	merged.extend_from_slice(&right[j..]);
	merged
}
