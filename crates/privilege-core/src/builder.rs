// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Accumulates rules and aliases at setup time and snapshots them into an
//! immutable [`PrivilegeContext`].

use tracing::debug;

use crate::comparer::Comparer;
use crate::config::PrivilegeConfig;
use crate::context::PrivilegeContext;
use crate::error::{PrivilegeError, Result};
use crate::types::{PrivilegeAlias, PrivilegeRule, PrivilegeScope};

/// Mutable, single-owner accumulator of privilege rules and aliases.
///
/// Declaration order is precedence order: when several rules match a query,
/// the one added last decides.
///
/// # Example
///
/// ```
/// use privilege_core::{PrivilegeBuilder, PrivilegeScope};
///
/// # fn main() -> privilege_core::Result<()> {
/// let context = PrivilegeBuilder::new()
/// 	.alias("Crud", ["create", "read", "update", "delete"], PrivilegeScope::Action)?
/// 	.allow("Crud", "Post")?
/// 	.forbid("delete", "Post")?
/// 	.build();
///
/// assert!(context.allowed("read", "Post", None));
/// assert!(!context.allowed("delete", "Post", None));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrivilegeBuilder {
	rules: Vec<PrivilegeRule>,
	aliases: Vec<PrivilegeAlias>,
	comparer: Comparer,
}

impl PrivilegeBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_config(config: &PrivilegeConfig) -> Self {
		Self {
			comparer: config.comparer,
			..Self::default()
		}
	}

	/// Sets the comparer used by the built context.
	///
	/// Qualifier and alias value lists are kept verbatim until [`build`](Self::build),
	/// so the comparer applies uniformly whenever it is set.
	pub fn comparer(&mut self, comparer: Comparer) -> &mut Self {
		self.comparer = comparer;
		self
	}

	/// Allows `action` on `subject` for every qualifier.
	pub fn allow(&mut self, action: &str, subject: &str) -> Result<&mut Self> {
		self.push_rule(action, subject, None::<[&str; 0]>, false)
	}

	/// Allows `action` on `subject` restricted to `qualifiers`.
	///
	/// An empty qualifier list is equivalent to [`allow`](Self::allow); an
	/// empty qualifier entry is rejected.
	pub fn allow_qualified<I, S>(&mut self, action: &str, subject: &str, qualifiers: I) -> Result<&mut Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.push_rule(action, subject, Some(qualifiers), false)
	}

	/// Denies `action` on `subject` for every qualifier.
	pub fn forbid(&mut self, action: &str, subject: &str) -> Result<&mut Self> {
		self.push_rule(action, subject, None::<[&str; 0]>, true)
	}

	/// Denies `action` on `subject` restricted to `qualifiers`.
	pub fn forbid_qualified<I, S>(&mut self, action: &str, subject: &str, qualifiers: I) -> Result<&mut Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.push_rule(action, subject, Some(qualifiers), true)
	}

	/// Declares `name` as standing for `values` wherever it appears in the
	/// `scope` dimension of a rule.
	pub fn alias<I, S>(&mut self, name: &str, values: I, scope: PrivilegeScope) -> Result<&mut Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		if name.is_empty() {
			return Err(PrivilegeError::EmptyAliasName);
		}

		let values: Vec<String> = values.into_iter().map(|v| v.as_ref().to_string()).collect();
		if values.is_empty() {
			return Err(PrivilegeError::EmptyAliasValues(name.to_string()));
		}
		if values.iter().any(String::is_empty) {
			return Err(PrivilegeError::EmptyAliasValue(name.to_string()));
		}

		self
			.aliases
			.push(PrivilegeAlias::new(name.to_string(), scope, values));
		Ok(self)
	}

	/// Snapshots the accumulated rules and aliases into an immutable context.
	///
	/// Qualifier and alias value lists are de-duplicated here with the final
	/// comparer. The builder stays usable; later changes do not affect
	/// contexts already built.
	pub fn build(&self) -> PrivilegeContext {
		debug!(
			rules = self.rules.len(),
			aliases = self.aliases.len(),
			comparer = %self.comparer,
			"building privilege context"
		);

		let rules = self
			.rules
			.iter()
			.map(|rule| rule.deduplicated(self.comparer))
			.collect();
		let aliases = self
			.aliases
			.iter()
			.map(|alias| alias.deduplicated(self.comparer))
			.collect();

		PrivilegeContext::new(rules, aliases, self.comparer)
	}

	fn push_rule<I, S>(
		&mut self,
		action: &str,
		subject: &str,
		qualifiers: Option<I>,
		denied: bool,
	) -> Result<&mut Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		if action.is_empty() {
			return Err(PrivilegeError::EmptyAction);
		}
		if subject.is_empty() {
			return Err(PrivilegeError::EmptySubject);
		}

		let qualifiers: Vec<String> = qualifiers
			.into_iter()
			.flatten()
			.map(|q| q.as_ref().to_string())
			.collect();
		if qualifiers.iter().any(String::is_empty) {
			return Err(PrivilegeError::EmptyQualifier);
		}

		self.rules.push(PrivilegeRule::new(
			action.to_string(),
			subject.to_string(),
			qualifiers,
			denied,
		));
		Ok(self)
	}
}
