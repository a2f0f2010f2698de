// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization of policy-named privilege requirements.
//!
//! ```text
//! policy name → PrivilegePolicy::parse ─┬─ None → NotRecognized
//!                                       └─ Some → provider.get_context(principal)
//!                                                   ├── None    → Failed
//!                                                   └── Some(c) → c.allowed(..) → Succeeded / Failed
//! ```

use std::marker::PhantomData;

use http::StatusCode;
use privilege_core::PrivilegeContext;
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::policy::PrivilegePolicy;
use crate::provider::ContextProvider;

/// Reason reported for every failed privilege requirement.
pub const PRIVILEGE_FAILURE_MESSAGE: &str = "privilege requirement not satisfied";

/// Result of authorizing a policy name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationOutcome {
	Succeeded,
	Failed { reason: &'static str },
	/// The policy name is not a privilege policy; another resolver should handle it.
	NotRecognized,
}

impl AuthorizationOutcome {
	fn failed() -> Self {
		Self::Failed {
			reason: PRIVILEGE_FAILURE_MESSAGE,
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(self, Self::Succeeded)
	}

	/// HTTP status to reject the request with, if it must be rejected.
	pub fn rejection_status(&self) -> Option<StatusCode> {
		match self {
			Self::Failed { .. } => Some(StatusCode::FORBIDDEN),
			Self::Succeeded | Self::NotRecognized => None,
		}
	}
}

/// Evaluates a requirement against an optional context. A missing context fails.
pub fn evaluate_policy(context: Option<&PrivilegeContext>, policy: &PrivilegePolicy) -> AuthorizationOutcome {
	match context {
		Some(context) if policy.evaluate(context) => AuthorizationOutcome::Succeeded,
		_ => AuthorizationOutcome::failed(),
	}
}

/// Resolves a principal's context through a [`ContextProvider`] and checks
/// privilege requirements against it.
pub struct PrivilegeAuthorizer<C, P: ?Sized> {
	provider: C,
	_principal: PhantomData<fn(&P)>,
}

impl<C, P> PrivilegeAuthorizer<C, P>
where
	C: ContextProvider<P>,
	P: ?Sized + Sync,
{
	pub fn new(provider: C) -> Self {
		Self {
			provider,
			_principal: PhantomData,
		}
	}

	pub fn provider(&self) -> &C {
		&self.provider
	}

	/// Authorizes a policy name for `principal`.
	///
	/// Names outside the privilege grammar yield
	/// [`AuthorizationOutcome::NotRecognized`] without consulting the provider.
	#[instrument(level = "debug", skip(self, principal))]
	pub async fn authorize(&self, principal: &P, policy_name: &str) -> Result<AuthorizationOutcome> {
		let Some(policy) = PrivilegePolicy::parse(policy_name) else {
			debug!("policy name is not a privilege requirement");
			return Ok(AuthorizationOutcome::NotRecognized);
		};

		self.authorize_policy(principal, &policy).await
	}

	/// Authorizes an already decoded requirement for `principal`.
	///
	/// Provider errors propagate; a missing context fails the requirement.
	pub async fn authorize_policy(&self, principal: &P, policy: &PrivilegePolicy) -> Result<AuthorizationOutcome> {
		let context = self.provider.get_context(principal).await?;
		if context.is_none() {
			warn!(policy = %policy, "no privilege context for principal");
		}

		let outcome = evaluate_policy(context.as_deref(), policy);
		debug!(policy = %policy, success = outcome.is_success(), "privilege requirement evaluated");
		Ok(outcome)
	}
}

impl<C: Clone, P: ?Sized> Clone for PrivilegeAuthorizer<C, P> {
	fn clone(&self) -> Self {
		Self {
			provider: self.provider.clone(),
			_principal: PhantomData,
		}
	}
}

impl<C: std::fmt::Debug, P: ?Sized> std::fmt::Debug for PrivilegeAuthorizer<C, P> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PrivilegeAuthorizer")
			.field("provider", &self.provider)
			.finish()
	}
}
