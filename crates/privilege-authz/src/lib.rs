// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization adapter for `privilege-core`.
//!
//! This crate provides:
//! - [`PrivilegePolicy`] - the `Privilege:<action>:<subject>[:<qualifier>]`
//!   policy-name grammar
//! - [`ContextProvider`] - asynchronous, per-session supply of an immutable
//!   [`PrivilegeContext`](privilege_core::PrivilegeContext)
//! - [`PrivilegeAuthorizer`] - resolves a principal's context and maps the
//!   privilege decision to an [`AuthorizationOutcome`]
//!
//! The privilege engine itself stays synchronous; only context acquisition is async.

pub mod authorizer;
pub mod error;
pub mod policy;
pub mod provider;

pub use authorizer::{
	evaluate_policy, AuthorizationOutcome, PrivilegeAuthorizer, PRIVILEGE_FAILURE_MESSAGE,
};
pub use error::{AuthzError, Result};
pub use policy::{PrivilegePolicy, POLICY_PREFIX};
pub use provider::{ContextProvider, StaticContextProvider};
