// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Declarative privilege evaluation.
//!
//! This crate decides whether an (action, subject, qualifier) triple is
//! permitted by an ordered list of allow/deny rules:
//!
//! - [`PrivilegeBuilder`] assembles rules and aliases once, at setup time
//! - [`PrivilegeContext`] is the immutable result, safe to share across threads
//! - [`PrivilegeContext::allowed`] applies last-match-wins precedence and
//!   denies by default
//!
//! The crate performs no I/O. Contexts for a particular user or session are
//! produced by the caller (see `privilege-authz` for the async provider seam).
//!
//! # Example
//!
//! ```
//! use privilege_core::{PrivilegeBuilder, ALL_SUBJECTS};
//!
//! # fn main() -> privilege_core::Result<()> {
//! let context = PrivilegeBuilder::new()
//! 	.allow("read", ALL_SUBJECTS)?
//! 	.allow_qualified("update", "Post", ["title", "content"])?
//! 	.build();
//!
//! assert!(context.allowed("read", "Comment", None));
//! assert!(context.allowed("update", "Post", Some("title")));
//! assert!(!context.allowed("update", "Post", Some("status")));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod comparer;
pub mod config;
pub mod context;
pub mod error;
pub mod matcher;
pub mod permission;
pub mod types;

pub use builder::PrivilegeBuilder;
pub use comparer::Comparer;
pub use config::{PrivilegeConfig, COMPARER_ENV_VAR};
pub use context::PrivilegeContext;
pub use error::{PrivilegeError, Result};
pub use permission::HasPermission;
pub use types::{PrivilegeAlias, PrivilegeRule, PrivilegeScope, ALL_ACTIONS, ALL_SUBJECTS};
