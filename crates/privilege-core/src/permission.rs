// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Minimal capability consumed by code that only needs a yes/no answer
//! (request guards, presentation toggles).

use std::sync::Arc;

use crate::context::PrivilegeContext;

/// Something that can answer a privilege check.
pub trait HasPermission {
	fn has_permission(&self, action: &str, subject: &str, qualifier: Option<&str>) -> bool;

	fn lacks_permission(&self, action: &str, subject: &str, qualifier: Option<&str>) -> bool {
		!self.has_permission(action, subject, qualifier)
	}
}

impl HasPermission for PrivilegeContext {
	fn has_permission(&self, action: &str, subject: &str, qualifier: Option<&str>) -> bool {
		self.allowed(action, subject, qualifier)
	}
}

impl<T: HasPermission + ?Sized> HasPermission for &T {
	fn has_permission(&self, action: &str, subject: &str, qualifier: Option<&str>) -> bool {
		(**self).has_permission(action, subject, qualifier)
	}
}

impl<T: HasPermission + ?Sized> HasPermission for Arc<T> {
	fn has_permission(&self, action: &str, subject: &str, qualifier: Option<&str>) -> bool {
		(**self).has_permission(action, subject, qualifier)
	}
}

/// A context that has not been resolved yet denies everything.
impl<T: HasPermission> HasPermission for Option<T> {
	fn has_permission(&self, action: &str, subject: &str, qualifier: Option<&str>) -> bool {
		self
			.as_ref()
			.is_some_and(|inner| inner.has_permission(action, subject, qualifier))
	}
}
