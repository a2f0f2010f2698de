// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Asynchronous supply of privilege contexts.
//!
//! A provider is asked once per logical session (or request) for the context
//! belonging to a principal, typically loading that principal's rules from
//! storage and building them with [`PrivilegeBuilder`](privilege_core::PrivilegeBuilder).
//! The context it returns is immutable; fresh rules require a fresh context.

use std::sync::Arc;

use async_trait::async_trait;
use privilege_core::PrivilegeContext;

use crate::error::Result;

/// Resolves the privilege context for a principal.
#[async_trait]
pub trait ContextProvider<P: ?Sized + Sync>: Send + Sync {
	/// Returns the principal's context, or `None` when the principal has none
	/// (which authorizes nothing).
	async fn get_context(&self, principal: &P) -> Result<Option<Arc<PrivilegeContext>>>;
}

#[async_trait]
impl<P, T> ContextProvider<P> for Arc<T>
where
	P: ?Sized + Sync,
	T: ContextProvider<P> + ?Sized,
{
	async fn get_context(&self, principal: &P) -> Result<Option<Arc<PrivilegeContext>>> {
		(**self).get_context(principal).await
	}
}

/// Hands the same context (or none) to every principal.
#[derive(Debug, Clone, Default)]
pub struct StaticContextProvider {
	context: Option<Arc<PrivilegeContext>>,
}

impl StaticContextProvider {
	pub fn new(context: PrivilegeContext) -> Self {
		Self {
			context: Some(Arc::new(context)),
		}
	}

	pub fn shared(context: Arc<PrivilegeContext>) -> Self {
		Self {
			context: Some(context),
		}
	}

	/// A provider that never has a context.
	pub fn none() -> Self {
		Self::default()
	}
}

#[async_trait]
impl<P: ?Sized + Sync> ContextProvider<P> for StaticContextProvider {
	async fn get_context(&self, _principal: &P) -> Result<Option<Arc<PrivilegeContext>>> {
		Ok(self.context.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use privilege_core::PrivilegeBuilder;

	#[tokio::test]
	async fn static_provider_shares_one_context() {
		let context = Arc::new(PrivilegeBuilder::new().allow("read", "Post").unwrap().build());
		let provider = StaticContextProvider::shared(Arc::clone(&context));

		let first = provider.get_context("alice").await.unwrap().unwrap();
		let second = provider.get_context("bob").await.unwrap().unwrap();

		assert!(Arc::ptr_eq(&first, &context));
		assert!(Arc::ptr_eq(&second, &context));
	}

	#[tokio::test]
	async fn empty_provider_has_no_context() {
		let provider = StaticContextProvider::none();
		assert!(provider.get_context("alice").await.unwrap().is_none());
	}

	#[test]
	fn arc_provider_delegates() {
		let provider: Arc<dyn ContextProvider<str>> =
			Arc::new(StaticContextProvider::new(PrivilegeContext::empty()));

		let context = tokio_test::block_on(provider.get_context("alice")).unwrap();
		assert!(context.is_some_and(|c| c.is_empty()));
	}
}
