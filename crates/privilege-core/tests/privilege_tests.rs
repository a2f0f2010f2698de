// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;
use std::thread;

use privilege_core::{
	Comparer, HasPermission, PrivilegeBuilder, PrivilegeConfig, PrivilegeContext, PrivilegeError,
	PrivilegeScope, ALL_ACTIONS, ALL_SUBJECTS,
};

fn blog_context() -> PrivilegeContext {
	PrivilegeBuilder::new()
		.alias("Crud", ["create", "read", "update", "delete"], PrivilegeScope::Action)
		.unwrap()
		.alias("Content", ["Post", "Comment"], PrivilegeScope::Subject)
		.unwrap()
		.alias("Editable", ["title", "content"], PrivilegeScope::Qualifier)
		.unwrap()
		.allow("read", ALL_SUBJECTS)
		.unwrap()
		.allow_qualified("update", "Content", ["Editable"])
		.unwrap()
		.allow("Crud", "Comment")
		.unwrap()
		.forbid("delete", "Content")
		.unwrap()
		.build()
}

#[test]
fn blog_scenario() {
	let context = blog_context();

	assert!(context.allowed("read", "User", None));
	assert!(context.allowed("update", "Post", Some("title")));
	assert!(!context.allowed("update", "Post", Some("status")));
	assert!(context.allowed("update", "Post", None));
	assert!(context.allowed("create", "comment", None));
	assert!(!context.allowed("delete", "Comment", None));
	assert!(!context.allowed("delete", "Post", None));
	assert!(!context.allowed("create", "Post", None));
}

#[test]
fn match_rules_lists_every_match() {
	let context = blog_context();
	let matched = context.match_rules("delete", "Comment", None);

	assert_eq!(matched.len(), 2);
	assert_eq!(matched[0].action(), "Crud");
	assert!(!matched[0].is_denied());
	assert_eq!(matched[1].action(), "delete");
	assert!(matched[1].is_denied());
}

#[test]
fn reversing_declaration_order_flips_decision() {
	let allow_then_forbid = PrivilegeBuilder::new()
		.allow("read", "Post")
		.unwrap()
		.forbid("read", "Post")
		.unwrap()
		.build();
	let forbid_then_allow = PrivilegeBuilder::new()
		.forbid("read", "Post")
		.unwrap()
		.allow("read", "Post")
		.unwrap()
		.build();

	assert!(!allow_then_forbid.allowed("read", "Post", None));
	assert!(forbid_then_allow.allowed("read", "Post", None));
}

#[test]
fn builder_misuse_is_reported() {
	let mut builder = PrivilegeBuilder::new();
	assert_eq!(builder.allow("", "Post").unwrap_err(), PrivilegeError::EmptyAction);
	assert_eq!(builder.forbid("read", "").unwrap_err(), PrivilegeError::EmptySubject);
	assert_eq!(
		builder
			.alias("", ["x"], PrivilegeScope::Subject)
			.unwrap_err(),
		PrivilegeError::EmptyAliasName
	);
}

#[test]
fn configured_comparer_is_applied() {
	let config = PrivilegeConfig::from_lookup(|_| Some("ordinal".to_string())).unwrap();
	let context = PrivilegeBuilder::from_config(&config)
		.allow(ALL_ACTIONS, "Post")
		.unwrap()
		.build();

	assert_eq!(context.comparer(), Comparer::Ordinal);
	assert!(context.allowed("publish", "Post", None));
	assert!(!context.allowed("publish", "post", None));
}

#[test]
fn shared_context_answers_concurrently() {
	let context = Arc::new(blog_context());

	let handles: Vec<_> = (0..8)
		.map(|i| {
			let context = Arc::clone(&context);
			thread::spawn(move || {
				let qualifier = if i % 2 == 0 { "title" } else { "status" };
				(i, context.has_permission("update", "Post", Some(qualifier)))
			})
		})
		.collect();

	for handle in handles {
		let (i, allowed) = handle.join().unwrap();
		assert_eq!(allowed, i % 2 == 0);
	}
}
