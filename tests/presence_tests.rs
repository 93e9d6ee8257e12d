/* tests/presence_tests.rs */

use std::collections::HashMap;
use std::sync::Arc;

use suspense::{Presence, RenderState};

struct Widget;

impl Presence for Widget {}

#[test]
fn test_default_is_present() {
	assert!(Widget.is_present());
	assert!(Arc::new(Widget).is_present());
	assert!(Box::new(Widget).is_present());
}

#[test]
fn test_absent_values() {
	assert!(!Option::<u32>::None.is_present());
	assert!(!Vec::<u32>::new().is_present());
	assert!(!String::new().is_present());
	assert!(!"".is_present());
	assert!(!HashMap::<u32, u32>::new().is_present());
	assert!(!0u32.is_present());
	assert!(!0i64.is_present());
	assert!(!false.is_present());
}

#[test]
fn test_present_values() {
	assert!(Some(0u32).is_present());
	assert!(vec![1].is_present());
	assert!("x".is_present());
	assert!(42u32.is_present());
	assert!((-1i32).is_present());
	assert!(true.is_present());
}

#[test]
fn test_render_state_accessors() {
	let pending = RenderState::<u32, String>::Pending;
	assert!(pending.is_pending());
	assert_eq!(pending.value(), None);
	assert_eq!(pending.error(), None);

	let resolved = RenderState::<u32, String>::Resolved(Arc::new(5));
	assert!(resolved.is_resolved());
	assert_eq!(resolved.value(), Some(&5));
	assert_eq!(resolved.clone().value(), Some(&5));

	let failed = RenderState::<u32, String>::Failed(Arc::new("e".to_string()));
	assert!(failed.is_failed());
	assert_eq!(failed.error(), Some(&"e".to_string()));
}
