//! Custom test assertions
//!
//! Provides domain-specific assertions for testing delivery-rs results.

use delivery_rs::{ErrorKind, Result};
use std::fmt::Debug;

/// Assert that a result failed with the given error kind
#[track_caller]
pub fn assert_error_kind<T: Debug>(result: Result<T>, expected: ErrorKind) {
    match result {
        Ok(value) => panic!("Expected {:?} error, got Ok({:?})", expected, value),
        Err(error) => assert_eq!(
            error.kind(),
            expected,
            "Unexpected error kind for: {}",
            error
        ),
    }
}
