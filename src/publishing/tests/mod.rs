//! Unit tests for the publishing context.

mod domain_tests;
