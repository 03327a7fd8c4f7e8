//! Integration tests - Full translation through the registry, catalog and builder
//!
//! These tests verify that components work together against a YAML field catalog.

mod registry_dispatch_tests;
