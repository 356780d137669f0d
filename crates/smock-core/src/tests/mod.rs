/*! Test coverage for the snapshot model.
 *
 * Front ends hand snapshots over as JSON, so the wire shape matters as much as the Rust types.
 * These tests pin the deserialized structure, the registry lookups and the builder defaults.
 */

mod builder_tests;
