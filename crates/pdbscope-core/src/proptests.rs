//! Property-based tests for identifier parsing and summary extraction.
