//! Unit tests for the check verify service
