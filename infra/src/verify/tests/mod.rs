//! Unit tests for verification providers

mod mock_verify_tests;
mod twilio_verify_tests;
