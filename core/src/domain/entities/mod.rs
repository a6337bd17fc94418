//! Domain entities flowing through the check pipeline.

pub mod check_verify_request;
pub mod check_verify_result;
pub mod function_event;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use check_verify_request::CheckVerifyRequest;
pub use check_verify_result::CheckVerifyResult;
pub use function_event::FunctionEvent;
