/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that classifies inputs
/// and coordinates with infrastructure through ports.
pub mod dto;
pub mod use_cases;
