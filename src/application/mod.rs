/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the domain services and reaches GitLab, Maven,
/// the disk and the report only through ports.
pub mod dto;
pub mod use_cases;
