/// Application layer - Use cases, services and DTOs
///
/// This layer orchestrates the resolution rules and reaches the file
/// system and console only through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod services;
pub mod use_cases;
