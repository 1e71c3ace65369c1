// Application layer - Use cases
pub mod dashboard_service;
pub mod operations_repository;
