// Application layer - Use cases, store, validation, and the persistence port
pub mod tracker_service;
pub mod validation;
pub mod workout_repository;
pub mod workout_store;
