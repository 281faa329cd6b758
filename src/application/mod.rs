// Application layer - Use cases over the domain model
pub mod analysis_service;
pub mod catalog_service;
pub mod chart_builder;
pub mod dataset_repository;
pub mod export_builder;
