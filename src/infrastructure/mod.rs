// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod network_service;
pub mod remote_tracking_repository;
pub mod tracking_dto;
