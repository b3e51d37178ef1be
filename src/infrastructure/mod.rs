//! Infrastructure layer: concrete registry implementation and DTOs.

pub mod dto;
pub mod repository;
