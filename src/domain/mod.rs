pub mod error;
pub mod form;
pub mod models;
pub mod repositories;
pub mod services;
pub mod validation;
