pub mod account;
pub mod crop;
pub mod dashboard;
pub mod farmer;
pub mod form;
