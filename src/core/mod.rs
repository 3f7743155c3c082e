pub mod form;
pub mod generation;
pub mod message;
pub mod providers;
pub mod share;
