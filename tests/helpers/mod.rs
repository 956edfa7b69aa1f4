pub mod factories;
pub mod factory;

pub use factory::Factory;
