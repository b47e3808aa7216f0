pub mod states;
pub mod boundary;
pub mod driver;
pub mod engine;
pub mod scenario;
