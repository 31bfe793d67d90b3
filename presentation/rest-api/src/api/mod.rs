pub mod error;
pub mod health;
pub mod product;
pub mod stats;
pub mod tags;
