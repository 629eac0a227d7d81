//! Storage ports

pub mod ports;

pub use ports::SaleRepository;
