pub mod client;

pub use client::PacedClient;
