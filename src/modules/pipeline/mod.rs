pub mod dto;
pub mod error;
pub mod events;
pub mod service;
pub mod stage;
pub mod state;
