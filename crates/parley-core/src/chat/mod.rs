//! Channel registry, message log, and chat service.

pub mod log;
pub mod registry;
pub mod service;

pub use log::MessageLog;
pub use registry::ChannelRegistry;
pub use service::ChatService;
