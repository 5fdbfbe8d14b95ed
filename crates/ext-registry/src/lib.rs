//! Registration containers for the extension system.
//!
//! Both containers keep items in the exact order they were registered.
//! Neither one validates or reorders anything: [`Registry`] is the snapshot
//! source consumed by the ordering engine in `ext-order`, and
//! [`PluginManager`] is the bare variant whose only contract is replaying
//! plugins in registration order.

pub mod plugins;
pub mod registry;

pub use plugins::PluginManager;
pub use registry::Registry;
