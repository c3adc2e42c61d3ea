//! Engine gateway: what the driver needs from the Acquire rules engine.
//!
//! The driver never reproduces game rules. Board adjacency, stock prices,
//! merge resolution and the tile deck all live behind [`Engine`]; the driver
//! only translates wire actions into these calls and reads the results back.

pub mod gateway;
pub mod types;

pub use gateway::{Engine, EngineFactory};
pub use types::{Cell, CorporationStats, EngineError, ShareAmounts};
