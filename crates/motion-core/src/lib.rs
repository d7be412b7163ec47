//! Frame-synchronized scalar broadcast for decorative visual layers.
//!
//! Scroll and pointer input land in two coalescing stores; the
//! [`MotionOrchestrator`] commits them once per animation frame and
//! broadcasts named events to every registered subscriber. Nothing here
//! touches platform APIs; the web front-end plugs in through
//! [`ListenerHost`].

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod host;
pub mod mouse;
pub mod orchestrator;
pub mod registry;
pub mod scroll;
pub mod state;

pub use clock::*;
pub use config::*;
pub use error::MotionError;
pub use frame::*;
pub use host::*;
pub use mouse::*;
pub use orchestrator::*;
pub use registry::{MotionCallback, Registry};
pub use scroll::*;
pub use state::*;
