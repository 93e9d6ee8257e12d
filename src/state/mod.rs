/* src/state/mod.rs */

mod presence;
mod render;
mod shared;

pub use presence::Presence;
pub use render::{RenderState, Slot, ViewState};

pub(crate) use shared::StateCell;
