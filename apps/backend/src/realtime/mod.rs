//! Outbound session events and the channel that carries them.

pub mod hub;
pub mod protocol;

pub use hub::{Broadcaster, ChannelHub, NullBroadcaster};
pub use protocol::{ClientMsg, SessionEvent};
