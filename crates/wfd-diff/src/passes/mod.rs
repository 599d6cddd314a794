//! The built-in comparer passes.

pub mod block_edits;
pub mod block_presence;
pub mod link_presence;
pub mod port_edits;
pub mod port_presence;

pub use block_edits::BlockEdits;
pub use block_presence::BlockPresence;
pub use link_presence::LinkPresence;
pub use port_edits::PortEdits;
pub use port_presence::PortPresence;
