use crate::guid::{Guid, Keyed};
use crate::raw::RawLink;

/// A connection from one port to another.
#[derive(Clone, Debug)]
pub struct Link {
    pub guid: Guid,
    /// Guid of the source port.
    pub src: Guid,
    /// Guid of the destination port.
    pub dst: Guid,
}

impl Link {
    pub fn from_raw(raw: &RawLink) -> Self {
        Self {
            guid: Guid::new(raw.guid.as_str()),
            src: Guid::new(raw.src.port.as_str()),
            dst: Guid::new(raw.dst.port.as_str()),
        }
    }
}

impl Keyed for Link {
    fn key(&self) -> &Guid {
        &self.guid
    }
}
