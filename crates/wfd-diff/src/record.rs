//! Typed difference records.
//!
//! Every record carries the path of the block it concerns and renders to a
//! single human-readable line.

use std::fmt;

use serde::Serialize;
use wfd_types::{BlockSettings, Position};

/// Rendering of a description that is not set.
const ABSENT: &str = "None";

/// Flag values render capitalized in report lines.
fn flag_text(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Report section a record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BlockDeleted,
    BlockAdded,
    BlockEdited,
    LinkDeleted,
    LinkAdded,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 5] = [
        Category::BlockDeleted,
        Category::BlockAdded,
        Category::BlockEdited,
        Category::LinkDeleted,
        Category::LinkAdded,
    ];

    /// Section header text.
    pub fn header(self) -> &'static str {
        match self {
            Self::BlockDeleted => "Blocks have been deleted",
            Self::BlockAdded => "Blocks have been added",
            Self::BlockEdited => "Blocks have been edited",
            Self::LinkDeleted => "Links have been deleted",
            Self::LinkAdded => "Links have been added",
        }
    }

    /// Whether records of this section are ordered by block path.
    pub fn sorted_by_path(self) -> bool {
        !matches!(self, Self::BlockDeleted | Self::BlockAdded)
    }
}

/// One of the three boolean port flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PortFlag {
    /// Parameter.
    P,
    /// Batch.
    B,
    /// History enabled.
    R,
}

impl fmt::Display for PortFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::P => "P",
            Self::B => "B",
            Self::R => "R",
        };
        f.write_str(letter)
    }
}

/// Both ends of a link, resolved to block paths and port titles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkEnds {
    pub src_path: String,
    pub src_port: String,
    pub dst_path: String,
    pub dst_port: String,
}

impl fmt::Display for LinkEnds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}  ->  {}, {}",
            self.src_path, self.src_port, self.dst_path, self.dst_port
        )
    }
}

/// A single difference between two workflow snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffRecord {
    BlockAdded {
        path: String,
    },
    BlockDeleted {
        path: String,
    },
    NameChanged {
        path: String,
        new_name: String,
    },
    DescriptionChanged {
        path: String,
        old: Option<String>,
        new: Option<String>,
    },
    Moved {
        path: String,
        position: Position,
    },
    SettingsChanged {
        path: String,
        settings: BlockSettings,
    },
    PortAdded {
        path: String,
        port: String,
    },
    PortDeleted {
        path: String,
        port: String,
    },
    PortRenamed {
        path: String,
        port: String,
        new_name: String,
    },
    PortFlagChanged {
        path: String,
        port: String,
        flag: PortFlag,
        value: bool,
    },
    LinkAdded(LinkEnds),
    LinkDeleted(LinkEnds),
}

impl DiffRecord {
    /// Path of the block the record concerns; the source block for links.
    pub fn block_path(&self) -> &str {
        match self {
            Self::BlockAdded { path }
            | Self::BlockDeleted { path }
            | Self::NameChanged { path, .. }
            | Self::DescriptionChanged { path, .. }
            | Self::Moved { path, .. }
            | Self::SettingsChanged { path, .. }
            | Self::PortAdded { path, .. }
            | Self::PortDeleted { path, .. }
            | Self::PortRenamed { path, .. }
            | Self::PortFlagChanged { path, .. } => path,
            Self::LinkAdded(ends) | Self::LinkDeleted(ends) => &ends.src_path,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::BlockAdded { .. } => Category::BlockAdded,
            Self::BlockDeleted { .. } => Category::BlockDeleted,
            Self::LinkAdded(_) => Category::LinkAdded,
            Self::LinkDeleted(_) => Category::LinkDeleted,
            _ => Category::BlockEdited,
        }
    }
}

impl fmt::Display for DiffRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockAdded { path } | Self::BlockDeleted { path } => f.write_str(path),
            Self::NameChanged { path, new_name } => {
                write!(f, "{path}: The name has been changed to \"{new_name}\"")
            }
            Self::DescriptionChanged { path, old, new } => write!(
                f,
                "{path}: The description has been changed from \"{}\" to \"{}\"",
                old.as_deref().unwrap_or(ABSENT),
                new.as_deref().unwrap_or(ABSENT)
            ),
            Self::Moved { path, position } => write!(f, "{path}: Has been moved to {position}"),
            Self::SettingsChanged { path, settings } => {
                write!(f, "{path}: Settings have been changed to {}", settings.title())
            }
            Self::PortAdded { path, port } => write!(f, "{path}: Port {port} has been added"),
            Self::PortDeleted { path, port } => write!(f, "{path}: Port {port} has been deleted"),
            Self::PortRenamed {
                path,
                port,
                new_name,
            } => write!(f, "{path}: Port {port} has been renamed to \"{new_name}\""),
            Self::PortFlagChanged {
                path,
                port,
                flag,
                value,
            } => write!(
                f,
                "{path}: Port {port} - flag \"{flag}\" has been changed to \"{}\"",
                flag_text(*value)
            ),
            Self::LinkAdded(ends) | Self::LinkDeleted(ends) => fmt::Display::fmt(ends, f),
        }
    }
}
