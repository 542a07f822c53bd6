//! The dock: launcher buttons for the panels plus one restore button per
//! minimized window.

use crate::state::Command;
use crate::windows::{WindowId, WindowKind, WindowManager};

pub const SEARCH_TITLE: &str = "Sözlük";
pub const THEMES_TITLE: &str = "Temalar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LauncherItem {
    pub kind: WindowKind,
    pub label: &'static str,
}

pub const LAUNCHER: [LauncherItem; 2] = [
    LauncherItem {
        kind: WindowKind::Search,
        label: "Ara",
    },
    LauncherItem {
        kind: WindowKind::Themes,
        label: "Temalar",
    },
];

/// Restore button for a minimized window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockEntry {
    pub id: WindowId,
    pub title: String,
}

impl DockEntry {
    pub fn restore_command(&self) -> Command {
        Command::Restore {
            id: self.id.clone(),
        }
    }
}

/// Minimized windows in creation order.
pub fn minimized_entries<P>(windows: &WindowManager<P>) -> Vec<DockEntry> {
    windows
        .minimized()
        .map(|w| DockEntry {
            id: w.id.clone(),
            title: w.title.clone(),
        })
        .collect()
}

/// Command issued by a launcher click. Word windows have no launcher.
pub fn launch_command(kind: WindowKind) -> Option<Command> {
    let title = match kind {
        WindowKind::Search => SEARCH_TITLE,
        WindowKind::Themes => THEMES_TITLE,
        WindowKind::Word => return None,
    };
    Some(Command::Open {
        title: title.to_string(),
        kind,
        payload: None,
    })
}
