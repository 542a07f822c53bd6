use std::path::{Path, PathBuf};

use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use glassdesk_core::{Command, DesktopStore, Payload, Store, WindowId, WindowRecord};

use super::helpers::load_config_with_warning;
use crate::table::WindowTableFormatter;

#[derive(Serialize)]
struct ReplayOutput<'a> {
    active_id: Option<&'a WindowId>,
    windows: &'a [WindowRecord<Payload>],
}

pub(crate) fn handle_replay_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = matches
        .get_one::<PathBuf>("file")
        .ok_or("File argument is required")?;
    let json_output = matches.get_flag("json");

    info!(event = "cli.replay_started", path = %path.display());

    let commands = match read_script(path) {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("❌ Could not read script '{}': {}", path.display(), e);
            error!(event = "cli.replay_failed", path = %path.display(), error = %e);
            return Err(e);
        }
    };

    let config = load_config_with_warning();
    let mut store = DesktopStore::with_sequential_ids(config.windows.window_defaults());

    let mut event_count = 0;
    for cmd in &commands {
        event_count += store.dispatch(cmd.clone())?.len();
    }

    let windows = store.windows();
    if json_output {
        let output = ReplayOutput {
            active_id: windows.active_id(),
            windows: windows.windows(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if windows.is_empty() {
        println!("No windows open.");
    } else {
        let formatter = WindowTableFormatter::new(windows.windows());
        formatter.print_table(windows.windows(), windows.active_id());
    }

    info!(
        event = "cli.replay_completed",
        commands = commands.len(),
        events = event_count,
        windows = windows.len()
    );

    Ok(())
}

fn read_script(path: &Path) -> Result<Vec<Command>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let commands = serde_json::from_str(&content)?;
    Ok(commands)
}
