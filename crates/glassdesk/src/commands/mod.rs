use clap::ArgMatches;
use tracing::error;

use glassdesk_core::events;

mod helpers;

mod completions;
mod lookup;
mod replay;
mod wallpaper;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("lookup", sub_matches)) => lookup::handle_lookup_command(sub_matches),
        Some(("wallpaper", sub_matches)) => wallpaper::handle_wallpaper_command(sub_matches),
        Some(("replay", sub_matches)) => replay::handle_replay_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
