use clap::ArgMatches;
use tracing::{error, info};

use super::helpers::{load_config_with_warning, proxy_url};
use crate::client::{ProxyClient, WallpaperOutcome};

pub(crate) fn handle_wallpaper_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let proxy_url = proxy_url(matches, &config);

    info!(event = "cli.wallpaper_started", proxy = proxy_url);
    println!("Triggering wallpaper generation...");

    let client = ProxyClient::new(proxy_url, config.proxy.request_timeout())?;
    match client.generate_wallpaper() {
        Ok(WallpaperOutcome::Saved { path }) => {
            println!("✅ Wallpaper generated");
            println!("   {}{}", client.base_url(), path);
            info!(event = "cli.wallpaper_completed", path = %path);
            Ok(())
        }
        Ok(WallpaperOutcome::Failed { status, body }) => {
            eprintln!("❌ Failed: {} {}", status, body);
            error!(event = "cli.wallpaper_failed", status = status, body = %body);
            Err(format!("Wallpaper generation failed with status {}", status).into())
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            error!(event = "cli.wallpaper_failed", error = %e);
            Err(e)
        }
    }
}
