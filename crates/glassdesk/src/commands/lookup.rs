use std::time::Instant;

use clap::ArgMatches;
use tracing::{error, info};

use glassdesk_core::{Desktop, DesktopStore, LookupError, Payload};

use super::helpers::{load_config_with_warning, proxy_url};
use crate::client::ProxyClient;
use crate::word_card;

pub(crate) fn handle_lookup_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let word = matches
        .get_one::<String>("word")
        .ok_or("Word argument is required")?;
    let json_output = matches.get_flag("json");
    let config = load_config_with_warning();
    let proxy_url = proxy_url(matches, &config);

    info!(
        event = "cli.lookup_started",
        word = %word,
        proxy = proxy_url,
        json_output = json_output
    );

    let store = DesktopStore::new(config.windows.window_defaults());
    let mut desktop = Desktop::new(store, config.desktop.theme(), Instant::now());

    let Some(query) = desktop.begin_search(word) else {
        let e = LookupError::EmptyQuery;
        eprintln!("{}", e.user_message());
        error!(event = "cli.lookup_failed", word = %word, error = %e);
        return Err(e.into());
    };

    let client = ProxyClient::new(proxy_url, config.proxy.request_timeout())?;
    let shown = desktop.finish_search(client.lookup(&query));

    let Some(window_id) = shown else {
        let message = desktop
            .last_error()
            .unwrap_or("Bir hata oluştu.")
            .to_string();
        eprintln!("{}", message);
        error!(event = "cli.lookup_failed", word = %query, error = %message);
        return Err(message.into());
    };

    let entry = desktop
        .store()
        .window(&window_id)
        .and_then(|w| w.payload.as_ref())
        .and_then(Payload::entry)
        .ok_or("Search window has no entry")?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(entry)?);
    } else {
        print!("{}", word_card::render(entry, desktop.is_favorite(&entry.headword)));
    }

    info!(
        event = "cli.lookup_completed",
        word = %query,
        headword = %entry.headword,
        meanings = entry.meanings.len()
    );

    Ok(())
}
