use glassdesk_core::init_logging;

mod app;
mod client;
mod commands;
mod table;
mod word_card;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Logging stays at error level unless --verbose is given
    let quiet = !matches.get_flag("verbose");
    init_logging(quiet);

    commands::run_command(&matches)?;

    Ok(())
}
