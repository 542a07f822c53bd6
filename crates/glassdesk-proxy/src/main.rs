use std::path::PathBuf;
use std::sync::Arc;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::error;

use glassdesk_core::{config, events, init_logging};
use glassdesk_proxy::{ProxyState, api_key_from_env, serve};

fn build_cli() -> Command {
    Command::new("glassdesk-proxy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Proxy dictionary lookups and wallpaper generation for glassdesk")
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("bind")
                .long("bind")
                .help("Interface to bind (overrides config, default: 0.0.0.0)"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .short('p')
                .help("Port to listen on (overrides config, default: 3000)")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("public-dir")
                .long("public-dir")
                .help("Directory for generated and static files (overrides config)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn apply_overrides(proxy: &mut config::ProxyConfig, matches: &ArgMatches) {
    if let Some(bind) = matches.get_one::<String>("bind") {
        proxy.bind = Some(bind.clone());
    }
    if let Some(port) = matches.get_one::<u16>("port") {
        proxy.port = Some(*port);
    }
    if let Some(dir) = matches.get_one::<PathBuf>("public-dir") {
        proxy.public_dir = Some(dir.clone());
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = build_cli().get_matches();

    let quiet = matches.get_flag("quiet");
    init_logging(quiet);

    let mut config = match config::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            error!(event = "proxy.config.load_failed", error = %e);
            return Err(e.into());
        }
    };
    apply_overrides(&mut config.proxy, &matches);

    events::log_app_startup();

    let state = Arc::new(ProxyState::new(config.proxy, api_key_from_env())?);
    if let Err(e) = serve(state).await {
        events::log_app_error(&e);
        return Err(e.into());
    }

    Ok(())
}
