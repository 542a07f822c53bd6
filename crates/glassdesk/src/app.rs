use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("glassdesk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Look up words, generate wallpapers and replay window scripts for glassdesk")
        .long_about("glassdesk is a glass-themed desktop shell with floating windows over a dictionary. This CLI drives the same shell logic from the terminal: it looks words up through the glassdesk proxy, triggers lock screen wallpaper generation and replays window command scripts against the window manager.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("lookup")
                .about("Look up a word in the dictionary")
                .arg(
                    Arg::new("word")
                        .help("Word to look up")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output the entry as JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("proxy")
                        .long("proxy")
                        .help("Proxy base URL (overrides config, default: http://localhost:3000)"),
                ),
        )
        .subcommand(
            Command::new("wallpaper")
                .about("Generate a new lock screen wallpaper through the proxy")
                .arg(
                    Arg::new("proxy")
                        .long("proxy")
                        .help("Proxy base URL (overrides config, default: http://localhost:3000)"),
                ),
        )
        .subcommand(
            Command::new("replay")
                .about("Replay a JSON list of window commands and print the resulting windows")
                .arg(
                    Arg::new("file")
                        .help("Path to a JSON array of commands")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output the final window state as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion script")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(Shell)),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "glassdesk");
    }

    #[test]
    fn test_cli_lookup_command() {
        let matches = build_cli()
            .try_get_matches_from(vec!["glassdesk", "lookup", "kalem", "--json"])
            .unwrap();
        let lookup = matches.subcommand_matches("lookup").unwrap();
        assert_eq!(lookup.get_one::<String>("word").unwrap(), "kalem");
        assert!(lookup.get_flag("json"));
        assert!(lookup.get_one::<String>("proxy").is_none());
    }

    #[test]
    fn test_cli_lookup_requires_word() {
        let result = build_cli().try_get_matches_from(vec!["glassdesk", "lookup"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_wallpaper_proxy_override() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "glassdesk",
                "wallpaper",
                "--proxy",
                "http://127.0.0.1:8080",
            ])
            .unwrap();
        let wallpaper = matches.subcommand_matches("wallpaper").unwrap();
        assert_eq!(
            wallpaper.get_one::<String>("proxy").unwrap(),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn test_cli_replay_command() {
        let matches = build_cli()
            .try_get_matches_from(vec!["glassdesk", "-v", "replay", "script.json"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
        let replay = matches.subcommand_matches("replay").unwrap();
        assert_eq!(
            replay.get_one::<PathBuf>("file").unwrap(),
            &PathBuf::from("script.json")
        );
        assert!(!replay.get_flag("json"));
    }

    #[test]
    fn test_cli_verbose_is_global() {
        let matches = build_cli()
            .try_get_matches_from(vec!["glassdesk", "replay", "script.json", "--verbose"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_completions_rejects_unknown_shell() {
        let result =
            build_cli().try_get_matches_from(vec!["glassdesk", "completions", "cmd.exe"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let result = build_cli().try_get_matches_from(vec!["glassdesk"]);
        assert!(result.is_err());
    }
}
