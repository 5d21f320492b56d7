use clap::{Parser, Subcommand, ValueEnum};
use notedeck::model::ViewingMode;
use std::path::PathBuf;

/// "0.3.2" for releases, "0.3.2@abc1234 2024-01-15" for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("NOTEDECK_GIT_HASH");
    const GIT_DATE: &str = env!("NOTEDECK_GIT_DATE");
    const IS_RELEASE: &str = env!("NOTEDECK_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// A random note each time
    Random,
    /// Every note in name order, then start over
    Sequential,
}

impl From<ModeArg> for ViewingMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Random => ViewingMode::Random,
            ModeArg::Sequential => ViewingMode::Sequential,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "notedeck", bin_name = "notedeck", version = get_version())]
#[command(about = "Shuffle through a folder of plain-text notes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the notes notedeck would show from a folder
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Folder containing the notes
        folder: PathBuf,
    },

    /// Print one or more notes and exit
    #[command(alias = "s", display_order = 2)]
    Show {
        /// Folder containing the notes
        folder: PathBuf,

        /// Viewing mode (defaults to the configured mode)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Number of notes to print (1-1000)
        #[arg(
            short = 'n',
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=1000)
        )]
        count: u32,

        /// Seed for repeatable random picks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Browse notes interactively (asks for a folder if none is given)
    #[command(alias = "b", display_order = 3)]
    Browse {
        /// Folder containing the notes
        folder: Option<PathBuf>,

        /// Viewing mode (defaults to the configured mode)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Get or set configuration
    #[command(display_order = 4)]
    Config {
        /// Configuration key (extensions, max-lines, max-chars, mode)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_options() {
        let cli = Cli::parse_from([
            "notedeck", "show", "/notes", "-m", "sequential", "-n", "3", "--seed", "9",
        ]);
        match cli.command {
            Some(Commands::Show {
                folder,
                mode,
                count,
                seed,
            }) => {
                assert_eq!(folder, PathBuf::from("/notes"));
                assert_eq!(mode, Some(ModeArg::Sequential));
                assert_eq!(count, 3);
                assert_eq!(seed, Some(9));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn count_is_bounded() {
        for bad in ["0", "1001", "18446744073709551615", "-3"] {
            assert!(
                Cli::try_parse_from(["notedeck", "show", "/notes", "-n", bad]).is_err(),
                "accepted -n {}",
                bad
            );
        }
        assert!(Cli::try_parse_from(["notedeck", "show", "/notes", "-n", "1000"]).is_ok());
    }

    #[test]
    fn browse_folder_is_optional() {
        let cli = Cli::parse_from(["notedeck", "browse"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Browse { folder: None, mode: None })
        ));
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::parse_from(["notedeck", "ls", "/notes", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn mode_arg_maps_to_viewing_mode() {
        assert_eq!(ViewingMode::from(ModeArg::Random), ViewingMode::Random);
        assert_eq!(ViewingMode::from(ModeArg::Sequential), ViewingMode::Sequential);
    }
}
