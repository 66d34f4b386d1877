use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "muse")]
#[command(author, version, about = "A random quote on a random accent color")]
pub struct Cli {
    /// Config file to read and save to (default: ./muse.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for reproducible quotes and colors
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print one quote and its color, then exit
    #[arg(long)]
    pub once: bool,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["muse"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.seed.is_none());
        assert!(!cli.once);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_all_flags() {
        let cli =
            Cli::try_parse_from(["muse", "-c", "alt.toml", "--seed", "7", "--once", "-vv"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert_eq!(cli.seed, Some(7));
        assert!(cli.once);
        assert_eq!(cli.verbose, 2);
    }
}
