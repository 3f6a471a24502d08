//! Command-line configuration.

use crate::Terminal;
use crate::Variant;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Rock-Paper-Scissors variants against the computer", long_about = None)]
pub struct Args {
    #[arg(short, long, value_enum, help = "Bundled ruleset to play")]
    pub variant: Option<Variant>,
    #[arg(short, long, conflicts_with = "variant", help = "Custom rules file, one `<strong> <verb> <weak>,` entry per line")]
    pub rules: Option<PathBuf>,
    #[arg(short, long, help = "Seed the computer's picks for a reproducible session")]
    pub seed: Option<u64>,
    #[arg(long, help = "Print the derived registry and outcome table as JSON, then exit")]
    pub dump: bool,
    #[arg(long, help = "Log flag assignment and table construction")]
    pub verbose: bool,
}

impl Args {
    /// Rules text for this session, asking for a variant if none was given.
    pub fn rules(&self, terminal: &Terminal) -> anyhow::Result<String> {
        match (&self.rules, self.variant) {
            (Some(path), _) => std::fs::read_to_string(path)
                .with_context(|| format!("read rules file {}", path.display())),
            (None, Some(variant)) => Ok(variant.rules().to_string()),
            (None, None) => {
                let variants = Variant::all();
                let i = terminal.menu("Choose a game", &variants)?;
                Ok(variants[i].rules().to_string())
            }
        }
    }
    pub fn terminal(&self) -> Terminal {
        match self.seed {
            Some(seed) => Terminal::seeded(seed),
            None => Terminal::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_variant() {
        let args = Args::try_parse_from(["rockpaper", "--variant", "rps-5", "--seed", "9"]).unwrap();
        assert_eq!(args.variant, Some(Variant::Rps5));
        assert_eq!(args.seed, Some(9));
        assert!(!args.dump);
    }

    #[test]
    fn bundled_rules_skip_the_menu() {
        let args = Args::try_parse_from(["rockpaper", "-v", "rps-7"]).unwrap();
        let text = args.rules(&args.terminal()).unwrap();
        assert_eq!(text, Variant::Rps7.rules());
    }

    #[test]
    fn variant_and_file_conflict() {
        assert!(Args::try_parse_from(["rockpaper", "-v", "rps-3", "-r", "rules.txt"]).is_err());
    }

    #[test]
    fn unknown_variant_rejected() {
        assert!(Args::try_parse_from(["rockpaper", "--variant", "rps-101"]).is_err());
    }

    #[test]
    fn missing_rules_file() {
        let args = Args::try_parse_from(["rockpaper", "-r", "/nonexistent/rules.txt"]).unwrap();
        let error = args.rules(&args.terminal()).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/rules.txt"));
    }
}
