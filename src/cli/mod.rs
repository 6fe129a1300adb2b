use std::path::PathBuf;

use url::Url;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Spin the wheel, guess the phrase.")]
pub struct Cli {
    /// Config file. Defaults to `WORDWHEEL_CONFIG_FILE`, then ./wordwheel.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed the random source for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug, Clone, Default, PartialEq, Eq)]
pub enum Command {
    /// Solve one phrase, paying for each letter with a spin
    #[default]
    Classic,

    /// Race the clock through a pool of questions
    Quiz {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        minutes: Option<u32>,

        /// CSV sheet with a `phrase,level,points` header
        #[arg(long)]
        source: Option<Url>,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }
}

/// A line typed during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Spin,
    Clue,
    Skip,
    New,
    Quit,
}

impl Input {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let mut chars = line.chars();

        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return ch.is_ascii_alphabetic().then_some(Self::Letter(ch));
        }

        match line.to_ascii_lowercase().as_str() {
            "spin" => Some(Self::Spin),
            "clue" | "hint" => Some(Self::Clue),
            "skip" => Some(Self::Skip),
            "new" | "again" => Some(Self::New),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, Input};
    use clap::Parser;
    use paste::paste;
    use pretty_assertions::assert_eq;

    macro_rules! inputs {
        ($($name:ident: $line:literal => $expected:expr;)+) => {
            paste! {
                $(
                    #[test]
                    fn [<input_ $name>]() {
                        assert_eq!(Input::parse($line), $expected);
                    }
                )+
            }
        };
    }

    inputs! {
        letter: "e" => Some(Input::Letter('e'));
        padded_letter: "  Q \n" => Some(Input::Letter('Q'));
        digit: "7" => None;
        spin: "spin" => Some(Input::Spin);
        shouting: "SPIN" => Some(Input::Spin);
        clue: "clue" => Some(Input::Clue);
        skip: "skip" => Some(Input::Skip);
        new: "new" => Some(Input::New);
        quit: "quit" => Some(Input::Quit);
        blank: "" => None;
        unknown: "solve it" => None;
    }

    #[test]
    fn classic_by_default() {
        let cli = Cli::parse_from(["wordwheel"]);

        assert_eq!(cli.command(), Command::Classic);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn quiz_arguments() {
        let cli = Cli::parse_from([
            "wordwheel",
            "--seed",
            "42",
            "quiz",
            "--name",
            "Ana",
            "--minutes",
            "2",
        ]);

        assert_eq!(cli.seed, Some(42));
        assert_eq!(
            cli.command(),
            Command::Quiz {
                name: Some("Ana".to_owned()),
                minutes: Some(2),
                source: None,
            }
        );
    }
}
