use std::{
    ops::RangeInclusive,
    path::{Path, PathBuf},
    time::Duration,
};

use ::config::{Environment, File, FileFormat, Source};
use serde::Deserialize;
use tracing::{debug, instrument, trace};
use url::Url;

use crate::{
    game::{quiz::QuizRules, Rules},
    wheel::{self, Wedge, Wheel, DEFAULT_VALUES},
};

pub const DEFAULT_CONFIG_FILE: &str = "./wordwheel.toml";
pub const CONFIG_FILE_VAR: &str = "WORDWHEEL_CONFIG_FILE";
pub const DEFAULT_LOG_FILTER: &str = "wordwheel=info";

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("file read error: {0}")]
    #[event(level = ERROR)]
    Read(::config::ConfigError),

    #[error("parsing error: {0}")]
    #[event(level = ERROR)]
    Parse(::config::ConfigError),

    #[error("invalid config: {0}")]
    #[event(level = ERROR)]
    Invalid(&'static str),
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub game: Rules,
    #[serde(default)]
    pub wheel: WheelConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

/// Where to read the config from: the flag if given, then
/// `WORDWHEEL_CONFIG_FILE`, then `./wordwheel.toml`.
pub fn config_file(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(CONFIG_FILE_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

fn environment() -> Environment {
    Environment::with_prefix("WORDWHEEL").separator("__")
}

impl Config {
    /// Loads `path` if it exists, then applies `WORDWHEEL__SECTION__KEY`
    /// overrides from the environment.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, Error> {
        trace!("loading config");

        Self::build(
            File::from(path).format(FileFormat::Toml).required(false),
            environment(),
        )
    }

    pub fn from_toml(text: &str) -> Result<Self, Error> {
        Self::build(File::from_str(text, FileFormat::Toml), environment())
    }

    fn build<S>(file: S, env: Environment) -> Result<Self, Error>
    where
        S: Source + Send + Sync + 'static,
    {
        let config: Self = ::config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)?;

        config.validate()?;
        debug!(?config, "config loaded");

        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.game.max_wrong_guesses == 0 {
            return Err(Error::Invalid("game.max_wrong_guesses must be at least 1"));
        }

        if self.wheel.values.is_empty() {
            return Err(Error::Invalid("wheel.values must not be empty"));
        }

        if self.wheel.rotations().is_empty() {
            return Err(Error::Invalid(
                "wheel.min_rotations must not exceed wheel.max_rotations",
            ));
        }

        if self.quiz.wheel_size == 0 {
            return Err(Error::Invalid("quiz.wheel_size must be at least 1"));
        }

        Ok(())
    }

    pub fn quiz_rules(&self) -> QuizRules {
        QuizRules {
            wrong_guess_penalty: self.quiz.wrong_guess_penalty,
            clue_cost: self.quiz.clue_cost,
            max_clues: self.quiz.max_clues,
            wheel_size: self.quiz.wheel_size,
            minutes: self.quiz.minutes,
            rotations: self.wheel.rotations(),
            settle_delay: self.wheel.settle_delay(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WheelConfig {
    /// Wedge values, clockwise from the top. 0 is bankrupt.
    pub values: Vec<u32>,
    pub min_rotations: u32,
    pub max_rotations: u32,
    pub settle_ms: u64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            values: DEFAULT_VALUES.to_vec(),
            min_rotations: *wheel::DEFAULT_ROTATIONS.start(),
            max_rotations: *wheel::DEFAULT_ROTATIONS.end(),
            settle_ms: wheel::DEFAULT_SETTLE_DELAY.as_millis() as u64,
        }
    }
}

impl WheelConfig {
    pub const fn rotations(&self) -> RangeInclusive<u32> {
        self.min_rotations..=self.max_rotations
    }

    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn build(&self) -> Result<Wheel<Wedge>, wheel::Error> {
        Ok(Wheel::points(&self.values)?
            .with_rotations(self.rotations())?
            .with_settle_delay(self.settle_delay()))
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct QuizConfig {
    /// CSV sheet of questions.
    pub source: Option<Url>,
    pub minutes: u32,
    pub wrong_guess_penalty: u32,
    pub clue_cost: u32,
    pub max_clues: u32,
    pub wheel_size: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        let rules = QuizRules::default();

        Self {
            source: None,
            minutes: rules.minutes,
            wrong_guess_penalty: rules.wrong_guess_penalty,
            clue_cost: rules.clue_cost,
            max_clues: rules.max_clues,
            wheel_size: rules.wheel_size,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogsConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{config_file, environment, Config, Error};
    use crate::{game::Rules, wheel::Wedge};
    use ::config::{File, FileFormat};
    use pretty_assertions::assert_eq;
    use std::{path::PathBuf, time::Duration};

    #[test]
    fn empty_file_is_all_defaults() {
        let config = Config::from_toml("").expect("empty config is valid");

        assert_eq!(config, Config::default());
        assert_eq!(config.game, Rules::default());
        assert_eq!(config.logs.filter, "wordwheel=info");
    }

    #[test]
    fn missing_file_is_all_defaults() {
        let config = Config::load(&PathBuf::from("./definitely/not/here.toml"))
            .expect("missing file is optional");

        assert_eq!(config.wheel, Config::default().wheel);
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::from_toml(
            r#"
            [game]
            max_clues = 5
            wheel_gated = false

            [wheel]
            values = [0, 500]
            min_rotations = 1
            max_rotations = 2
            settle_ms = 250

            [quiz]
            source = "https://example.com/sheet.csv"
            minutes = 4
            wrong_guess_penalty = 25

            [logs]
            filter = "wordwheel=debug"
            "#,
        )
        .expect("hard-coded config is valid");

        assert_eq!(config.game.max_clues, 5);
        assert!(!config.game.wheel_gated);
        assert_eq!(config.game.max_wrong_guesses, 6);

        let wheel = config.wheel.build().expect("valid wheel");
        assert_eq!(wheel.segment(0).map(|s| s.id), Some(Wedge::Bankrupt));
        assert_eq!(wheel.settle_delay(), Duration::from_millis(250));

        let rules = config.quiz_rules();
        assert_eq!(rules.minutes, 4);
        assert_eq!(rules.wrong_guess_penalty, 25);
        assert_eq!(rules.clue_cost, 50);
        assert_eq!(rules.rotations, 1..=2);
        assert_eq!(
            config.quiz.source.as_ref().map(url::Url::as_str),
            Some("https://example.com/sheet.csv")
        );
        assert_eq!(config.logs.filter, "wordwheel=debug");
    }

    #[test]
    fn environment_overrides_file() {
        let env = environment().source(Some(
            [("WORDWHEEL__GAME__MAX_CLUES", "9")]
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        ));

        let config = Config::build(
            File::from_str("[game]\nmax_clues = 5", FileFormat::Toml),
            env,
        )
        .expect("valid config");

        assert_eq!(config.game.max_clues, 9);
    }

    #[test]
    fn rejects_bad_values() {
        let cases = [
            "[game]\nmax_wrong_guesses = 0",
            "[wheel]\nvalues = []",
            "[wheel]\nmin_rotations = 7\nmax_rotations = 3",
            "[quiz]\nwheel_size = 0",
        ];

        for case in cases {
            assert!(
                matches!(Config::from_toml(case), Err(Error::Invalid(_))),
                "{case}"
            );
        }
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            Config::from_toml("[game\nmax_clues = "),
            Err(Error::Read(_))
        ));
        assert!(matches!(
            Config::from_toml("[game]\nmax_clues = \"lots\""),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn flag_wins_over_default() {
        let path = config_file(Some(PathBuf::from("custom.toml")));
        assert_eq!(path, PathBuf::from("custom.toml"));
    }
}
