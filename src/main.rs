#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

use std::time::Duration;

use clap::Parser;
use tokio::{
    io::{AsyncBufReadExt, BufReader, Lines, Stdin},
    time::{self, Instant},
};
use thisslime::TracingError;
use tracing::{debug, info, warn};
use tracing_unwrap::ResultExt;

use wordwheel::{
    cli::{Cli, Command, Input},
    config::{self, Config, DEFAULT_LOG_FILTER},
    game::{
        quiz::{Phase, QuizEngine, QuizGuess, QuizSnapshot},
        GameEngine, Guess, Snapshot, SpinOutcome, SpinStatus, Status, Tick,
    },
    logging,
    puzzle::{PuzzleCatalog, PuzzleSource},
    random::SeededRandom,
    wheel::SpinResult,
    Error,
};

type Stdio = Lines<BufReader<Stdin>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load(&config::config_file(cli.config.clone())) {
        Ok(config) => config,
        Err(err) => {
            logging::init_tracing(DEFAULT_LOG_FILTER);
            let err = Error::from(err);
            err.trace();
            return Err(err.into());
        }
    };

    logging::init_tracing(&config.logs.filter);
    if let Ok(path) = dotenv {
        debug!(path = %path.display(), "loaded .env");
    }

    let rng = cli
        .seed
        .map_or_else(SeededRandom::from_entropy, SeededRandom::seeded);
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    info!(command = ?cli.command(), seed = ?cli.seed, "starting");

    match cli.command() {
        Command::Classic => play_classic(&config, rng, &mut stdin).await,
        Command::Quiz {
            name,
            minutes,
            source,
        } => {
            let source = source.or_else(|| config.quiz.source.clone());
            let minutes = minutes.unwrap_or(config.quiz.minutes);
            play_quiz(&config, rng, &mut stdin, name, minutes, source).await
        }
    }
}

async fn read_line(stdin: &mut Stdio) -> Option<String> {
    stdin
        .next_line()
        .await
        .expect_or_log("stdin should be readable")
}

async fn play_classic(
    config: &Config,
    rng: SeededRandom,
    stdin: &mut Stdio,
) -> anyhow::Result<()> {
    let wheel = config.wheel.build().map_err(Error::from)?;
    let mut engine = GameEngine::new(config.game.clone(), PuzzleCatalog::builtin(), wheel, rng)?;

    let settle = time::sleep(Duration::ZERO);
    tokio::pin!(settle);
    let mut settling: Option<SpinResult> = None;

    println!("type `spin`, then a letter. `clue`, `new` and `quit` also work.");
    draw_classic(&engine.snapshot());

    loop {
        tokio::select! {
            () = &mut settle, if settling.is_some() => {
                let Some(result) = settling.take() else { continue };

                match engine.settle_spin(&result) {
                    Some(SpinOutcome::Ready(value)) => {
                        println!("landed on ${value}, pick a letter");
                    }
                    Some(SpinOutcome::Bankrupt) => println!("BANKRUPT! score wiped"),
                    None => continue,
                }
                draw_classic(&engine.snapshot());
            }

            line = read_line(stdin) => {
                let Some(line) = line else { break };

                match Input::parse(&line) {
                    Some(Input::Quit) => break,
                    Some(Input::Spin) => {
                        if let Some(result) = engine.spin() {
                            println!("spinning...");
                            settle.as_mut().reset(Instant::now() + engine.wheel().settle_delay());
                            settling = Some(result);
                            continue;
                        }
                        println!("can't spin right now");
                    }
                    Some(Input::Letter(ch)) => match engine.guess_letter(ch) {
                        Some(Guess::Hit { letter, occurrences, points }) => {
                            println!("ding! {occurrences} × {letter} for {points}");
                        }
                        Some(Guess::Miss { letter, .. }) => println!("buzz, no {letter}"),
                        None => println!("can't guess that right now"),
                    },
                    Some(Input::Clue) => match engine.use_clue() {
                        Some(letter) => println!("clue: {letter}"),
                        None => println!("no clue available"),
                    },
                    Some(Input::New) => {
                        settling = None;
                        engine.start_new_game();
                    }
                    Some(Input::Skip) | None => {
                        println!("commands: a letter, spin, clue, new, quit");
                        continue;
                    }
                }

                draw_classic(&engine.snapshot());
            }
        }
    }

    Ok(())
}

fn draw_classic(snapshot: &Snapshot<'_>) {
    println!();
    println!("  [{}]", snapshot.category);
    println!("  {}", spaced(&snapshot.board));
    println!(
        "  score {}  lives {}/{}  clues {}  used {}",
        snapshot.score,
        snapshot.lives_left,
        snapshot.max_wrong_guesses,
        snapshot.clues_remaining,
        snapshot.used,
    );

    match snapshot.spin {
        SpinStatus::Ready(value) => println!("  playing for ${value}"),
        SpinStatus::Spinning => println!("  the wheel is turning"),
        SpinStatus::Idle => {}
    }

    match (snapshot.status, snapshot.answer) {
        (Status::Won, _) => println!(
            "  solved! final score {}. `new` to play again",
            snapshot.score
        ),
        (Status::Lost, Some(answer)) => {
            println!("  out of lives. it was {answer}. `new` to play again");
        }
        _ => {}
    }
}

async fn load_questions(source: Option<url::Url>) -> Vec<wordwheel::puzzle::Puzzle> {
    match source {
        Some(url) => PuzzleSource::new(url).load().await,
        None => {
            warn!("no quiz source configured, using the built-in phrases");
            PuzzleCatalog::builtin().list().to_vec()
        }
    }
}

async fn play_quiz(
    config: &Config,
    rng: SeededRandom,
    stdin: &mut Stdio,
    name: Option<String>,
    minutes: u32,
    source: Option<url::Url>,
) -> anyhow::Result<()> {
    let mut quiz = QuizEngine::new(config.quiz_rules(), rng)?;
    quiz.load_questions(load_questions(source).await);

    if quiz.data_error() {
        println!("couldn't load any questions");
        return Ok(());
    }

    let name = match name {
        Some(name) => name,
        None => {
            println!("your name?");
            read_line(stdin).await.unwrap_or_default()
        }
    };

    quiz.configure(&name, minutes);
    if !quiz.start_game() {
        println!("a name is needed to play");
        return Ok(());
    }

    let second = Duration::from_secs(1);
    let mut ticker = time::interval_at(Instant::now() + second, second);
    let settle = time::sleep(Duration::ZERO);
    tokio::pin!(settle);
    let mut settling: Option<SpinResult> = None;

    println!(
        "`spin` for a question, then guess letters. `clue`, `skip`, `new` and `quit` also work."
    );
    draw_quiz(&quiz.snapshot());

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match quiz.tick() {
                    Tick::Expired => {
                        settling = None;
                        println!("time's up!");
                        draw_quiz(&quiz.snapshot());
                    }
                    Tick::Running(remaining) if remaining % 30 == 0 || remaining <= 5 => {
                        println!("{remaining}s left");
                    }
                    Tick::Running(_) | Tick::Ignored => {}
                }
            }

            () = &mut settle, if settling.is_some() => {
                let Some(result) = settling.take() else { continue };

                if let Some(id) = quiz.settle_spin(&result) {
                    debug!(%id, "question picked");
                    draw_quiz(&quiz.snapshot());
                }
            }

            line = read_line(stdin) => {
                let Some(line) = line else { break };

                match Input::parse(&line) {
                    Some(Input::Quit) => break,
                    Some(Input::Spin) => {
                        if let Some(result) = quiz.spin() {
                            println!("spinning...");
                            settle.as_mut().reset(Instant::now() + quiz.rules().settle_delay);
                            settling = Some(result);
                            continue;
                        }
                        println!("can't spin right now");
                    }
                    Some(Input::Letter(ch)) => match quiz.guess_letter(ch) {
                        Some(QuizGuess::Hit { letter, occurrences }) => {
                            println!("ding! {occurrences} × {letter}");
                        }
                        Some(QuizGuess::Solved { points, .. }) => println!("solved! +{points}"),
                        Some(QuizGuess::Miss { letter, penalty }) => {
                            println!("buzz, no {letter}. -{penalty}");
                        }
                        None => println!("can't guess that right now"),
                    },
                    Some(Input::Clue) => match quiz.use_clue() {
                        Some(letter) => println!("clue: {letter}"),
                        None => println!("no clue available"),
                    },
                    Some(Input::Skip) => {
                        if quiz.skip_question().is_none() {
                            println!("nothing to skip");
                        }
                    }
                    Some(Input::New) => {
                        settling = None;
                        quiz.reset_game();
                        quiz.configure(&name, minutes);
                        quiz.start_game();
                        ticker.reset();
                    }
                    None => {
                        println!("commands: a letter, spin, clue, skip, new, quit");
                        continue;
                    }
                }

                draw_quiz(&quiz.snapshot());
            }
        }
    }

    Ok(())
}

fn draw_quiz(snapshot: &QuizSnapshot<'_>) {
    println!();

    match snapshot.phase {
        Phase::Setup => println!("  waiting to start"),
        Phase::Spin => println!("  the wheel: {}", snapshot.wheel.join(" | ")),
        Phase::Play => {
            if let (Some(category), Some(board)) = (snapshot.category, &snapshot.board) {
                println!("  [{category}]");
                println!("  {}", spaced(board));
            }
            println!(
                "  clues {}  used {}",
                snapshot.clues_remaining, snapshot.used
            );
        }
        Phase::Result => {
            if let Some(answer) = snapshot.answer {
                println!("  the answer was {answer}");
            }
            println!(
                "  {} finished with {} points and {} questions passed. `new` to play again",
                snapshot.player_name, snapshot.score, snapshot.questions_passed
            );
        }
    }

    println!(
        "  {}  score {}  {}:{:02} left  {} questions to go",
        snapshot.player_name,
        snapshot.score,
        snapshot.remaining_seconds / 60,
        snapshot.remaining_seconds % 60,
        snapshot.questions_left,
    );
}

fn spaced(board: &str) -> String {
    board
        .chars()
        .map(|ch| if ch == ' ' { "   ".to_owned() } else { format!("{ch} ") })
        .collect()
}
