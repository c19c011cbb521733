mod human;

use anyhow::{bail, Context};
use clap::{ArgEnum, Parser, Subcommand};
use human::HumanGuesser;
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rs_mastermind_solver::*;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::collections::HashMap;
use std::fs::File;
use std::time::Instant;

/// Simple program to play Mastermind, where either a person or the computer breaks the code.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// The number of colors in each code.
    #[clap(short = 'l', long, default_value_t = 4)]
    code_length: usize,

    /// The number of colors to choose from. Colors are written as the digits 0 to N-1.
    #[clap(short = 'p', long, default_value_t = 6)]
    palette_size: u8,

    /// The number of guesses allowed before the code breaker loses. Defaults to 12 for a person,
    /// and to enough guesses for the computer to always finish.
    #[clap(short = 'm', long)]
    max_attempts: Option<u32>,

    /// Seeds the random choices, so that games can be replayed.
    #[clap(long)]
    seed: Option<u64>,

    /// Log the solver's reasoning.
    #[clap(short, long)]
    verbose: bool,

    /// Also write a debug log to this file.
    #[clap(long)]
    log_file: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Benchmark a guesser against every possible code.
    Benchmark {
        #[clap(long, arg_enum, default_value = "adaptive")]
        guesser: GuesserKind,
    },
    /// Have the computer break the given code.
    Single { code: String },
    /// Play a game between two players. Missing players are filled in by the computer, and the
    /// roles are assigned at random.
    Interactive {
        /// The name of a person playing. May be given up to twice.
        #[clap(long = "human")]
        humans: Vec<String>,
    },
}

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum GuesserKind {
    Adaptive,
    Random,
}

fn main() -> anyhow::Result<()> {
    let start_time = Instant::now();
    let args = Args::parse();
    init_logging(args.verbose, args.log_file.as_deref())?;

    let rules = GameRules::new(args.code_length, args.palette_size).with_context(|| {
        format!(
            "Unsupported rules: code length {}, palette size {}",
            args.code_length, args.palette_size
        )
    })?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(
        "Codes have {} colors from a palette of {}. Seed: {}",
        rules.code_length(),
        rules.palette_size(),
        seed
    );

    match args.command {
        Command::Benchmark { guesser } => {
            if !args.verbose {
                log::set_max_level(LevelFilter::Warn);
            }
            run_benchmark(&rules, guesser, seed)?
        }
        Command::Single { code } => play_single_game(&rules, &code, args.max_attempts, seed)?,
        Command::Interactive { humans } => {
            play_interactive_game(&rules, humans, args.max_attempts, seed)?
        }
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn init_logging(verbose: bool, log_file: Option<&str>) -> anyhow::Result<()> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_time_level(LevelFilter::Off)
        .build();
    let term_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(path) = log_file {
        let file = File::create(path).with_context(|| format!("Cannot create {}", path))?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, config, file));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

fn run_benchmark(rules: &GameRules, guesser: GuesserKind, seed: u64) -> anyhow::Result<()> {
    let budget = rules.adaptive_guess_bound();
    let results = match guesser {
        GuesserKind::Adaptive => play_all_codes(rules, budget, |index| {
            AdaptiveGuesser::seeded(*rules, seed.wrapping_add(index as u64))
        })?,
        GuesserKind::Random => play_all_codes(rules, budget, |index| {
            RandomGuesser::seeded(*rules, seed.wrapping_add(index as u64))
        })?,
    };
    let num_guesses_per_game: Vec<u32> = results.iter().filter_map(|n| *n).collect();
    let num_failures = results.len() - num_guesses_per_game.len();
    if num_guesses_per_game.is_empty() {
        bail!("The {:?} guesser did not solve any code.", guesser);
    }
    println!(
        "Solved {} of {} codes within {} guesses. Results:",
        num_guesses_per_game.len(),
        results.len(),
        budget
    );

    let mut num_games_per_round: HashMap<u32, u32> = HashMap::new();
    for num_guesses in num_guesses_per_game.iter() {
        *(num_games_per_round.entry(*num_guesses).or_insert(0)) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut num_rounds = num_games_per_round.keys().copied().collect::<Vec<u32>>();
    num_rounds.sort_unstable();
    for num_round in num_rounds.iter() {
        println!("|{}|{}|", num_round, num_games_per_round[num_round]);
    }

    let average: f64 = num_guesses_per_game.iter().sum::<u32>() as f64
        / num_guesses_per_game.len() as f64;
    let std_dev: f64 = (num_guesses_per_game
        .iter()
        .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
        .sum::<f64>()
        / num_guesses_per_game.len() as f64)
        .sqrt();

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
    if num_failures > 0 {
        println!("**Unsolved codes:** {}", num_failures);
    }
    Ok(())
}

/// The number of guesses a person gets when `--max-attempts` isn't given.
const HUMAN_MAX_ATTEMPTS: u32 = 12;

/// The number of guesses the given kind of code breaker gets.
fn attempt_budget(rules: &GameRules, max_attempts: Option<u32>, code_breaker: PlayerKind) -> u32 {
    max_attempts.unwrap_or(match code_breaker {
        PlayerKind::Human => HUMAN_MAX_ATTEMPTS,
        PlayerKind::Computer => rules.adaptive_guess_bound(),
    })
}

fn play_single_game(
    rules: &GameRules,
    code: &str,
    max_attempts: Option<u32>,
    seed: u64,
) -> anyhow::Result<()> {
    let secret = rules
        .parse_code(code)
        .with_context(|| format!("Invalid code: {}", code))?;
    let result = play_game_with_guesser(
        &secret,
        attempt_budget(rules, max_attempts, PlayerKind::Computer),
        AdaptiveGuesser::seeded(*rules, seed),
    )?;
    match &result {
        GameResult::Success(guesses) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
        }
        GameResult::Failure(guesses) | GameResult::Abandoned(guesses) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
        }
    }
    for guess in result.guesses() {
        println!("\t{}\t{}", guess, get_feedback_for_guess(&secret, guess)?);
    }
    Ok(())
}

fn play_interactive_game(
    rules: &GameRules,
    humans: Vec<String>,
    max_attempts: Option<u32>,
    seed: u64,
) -> anyhow::Result<()> {
    if humans.len() > 2 {
        bail!("At most two people can play, but {} were named.", humans.len());
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let players = humans.iter().map(|name| Player::human(name)).collect();
    let roles = assign_roles(players, &mut rng);
    let (code_maker, code_breaker) = (&roles.code_maker, &roles.code_breaker);
    info!("{} makes the code and {} breaks it.", code_maker, code_breaker);

    let secret = match code_maker.kind() {
        PlayerKind::Human => {
            info!("{} needs to create their code.", code_maker);
            human::prompt_secret(rules)?
        }
        PlayerKind::Computer => {
            info!("{} created their code.", code_maker);
            rules.random_code(&mut rng)
        }
    };

    let max_attempts = attempt_budget(rules, max_attempts, code_breaker.kind());
    let result = match code_breaker.kind() {
        PlayerKind::Human => play_game_with_guesser(
            &secret,
            max_attempts,
            HumanGuesser::new(*rules, code_breaker.name()),
        )?,
        PlayerKind::Computer => play_game_with_guesser(
            &secret,
            max_attempts,
            AdaptiveGuesser::seeded(*rules, rng.gen()),
        )?,
    };

    println!(
        "{}'s code was {}. {} took {} attempts.",
        code_maker,
        secret,
        code_breaker,
        result.guesses().len()
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn attempt_budget_prefers_explicit_limit() {
        let rules = GameRules::default();

        assert_eq!(attempt_budget(&rules, Some(5), PlayerKind::Computer), 5);
        assert_eq!(attempt_budget(&rules, Some(5), PlayerKind::Human), 5);
        assert_eq!(attempt_budget(&rules, None, PlayerKind::Human), 12);
        assert_eq!(attempt_budget(&rules, None, PlayerKind::Computer), 30);
    }

    #[test]
    fn computer_solves_every_code_with_default_budget() -> Result<(), MastermindError> {
        let rules = GameRules::default();
        let max_attempts = attempt_budget(&rules, None, PlayerKind::Computer);

        let num_guesses = play_all_codes(&rules, max_attempts, |index| {
            AdaptiveGuesser::seeded(rules, index as u64)
        })?;

        assert!(num_guesses.iter().all(Option::is_some));
        Ok(())
    }
}
