use dialoguer::{Input, Password};
use log::{error, info, warn};
use rs_mastermind_solver::*;

fn code_prompt(rules: &GameRules) -> String {
    format!(
        "Enter a code ({} digit number with digits between 0 - {})",
        rules.code_length(),
        rules.palette_size() - 1
    )
}

/// Asks the code maker for their secret, hiding what they type, until they enter a valid code.
pub fn prompt_secret(rules: &GameRules) -> anyhow::Result<Code> {
    loop {
        let input = Password::new().with_prompt(code_prompt(rules)).interact()?;
        match rules.parse_code(&input) {
            Ok(code) => return Ok(code),
            Err(err) => warn!("Wrong format! Try again. {}", err),
        }
    }
}

/// Lets a person at the terminal break the code.
pub struct HumanGuesser<'a> {
    rules: GameRules,
    name: &'a str,
}

impl<'a> HumanGuesser<'a> {
    pub fn new(rules: GameRules, name: &'a str) -> HumanGuesser<'a> {
        HumanGuesser { rules, name }
    }
}

impl Guesser for HumanGuesser<'_> {
    fn next_guess(&mut self, history: &[Feedback]) -> Option<Code> {
        if let Some(feedback) = history.last() {
            info!("Your last guess scored: {}.", feedback);
        }
        info!("{} needs to input an attempt.", self.name);
        let rules = self.rules;
        let input = Input::<String>::new()
            .with_prompt(code_prompt(&rules))
            .validate_with(move |input: &String| -> Result<(), String> {
                rules
                    .parse_code(input)
                    .map(|_| ())
                    .map_err(|err| format!("Wrong format! Try again. {}", err))
            })
            .interact_text();
        match input {
            Ok(text) => rules.parse_code(&text).ok(),
            Err(err) => {
                error!("Could not read a guess: {}", err);
                None
            }
        }
    }
}
