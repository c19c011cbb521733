#[cfg(test)]
mod tests {

    use std::error::Error;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ron;
    use rs_mastermind_solver::*;

    #[test]
    fn game_result_serde() -> Result<(), Box<dyn Error>> {
        let rules = GameRules::default();
        let result = play_game_with_guesser(
            &Code::from([1, 2, 2, 0]),
            rules.adaptive_guess_bound(),
            AdaptiveGuesser::seeded(rules, 3),
        )?;

        let ser = ron::to_string(&result)?;
        let deser = ron::from_str::<GameResult>(&ser)?;

        assert_eq!(deser, result);
        Ok(())
    }

    #[test]
    fn feedback_and_rules_serde() -> Result<(), Box<dyn Error>> {
        let rules = GameRules::new(5, 7)?;
        let feedback = Feedback::new(2, 1);

        let deser_rules = ron::from_str::<GameRules>(&ron::to_string(&rules)?)?;
        let deser_feedback = ron::from_str::<Feedback>(&ron::to_string(&feedback)?)?;

        assert_eq!(deser_rules, rules);
        assert_eq!(deser_feedback, feedback);
        Ok(())
    }

    #[test]
    fn solver_state_serde_resumes_round() -> Result<(), Box<dyn Error>> {
        let rules = GameRules::default();
        let mut code_maker = CodeMaker::new(Code::from([3, 0, 5, 3]));
        let mut guesser = AdaptiveGuesser::with_rng(rules, StdRng::seed_from_u64(21));
        for _ in 0..3 {
            let guess = guesser.next_guess(code_maker.all_feedback()).unwrap();
            code_maker.verify(&guess)?;
        }

        let ser = ron::to_string(guesser.state())?;
        let deser = ron::from_str::<SolverState>(&ser)?;
        assert_eq!(&deser, guesser.state());
        // Discovery doesn't draw from the rng, so a fresh one with the same seed lines up.
        let mut resumed = AdaptiveGuesser::from_state(rules, deser, StdRng::seed_from_u64(21));

        while !code_maker.is_solved() {
            let history = code_maker.all_feedback().to_vec();
            let guess = guesser.next_guess(&history).unwrap();
            assert_eq!(resumed.next_guess(&history), Some(guess.clone()));
            code_maker.verify(&guess)?;
        }
        Ok(())
    }
}
