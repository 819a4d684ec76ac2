// src/pipeline/mod.rs
use thiserror::Error;

use crate::analysis::{cracktime, entropy, heuristic};
use crate::core::config::Config;
use crate::generator::{salt, SecureGenerator};
use crate::models::PipelineResult;
use crate::wordlist;

/// Stage boundaries of one generation attempt, exposed so callers can render
/// progress. Stages always run in order; none is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Generating,
    CheckingWordlist,
    Salting,
    EstimatingEntropy,
    SimulatingCrackTime,
    TestingCrackability,
    Retrying,
    Accepted,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Generating => "Generating password",
            Stage::CheckingWordlist => "Checking against wordlist",
            Stage::Salting => "Adding salt",
            Stage::EstimatingEntropy => "Estimating entropy",
            Stage::SimulatingCrackTime => "Simulating crack time",
            Stage::TestingCrackability => "Testing crackability",
            Stage::Retrying => "Retrying",
            Stage::Accepted => "Accepted",
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no acceptable password after {0} attempts")]
    RetriesExhausted(usize),
}

pub struct Pipeline {
    generator: SecureGenerator,
    length: usize,
    max_attempts: usize,
}

impl Pipeline {
    pub fn new(length: usize, max_attempts: usize) -> Self {
        Self {
            generator: SecureGenerator::new(),
            length,
            max_attempts,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.password_length, config.max_attempts)
    }

    pub fn run(&self) -> Result<PipelineResult, PipelineError> {
        self.run_with_observer(|_| {})
    }

    /// Run the staged pipeline, invoking `observer` at each stage boundary.
    ///
    /// A wordlist hit on the raw candidate or a crackability flag on the
    /// salted one both restart from `Generating`; the caller cannot tell the
    /// two retry causes apart. The loop is bounded so worst-case latency
    /// stays finite; in practice the generator's class guarantees make the
    /// first attempt succeed almost always.
    pub fn run_with_observer<F>(&self, mut observer: F) -> Result<PipelineResult, PipelineError>
    where
        F: FnMut(Stage),
    {
        for attempt in 1..=self.max_attempts {
            observer(Stage::Generating);
            let raw = self.generator.generate(self.length);

            observer(Stage::CheckingWordlist);
            if wordlist::contains_exact(&raw) || wordlist::contains_substring(&raw) {
                log::debug!("attempt {}: candidate matched the wordlist, retrying", attempt);
                observer(Stage::Retrying);
                continue;
            }

            observer(Stage::Salting);
            let salted = salt::salt(&raw);

            observer(Stage::EstimatingEntropy);
            let bits = entropy::estimate_bits(&salted);

            observer(Stage::SimulatingCrackTime);
            let crack_time = cracktime::simulate(bits);

            observer(Stage::TestingCrackability);
            if heuristic::is_crackable(&salted) {
                log::debug!("attempt {}: candidate flagged crackable, retrying", attempt);
                observer(Stage::Retrying);
                continue;
            }

            observer(Stage::Accepted);
            return Ok(PipelineResult {
                password: salted,
                bits,
                crack_time,
            });
        }

        Err(PipelineError::RetriesExhausted(self.max_attempts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::heuristic::is_structurally_weak;

    #[test]
    fn accepted_passwords_meet_the_invariants() {
        let pipeline = Pipeline::new(25, 100);
        for _ in 0..10 {
            let result = pipeline.run().expect("pipeline should converge");
            assert_eq!(result.password.chars().count(), 25);
            assert!(result.bits > 0);
            assert!(!result.crack_time.is_empty());
            // Deterministic heuristic checks hold at the moment of return.
            assert!(!is_structurally_weak(&result.password));
        }
    }

    #[test]
    fn observer_sees_ordered_stage_boundaries() {
        let pipeline = Pipeline::new(25, 100);
        let mut stages = Vec::new();
        pipeline
            .run_with_observer(|stage| stages.push(stage))
            .expect("pipeline should converge");

        assert_eq!(stages.first(), Some(&Stage::Generating));
        assert_eq!(stages.last(), Some(&Stage::Accepted));
        // The final (accepted) attempt walks every stage in order.
        let tail: Vec<Stage> = stages[stages.len() - 7..].to_vec();
        assert_eq!(
            tail,
            vec![
                Stage::Generating,
                Stage::CheckingWordlist,
                Stage::Salting,
                Stage::EstimatingEntropy,
                Stage::SimulatingCrackTime,
                Stage::TestingCrackability,
                Stage::Accepted,
            ]
        );
    }

    #[test]
    fn exhausted_retries_surface_as_an_error() {
        // Length 1 can never satisfy the four-class requirement, so every
        // attempt is rejected and the bound must trip.
        let pipeline = Pipeline::new(1, 3);
        match pipeline.run() {
            Err(PipelineError::RetriesExhausted(attempts)) => assert_eq!(attempts, 3),
            other => panic!("expected exhaustion, got {:?}", other.map(|r| r.password)),
        }
    }
}
