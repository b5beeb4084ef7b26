use jitterbit_core::BitSource;
use jitterbit_tests::{ChiSquaredEvaluator, ChiSquaredResult};

use super::CommandResult;

pub fn result_line(result: &ChiSquaredResult) -> String {
    format!(
        "The chi^2 over {} runs is {:.6}",
        result.trials, result.statistic
    )
}

/// Run the bit-sum chi-squared test `runs` times, `trials` trials each.
pub fn run<S: BitSource + ?Sized>(
    source: &mut S,
    trials: usize,
    num_bits: u32,
    runs: usize,
    json: bool,
) -> CommandResult {
    let evaluator = ChiSquaredEvaluator::new(num_bits)?;
    let mut results = Vec::with_capacity(runs);

    for _ in 0..runs {
        let result = evaluator.evaluate(source, trials)?;
        if !json {
            println!("{}", result_line(&result));
        }
        results.push(result);
    }

    if json {
        super::print_json(&results)?;
    }
    Ok(())
}
