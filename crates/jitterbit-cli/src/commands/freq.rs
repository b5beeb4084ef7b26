use jitterbit_core::BitSource;
use jitterbit_tests::{FrequencyEvaluator, FrequencyResult};

use super::CommandResult;

pub fn render(result: &FrequencyResult) -> String {
    format!(
        "Statistics\n\
         -------------------------------------------\n\
         number of 1's: {}\tnumber of 0's: {}\tN: {}\n\
         frequency of 1's: {:.6} percent \tfrequency of 0's: {:.6} percent\n",
        result.ones, result.zeros, result.n, result.ones_pct, result.zeros_pct
    )
}

pub fn run<S: BitSource + ?Sized>(source: &mut S, n: usize, json: bool) -> CommandResult {
    let result = FrequencyEvaluator.evaluate(source, n)?;
    if json {
        return super::print_json(&result);
    }
    print!("{}", render(&result));
    Ok(())
}
