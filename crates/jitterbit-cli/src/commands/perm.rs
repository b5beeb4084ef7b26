use jitterbit_core::BitSource;
use jitterbit_tests::{PermutationEvaluator, PermutationResult};

use super::CommandResult;

/// One `N <chi_squared>` line per repetition.
pub fn render(result: &PermutationResult) -> String {
    result
        .statistics
        .iter()
        .map(|stat| format!("{} {stat:.6}\n", result.n))
        .collect()
}

pub fn run<S: BitSource + ?Sized>(
    source: &mut S,
    n: usize,
    repetitions: usize,
    json: bool,
) -> CommandResult {
    let result = PermutationEvaluator::new(repetitions)?.evaluate(source, n)?;
    if json {
        return super::print_json(&result);
    }
    print!("{}", render(&result));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jitterbit_tests::testing::CountingSource;

    #[test]
    fn ten_lines() {
        let result = PermutationEvaluator::default()
            .evaluate(&mut CountingSource::new(3), 16)
            .unwrap();
        let text = render(&result);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|l| *l == "16 0.000000"));
    }
}
