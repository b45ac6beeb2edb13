//! linecalc_engine - Line-by-line calculator engine.

pub mod engine;

pub use engine::{Line, calculate};

#[cfg(test)]
mod tests {
    use crate::engine::*;

    fn results(exprs: &[&str]) -> Vec<String> {
        let lines = exprs
            .iter()
            .enumerate()
            .map(|(i, e)| Line::new(i as i64, e))
            .collect();
        calculate(lines).into_iter().map(|l| l.result).collect()
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(results(&["2 + 2"]), vec!["4"]);
        assert_eq!(results(&["10 - 3"]), vec!["7"]);
        assert_eq!(results(&["5 * 6"]), vec!["30"]);
        assert_eq!(results(&["20 / 4"]), vec!["5"]);
        assert_eq!(results(&["2 ^ 3"]), vec!["8"]);
    }

    #[test]
    fn test_unicode_operators() {
        assert_eq!(results(&["5 × 6"]), vec!["30"]);
        assert_eq!(results(&["20 ÷ 4"]), vec!["5"]);
        assert_eq!(results(&["10 × 2 ÷ 4 + 1"]), vec!["6"]);
    }

    #[test]
    fn test_decimal_results() {
        assert_eq!(results(&["1.5 + 2.3"]), vec!["3.80"]);
        assert_eq!(results(&["10 / 3"]), vec!["3.33"]);
        assert_eq!(results(&["5.0 + 5.0"]), vec!["10"]);
        assert_eq!(results(&["1 / 3 * 3"]), vec!["1"]);
    }

    #[test]
    fn test_variables_and_chains() {
        assert_eq!(
            results(&["a = 10", "b = a * 2", "c = b + a", "d = c / a"]),
            vec!["10", "20", "30", "3"]
        );
        assert_eq!(results(&["my_var = 100", "my_var * 2"]), vec!["100", "200"]);
    }

    #[test]
    fn test_percentages_with_variables() {
        assert_eq!(results(&["price = 1000", "10% of price"]), vec!["1000", "100"]);
        assert_eq!(results(&["original = 500", "30% off original"]), vec!["500", "350"]);
        assert_eq!(results(&["salary = 50000", "salary + 10%"]), vec!["50000", "55000.00"]);
        assert_eq!(results(&["budget = 1000", "budget - 25%"]), vec!["1000", "750"]);
        assert_eq!(results(&["15.5% of 200"]), vec!["31"]);
    }

    #[test]
    fn test_large_numbers() {
        assert_eq!(results(&["1000000000 * 2"]), vec!["2000000000"]);
        assert_eq!(results(&["999999999999999 * 999999999999999"]), vec!["1.00e+30"]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            results(&["2 + * 2", "10 / 0", "unknownVar * 2", "(2 + 3"]),
            vec!["Err", "Err", "Err", "Err"]
        );
    }
}
