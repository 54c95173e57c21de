//! Parse-year command implementation.

use crate::cli::ParseYearArgs;
use crate::error::Result;
use crate::output::Formatter;
use heritage_domain::parse_year;

/// Execute the parse-year command.
pub fn execute_parse_year(args: &ParseYearArgs, formatter: &Formatter) -> Result<String> {
    let rows: Vec<(String, Option<i32>)> = args
        .texts
        .iter()
        .map(|text| (text.clone(), parse_year(text)))
        .collect();

    formatter.format_parsed_years(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_year_rows() {
        let args = ParseYearArgs {
            texts: vec![
                "800 BCE".to_string(),
                "7th century".to_string(),
                "1200 AH".to_string(),
                "Ottoman".to_string(),
            ],
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(
            execute_parse_year(&args, &formatter).unwrap(),
            "-800\n650\n1786\n-"
        );
    }
}
