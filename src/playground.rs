//! Small stream-processing exercises. Nothing here touches the weather
//! parser; the only shared idea is parse-or-skip.

/// Strict whole-string parse. Anything that isn't an integer is skipped,
/// never reported.
pub fn parse_int(input: &str) -> Option<i64> {
    input.parse().ok()
}

/// Lazily map strings through [`parse_int`], dropping the malformed ones.
pub fn ints<'a, I>(inputs: I) -> impl Iterator<Item = i64>
where
    I: IntoIterator<Item = &'a str>,
{
    inputs.into_iter().filter_map(parse_int)
}

pub fn smallest_int<'a, I>(inputs: I) -> Option<i64>
where
    I: IntoIterator<Item = &'a str>,
{
    ints(inputs).min()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn from_list_to_iterator_to_list_again() {
        let input = vec!["Alles", "in", "Butter"];
        let result: Vec<&str> = input.iter().copied().collect();
        assert_eq!(result, vec!["Alles", "in", "Butter"]);
    }

    #[test]
    fn read_file_to_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "line1\nline2\nline3\nline4\nline5\n").unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["line1", "line2", "line3", "line4", "line5"]);
    }

    #[test]
    fn map_strings_to_numbers() {
        let result: Vec<i64> = ints(["1", "2", "3"]).collect();
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn map_strings_to_numbers_skipping_format_errors() {
        let result: Vec<i64> = ints(["1", "2", "no int", "3"]).collect();
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn map_strings_to_numbers_skipping_format_errors_returning_min() {
        assert_eq!(smallest_int(["1", "2", "no int", "3"]), Some(1));
        assert_eq!(smallest_int(["no int"]), None);
    }

    #[test]
    fn parse_int_is_strict() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("42 "), None);
        assert_eq!(parse_int("32*"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn split_annotated_row() {
        let input = "   9  86    32*   59       6  61.5       0.00         240  7.6 220  12  6.0  78 46 1018.6";
        let columns: Vec<&str> = input.split_whitespace().collect();
        assert_eq!(columns[0], "9");
        assert_eq!(columns[2], "32*");
        assert_eq!(columns[14], "1018.6");
    }
}
