use super::*;

/// Helper function to match the raw output of stderr or stdout, with a pattern and return the number of matches
pub fn regex_matches<S>(case_sensitive: bool, haystack: &str, re: S) -> usize
where
    S: AsRef<str> + ToOwned + Display + Into<String>,
{
    // Build regex pattern
    let regex_pattern = if case_sensitive {
        re.to_string()
    } else {
        format!("(?i){re}")
    };
    let re = fancy_regex::Regex::new(&regex_pattern).expect("Failed to compile regex");
    re.find_iter(haystack).count()
}

/// Helper function to match the raw output of stderr or stdout, with a pattern a fixed amount of times
pub fn match_count<S>(case_sensitive: bool, haystack: &str, re: S, expect_match: usize) -> TestResult
where
    S: AsRef<str> + ToOwned + Display + Into<String>,
{
    let regex_pattern = if case_sensitive {
        re.to_string()
    } else {
        format!("(?i){re}")
    };
    let re = fancy_regex::Regex::new(&regex_pattern)?;

    let match_count = re.find_iter(haystack).count();

    pretty_assert_eq!(
        match_count, expect_match,
        "regex: {re} - expected match count: {expect_match}, got {match_count}\nFailed to match on:\n{haystack}"
    );
    Ok(())
}

/// Helper function takes in the output of stderr and asserts that there are no errors, warnings, or thread panics.
pub fn assert_no_errors_or_warn(stderr: &str) -> TestResult {
    match_count(true, stderr, "ERROR", 0)?;
    match_count(true, stderr, "WARN", 0)?;
    match_count(true, stderr, "Error:", 0)?;
    match_count(false, stderr, "thread.*panicked", 0)?;
    Ok(())
}

/// Escape regex metacharacters so `s` matches literally
pub fn escape_regex(s: &str) -> String {
    s.chars().fold(String::new(), |mut acc, c| {
        if r"\.+*?()|[]{}^$".contains(c) {
            acc.push('\\');
        }
        acc.push(c);
        acc
    })
}

/// Asserts stdout holds exactly one decomposed path block for `label` (`Source`/`Destination`)
pub fn assert_spec_block(
    stdout: &str,
    label: &str,
    raw: &str,
    (user, addr, file): (&str, &str, &str),
) -> TestResult {
    let pattern = format!(
        r"(?m)^ {label} file path: {}\n  user = {}\n  addr = {}\n  file = {}$",
        escape_regex(raw),
        escape_regex(user),
        escape_regex(addr),
        escape_regex(file),
    );
    match_count(true, stdout, pattern, 1)
}
