//! Log visualization support
//!
//! Extracts timestamps from log lines with two alternate grammars, buckets
//! matching lines per second of day, and renders gnuplot-ready data with
//! explicit zero markers across gaps so the plot drops to the axis instead
//! of interpolating.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CoreError;

/// `08-09-2011 18:51:14 <TRACE> kernel1: Initializing`
static TS_NUMERIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<d>\d+)-(?P<m>\d+)-(?P<y>\d+) (?P<H>\d+):(?P<M>\d+):(?P<S>\d+) (?P<text>.*)$")
        .expect("valid timestamp pattern")
});

/// `Thu Sep  8 18:51:13 2011 initializing skv`
static TS_SYSLOG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<wd>[A-Z][a-z]+)\s+(?P<mon>[A-Z][a-z]+)\s+(?P<d>\d+)\s+(?P<H>\d+):(?P<M>\d+):(?P<S>\d+)\s+(?P<y>\d+)\s+(?P<text>.*)$",
    )
    .expect("valid timestamp pattern")
});

/// A `<file> <pattern>` pair from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSpec {
    /// Log file to scan
    pub path: String,
    /// Pattern a line's text remainder must match, anchored at its start
    pub pattern: String,
}

impl SeriesSpec {
    /// Pair up a flat `<file> <pattern>` argument list; an odd count is an
    /// error.
    pub fn pair_args(args: &[String]) -> Result<Vec<SeriesSpec>, CoreError> {
        if args.len() % 2 != 0 {
            return Err(CoreError::UnpairedSeries { count: args.len() });
        }
        Ok(args
            .chunks(2)
            .map(|pair| SeriesSpec {
                path: pair[0].clone(),
                pattern: pair[1].clone(),
            })
            .collect())
    }
}

/// Parse the timestamp off a log line.
///
/// Tries both grammars in order; returns the second of day and the text
/// remainder, or `None` when neither matches. Only the time-of-day fields
/// are consumed, so logs spanning midnight wrap.
pub fn parse_timestamp(line: &str) -> Option<(u64, &str)> {
    for re in [&*TS_NUMERIC_RE, &*TS_SYSLOG_RE] {
        if let Some(caps) = re.captures(line) {
            let hours: u64 = caps["H"].parse().ok()?;
            let minutes: u64 = caps["M"].parse().ok()?;
            let seconds: u64 = caps["S"].parse().ok()?;
            let text = caps.name("text")?.as_str();
            return Some(((hours * 60 + minutes) * 60 + seconds, text));
        }
    }
    None
}

/// Compile a series filter so it matches at the start of the text remainder
/// only.
pub fn compile_filter(pattern: &str) -> Result<Regex, CoreError> {
    Ok(Regex::new(&format!(r"\A(?:{})", pattern))?)
}

/// Count matching lines per second of day.
///
/// Lines without a recognizable timestamp are skipped; the filter sees the
/// text remainder only, never the timestamp itself.
pub fn bucket_lines<'a, I>(lines: I, filter: &Regex) -> BTreeMap<u64, u64>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buckets = BTreeMap::new();
    for line in lines {
        if let Some((second, text)) = parse_timestamp(line) {
            if filter.is_match(text) {
                *buckets.entry(second).or_insert(0) += 1;
            }
        }
    }
    buckets
}

/// Render buckets as gnuplot data lines, one `<second> <count>` per key in
/// ascending order.
///
/// A gap of more than two seconds between consecutive keys gets explicit
/// zero markers at both edges (`prev+1 0` and `next-1 0`).
pub fn render_series(buckets: &BTreeMap<u64, u64>) -> String {
    let mut out = String::new();
    let mut prev: Option<u64> = None;
    for (&second, &count) in buckets {
        if let Some(prev) = prev {
            if prev < second.saturating_sub(2) {
                out.push_str(&format!("{} 0\n", prev + 1));
                out.push_str(&format!("{} 0\n", second - 1));
            }
        }
        out.push_str(&format!("{} {}\n", second, count));
        prev = Some(second);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_timestamp_grammar() {
        let line = "08-09-2011 18:51:14 <TRACE> kernel1: Initializing";
        let (second, text) = parse_timestamp(line).unwrap();
        assert_eq!(second, (18 * 60 + 51) * 60 + 14);
        assert_eq!(text, "<TRACE> kernel1: Initializing");
    }

    #[test]
    fn test_syslog_timestamp_grammar() {
        let line = "Thu Sep  8 18:51:13 2011 initializing skv";
        let (second, text) = parse_timestamp(line).unwrap();
        assert_eq!(second, (18 * 60 + 51) * 60 + 13);
        assert_eq!(text, "initializing skv");
    }

    #[test]
    fn test_line_without_timestamp_is_skipped() {
        assert!(parse_timestamp("no timestamp here").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_filter_is_anchored_at_text_start() {
        let filter = compile_filter("init").unwrap();
        assert!(filter.is_match("initializing skv"));
        // mid-text occurrences do not count
        let filter = compile_filter("skv").unwrap();
        assert!(!filter.is_match("initializing skv"));
    }

    #[test]
    fn test_filter_sees_text_remainder_not_timestamp() {
        let filter = compile_filter(r"\d+").unwrap();
        let buckets = bucket_lines(
            ["08-09-2011 18:51:14 plain text line"].into_iter(),
            &filter,
        );
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_bucketing_counts_per_second() {
        let filter = compile_filter(".*").unwrap();
        let lines = [
            "08-09-2011 00:00:10 a",
            "08-09-2011 00:00:10 b",
            "Thu Sep  8 00:00:11 2011 c",
        ];
        let buckets = bucket_lines(lines.into_iter(), &filter);
        assert_eq!(buckets.get(&10), Some(&2));
        assert_eq!(buckets.get(&11), Some(&1));
    }

    #[test]
    fn test_render_inserts_zero_markers_across_gaps() {
        let buckets = BTreeMap::from([(10, 2), (14, 1)]);
        assert_eq!(render_series(&buckets), "10 2\n11 0\n13 0\n14 1\n");
    }

    #[test]
    fn test_render_small_gap_has_no_markers() {
        // A two-second gap is left to gnuplot to bridge.
        let buckets = BTreeMap::from([(10, 2), (12, 1)]);
        assert_eq!(render_series(&buckets), "10 2\n12 1\n");
    }

    #[test]
    fn test_render_empty_buckets() {
        assert_eq!(render_series(&BTreeMap::new()), "");
    }

    #[test]
    fn test_pair_args_rejects_odd_count() {
        let args = vec!["a.log".to_string(), ".*".to_string(), "b.log".to_string()];
        assert!(matches!(
            SeriesSpec::pair_args(&args),
            Err(CoreError::UnpairedSeries { count: 3 })
        ));
    }

    #[test]
    fn test_pair_args_pairs_in_order() {
        let args = vec![
            "a.log".to_string(),
            "foo".to_string(),
            "b.log".to_string(),
            "bar".to_string(),
        ];
        let specs = SeriesSpec::pair_args(&args).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].path, "a.log");
        assert_eq!(specs[0].pattern, "foo");
        assert_eq!(specs[1].path, "b.log");
        assert_eq!(specs[1].pattern, "bar");
    }
}
