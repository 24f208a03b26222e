//! Result Formatter
//!
//! Renders search outcomes, parse errors and advisories as reply units.

use crate::domain::entities::{Advisory, JobCard, JobResult, ReplyStyle, ReplyUnit, SearchOutcome};
use crate::domain::errors::{ParseError, SearchFailure};

pub const NO_LISTINGS: &str = "No job listings were found for that search.";

/// Render an outcome as an ordered list of reply units
///
/// A failure or an empty result set yields exactly one unit. Otherwise
/// at most `limit` jobs are rendered, in the order the API returned them.
pub fn format(outcome: &SearchOutcome, limit: usize, style: ReplyStyle) -> Vec<ReplyUnit> {
    match outcome {
        SearchOutcome::Failure(failure) => vec![failure_reply(failure)],
        SearchOutcome::Success { results, .. } if results.is_empty() => {
            vec![ReplyUnit::text(NO_LISTINGS)]
        }
        SearchOutcome::Success { results, .. } => results
            .iter()
            .take(limit)
            .map(|job| render_job(job, style))
            .collect(),
    }
}

/// Header line sent ahead of a non-empty result set
pub fn summary(keyword: &str, location: &str, total_count: u64) -> ReplyUnit {
    ReplyUnit::text(format!(
        "Total jobs found for '{}' in '{}': {}",
        keyword, location, total_count
    ))
}

fn render_job(job: &JobResult, style: ReplyStyle) -> ReplyUnit {
    match style {
        ReplyStyle::Plain => {
            let mut line = format!("**{}** - {}", job.title, job.location_name);
            if let Some(url) = &job.apply_url {
                line.push_str(&format!("\nApply: {}", url));
            }
            line.push_str(&format!("\nHiring paths: {}", job.hiring_paths_display()));
            ReplyUnit::text(line)
        }
        ReplyStyle::Card => ReplyUnit::Card(JobCard {
            title: job.title.clone(),
            url: job.apply_url.clone(),
            location: job.location_name.clone(),
            hiring_paths: job.hiring_paths_display(),
            organization: job.organization.clone(),
        }),
    }
}

fn failure_reply(failure: &SearchFailure) -> ReplyUnit {
    let message = match failure {
        SearchFailure::HttpStatus { .. } => {
            "The job search service returned an error. Please try again later."
        }
        SearchFailure::Transport { .. } => {
            "Could not reach the job search service. Please try again later."
        }
        SearchFailure::MalformedResponse { .. } => {
            "The job search service sent a response I could not read. Please try again later."
        }
    };
    ReplyUnit::text(message)
}

/// User-facing reply for a parse error
pub fn parse_error_reply(error: &ParseError, prefix: &str) -> ReplyUnit {
    match error {
        ParseError::MissingKeyword => ReplyUnit::text(format!(
            "Please specify a keyword for job searching. Example usage: `{}fetchjobs cybersecurity -n 5`",
            prefix
        )),
        ParseError::InvalidNumber { .. } => {
            ReplyUnit::text("Please enter a valid number for results.")
        }
    }
}

/// User-facing reply for an advisory
pub fn advisory_reply(advisory: &Advisory) -> ReplyUnit {
    match advisory {
        Advisory::CountClamped { requested, applied } if *requested < 1 => ReplyUnit::text(
            format!("Number of results must be at least {}.", applied),
        ),
        Advisory::CountClamped { applied, .. } => ReplyUnit::text(format!(
            "Number of results limited to maximum of {}.",
            applied
        )),
        Advisory::UnknownFlag { flag } => {
            ReplyUnit::text(format!("Ignoring unknown option `{}`.", flag))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs(count: usize) -> Vec<JobResult> {
        (0..count)
            .map(|i| JobResult::new(format!("Job {}", i), format!("City {}", i)))
            .collect()
    }

    fn success(results: Vec<JobResult>) -> SearchOutcome {
        SearchOutcome::Success {
            total_count: 250,
            results,
        }
    }

    #[test]
    fn test_truncates_to_limit_in_order() {
        for (available, limit) in [(10, 3), (3, 10), (5, 5), (1, 30)] {
            let units = format(&success(jobs(available)), limit, ReplyStyle::Plain);
            assert_eq!(units.len(), available.min(limit));
            for (i, unit) in units.iter().enumerate() {
                let text = unit.as_text().unwrap();
                assert!(text.starts_with(&format!("**Job {}** - City {}", i, i)));
            }
        }
    }

    #[test]
    fn test_empty_results() {
        let units = format(&success(vec![]), 10, ReplyStyle::Card);
        assert_eq!(units, vec![ReplyUnit::text(NO_LISTINGS)]);
    }

    #[test]
    fn test_failure_is_single_friendly_unit() {
        for failure in [
            SearchFailure::HttpStatus { code: 500 },
            SearchFailure::Transport {
                message: "operation timed out".into(),
            },
            SearchFailure::malformed("missing field `SearchResult`"),
        ] {
            let units = format(&SearchOutcome::Failure(failure), 10, ReplyStyle::Plain);
            assert_eq!(units.len(), 1);
            let text = units[0].as_text().unwrap();
            assert!(!text.contains("500"));
            assert!(!text.contains("SearchResult"));
            assert!(!text.contains("timed out"));
        }
    }

    #[test]
    fn test_plain_line_details() {
        let job = JobResult::new("Cyber Analyst", "Fort Meade, Maryland")
            .with_apply_url("https://www.usajobs.gov/job/1/apply")
            .with_hiring_paths(vec!["public".into(), "vet".into()]);
        let units = format(&success(vec![job]), 10, ReplyStyle::Plain);
        assert_eq!(
            units[0].as_text(),
            Some(
                "**Cyber Analyst** - Fort Meade, Maryland\n\
                 Apply: https://www.usajobs.gov/job/1/apply\n\
                 Hiring paths: public, vet"
            )
        );
    }

    #[test]
    fn test_card_defaults() {
        let units = format(&success(jobs(1)), 10, ReplyStyle::Card);
        match &units[0] {
            ReplyUnit::Card(card) => {
                assert_eq!(card.title, "Job 0");
                assert_eq!(card.location, "City 0");
                assert_eq!(card.url, None);
                assert_eq!(card.hiring_paths, "Not specified");
            }
            other => panic!("Expected card, got {:?}", other),
        }
    }

    #[test]
    fn test_replies_for_errors_and_advisories() {
        let reply = parse_error_reply(&ParseError::MissingKeyword, "%");
        assert!(reply.as_text().unwrap().contains("`%fetchjobs cybersecurity -n 5`"));

        let reply = advisory_reply(&Advisory::CountClamped {
            requested: 999,
            applied: 30,
        });
        assert_eq!(
            reply.as_text(),
            Some("Number of results limited to maximum of 30.")
        );

        let reply = summary("developer", "All", 1234);
        assert_eq!(
            reply.as_text(),
            Some("Total jobs found for 'developer' in 'All': 1234")
        );
    }
}
