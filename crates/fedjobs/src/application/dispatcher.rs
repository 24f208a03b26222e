//! Command Dispatcher (Use Case)
//!
//! Runs one chat command through parse → build → search → format and
//! sends the resulting replies to the invoking channel, in order.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::application::{formatter, parser, query};
use crate::domain::entities::{ReplyStyle, ReplyUnit, SearchLimits, SearchOutcome};
use crate::domain::errors::DomainError;
use crate::ports::{JobSearchService, ReplySink};

pub const DEFAULT_PREFIX: &str = "%";

/// Keyword behind the `fetchjobs_cybersecurity` shortcut
pub const PRESET_KEYWORD: &str = "cybersecurity";

/// How a command invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Arguments did not parse; no search was made
    Rejected,
    /// The search call failed
    Failed,
    /// The search succeeded with no listings
    Empty,
    /// Listings were sent
    Listed,
    /// A reply that involves no search (hello, help)
    Informational,
}

/// Summary of one command invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub outcome: OutcomeKind,
    pub units_sent: usize,
}

/// Application service handling job search commands
pub struct CommandDispatcher<S: JobSearchService> {
    search: Arc<S>,
    limits: SearchLimits,
    style: ReplyStyle,
    prefix: String,
}

impl<S: JobSearchService> CommandDispatcher<S> {
    pub fn new(search: Arc<S>, limits: SearchLimits) -> Self {
        Self {
            search,
            limits,
            style: ReplyStyle::default(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Set how job listings are rendered
    pub fn with_style(mut self, style: ReplyStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the command prefix shown in help and error replies
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Handle `fetchjobs <keyword...> [-n N] [-l location] [-p path]`
    pub async fn fetch_jobs<T: AsRef<str> + Sync>(
        &self,
        args: &[T],
        sink: &dyn ReplySink,
    ) -> Result<DispatchReport, DomainError> {
        let parsed = match parser::parse(args, &self.limits) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(error = %e, "Rejected fetchjobs arguments");
                let reply = formatter::parse_error_reply(&e, &self.prefix);
                return self.send_all(&[reply], sink, OutcomeKind::Rejected).await;
            }
        };

        let mut sent = 0;
        for advisory in &parsed.advisories {
            sink.send(&formatter::advisory_reply(advisory)).await?;
            sent += 1;
        }

        let request = parsed.request;
        let params = query::build_now(&request, &self.limits);
        info!(
            keyword = %request.keyword,
            count = request.result_count,
            location = %request.location,
            hiring_path = %params.hiring_path,
            "Searching jobs"
        );

        let outcome = self.search.search(&params).await;

        let (kind, mut replies) = match &outcome {
            SearchOutcome::Failure(failure) => {
                warn!(reason = failure.reason(), error = %failure, "Job search failed");
                (OutcomeKind::Failed, Vec::new())
            }
            SearchOutcome::Success { results, .. } if results.is_empty() => {
                (OutcomeKind::Empty, Vec::new())
            }
            SearchOutcome::Success { total_count, .. } => (
                OutcomeKind::Listed,
                vec![formatter::summary(
                    &request.keyword,
                    &request.location,
                    *total_count,
                )],
            ),
        };
        replies.extend(formatter::format(
            &outcome,
            request.result_count as usize,
            self.style,
        ));

        let report = self.send_all(&replies, sink, kind).await?;
        Ok(DispatchReport {
            outcome: report.outcome,
            units_sent: report.units_sent + sent,
        })
    }

    /// Handle `fetchjobs_cybersecurity`: a fixed keyword with default options
    pub async fn fetch_preset(&self, sink: &dyn ReplySink) -> Result<DispatchReport, DomainError> {
        self.fetch_jobs(&[PRESET_KEYWORD], sink).await
    }

    /// Handle `hello`
    pub async fn hello(&self, sink: &dyn ReplySink) -> Result<DispatchReport, DomainError> {
        let reply = ReplyUnit::text(format!(
            "Hello I am a bot, do {}help for more info",
            self.prefix
        ));
        self.send_all(&[reply], sink, OutcomeKind::Informational)
            .await
    }

    /// Handle `help`
    pub async fn help(&self, sink: &dyn ReplySink) -> Result<DispatchReport, DomainError> {
        let reply = ReplyUnit::text(self.help_text());
        self.send_all(&[reply], sink, OutcomeKind::Informational)
            .await
    }

    /// Usage text for the command surface
    pub fn help_text(&self) -> String {
        let p = &self.prefix;
        format!(
            "Fetches federal jobs posted in the last {days} days.\n\n\
             Usage:\n    {p}fetchjobs <keyword> [-n number] [-l location] [-p hiring-path]\n\n\
             Arguments:\n    \
             keyword : The job keyword(s) to search for.\n    \
             -n number : The number of results to return. Default is {default}. Max is {max}.\n    \
             -l location : The location to filter jobs by. Default is 'All'. One location at a time.\n    \
             -p hiring-path : Hiring path to filter by, may repeat. Default is 'public'.\n\n\
             Other commands:\n    \
             {p}fetchjobs_cybersecurity : Latest cybersecurity jobs.\n    \
             {p}hello : Greets you.\n\n\
             Example:\n    {p}fetchjobs developer -n 5 -l \"New York\"",
            days = self.limits.window_days,
            default = self.limits.default_result_count,
            max = self.limits.max_result_count,
        )
    }

    async fn send_all(
        &self,
        replies: &[ReplyUnit],
        sink: &dyn ReplySink,
        outcome: OutcomeKind,
    ) -> Result<DispatchReport, DomainError> {
        for reply in replies {
            sink.send(reply).await?;
        }
        Ok(DispatchReport {
            outcome,
            units_sent: replies.len(),
        })
    }
}
