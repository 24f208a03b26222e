//! Query Builder
//!
//! Maps a [`SearchRequest`] onto job-search API parameters.

use chrono::NaiveDate;

use crate::domain::entities::{
    DateWindow, QueryParameters, SearchLimits, SearchRequest, DEFAULT_HIRING_PATH,
};

const HIRING_PATH_DELIMITER: &str = ";";

/// Build query parameters for a request, with the window ending on `today`
pub fn build(req: &SearchRequest, limits: &SearchLimits, today: NaiveDate) -> QueryParameters {
    with_window(req, DateWindow::trailing(today, limits.window_days))
}

/// Build query parameters using the local date
pub fn build_now(req: &SearchRequest, limits: &SearchLimits) -> QueryParameters {
    with_window(req, DateWindow::trailing_from_now(limits.window_days))
}

fn with_window(req: &SearchRequest, window: DateWindow) -> QueryParameters {
    let hiring_path = if req.hiring_paths.is_empty() {
        DEFAULT_HIRING_PATH.to_string()
    } else {
        req.hiring_paths.join(HIRING_PATH_DELIMITER)
    };

    QueryParameters {
        keyword: req.keyword.clone(),
        results_per_page: req.result_count,
        location_name: req.has_location().then(|| req.location.clone()),
        hiring_path,
        window,
    }
}
