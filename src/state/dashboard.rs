use super::RequestSeq;
use crate::api::ApiResult;
use crate::models::ShortUrlRecord;

/// Records whose original or short URL contains `term`, ignoring case.
///
/// An empty term keeps every record, in order.
pub(crate) fn filter_records<'a>(
    records: &'a [ShortUrlRecord],
    term: &str,
) -> Vec<&'a ShortUrlRecord> {
    if term.is_empty() {
        return records.iter().collect();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.original_url.to_lowercase().contains(&needle)
                || r.short_url.to_lowercase().contains(&needle)
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct UrlStats {
    pub count: usize,
    pub total_clicks: u64,
    /// Rounded to one decimal; zero for an empty list.
    pub average_clicks: f64,
}

impl UrlStats {
    pub fn compute(records: &[ShortUrlRecord]) -> Self {
        let count = records.len();
        let total_clicks = records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.visits));
        let average_clicks = if count == 0 {
            0.0
        } else {
            ((total_clicks as f64 / count as f64) * 10.0).round() / 10.0
        };
        Self {
            count,
            total_clicks,
            average_clicks,
        }
    }

    pub fn average_label(&self) -> String {
        if self.count == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.average_clicks)
        }
    }
}

/// State behind the admin dashboard: the last fetched list plus the search
/// box. Everything shown in the table is derived from these two.
#[derive(Clone, Debug, Default)]
pub(crate) struct Dashboard {
    records: Vec<ShortUrlRecord>,
    pub search_term: String,
    pub loading: bool,
    pub error: Option<String>,
    seq: RequestSeq,
}

impl Dashboard {
    pub fn records(&self) -> &[ShortUrlRecord] {
        &self.records
    }

    /// Start a refresh; the returned tag must be handed back to
    /// [`Dashboard::finish_refresh`].
    pub fn begin_refresh(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.seq.next()
    }

    /// Apply a refresh result. Returns `false` when the response was stale
    /// and got dropped.
    pub fn finish_refresh(&mut self, id: u64, result: ApiResult<Vec<ShortUrlRecord>>) -> bool {
        if !self.seq.is_current(id) {
            return false;
        }
        match result {
            Ok(records) => self.records = records,
            Err(e) => self.error = Some(e.message),
        }
        self.loading = false;
        true
    }

    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    pub fn filtered(&self) -> Vec<&ShortUrlRecord> {
        filter_records(&self.records, &self.search_term)
    }

    /// Stats always cover the whole list, not the filtered view.
    pub fn stats(&self) -> UrlStats {
        UrlStats::compute(self.records())
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn empty_message(&self) -> &'static str {
        if self.search_term.is_empty() {
            "No URLs found"
        } else {
            "No URLs match your search"
        }
    }
}
