//! Turns a page request into a `results_in_range` call.

use concept_search_types::SearchResult;
use serde::Serialize;

use crate::error::Result;
use crate::provider::PagedResults;

/// Page size used when neither the caller nor the provider picks one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Upper bound on a caller-requested page size.
pub const DEFAULT_MAX_PAGE_SIZE: usize = 200;

/// Page sizing limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingConfig {
    /// Size used when the request names none.
    pub default_page_size: usize,
    /// Largest size a request may ask for.
    pub max_page_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl PagingConfig {
    /// Creates a config; `max_page_size` is raised to at least `default_page_size`.
    pub fn new(default_page_size: usize, max_page_size: usize) -> Self {
        Self {
            default_page_size,
            max_page_size: max_page_size.max(default_page_size),
        }
    }

    /// Picks the page size for a request.
    ///
    /// The caller's count wins (capped at the maximum), then the provider's
    /// preference, then the default.
    pub fn page_size(&self, requested: Option<usize>, preferred: Option<usize>) -> usize {
        requested
            .or(preferred)
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size)
    }
}

/// One page request from the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Index of the first result.
    pub offset: usize,
    /// Requested page size; zero asks for the total only.
    pub count: Option<usize>,
    /// Whether to compute the total match count.
    pub include_total: bool,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            count: None,
            include_total: true,
        }
    }
}

/// One assembled page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Results in code order.
    pub entries: Vec<SearchResult>,
    /// Total number of matches, when computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    /// Index of the first entry.
    pub offset: usize,
    /// Offset of the next page, if more results may follow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<usize>,
}

/// Assembles the page `request` asks for from `provider`.
///
/// Either the whole page is returned or the error is; there is no short
/// page standing in for a failed query.
pub fn assemble_page<P>(provider: &P, request: &PageRequest, config: &PagingConfig) -> Result<Page>
where
    P: PagedResults + ?Sized,
{
    let size = config.page_size(request.count, provider.preferred_page_size());

    let total = if request.include_total {
        provider.total_count()?
    } else {
        None
    };

    let past_end = total.is_some_and(|t| request.offset >= t);
    let entries = if size == 0 || past_end {
        Vec::new()
    } else {
        provider.results_in_range(request.offset, request.offset.saturating_add(size))?
    };

    let end = request.offset + entries.len();
    let next_offset = match total {
        _ if size == 0 => None,
        Some(total) => (end < total).then_some(end),
        None => (entries.len() == size).then_some(end),
    };

    Ok(Page {
        entries,
        total,
        offset: request.offset,
        next_offset,
    })
}
