/// The largest `maxResults` value both endpoints accept.
pub const MAX_PAGE_SIZE: u32 = 50;
/// Iteration ceiling used when fetching everything, so that a server which
/// never stops handing out page tokens can't keep us looping forever.
pub const FETCH_ALL_PAGE_LIMIT: usize = 10_000;

/// How many results the caller wants in total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Follow page tokens until the server runs out of them.
    All,
    Count(u32),
}

impl Target {
    /// Non-positive counts mean "fetch everything".
    pub fn from_count(count: i64) -> Self {
        if count <= 0 {
            Target::All
        } else if count > u32::MAX as i64 {
            Target::Count(u32::MAX)
        } else {
            Target::Count(count as u32)
        }
    }
}

impl From<i64> for Target {
    fn from(count: i64) -> Self { Target::from_count(count) }
}

/// Page size and number of page requests allowed for a single call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageBudget {
    pub page_size: u32,
    pub max_pages: usize,
}

impl PageBudget {
    /// Targets above a single page are split into `target / 50` full pages.
    /// The division truncates: 75 yields one page of 50, 120 yields two.
    /// A zero count is the same as `Target::All`.
    pub fn for_target(target: Target) -> Self {
        match target {
            Target::All | Target::Count(0) => PageBudget {
                page_size: MAX_PAGE_SIZE,
                max_pages: FETCH_ALL_PAGE_LIMIT,
            },
            Target::Count(count) if count > MAX_PAGE_SIZE => PageBudget {
                page_size: MAX_PAGE_SIZE,
                max_pages: (count / MAX_PAGE_SIZE) as usize,
            },
            Target::Count(count) => PageBudget {
                page_size: count,
                max_pages: 1,
            },
        }
    }
}
