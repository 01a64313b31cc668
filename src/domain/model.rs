use serde::{Deserialize, Serialize};

/// Salary fields of one vacancy as a job source reports them.
///
/// `currency` is `None` for sources that quote every figure in the local
/// currency and do not send a currency code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawVacancy {
    pub salary_from: Option<f64>,
    pub salary_to: Option<f64>,
    pub currency: Option<String>,
}

/// One page of search results for a keyword.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageResult {
    pub items: Vec<RawVacancy>,
    /// Total matching vacancies as reported by the source.
    pub found: u64,
    /// Total page count, reported or derived from `found`.
    pub pages: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KeywordStats {
    pub found: u64,
    pub processed: u64,
    /// Mean estimate truncated toward zero; 0 when nothing was processed.
    pub average: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordRow {
    pub keyword: String,
    pub stats: KeywordStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceReport {
    pub title: String,
    pub rows: Vec<KeywordRow>,
}
