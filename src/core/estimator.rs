use crate::domain::model::RawVacancy;

pub const DEFAULT_LOCAL_CURRENCY: &str = "RUR";

const LOWER_BOUND_UPLIFT: f64 = 1.2;
const UPPER_BOUND_MARKDOWN: f64 = 0.8;

/// Turns a vacancy's salary range into a single local-currency figure.
#[derive(Debug, Clone)]
pub struct SalaryEstimator {
    local_currency: String,
}

impl SalaryEstimator {
    pub fn new(local_currency: impl Into<String>) -> Self {
        Self {
            local_currency: local_currency.into(),
        }
    }

    pub fn estimate(
        &self,
        salary_from: Option<f64>,
        salary_to: Option<f64>,
        currency: Option<&str>,
    ) -> Option<f64> {
        if let Some(code) = currency {
            if code != self.local_currency {
                return None;
            }
        }

        // A zero bound is not a real bound.
        let from = salary_from.filter(|v| *v != 0.0);
        let to = salary_to.filter(|v| *v != 0.0);

        match (from, to) {
            (None, None) => None,
            (Some(from), None) => Some(from * LOWER_BOUND_UPLIFT),
            (None, Some(to)) => Some(to * UPPER_BOUND_MARKDOWN),
            (Some(from), Some(to)) => Some((from + to) / 2.0),
        }
    }

    pub fn estimate_vacancy(&self, vacancy: &RawVacancy) -> Option<f64> {
        self.estimate(
            vacancy.salary_from,
            vacancy.salary_to,
            vacancy.currency.as_deref(),
        )
    }
}

impl Default for SalaryEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_LOCAL_CURRENCY)
    }
}
