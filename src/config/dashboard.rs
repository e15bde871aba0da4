use crate::config::env_or;
use crate::core::{AppError, Result};
use crate::modules::dashboard::models::{DashboardWindows, DEFAULT_DAYS, DEFAULT_MONTHS};
use serde::Deserialize;

/// Earning window sizes served by the dashboard endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Daily buckets when the request does not ask for a size
    pub days: u32,
    /// Monthly buckets when the request does not ask for a size
    pub months: u32,
    pub max_days: u32,
    pub max_months: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            months: DEFAULT_MONTHS,
            max_days: 366,
            max_months: 120,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(DashboardConfig {
            days: env_or("DASHBOARD_DAYS", defaults.days)?,
            months: env_or("DASHBOARD_MONTHS", defaults.months)?,
            max_days: env_or("DASHBOARD_MAX_DAYS", defaults.max_days)?,
            max_months: env_or("DASHBOARD_MAX_MONTHS", defaults.max_months)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        DashboardWindows::new(self.days, self.months)
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        if self.days > self.max_days || self.months > self.max_months {
            return Err(AppError::Configuration(
                "Default dashboard windows exceed the configured maxima".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve requested window sizes against defaults and maxima
    pub fn windows(&self, days: Option<u32>, months: Option<u32>) -> Result<DashboardWindows> {
        let windows = DashboardWindows::new(
            days.unwrap_or(self.days),
            months.unwrap_or(self.months),
        )?;
        windows.ensure_within(self.max_days, self.max_months)?;

        Ok(windows)
    }
}
