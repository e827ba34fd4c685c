//! Values of the `X-HealSumm-Status` response header.

pub const HEALSUMM_STATUS_HEADER: &str = "X-HealSumm-Status";
pub const HEALSUMM_STATUS_HEALTHY: &str = "healthy";
pub const HEALSUMM_STATUS_READY: &str = "ready";
pub const HEALSUMM_STATUS_NOT_READY: &str = "not_ready";
pub const HEALSUMM_STATUS_STORED: &str = "stored";
pub const HEALSUMM_STATUS_ERROR: &str = "error";
