// src/config/types.rs

pub const DEFAULT_MONTHLY_TARGET: f64 = 30_000.0;
pub const DEFAULT_BUSINESS_DAYS: u32 = 25;

/// Hard bounds for the sidebar controls.
pub const MIN_BUSINESS_DAYS: u32 = 1;
pub const MAX_BUSINESS_DAYS: u32 = 31;

/// Monthly sales target settings, owned by the session and editable from the
/// sidebar on every frame. Changing it never touches past records; the KPIs
/// are recomputed against whatever the current values are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetConfig {
    /// Liters to sell this month. Non-negative; 0 makes the completion ratio
    /// undefined rather than an error.
    pub monthly_target: f64,
    /// Business days in the month, always in [1, 31].
    pub business_days: u32,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            monthly_target: DEFAULT_MONTHLY_TARGET,
            business_days: DEFAULT_BUSINESS_DAYS,
        }
    }
}

impl TargetConfig {
    /// Boundary normalizer. The drag controls already enforce these ranges,
    /// this keeps the invariant independent of how values arrive.
    pub fn clamp_bounds(&mut self) {
        self.monthly_target = self.monthly_target.max(0.0);
        self.business_days = self.business_days.clamp(MIN_BUSINESS_DAYS, MAX_BUSINESS_DAYS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds_restores_the_invariants() {
        let mut cfg = TargetConfig {
            monthly_target: -5.0,
            business_days: 0,
        };
        cfg.clamp_bounds();
        assert_eq!(cfg.monthly_target, 0.0);
        assert_eq!(cfg.business_days, MIN_BUSINESS_DAYS);

        cfg.business_days = 99;
        cfg.clamp_bounds();
        assert_eq!(cfg.business_days, MAX_BUSINESS_DAYS);
    }

    #[test]
    fn in_range_values_pass_through() {
        let mut cfg = TargetConfig::default();
        cfg.clamp_bounds();
        assert_eq!(cfg, TargetConfig::default());
    }
}
