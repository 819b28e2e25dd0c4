//! Pricing Module
//! Monthly/yearly billing toggle and the savings shown for yearly plans.

use serde::{Deserialize, Serialize};

/// Billing period selected on the pricing toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "/ month",
            BillingPeriod::Yearly => "/ year",
        }
    }
}

/// Price of one plan under both billing periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPrice {
    pub name: String,
    pub monthly: u32,
    pub yearly: u32,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub currency: String,
    pub plans: Vec<PlanPrice>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: "CAD".to_string(),
            plans: vec![
                PlanPrice {
                    name: "Basic".to_string(),
                    monthly: 99,
                    yearly: 89,
                    featured: false,
                },
                PlanPrice {
                    name: "Pro".to_string(),
                    monthly: 149,
                    yearly: 134,
                    featured: true,
                },
            ],
        }
    }
}

/// Yearly discount relative to the monthly price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Savings {
    pub percent: u32,
    pub per_month: u32,
}

/// What a pricing card shows for the selected period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceDisplay {
    pub amount: u32,
    pub period_label: &'static str,
    pub savings: Option<Savings>,
}

impl PlanPrice {
    pub fn savings(&self) -> Option<Savings> {
        if self.monthly == 0 || self.yearly >= self.monthly {
            return None;
        }
        let per_month = self.monthly - self.yearly;
        let percent = (per_month as f64 / self.monthly as f64 * 100.0).round() as u32;
        Some(Savings { percent, per_month })
    }

    pub fn display(&self, period: BillingPeriod) -> PriceDisplay {
        match period {
            BillingPeriod::Monthly => PriceDisplay {
                amount: self.monthly,
                period_label: period.label(),
                savings: None,
            },
            BillingPeriod::Yearly => PriceDisplay {
                amount: self.yearly,
                period_label: period.label(),
                savings: self.savings(),
            },
        }
    }
}

/// Billing toggle state.
#[derive(Debug, Default)]
pub struct PricingToggle {
    period: BillingPeriod,
}

impl PricingToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn period(&self) -> BillingPeriod {
        self.period
    }

    /// Select a period. Returns true when it changed.
    pub fn set_period(&mut self, period: BillingPeriod) -> bool {
        if self.period == period {
            return false;
        }
        self.period = period;
        tracing::info!("Switched to {:?} billing", period);
        true
    }

    pub fn toggle(&mut self) {
        let next = match self.period {
            BillingPeriod::Monthly => BillingPeriod::Yearly,
            BillingPeriod::Yearly => BillingPeriod::Monthly,
        };
        self.set_period(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_savings() {
        let config = PricingConfig::default();
        let basic = &config.plans[0];
        let pro = &config.plans[1];

        assert_eq!(basic.savings(), Some(Savings { percent: 10, per_month: 10 }));
        assert_eq!(pro.savings(), Some(Savings { percent: 10, per_month: 15 }));
    }

    #[test]
    fn test_no_savings_without_discount() {
        let plan = PlanPrice {
            name: "Flat".into(),
            monthly: 50,
            yearly: 50,
            featured: false,
        };
        assert_eq!(plan.savings(), None);
        assert_eq!(plan.display(BillingPeriod::Yearly).savings, None);
    }

    #[test]
    fn test_display_follows_toggle() {
        let plan = PricingConfig::default().plans[1].clone();
        let mut toggle = PricingToggle::new();

        let monthly = plan.display(toggle.period());
        assert_eq!(monthly.amount, 149);
        assert_eq!(monthly.period_label, "/ month");
        assert!(monthly.savings.is_none());

        toggle.toggle();
        let yearly = plan.display(toggle.period());
        assert_eq!(yearly.amount, 134);
        assert_eq!(yearly.period_label, "/ year");
        assert!(yearly.savings.is_some());

        assert!(!toggle.set_period(BillingPeriod::Yearly));
        assert!(toggle.set_period(BillingPeriod::Monthly));
    }
}
