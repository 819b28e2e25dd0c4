//! Site module - Pricing toggle and waitlist sign-up

mod pricing;
mod waitlist;

pub use pricing::{BillingPeriod, PricingConfig, PricingToggle};
pub use waitlist::{WaitlistModal, WaitlistState};
