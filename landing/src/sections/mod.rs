// Landing page sections

/// Product name used across navigation, footer and copyright lines
pub const BRAND: &str = "Mein Stylist";

mod benefits;
mod contact;
mod cta;
mod features;
mod footer;
mod hero;
mod membership;
mod nav;
mod pricing;

pub use benefits::Benefits;
pub use contact::ContactSection;
pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use membership::{MembershipHeader, MembershipInfo};
pub use nav::{Nav, NavLink};
pub use pricing::Pricing;
