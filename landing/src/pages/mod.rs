// Landing page routes

mod home;
mod membership;
mod not_found;

pub use home::HomePage;
pub use membership::MembershipPage;
pub use not_found::NotFoundPage;
