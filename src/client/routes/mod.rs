pub mod campaigns;
pub mod donate;
pub mod home;
pub mod not_found;
pub mod sign_in;

pub use campaigns::Campaigns;
pub use donate::Donate;
pub use home::Home;
pub use not_found::NotFound;
pub use sign_in::SignIn;
