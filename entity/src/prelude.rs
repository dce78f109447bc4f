pub use super::campaign::Entity as Campaign;
pub use super::donation::Entity as Donation;
pub use super::wamumbi_user::Entity as WamumbiUser;
