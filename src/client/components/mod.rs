pub mod campaign_list;
pub mod footer;
pub mod layout;
pub mod navbar;
pub mod page;
pub mod sidebar;

pub use campaign_list::CampaignList;
pub use footer::Footer;
pub use layout::Layout;
pub use navbar::Navbar;
pub use page::Page;
pub use sidebar::Sidebar;
