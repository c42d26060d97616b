//! UI Components

pub mod connection;
pub mod contract_info;
pub mod footer;
pub mod navbar;
pub mod notice;
pub mod session;
pub mod stats;

pub use connection::ConnectionCard;
pub use contract_info::ContractInfoCard;
pub use footer::Footer;
pub use navbar::Navbar;
pub use notice::NoticeBanner;
pub use session::SessionLookupCard;
pub use stats::StatsCard;
