pub mod gallery;
pub mod modal;
pub mod navigator;

pub use gallery::PortfolioGallery;
pub use modal::PortfolioModal;
