//! Reusable pieces of the page chrome.

pub mod app_navbar;
pub mod archive_overlay;
pub mod cursor;
pub mod icons;
pub mod loader;
pub mod logo;
pub mod menu_overlay;

pub use app_navbar::AppNavbar;
pub use archive_overlay::ArchiveOverlay;
pub use cursor::CursorFollower;
pub use icons::IconSvg;
pub use loader::Loader;
pub use logo::JurneLogo;
pub use menu_overlay::MenuOverlay;
