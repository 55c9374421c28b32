//! Page sections, top to bottom.

mod contact;
mod footer;
mod hero;
mod manifesto;
mod services;
mod vision;
mod work;

pub use contact::Contact;
pub use footer::SiteFooter;
pub use hero::Hero;
pub use manifesto::Manifesto;
pub use services::Services;
pub use vision::Vision;
pub use work::Work;
