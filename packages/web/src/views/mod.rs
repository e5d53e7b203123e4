mod home;
pub use home::Home;

mod schemes;
pub use schemes::{SchemeDetail, Schemes};

mod saved;
pub use saved::Saved;

mod profile;
pub use profile::Profile;
