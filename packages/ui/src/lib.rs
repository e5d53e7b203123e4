//! This crate contains all shared UI for the workspace.

mod i18n;
pub use i18n::{set_lang, t, use_lang, I18nProvider, Lang};

mod session;
pub use session::{save_profile, use_session, SessionProvider, SessionState};

mod toast;
pub use toast::{use_toasts, ToastProvider};

mod cards;
pub use cards::{category_icon, category_key, SchemeCard};

mod dashboard;
pub use dashboard::Dashboard;

mod schemes;
pub use schemes::SchemeListPage;

mod scheme_detail;
pub use scheme_detail::SchemeDetailPage;

mod saved;
pub use saved::SavedSchemesPage;

mod profile;
pub use profile::ProfileSetupPage;

mod chat;
pub use chat::ChatWidget;
