mod auth_guard;
mod error_banner;
mod form_button;
mod icons;
mod nav;
mod requirement_badge;
mod signup_form;

pub use auth_guard::AuthGuard;
pub use error_banner::ErrorBanner;
pub use form_button::FormButton;
pub use nav::Nav;
pub use requirement_badge::RequirementBadge;
pub use signup_form::SignupForm;
