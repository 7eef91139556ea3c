mod feed;
mod signup;

pub use feed::FeedPage;
pub use signup::SignupPage;
