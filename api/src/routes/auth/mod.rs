//! Session endpoints: /auth/login, /auth/refresh, /auth/logout

pub mod login;
pub mod logout;
pub mod refresh;

pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
