pub mod use_router;
pub mod use_session;

pub use use_router::{use_router, RouterProvider};
pub use use_session::{use_session, SessionProvider};
