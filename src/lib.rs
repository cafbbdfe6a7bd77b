//! Terminal application shell: two routed screens sharing the player's
//! display name through a session store.

pub mod config;
pub mod logging;
pub mod router;
pub mod store;
pub mod ui;
