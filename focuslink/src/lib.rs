mod client;
mod endpoint_url;
mod state;

pub(crate) use endpoint_url::*;

pub use client::*;
pub use state::*;
