pub mod dataset;
pub mod feed;
pub mod filter;
pub mod post;
pub mod state;
pub mod tab;
