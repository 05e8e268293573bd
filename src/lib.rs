pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod html;
pub mod normalize;
pub mod pipeline;
pub mod scrapers;
pub mod storage;
