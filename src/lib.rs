pub mod api;
pub mod catalog;
pub mod config;
pub mod data;
pub mod dataset;
pub mod filter;
pub mod query;
pub mod rating;
pub mod session;
pub mod submission;
pub mod view;
