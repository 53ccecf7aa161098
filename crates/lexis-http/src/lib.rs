mod client;

pub use client::HttpFetcher;
