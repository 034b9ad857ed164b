pub mod filter;


pub use filter::{filter_headers, Direction, HeaderFilterStrategy, HttpHeaderFilterStrategy};
