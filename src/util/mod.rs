pub mod http;
pub mod map;
pub mod text;
