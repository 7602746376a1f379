pub mod dashscope;

pub use dashscope::{DashScopeClient, DEFAULT_DASHSCOPE_ENDPOINT};
