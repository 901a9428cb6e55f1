#![allow(dead_code)]

pub mod mock_cache;
pub mod mock_clientset;

pub use mock_cache::FailingInformer;
pub use mock_clientset::MockClientset;
