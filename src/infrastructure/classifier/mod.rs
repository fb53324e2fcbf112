pub mod mock_classifier;
pub mod remote_gateway;
pub mod traits;
