pub mod cedric_client;

pub use cedric_client::CedricClient;
