pub mod endpoints;
pub mod hockey_client;
pub mod stubs;

pub use endpoints::ApiRequest;
pub use hockey_client::HockeyClient;
