use chrono::NaiveDate;
use releasebot_arr_api::{ArrClient, ArrType, InstanceConfig};
use url::Url;
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

pub fn client() -> ArrClient {
    ArrClient::new(reqwest::Client::new())
}

pub fn instance(server: &MockServer, label: &str, kind: ArrType) -> InstanceConfig {
    InstanceConfig::new(label, Url::parse(&server.uri()).unwrap(), API_KEY, kind)
}

/// A base URL nothing is listening on: the port is taken from a listener that is then closed.
pub fn refused_url() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    Url::parse(&format!("http://127.0.0.1:{}", port)).unwrap()
}
