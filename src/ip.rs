use serde::Deserialize;

use crate::core::WordlensError;

const IP_ENDPOINT: &str = "https://api.ipify.org?format=json";

#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

/// Ask ipify for the machine's public address. Standalone utility, no
/// interaction with the lookup pipeline.
pub async fn fetch_public_ip() -> Result<String, WordlensError> {
    let response: IpResponse =
        reqwest::Client::new().get(IP_ENDPOINT).send().await?.json().await?;

    Ok(response.ip)
}
