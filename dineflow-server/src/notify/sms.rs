//! SMS transport (Twilio REST API)

/// Twilio messaging client
///
/// 通过 REST API 发送，无 SDK 依赖
#[derive(Clone)]
pub struct TwilioClient {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
    api_url: String,
}

impl TwilioClient {
    /// Build from credentials; `None` when any of them is unset
    pub fn from_config(
        account_sid: Option<&str>,
        auth_token: Option<&str>,
        from_number: Option<&str>,
    ) -> Option<Self> {
        Some(Self {
            client: reqwest::Client::new(),
            account_sid: account_sid?.to_string(),
            auth_token: auth_token?.to_string(),
            from_number: from_number?.to_string(),
            api_url: "https://api.twilio.com".to_string(),
        })
    }

    /// Send one SMS
    pub async fn send(
        &self,
        to: &str,
        body: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_url, self.account_sid
        );
        let resp = self
            .client
            .post(url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", self.from_number.as_str()), ("Body", body)])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(format!("Twilio send failed: {status} - {text}").into());
        }
        Ok(())
    }
}
