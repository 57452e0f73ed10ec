//! OTP delivery by SMS through the Twilio Messages API.

use crate::server::{config::TwilioConfig, error::AppError};

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

#[derive(Clone)]
pub struct SmsClient {
    http: reqwest::Client,
    config: TwilioConfig,
}

impl SmsClient {
    pub fn new(http: reqwest::Client, config: TwilioConfig) -> Self {
        Self { http, config }
    }

    /// Sends the registration code to `phone_number`.
    ///
    /// # Returns
    /// - `Ok(())` - Twilio accepted the message
    /// - `Err(AppError::ReqwestErr)` - Request failed or Twilio returned an error status
    pub async fn send_otp(
        &self,
        phone_number: &str,
        otp: i32,
        expires_in_minutes: i64,
    ) -> Result<(), AppError> {
        let body = otp_sms_body(otp, expires_in_minutes);

        self.http
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("To", phone_number),
                ("From", self.config.from_number.as_str()),
                ("Body", body.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        tracing::info!(phone_number, "OTP SMS sent");

        Ok(())
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_BASE, self.config.account_sid
        )
    }
}

fn otp_sms_body(otp: i32, expires_in_minutes: i64) -> String {
    format!(
        "Trend Connect - Your registration code is:\n{}\n\nPlease use it within the next {} minutes.\nIf you didn't request this, please ignore this message.",
        otp, expires_in_minutes
    )
}
