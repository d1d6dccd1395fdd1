//! UPI lookup pipeline.
//!
//! Two strictly sequential upstream calls:
//! 1. Resolve the UPI identifier with the VPA verification provider.
//! 2. If the record carries an IFSC code, fetch bank metadata for it.
//!
//! Only step 1 can fail the request. Step 2 is best-effort and degrades to a
//! warning payload.

use crate::config::Config;
use crate::errors::AppError;
use crate::ifsc_client::IfscClient;
use crate::models::UpiLookupResponse;
use crate::vpa_client::VpaClient;

#[derive(Clone)]
pub struct UpiLookupService {
    vpa_client: VpaClient,
    ifsc_client: IfscClient,
}

impl UpiLookupService {
    pub fn new(vpa_client: VpaClient, ifsc_client: IfscClient) -> Self {
        Self {
            vpa_client,
            ifsc_client,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Ok(Self::new(
            VpaClient::from_config(config)?,
            IfscClient::from_config(config)?,
        ))
    }

    /// Resolves `upi_id` and attaches bank details when an IFSC code is known.
    pub async fn lookup(&self, upi_id: &str) -> Result<UpiLookupResponse, AppError> {
        let vpa_details = self.vpa_client.resolve(upi_id).await?;

        let bank_details_raw = match vpa_details.ifsc_code() {
            Some(ifsc) => Some(self.ifsc_client.lookup(ifsc).await.into_payload()),
            None => {
                tracing::debug!("No IFSC code for {}, skipping bank lookup", upi_id);
                None
            }
        };

        Ok(UpiLookupResponse {
            vpa_details,
            bank_details_raw,
        })
    }
}
