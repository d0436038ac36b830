//! Accrual operations.

use reqwest::Method;
use tracing::debug;

use crate::error::Error;
use crate::models::{Accrual, AccrualReceipt};

use super::Client;

/// Transaction operations over a shared [`Client`].
#[derive(Clone, Copy)]
pub struct Transactions<'c> {
    pub(crate) client: &'c Client,
}

impl Transactions<'_> {
    /// Record an earn-points transaction.
    ///
    /// Returns the transaction id assigned by the upstream service.
    pub async fn earn(&self, accrual: &Accrual) -> Result<String, Error> {
        let request = self
            .client
            .request(Method::PUT, "points/accrue")
            .json(accrual);
        let receipt: AccrualReceipt = self.client.execute(request).await?;

        debug!(trx_id = %receipt.trx_id, "accrual recorded");
        Ok(receipt.trx_id)
    }
}
