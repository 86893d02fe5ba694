//! Currency conversion service.

use std::sync::Arc;

use chrono::NaiveDate;

use super::Endpoint;
use crate::client::{ClientInner, QueryParams};
use crate::models::{BulkCurrencyConversion, CurrencyRate};
use crate::{ApiResponse, Result};

const RATE: Endpoint = Endpoint::get("/api/v1/Currencies/{source}/{destination}");
const BULK: Endpoint = Endpoint::post("/api/v1/Currencies/bulk");

/// Service for currency exchange rates.
pub struct CurrenciesService {
    inner: Arc<ClientInner>,
}

impl CurrenciesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the rate converting `source` into `destination`.
    ///
    /// `date` defaults to today and `data_provider` to the server's default
    /// rate source.
    pub async fn currency_rate(
        &self,
        source: &str,
        destination: &str,
        date: Option<NaiveDate>,
        data_provider: Option<&str>,
    ) -> Result<ApiResponse<CurrencyRate>> {
        let request = RATE.request(&[&source, &destination]).query(
            QueryParams::new()
                .with("date", date)
                .with("dataProvider", data_provider),
        );
        self.inner.execute(request).await
    }

    /// Convert many (date, source) pairs into `destination` in one call.
    pub async fn bulk_currency_data(
        &self,
        destination: &str,
        conversions: &[BulkCurrencyConversion],
    ) -> Result<ApiResponse<Vec<CurrencyRate>>> {
        let request = BULK
            .request(&[])
            .query(QueryParams::new().with("destinationCurrency", Some(destination)))
            .json(conversions)?;
        self.inner.execute(request).await
    }
}
