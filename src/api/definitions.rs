//! Reference data service.

use std::sync::Arc;

use super::{Endpoint, QueryOptions};
use crate::client::ClientInner;
use crate::models::{Country, Currency, FetchResult, FinancialSystem};
use crate::{ApiResponse, Result};

const COUNTRIES: Endpoint = Endpoint::get("/api/v1/Definitions/countries");
const CURRENCIES: Endpoint = Endpoint::get("/api/v1/Definitions/currencies");
const FINANCIAL_SYSTEMS: Endpoint = Endpoint::get("/api/v1/Definitions/financialsystems");

/// Read-only service for platform-wide reference tables.
pub struct DefinitionsService {
    inner: Arc<ClientInner>,
}

impl DefinitionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Query the countries known to the platform.
    pub async fn countries(&self, options: &QueryOptions) -> Result<ApiResponse<FetchResult<Country>>> {
        let request = COUNTRIES.request(&[]).query(options.to_params());
        self.inner.execute(request).await
    }

    /// Query the currencies known to the platform.
    pub async fn currencies(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<FetchResult<Currency>>> {
        let request = CURRENCIES.request(&[]).query(options.to_params());
        self.inner.execute(request).await
    }

    /// Query the accounting systems the platform can connect to.
    pub async fn financial_systems(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<FetchResult<FinancialSystem>>> {
        let request = FINANCIAL_SYSTEMS.request(&[]).query(options.to_params());
        self.inner.execute(request).await
    }
}
