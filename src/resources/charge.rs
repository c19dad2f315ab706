//! The Charge resource

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::form::{FormValues, ToFormValues};
use crate::http::Client;
use crate::pagination::{Identifiable, List, ListIter, SearchIter, SearchList};
use crate::params::{ListParams, ListParamsContainer, SearchParams, SearchParamsContainer};

/// A charge against a customer's payment method
#[derive(Debug, Clone, Deserialize)]
pub struct Charge {
    /// Unique object ID (`ch_...`)
    pub id: String,
    /// Amount in the smallest currency unit
    pub amount: i64,
    /// Three-letter ISO currency code
    pub currency: String,
    /// ID of the customer this charge belongs to, if any
    #[serde(default)]
    pub customer: Option<String>,
    /// Whether the charge succeeded
    #[serde(default)]
    pub paid: bool,
    /// Creation time
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
}

impl Identifiable for Charge {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Parameters for listing charges
#[derive(Debug, Clone, Default)]
pub struct ChargeListParams {
    /// Generic paging controls
    pub params: ListParams,
    /// Only return charges for this customer
    pub customer: Option<String>,
}

impl ListParamsContainer for ChargeListParams {
    fn list_params(&self) -> &ListParams {
        &self.params
    }
}

impl ToFormValues for ChargeListParams {
    fn encode_form(&self, form: &mut FormValues) {
        self.params.encode_form(form);
        if let Some(customer) = &self.customer {
            form.add("customer", customer);
        }
    }
}

/// Parameters for searching charges
#[derive(Debug, Clone, Default)]
pub struct ChargeSearchParams {
    /// Generic search controls, including the query expression
    pub params: SearchParams,
}

impl ChargeSearchParams {
    /// Create search params for a query expression
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            params: SearchParams::new(query),
        }
    }
}

impl SearchParamsContainer for ChargeSearchParams {
    fn search_params(&self) -> &SearchParams {
        &self.params
    }
}

impl ToFormValues for ChargeSearchParams {
    fn encode_form(&self, form: &mut FormValues) {
        self.params.encode_form(form);
    }
}

impl Charge {
    /// List charges, lazily paging through every match
    pub fn list(client: &Client, params: &ChargeListParams) -> ListIter<Charge> {
        let client = client.clone();
        ListIter::new(
            Some(params),
            Box::new(move |_params: &ListParams, form: &FormValues| {
                let mut page: List<Charge> = client.get_form("/charges", form)?;
                let items = std::mem::take(&mut page.data);
                Ok((items, page))
            }),
        )
    }

    /// Search charges with a query expression
    pub fn search(client: &Client, params: &ChargeSearchParams) -> SearchIter<Charge> {
        let client = client.clone();
        SearchIter::new(
            Some(params),
            Box::new(move |_params: &SearchParams, form: &FormValues| {
                let mut page: SearchList<Charge> = client.get_form("/charges/search", form)?;
                let items = std::mem::take(&mut page.data);
                Ok((items, page))
            }),
        )
    }
}
