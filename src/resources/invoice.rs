//! The Invoice resource

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::form::{FormValues, ToFormValues};
use crate::http::Client;
use crate::pagination::{Identifiable, List, ListIter, SearchIter, SearchList};
use crate::params::{ListParams, ListParamsContainer, SearchParams, SearchParamsContainer};

/// Lifecycle status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Not yet finalized; still editable
    Draft,
    /// Finalized and awaiting payment
    Open,
    /// Paid in full
    Paid,
    /// Unlikely to ever be paid
    Uncollectible,
    /// Voided after finalization
    Void,
}

impl InvoiceStatus {
    /// The wire representation of the status
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Open => "open",
            Self::Paid => "paid",
            Self::Uncollectible => "uncollectible",
            Self::Void => "void",
        }
    }
}

/// An invoice issued to a customer
#[derive(Debug, Clone, Deserialize)]
pub struct Invoice {
    /// Unique object ID (`in_...`)
    pub id: String,
    /// ID of the customer this invoice was issued to, if any
    #[serde(default)]
    pub customer: Option<String>,
    /// Amount remaining to be paid, in the smallest currency unit
    pub amount_due: i64,
    /// Three-letter ISO currency code
    pub currency: String,
    /// Current lifecycle status
    #[serde(default)]
    pub status: Option<InvoiceStatus>,
    /// Creation time
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
}

impl Identifiable for Invoice {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Parameters for listing invoices
#[derive(Debug, Clone, Default)]
pub struct InvoiceListParams {
    /// Generic paging controls
    pub params: ListParams,
    /// Only return invoices for this customer
    pub customer: Option<String>,
    /// Only return invoices with this status
    pub status: Option<InvoiceStatus>,
}

impl ListParamsContainer for InvoiceListParams {
    fn list_params(&self) -> &ListParams {
        &self.params
    }
}

impl ToFormValues for InvoiceListParams {
    fn encode_form(&self, form: &mut FormValues) {
        self.params.encode_form(form);
        if let Some(customer) = &self.customer {
            form.add("customer", customer);
        }
        if let Some(status) = self.status {
            form.add("status", status.as_str());
        }
    }
}

/// Parameters for searching invoices
#[derive(Debug, Clone, Default)]
pub struct InvoiceSearchParams {
    /// Generic search controls, including the query expression
    pub params: SearchParams,
}

impl InvoiceSearchParams {
    /// Create search params for a query expression
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            params: SearchParams::new(query),
        }
    }
}

impl SearchParamsContainer for InvoiceSearchParams {
    fn search_params(&self) -> &SearchParams {
        &self.params
    }
}

impl ToFormValues for InvoiceSearchParams {
    fn encode_form(&self, form: &mut FormValues) {
        self.params.encode_form(form);
    }
}

impl Invoice {
    /// List invoices, lazily paging through every match
    pub fn list(client: &Client, params: &InvoiceListParams) -> ListIter<Invoice> {
        let client = client.clone();
        ListIter::new(
            Some(params),
            Box::new(move |_params: &ListParams, form: &FormValues| {
                let mut page: List<Invoice> = client.get_form("/invoices", form)?;
                let items = std::mem::take(&mut page.data);
                Ok((items, page))
            }),
        )
    }

    /// Search invoices with a query expression
    pub fn search(client: &Client, params: &InvoiceSearchParams) -> SearchIter<Invoice> {
        let client = client.clone();
        SearchIter::new(
            Some(params),
            Box::new(move |_params: &SearchParams, form: &FormValues| {
                let mut page: SearchList<Invoice> = client.get_form("/invoices/search", form)?;
                let items = std::mem::take(&mut page.data);
                Ok((items, page))
            }),
        )
    }
}
