//! The Customer resource

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::form::{FormValues, ToFormValues};
use crate::http::Client;
use crate::pagination::{Identifiable, List, ListIter};
use crate::params::{ListParams, ListParamsContainer};

/// A customer of the account
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    /// Unique object ID (`cus_...`)
    pub id: String,
    /// The customer's email address, if set
    #[serde(default)]
    pub email: Option<String>,
    /// The customer's full name, if set
    #[serde(default)]
    pub name: Option<String>,
    /// Creation time
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
}

impl Identifiable for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Parameters for listing customers
#[derive(Debug, Clone, Default)]
pub struct CustomerListParams {
    /// Generic paging controls
    pub params: ListParams,
    /// Only return customers with this email address
    pub email: Option<String>,
}

impl ListParamsContainer for CustomerListParams {
    fn list_params(&self) -> &ListParams {
        &self.params
    }
}

impl ToFormValues for CustomerListParams {
    fn encode_form(&self, form: &mut FormValues) {
        self.params.encode_form(form);
        if let Some(email) = &self.email {
            form.add("email", email);
        }
    }
}

impl Customer {
    /// List customers, lazily paging through every match
    pub fn list(client: &Client, params: &CustomerListParams) -> ListIter<Customer> {
        let client = client.clone();
        ListIter::new(
            Some(params),
            Box::new(move |_params: &ListParams, form: &FormValues| {
                let mut page: List<Customer> = client.get_form("/customers", form)?;
                let items = std::mem::take(&mut page.data);
                Ok((items, page))
            }),
        )
    }
}
