use crate::dtos::SupplierDTO;
use herdbook_domain::{Supplier, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct SupplierResponse {
    pub supplier: SupplierDTO,
}

impl SupplierResponse {
    pub fn new(supplier: Supplier) -> Self {
        Self {
            supplier: SupplierDTO::new(supplier),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SupplierPathParams {
    pub supplier_id: ID,
}

pub mod create_supplier {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        pub name: String,
        #[serde(default)]
        pub category: Option<String>,
        #[serde(default)]
        pub custom_category: Option<String>,
        #[serde(default)]
        pub phone: Option<String>,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub address: Option<String>,
        #[serde(default)]
        pub city: Option<String>,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub contact_person: Option<String>,
    }

    pub type APIResponse = SupplierResponse;
}

pub mod get_suppliers {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        #[serde(default)]
        pub category: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub suppliers: Vec<SupplierDTO>,
    }

    impl APIResponse {
        pub fn new(suppliers: Vec<Supplier>) -> Self {
            Self {
                suppliers: suppliers.into_iter().map(SupplierDTO::new).collect(),
            }
        }
    }
}

pub mod get_supplier {
    use super::*;

    pub type PathParams = SupplierPathParams;
    pub type APIResponse = SupplierResponse;
}

pub mod update_supplier {
    use super::*;

    /// Only the given fields are changed
    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub category: Option<String>,
        #[serde(default)]
        pub custom_category: Option<String>,
        #[serde(default)]
        pub phone: Option<String>,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub address: Option<String>,
        #[serde(default)]
        pub city: Option<String>,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub contact_person: Option<String>,
    }

    pub type PathParams = SupplierPathParams;
    pub type APIResponse = SupplierResponse;
}

pub mod delete_supplier {
    use super::*;

    pub type PathParams = SupplierPathParams;
    pub type APIResponse = SupplierResponse;
}
