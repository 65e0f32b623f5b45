//! Restaurant Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// Restaurant entity (餐厅)
///
/// Table inventory is embedded; the stored order of `tables` is the order
/// availability results are returned in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub deposit_per_person: f64,
    #[serde(default)]
    pub tables: Vec<RestaurantTable>,
}

/// Embedded table record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantTable {
    /// Unique within the restaurant
    #[validate(length(min = 1, message = "is required"))]
    pub table_id: String,
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub capacity: i32,
    /// Type label, e.g. "window", "private room"
    #[serde(rename = "type")]
    pub table_type: String,
}

/// Create restaurant payload (admin)
///
/// 仅校验必填字段，其余按原样入库
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCreate {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub deposit_per_person: f64,
    #[serde(default)]
    #[validate(nested)]
    pub tables: Vec<RestaurantTable>,
}

impl Restaurant {
    /// Look up an embedded table by its id
    pub fn find_table(&self, table_id: &str) -> Option<&RestaurantTable> {
        self.tables.iter().find(|t| t.table_id == table_id)
    }
}
