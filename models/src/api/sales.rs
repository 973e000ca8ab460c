use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct NewSale {
    pub client_id: i64,
    pub sale_date: String,
    pub amount: f64,
}
