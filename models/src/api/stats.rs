use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DailySale {
    pub sale_date: String,
    pub total: f64,
}

/// One row per aggregate; a key is absent when there are no sales yet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TopClients {
    #[serde(rename = "highestVolume", skip_serializing_if = "Option::is_none")]
    pub highest_volume: Option<ClientVolume>,
    #[serde(rename = "highestAverage", skip_serializing_if = "Option::is_none")]
    pub highest_average: Option<ClientAverage>,
    #[serde(rename = "mostFrequent", skip_serializing_if = "Option::is_none")]
    pub most_frequent: Option<ClientFrequency>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClientVolume {
    pub id: i64,
    pub name: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClientAverage {
    pub id: i64,
    pub name: String,
    pub avg: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClientFrequency {
    pub id: i64,
    pub name: String,
    pub days: i64,
}
