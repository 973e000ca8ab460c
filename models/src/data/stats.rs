use crate::api;
use sqlx::prelude::FromRow;

#[derive(Debug, FromRow)]
pub struct DailySale {
    pub sale_date: String,
    pub total: f64,
}

#[derive(Debug, FromRow)]
pub struct ClientVolume {
    pub id: i64,
    pub name: String,
    pub total: f64,
}

#[derive(Debug, FromRow)]
pub struct ClientAverage {
    pub id: i64,
    pub name: String,
    pub avg: f64,
}

#[derive(Debug, FromRow)]
pub struct ClientFrequency {
    pub id: i64,
    pub name: String,
    pub days: i64,
}

impl From<DailySale> for api::stats::DailySale {
    fn from(value: DailySale) -> Self {
        Self {
            sale_date: value.sale_date,
            total: value.total,
        }
    }
}

impl From<ClientVolume> for api::stats::ClientVolume {
    fn from(value: ClientVolume) -> Self {
        Self {
            id: value.id,
            name: value.name,
            total: value.total,
        }
    }
}

impl From<ClientAverage> for api::stats::ClientAverage {
    fn from(value: ClientAverage) -> Self {
        Self {
            id: value.id,
            name: value.name,
            avg: value.avg,
        }
    }
}

impl From<ClientFrequency> for api::stats::ClientFrequency {
    fn from(value: ClientFrequency) -> Self {
        Self {
            id: value.id,
            name: value.name,
            days: value.days,
        }
    }
}
