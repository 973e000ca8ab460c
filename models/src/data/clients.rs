use crate::api::clients::{ClientDetails, ClientEntry, ClientInfo, ClientStats};
use sqlx::prelude::FromRow;

#[derive(Debug, FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub birthdate: String,
}

impl From<Client> for ClientEntry {
    fn from(value: Client) -> Self {
        Self {
            id: value.id,
            info: ClientInfo {
                nome_completo: value.name,
                detalhes: ClientDetails {
                    email: value.email,
                    nascimento: value.birthdate,
                },
            },
            estatisticas: ClientStats::default(),
        }
    }
}
