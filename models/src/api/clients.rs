use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub birthdate: String,
}

/// Query-string filters for the client listing. Both are substring
/// matches, AND-combined when both are present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClientFilter {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ClientFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Listing envelope kept bit-compatible with the legacy dashboard,
/// Portuguese field names included.
#[derive(Debug, Deserialize, Serialize)]
pub struct ClientList {
    pub data: ClientListData,
    pub meta: ListMeta,
    pub redundante: ListStatus,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ClientListData {
    pub clientes: Vec<ClientEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ClientEntry {
    pub id: i64,
    pub info: ClientInfo,
    pub estatisticas: ClientStats,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ClientInfo {
    #[serde(rename = "nomeCompleto")]
    pub nome_completo: String,
    pub detalhes: ClientDetails,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ClientDetails {
    pub email: String,
    pub nascimento: String,
}

/// Per-client sales were never populated by the legacy API; the empty
/// list is part of the contract.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ClientStats {
    pub vendas: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ListMeta {
    #[serde(rename = "registroTotal")]
    pub registro_total: usize,
    pub pagina: u32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ListStatus {
    pub status: String,
}

impl ClientList {
    pub fn from_entries(clientes: Vec<ClientEntry>) -> Self {
        let registro_total = clientes.len();

        Self {
            data: ClientListData { clientes },
            meta: ListMeta {
                registro_total,
                pagina: 1,
            },
            redundante: ListStatus {
                status: "ok".to_string(),
            },
        }
    }
}
