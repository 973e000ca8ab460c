use crate::{
    api_client,
    components::{
        client_form::ClientForm, client_table::ClientTable, edit_client_dialog::EditClientDialog,
        login_form::LoginForm, sale_form::SaleForm, sales_statistics::SalesStatistics,
    },
};
use models::api::{
    auth::Credentials,
    clients::{ClientEntry, ClientFilter, NewClient},
    sales::NewSale,
    stats::{DailySale, TopClients},
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Flattened view of one listing-envelope entry, the shape the table
/// and the edit dialog actually work with.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub birthdate: String,
}

impl From<ClientEntry> for ClientRow {
    fn from(value: ClientEntry) -> Self {
        Self {
            id: value.id,
            name: value.info.nome_completo,
            email: value.info.detalhes.email,
            birthdate: value.info.detalhes.nascimento,
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let token: UseStateHandle<Option<String>> = use_state(|| None);
    let clients: UseStateHandle<Vec<ClientRow>> = use_state(Vec::new);
    let daily_sales: UseStateHandle<Vec<DailySale>> = use_state(Vec::new);
    let top_clients: UseStateHandle<TopClients> = use_state(TopClients::default);
    let error: UseStateHandle<Option<String>> = use_state(|| None);
    let edit_client: UseStateHandle<Option<ClientRow>> = use_state(|| None);

    let load_clients = use_callback(
        (token.clone(), clients.clone(), error.clone()),
        move |filter: ClientFilter, (token, clients, error)| {
            let Some(token) = (**token).clone() else {
                return;
            };
            let clients = clients.clone();
            let error = error.clone();
            spawn_local(async move {
                match api_client::list_clients(&token, &filter).await {
                    Ok(list) => {
                        clients.set(list.data.clientes.into_iter().map(Into::into).collect());
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("Failed to load clients: {err}"))),
                }
            });
        },
    );

    let load_stats = use_callback(
        (
            token.clone(),
            daily_sales.clone(),
            top_clients.clone(),
            error.clone(),
        ),
        move |_: (), (token, daily_sales, top_clients, error)| {
            let Some(token) = (**token).clone() else {
                return;
            };
            let daily_sales = daily_sales.clone();
            let top_clients = top_clients.clone();
            let error = error.clone();
            spawn_local(async move {
                match api_client::daily_sales(&token).await {
                    Ok(rows) => daily_sales.set(rows),
                    Err(err) => error.set(Some(format!("Failed to load statistics: {err}"))),
                }
                match api_client::top_clients(&token).await {
                    Ok(top) => top_clients.set(top),
                    Err(err) => error.set(Some(format!("Failed to load statistics: {err}"))),
                }
            });
        },
    );

    use_effect_with(
        (token.clone(), load_clients.clone(), load_stats.clone()),
        |(token, load_clients, load_stats)| {
            if token.is_some() {
                load_clients.emit(ClientFilter::default());
                load_stats.emit(());
            }
        },
    );

    let on_login = use_callback(
        (token.clone(), error.clone()),
        move |credentials: Credentials, (token, error)| {
            let token = token.clone();
            let error = error.clone();
            spawn_local(async move {
                match api_client::login(&credentials).await {
                    Ok(response) => {
                        token.set(Some(response.token));
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("Login failed: {err}"))),
                }
            });
        },
    );

    let on_add_client = use_callback(
        (token.clone(), load_clients.clone(), error.clone()),
        move |new_client: NewClient, (token, load_clients, error)| {
            let Some(token) = (**token).clone() else {
                return;
            };
            let load_clients = load_clients.clone();
            let error = error.clone();
            spawn_local(async move {
                match api_client::add_client(&token, &new_client).await {
                    Ok(_) => load_clients.emit(ClientFilter::default()),
                    Err(err) => error.set(Some(format!("Failed to add client: {err}"))),
                }
            });
        },
    );

    let on_add_sale = use_callback(
        (
            token.clone(),
            load_clients.clone(),
            load_stats.clone(),
            error.clone(),
        ),
        move |new_sale: NewSale, (token, load_clients, load_stats, error)| {
            let Some(token) = (**token).clone() else {
                return;
            };
            let load_clients = load_clients.clone();
            let load_stats = load_stats.clone();
            let error = error.clone();
            spawn_local(async move {
                match api_client::add_sale(&token, &new_sale).await {
                    Ok(_) => {
                        load_stats.emit(());
                        load_clients.emit(ClientFilter::default());
                    }
                    Err(err) => error.set(Some(format!("Failed to add sale: {err}"))),
                }
            });
        },
    );

    let on_edit = use_callback(edit_client.clone(), move |client: ClientRow, edit_client| {
        edit_client.set(Some(client));
    });

    let on_close_edit = use_callback(edit_client.clone(), move |_: (), edit_client| {
        edit_client.set(None);
    });

    let on_save_edit = use_callback(
        (
            token.clone(),
            edit_client.clone(),
            load_clients.clone(),
            error.clone(),
        ),
        move |(id, client): (i64, NewClient), (token, edit_client, load_clients, error)| {
            let Some(token) = (**token).clone() else {
                return;
            };
            let edit_client = edit_client.clone();
            let load_clients = load_clients.clone();
            let error = error.clone();
            spawn_local(async move {
                match api_client::update_client(&token, id, &client).await {
                    Ok(_) => {
                        edit_client.set(None);
                        load_clients.emit(ClientFilter::default());
                    }
                    Err(err) => error.set(Some(format!("Failed to update client: {err}"))),
                }
            });
        },
    );

    let on_delete = use_callback(
        (token.clone(), load_clients.clone(), error.clone()),
        move |id: i64, (token, load_clients, error)| {
            let confirmed = web_sys::window()
                .map(|window| {
                    window
                        .confirm_with_message("Are you sure you want to delete this client?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let Some(token) = (**token).clone() else {
                return;
            };
            let load_clients = load_clients.clone();
            let error = error.clone();
            spawn_local(async move {
                match api_client::delete_client(&token, id).await {
                    Ok(_) => load_clients.emit(ClientFilter::default()),
                    Err(err) => error.set(Some(format!("Failed to delete client: {err}"))),
                }
            });
        },
    );

    let on_filter = use_callback(load_clients.clone(), move |filter: ClientFilter, load_clients| {
        load_clients.emit(filter);
    });

    let error_banner = match (*error).clone() {
        Some(message) => html! { <p class="error">{message}</p> },
        None => html! {},
    };

    if token.is_none() {
        return html! {
            <main class="login">
                <LoginForm on_login={on_login} />
                {error_banner}
            </main>
        };
    }

    html! {
        <main>
            <h1>{"Toy Store Dashboard"}</h1>
            {error_banner}
            <ClientForm on_submit={on_add_client} />
            <SaleForm clients={(*clients).clone()} on_submit={on_add_sale} />
            <ClientTable
                clients={(*clients).clone()}
                on_filter={on_filter}
                on_edit={on_edit}
                on_delete={on_delete}
            />
            <SalesStatistics
                daily_sales={(*daily_sales).clone()}
                top_clients={(*top_clients).clone()}
            />
            if let Some(client) = (*edit_client).clone() {
                <EditClientDialog
                    key={client.id}
                    client={client.clone()}
                    on_save={on_save_edit}
                    on_close={on_close_edit}
                />
            }
        </main>
    }
}
