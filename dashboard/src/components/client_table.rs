use crate::{
    app::ClientRow,
    components::input_value,
};
use models::api::clients::ClientFilter;
use std::collections::HashSet;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ClientTableProps {
    pub clients: Vec<ClientRow>,
    pub on_filter: Callback<ClientFilter>,
    pub on_edit: Callback<ClientRow>,
    pub on_delete: Callback<i64>,
}

/// First letter of the alphabet that does not occur in the name, a
/// leftover gimmick from the legacy dashboard that users got used to.
fn missing_letter(name: &str) -> char {
    let letters: HashSet<char> = name
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect();

    ('a'..='z')
        .find(|letter| !letters.contains(letter))
        .unwrap_or('-')
}

#[function_component(ClientTable)]
pub fn client_table(props: &ClientTableProps) -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();

    let onsubmit = {
        let on_filter = props.on_filter.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let name = input_value(&name_ref);
            let email = input_value(&email_ref);
            on_filter.emit(ClientFilter {
                name: (!name.is_empty()).then_some(name),
                email: (!email.is_empty()).then_some(email),
            });
        })
    };

    let rows = props.clients.iter().map(|client| {
        let on_edit = {
            let on_edit = props.on_edit.clone();
            let client = client.clone();
            Callback::from(move |_| on_edit.emit(client.clone()))
        };
        let on_delete = {
            let on_delete = props.on_delete.clone();
            let id = client.id;
            Callback::from(move |_| on_delete.emit(id))
        };

        html! {
            <tr key={client.id}>
                <td>{&client.name}</td>
                <td>{&client.email}</td>
                <td>{&client.birthdate}</td>
                <td>{missing_letter(&client.name)}</td>
                <td>
                    <button onclick={on_edit}>{"Edit"}</button>
                    <button onclick={on_delete}>{"Delete"}</button>
                </td>
            </tr>
        }
    });

    html! {
        <section class="client-table">
            <h2>{"Clients"}</h2>
            <form class="client-filter" onsubmit={onsubmit}>
                <input ref={name_ref} type="text" placeholder="Filter by name" />
                <input ref={email_ref} type="text" placeholder="Filter by e-mail" />
                <button type="submit">{"Filter"}</button>
            </form>
            <table>
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"E-mail"}</th>
                        <th>{"Birthdate"}</th>
                        <th>{"Missing letter"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>{ for rows }</tbody>
            </table>
        </section>
    }
}
