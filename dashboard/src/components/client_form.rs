use crate::components::{clear_input, input_value};
use models::api::clients::NewClient;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ClientFormProps {
    pub on_submit: Callback<NewClient>,
}

#[function_component(ClientForm)]
pub fn client_form(props: &ClientFormProps) -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let birthdate_ref = use_node_ref();

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let birthdate_ref = birthdate_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(NewClient {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                birthdate: input_value(&birthdate_ref),
            });
            clear_input(&name_ref);
            clear_input(&email_ref);
            clear_input(&birthdate_ref);
        })
    };

    html! {
        <form class="client-form" onsubmit={onsubmit}>
            <h2>{"New client"}</h2>
            <input ref={name_ref} type="text" placeholder="Name" required=true />
            <input ref={email_ref} type="email" placeholder="E-mail" required=true />
            <input ref={birthdate_ref} type="date" required=true />
            <button type="submit">{"Add client"}</button>
        </form>
    }
}
