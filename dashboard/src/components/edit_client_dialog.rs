use crate::app::ClientRow;
use models::api::clients::NewClient;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EditClientDialogProps {
    pub client: ClientRow,
    pub on_save: Callback<(i64, NewClient)>,
    pub on_close: Callback<()>,
}

#[function_component(EditClientDialog)]
pub fn edit_client_dialog(props: &EditClientDialogProps) -> Html {
    let name = use_state(|| props.client.name.clone());
    let email = use_state(|| props.client.email.clone());
    let birthdate = use_state(|| props.client.birthdate.clone());

    let edit = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |event: InputEvent| {
            field.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let onsubmit = {
        let on_save = props.on_save.clone();
        let id = props.client.id;
        let name = name.clone();
        let email = email.clone();
        let birthdate = birthdate.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_save.emit((
                id,
                NewClient {
                    name: (*name).clone(),
                    email: (*email).clone(),
                    birthdate: (*birthdate).clone(),
                },
            ));
        })
    };

    let onclose = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="dialog-backdrop">
            <form class="dialog" onsubmit={onsubmit}>
                <h2>{"Edit client"}</h2>
                <input type="text" value={(*name).clone()} oninput={edit(&name)} required=true />
                <input type="email" value={(*email).clone()} oninput={edit(&email)} required=true />
                <input type="date" value={(*birthdate).clone()} oninput={edit(&birthdate)} required=true />
                <button type="submit">{"Save"}</button>
                <button type="button" onclick={onclose}>{"Cancel"}</button>
            </form>
        </div>
    }
}
