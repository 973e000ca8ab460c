use crate::{
    app::ClientRow,
    components::{clear_input, input_value},
};
use models::api::sales::NewSale;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SaleFormProps {
    pub clients: Vec<ClientRow>,
    pub on_submit: Callback<NewSale>,
}

#[function_component(SaleForm)]
pub fn sale_form(props: &SaleFormProps) -> Html {
    let client_ref = use_node_ref();
    let date_ref = use_node_ref();
    let amount_ref = use_node_ref();

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        let client_ref = client_ref.clone();
        let date_ref = date_ref.clone();
        let amount_ref = amount_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let client_id = client_ref
                .cast::<HtmlSelectElement>()
                .and_then(|select| select.value().parse().ok());
            let amount = input_value(&amount_ref).parse();
            let (Some(client_id), Ok(amount)) = (client_id, amount) else {
                return;
            };

            on_submit.emit(NewSale {
                client_id,
                sale_date: input_value(&date_ref),
                amount,
            });
            clear_input(&date_ref);
            clear_input(&amount_ref);
        })
    };

    html! {
        <form class="sale-form" onsubmit={onsubmit}>
            <h2>{"New sale"}</h2>
            <select ref={client_ref} required=true>
                { for props.clients.iter().map(|client| html! {
                    <option value={client.id.to_string()}>{&client.name}</option>
                }) }
            </select>
            <input ref={date_ref} type="date" required=true />
            <input ref={amount_ref} type="number" step="0.01" min="0" placeholder="Amount" required=true />
            <button type="submit">{"Add sale"}</button>
        </form>
    }
}
