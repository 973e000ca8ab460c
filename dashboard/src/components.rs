use web_sys::HtmlInputElement;
use yew::NodeRef;

pub mod client_form;
pub mod client_table;
pub mod edit_client_dialog;
pub mod login_form;
pub mod sale_form;
pub mod sales_statistics;

pub(crate) fn input_value(node_ref: &NodeRef) -> String {
    node_ref
        .cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

pub(crate) fn clear_input(node_ref: &NodeRef) {
    if let Some(input) = node_ref.cast::<HtmlInputElement>() {
        input.set_value("");
    }
}
