use crate::components::input_value;
use models::api::auth::Credentials;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_login: Callback<Credentials>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let onsubmit = {
        let on_login = props.on_login.clone();
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_login.emit(Credentials {
                username: input_value(&username_ref),
                password: input_value(&password_ref),
            });
        })
    };

    html! {
        <form class="login-form" onsubmit={onsubmit}>
            <h2>{"Sign in"}</h2>
            <input ref={username_ref} type="text" placeholder="Username" required=true />
            <input ref={password_ref} type="password" placeholder="Password" required=true />
            <button type="submit">{"Login"}</button>
        </form>
    }
}
