use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::services::Logger;

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let session = use_session();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(session) = session.as_ref() else {
                error.set(Some("Login is unavailable".to_string()));
                return;
            };
            match session.login(&email, &password) {
                Ok(()) => error.set(None),
                Err(e) => {
                    Logger::warn_with_component("LoginForm", &format!("Rejected login for {}: {}", *email, e));
                    error.set(Some(e.to_string()));
                }
            }
        })
    };

    html! {
        <div class="container mt-5">
            <div class="row justify-content-center">
                <div class="col-md-6">
                    <div class="card">
                        <div class="card-body">
                            <h2 class="text-center mb-4">{"Login"}</h2>
                            {if let Some(message) = (*error).as_ref() {
                                html! { <div class="alert alert-danger">{message}</div> }
                            } else { html! {} }}
                            <form onsubmit={on_submit}>
                                <div class="mb-3">
                                    <input
                                        type="email"
                                        class="form-control"
                                        placeholder="Email"
                                        value={(*email).clone()}
                                        oninput={on_email_input}
                                        required=true
                                    />
                                </div>
                                <div class="mb-3">
                                    <input
                                        type="password"
                                        class="form-control"
                                        placeholder="Password"
                                        value={(*password).clone()}
                                        oninput={on_password_input}
                                        required=true
                                    />
                                </div>
                                <button type="submit" class="btn btn-primary w-100">{"Login"}</button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
