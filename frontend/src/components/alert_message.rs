use yew::prelude::*;

use crate::hooks::use_alert;

/// Renders the current alert from the [`AlertProvider`](crate::hooks::AlertProvider)
#[function_component(AlertMessage)]
pub fn alert_message() -> Html {
    let alerts = use_alert();

    let on_close = {
        let alerts = alerts.clone();
        Callback::from(move |_: MouseEvent| alerts.dismiss())
    };

    match alerts.current() {
        Some(alert) => html! {
            <div class={classes!(alert.kind.css_class(), "alert-dismissible")} role="alert">
                {&alert.message}
                <button type="button" class="btn-close" aria-label="Close" onclick={on_close}></button>
            </div>
        },
        None => html! {},
    }
}
