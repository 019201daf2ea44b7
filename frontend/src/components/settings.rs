use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_alert;
use crate::services::Logger;

#[function_component(Settings)]
pub fn settings() -> Html {
    let alerts = use_alert();
    let campaign_name = use_state(String::new);
    let campaign_goal = use_state(String::new);

    let on_name_input = {
        let campaign_name = campaign_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            campaign_name.set(input.value());
        })
    };

    let on_goal_input = {
        let campaign_goal = campaign_goal.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            campaign_goal.set(input.value());
        })
    };

    let on_submit = {
        let campaign_name = campaign_name.clone();
        let campaign_goal = campaign_goal.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            Logger::info_with_component(
                "Settings",
                &format!("Campaign settings saved: name={:?} goal={:?}", *campaign_name, *campaign_goal),
            );
            alerts.success("Settings saved successfully");
        })
    };

    html! {
        <section class="settings-section">
            <h2>{"Settings"}</h2>
            <form onsubmit={on_submit}>
                <div class="mb-3">
                    <label for="campaign-name" class="form-label">{"Campaign Name"}</label>
                    <input
                        type="text"
                        id="campaign-name"
                        class="form-control"
                        value={(*campaign_name).clone()}
                        oninput={on_name_input}
                    />
                </div>
                <div class="mb-3">
                    <label for="campaign-goal" class="form-label">{"Campaign Goal"}</label>
                    <input
                        type="number"
                        id="campaign-goal"
                        class="form-control"
                        min="0"
                        value={(*campaign_goal).clone()}
                        oninput={on_goal_input}
                    />
                </div>
                <button type="submit" class="btn btn-primary">{"Save Settings"}</button>
            </form>
        </section>
    }
}
