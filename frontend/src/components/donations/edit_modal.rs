use shared::{Donation, DonationInput};
use yew::prelude::*;

use crate::components::forms::DonationForm;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct EditModalProps {
    pub donation: Donation,
    pub api_client: ApiClient,
    pub on_close: Callback<()>,
    pub on_save: Callback<(String, DonationInput)>,
}

/// Edit dialog hosting the form the donation was originally entered with
#[function_component(EditModal)]
pub fn edit_modal(props: &EditModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal-dialog modal-lg">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{"Edit Donation"}</h5>
                        <button type="button" class="btn-close" aria-label="Close" onclick={on_close}></button>
                    </div>
                    <div class="modal-body">
                        <DonationForm
                            key={props.donation.id.clone()}
                            kind={props.donation.form_kind()}
                            api_client={props.api_client.clone()}
                            initial={Some(props.donation.clone())}
                            on_submit={Some(props.on_save.clone())}
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
