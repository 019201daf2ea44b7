use std::rc::Rc;

use shared::{with_visibility, Donation, DonationInput};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_alert::AlertHandle;
use crate::services::{ApiClient, Logger};

const COMPONENT: &str = "Donations";

/// Latest snapshot of the donation collection
#[derive(Debug, Clone, PartialEq)]
pub struct DonationCollection(pub Rc<[Donation]>);

impl Default for DonationCollection {
    fn default() -> Self {
        Self(Rc::from(Vec::new()))
    }
}

pub enum CollectionAction {
    Loaded(Vec<Donation>),
    VisibilityChanged { id: String, is_show: bool },
}

impl Reducible for DonationCollection {
    type Action = CollectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CollectionAction::Loaded(donations) => Rc::new(Self(Rc::from(donations))),
            CollectionAction::VisibilityChanged { id, is_show } => {
                Rc::new(Self(Rc::from(with_visibility(&self.0, &id, is_show))))
            }
        }
    }
}

#[derive(Clone)]
pub struct DonationsState {
    pub donations: Rc<[Donation]>,
    pub loading: bool,
    pub deleting: bool,
    pub editing: Option<Donation>,
}

#[derive(Clone, PartialEq)]
pub struct UseDonationsActions {
    pub delete: Callback<String>,
    pub toggle_visibility: Callback<Donation>,
    pub begin_edit: Callback<Donation>,
    pub cancel_edit: Callback<()>,
    pub update: Callback<(String, DonationInput)>,
}

pub struct UseDonationsResult {
    pub state: DonationsState,
    pub actions: UseDonationsActions,
}

async fn reload(
    api_client: &ApiClient,
    donations: &UseReducerHandle<DonationCollection>,
    loading: &UseStateHandle<bool>,
    alerts: &AlertHandle,
) {
    loading.set(true);

    match api_client.get_donations().await {
        Ok(data) => {
            Logger::debug_with_component(COMPONENT, &format!("loaded {} donations", data.len()));
            donations.dispatch(CollectionAction::Loaded(data));
        }
        Err(e) => {
            Logger::error_with_component(COMPONENT, &format!("Error fetching donations: {}", e));
            alerts.error("Failed to fetch donations");
        }
    }

    loading.set(false);
}

#[hook]
pub fn use_donations(api_client: &ApiClient, alerts: &AlertHandle) -> UseDonationsResult {
    let donations = use_reducer(DonationCollection::default);
    let loading = use_state(|| false);
    let deleting = use_state(|| false);
    let editing = use_state(|| Option::<Donation>::None);

    let refresh = {
        let api_client = api_client.clone();
        let alerts = alerts.clone();
        let donations = donations.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let alerts = alerts.clone();
            let donations = donations.clone();
            let loading = loading.clone();

            spawn_local(async move {
                reload(&api_client, &donations, &loading, &alerts).await;
            });
        })
    };

    let delete = {
        let api_client = api_client.clone();
        let alerts = alerts.clone();
        let donations = donations.clone();
        let loading = loading.clone();
        let deleting = deleting.clone();

        use_callback((), move |id: String, _| {
            if !gloo::dialogs::confirm("Are you sure you want to delete this donation?") {
                return;
            }

            let api_client = api_client.clone();
            let alerts = alerts.clone();
            let donations = donations.clone();
            let loading = loading.clone();
            let deleting = deleting.clone();

            spawn_local(async move {
                deleting.set(true);

                match api_client.delete_donation(&id).await {
                    Ok(()) => {
                        reload(&api_client, &donations, &loading, &alerts).await;
                        alerts.success("Deleted successfully");
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Delete error: {}", e));
                        alerts.error("Failed to delete donation");
                    }
                }

                deleting.set(false);
            });
        })
    };

    let toggle_visibility = {
        let api_client = api_client.clone();
        let alerts = alerts.clone();
        let donations = donations.clone();

        use_callback((), move |donation: Donation, _| {
            let api_client = api_client.clone();
            let alerts = alerts.clone();
            let donations = donations.clone();
            let is_show = !donation.is_show;

            spawn_local(async move {
                match api_client.set_visibility(&donation.id, is_show).await {
                    Ok(()) => donations.dispatch(CollectionAction::VisibilityChanged {
                        id: donation.id,
                        is_show,
                    }),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Hide/show error: {}", e));
                        alerts.error(e.to_string());
                    }
                }
            });
        })
    };

    let begin_edit = {
        let editing = editing.clone();
        use_callback((), move |donation: Donation, _| {
            editing.set(Some(donation));
        })
    };

    let cancel_edit = {
        let editing = editing.clone();
        use_callback((), move |_, _| {
            editing.set(None);
        })
    };

    let update = {
        let api_client = api_client.clone();
        let alerts = alerts.clone();
        let donations = donations.clone();
        let loading = loading.clone();
        let editing = editing.clone();

        use_callback((), move |(id, input): (String, DonationInput), _| {
            let api_client = api_client.clone();
            let alerts = alerts.clone();
            let donations = donations.clone();
            let loading = loading.clone();
            let editing = editing.clone();

            spawn_local(async move {
                match api_client.update_donation(&id, &input).await {
                    Ok(()) => {
                        editing.set(None);
                        reload(&api_client, &donations, &loading, &alerts).await;
                        alerts.success("Donation updated successfully");
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Update error: {}", e));
                        alerts.error("Failed to update donation");
                    }
                }
            });
        })
    };

    // Initial fetch
    use_effect_with((), {
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = DonationsState {
        donations: donations.0.clone(),
        loading: *loading,
        deleting: *deleting,
        editing: (*editing).clone(),
    };

    let actions = UseDonationsActions {
        delete,
        toggle_visibility,
        begin_edit,
        cancel_edit,
        update,
    };

    UseDonationsResult { state, actions }
}
