use shared::{format_currency, to_number, Donation};
use yew::prelude::*;

use crate::hooks::use_donations::UseDonationsActions;

#[derive(Properties, PartialEq)]
pub struct DonationTableProps {
    /// Rows of the current page only
    pub donations: Vec<Donation>,
    pub deleting: bool,
    pub actions: UseDonationsActions,
}

#[function_component(DonationTable)]
pub fn donation_table(props: &DonationTableProps) -> Html {
    html! {
        <div class="table-responsive">
            <table class="table table-hover donation-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"DONOR"}</th>
                        <th>{"AMOUNT"}</th>
                        <th>{"MESSAGE"}</th>
                        <th>{"ACTIONS"}</th>
                        <th>{"TAGS"}</th>
                    </tr>
                </thead>
                <tbody>
                    {if props.donations.is_empty() {
                        html! {
                            <tr>
                                <td colspan="6" class="empty-state">{"No donations yet"}</td>
                            </tr>
                        }
                    } else {
                        html! {
                            {for props.donations.iter().map(|donation| {
                                let on_edit = {
                                    let begin_edit = props.actions.begin_edit.clone();
                                    let donation = donation.clone();
                                    Callback::from(move |_| begin_edit.emit(donation.clone()))
                                };
                                let on_toggle = {
                                    let toggle = props.actions.toggle_visibility.clone();
                                    let donation = donation.clone();
                                    Callback::from(move |_| toggle.emit(donation.clone()))
                                };
                                let on_delete = {
                                    let delete = props.actions.delete.clone();
                                    let id = donation.id.clone();
                                    Callback::from(move |_| delete.emit(id.clone()))
                                };

                                html! {
                                    <tr key={donation.id.clone()} class={classes!((!donation.is_show).then_some("selected-row"))}>
                                        <td>{&donation.id}</td>
                                        <td>{donation.donor_name()}</td>
                                        <td>{format_currency(to_number(&donation.amount))}</td>
                                        <td>{&donation.dedication_message}</td>
                                        <td class="actions">
                                            <button class="btn btn-sm btn-primary me-1" onclick={on_edit}>{"Edit"}</button>
                                            <button class="btn btn-sm btn-secondary me-1" onclick={on_toggle}>
                                                {if donation.is_show { "Hide" } else { "Show" }}
                                            </button>
                                            <button
                                                class="btn btn-sm btn-danger"
                                                onclick={on_delete}
                                                disabled={props.deleting}
                                            >
                                                {"Delete"}
                                            </button>
                                        </td>
                                        <td>{donation.tags.clone().unwrap_or_default()}</td>
                                    </tr>
                                }
                            })}
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
