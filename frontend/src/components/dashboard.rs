use yew::prelude::*;

use super::alert_message::AlertMessage;
use super::donations::DonationList;
use super::forms::DonationForm;
use super::login_form::LoginForm;
use super::settings::Settings;
use super::sidebar::{Page, Sidebar};
use crate::config::AppConfig;
use crate::hooks::use_session;
use crate::services::{ApiClient, Logger};
use shared::FormKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }

    /// Icon of the button that switches away from this theme
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub api_client: ApiClient,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let session = use_session();
    let sidebar_open = use_state(|| true);
    let theme = use_state(Theme::default);
    let active_page = use_state(Page::default);

    let Some(session) = session.filter(|session| session.is_logged_in()) else {
        return html! {
            <>
                <AlertMessage />
                <LoginForm />
            </>
        };
    };

    let on_toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(!*sidebar_open))
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.set(theme.toggled()))
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            Logger::info_with_component("Dashboard", "Admin logged out");
            session.logout();
        })
    };

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let email = session.current().map(|s| s.email).unwrap_or_default();

    let content = match *active_page {
        Page::Donations => html! {
            <DonationList api_client={props.api_client.clone()} page_size={config.default_page_size} />
        },
        Page::FormWithContact => html! {
            <DonationForm
                key="form-with-contact"
                kind={FormKind::WithContact}
                api_client={props.api_client.clone()}
            />
        },
        Page::FormWithoutContact => html! {
            <DonationForm
                key="form-without-contact"
                kind={FormKind::WithoutContact}
                api_client={props.api_client.clone()}
            />
        },
        Page::Settings => html! { <Settings /> },
        page => html! {
            <section class="placeholder-section">
                <h2>{page.label()}</h2>
            </section>
        },
    };

    html! {
        <div class={classes!("dashboard", theme.css_class())}>
            <nav class="navbar navbar-expand navbar-light bg-light">
                <button class="btn sidebar-toggle" onclick={on_toggle_sidebar}>
                    <i class="fas fa-bars"></i>
                </button>
                <div class="navbar-right ms-auto d-flex align-items-center">
                    <button class="btn theme-toggle me-2" onclick={on_toggle_theme}>
                        <i class={theme.toggle_icon()}></i>
                    </button>
                    <span class="user-email me-3">{email}</span>
                    <button class="btn btn-outline-danger btn-sm" onclick={on_logout}>{"Logout"}</button>
                </div>
            </nav>
            <div class="dashboard-body">
                <Sidebar open={*sidebar_open} active={*active_page} {on_select} />
                <main class="content">
                    <AlertMessage />
                    {content}
                </main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().css_class(), "light-theme");
    }
}
