use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// How long an alert stays up before it expires on its own
pub const ALERT_TIMEOUT_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Info,
}

impl AlertKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert-success",
            AlertKind::Error => "alert alert-danger",
            AlertKind::Info => "alert alert-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: u32,
    pub message: String,
    pub kind: AlertKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlertAction {
    Show(Alert),
    Dismiss,
    /// Timer for the alert with this id ran out
    Expire(u32),
}

/// At most one visible alert
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertState {
    pub current: Option<Alert>,
}

impl AlertState {
    pub fn apply(&self, action: AlertAction) -> AlertState {
        match action {
            AlertAction::Show(alert) => AlertState {
                current: Some(alert),
            },
            AlertAction::Dismiss => AlertState { current: None },
            // A newer alert must not be hidden by an older timer
            AlertAction::Expire(id) => match &self.current {
                Some(alert) if alert.id == id => AlertState { current: None },
                _ => self.clone(),
            },
        }
    }
}

impl Reducible for AlertState {
    type Action = AlertAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Sends alerts to the nearest [`AlertProvider`]; a no-op without one
#[derive(Clone, Default)]
pub struct AlertHandle {
    current: Option<Alert>,
    dispatch: Callback<AlertAction>,
    next_id: Rc<Cell<u32>>,
}

impl PartialEq for AlertHandle {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current && self.dispatch == other.dispatch
    }
}

impl AlertHandle {
    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    pub fn show(&self, message: impl Into<String>, kind: AlertKind) {
        let id = self.next_id.get().wrapping_add(1);
        self.next_id.set(id);

        self.dispatch.emit(AlertAction::Show(Alert {
            id,
            message: message.into(),
            kind,
        }));

        let dispatch = self.dispatch.clone();
        spawn_local(async move {
            gloo::timers::future::TimeoutFuture::new(ALERT_TIMEOUT_MS).await;
            dispatch.emit(AlertAction::Expire(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, AlertKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, AlertKind::Error);
    }

    pub fn dismiss(&self) {
        self.dispatch.emit(AlertAction::Dismiss);
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(AlertProvider)]
pub fn alert_provider(props: &AlertProviderProps) -> Html {
    let state = use_reducer(AlertState::default);
    // Ids must keep counting across re-renders
    let next_id = use_memo((), |_| Cell::new(0u32));

    let dispatch = {
        let state = state.clone();
        use_callback((), move |action: AlertAction, _| state.dispatch(action))
    };

    let handle = AlertHandle {
        current: state.current.clone(),
        dispatch,
        next_id,
    };

    html! {
        <ContextProvider<AlertHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<AlertHandle>>
    }
}

#[hook]
pub fn use_alert() -> AlertHandle {
    use_context::<AlertHandle>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: u32, message: &str) -> Alert {
        Alert {
            id,
            message: message.to_string(),
            kind: AlertKind::Success,
        }
    }

    #[test]
    fn test_show_replaces_current_alert() {
        let state = AlertState::default()
            .apply(AlertAction::Show(alert(1, "first")))
            .apply(AlertAction::Show(alert(2, "second")));
        assert_eq!(state.current, Some(alert(2, "second")));
    }

    #[test]
    fn test_stale_timer_keeps_newer_alert() {
        let state = AlertState::default()
            .apply(AlertAction::Show(alert(1, "first")))
            .apply(AlertAction::Show(alert(2, "second")))
            .apply(AlertAction::Expire(1));
        assert_eq!(state.current, Some(alert(2, "second")));

        let expired = state.apply(AlertAction::Expire(2));
        assert_eq!(expired.current, None);
    }

    #[test]
    fn test_dismiss() {
        let state = AlertState::default()
            .apply(AlertAction::Show(alert(7, "saved")))
            .apply(AlertAction::Dismiss);
        assert_eq!(state.current, None);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(AlertKind::Error.css_class(), "alert alert-danger");
        assert_eq!(AlertKind::Success.css_class(), "alert alert-success");
    }
}
