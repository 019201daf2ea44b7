use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TitleProps {
    pub title: AttrValue,
}

#[function_component(Title)]
pub fn title(props: &TitleProps) -> Html {
    html! {
        <div class="content-title">
            <h2>{props.title.clone()}</h2>
        </div>
    }
}
