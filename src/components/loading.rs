use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_else(|| AttrValue::from("Loading..."))]
    pub message: AttrValue,
}

/// Spinner placeholder shown while a chart canvas has not been drawn yet.
#[function_component(LoadingState)]
pub fn loading_state(props: &Props) -> Html {
    html! {
        <div class="loading-state">
            <div class="loading-spinner"></div>
            <p>{ props.message.clone() }</p>
        </div>
    }
}
