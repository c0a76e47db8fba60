use yew::prelude::*;

/// Shown when no route matches.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel not-found" aria-live="assertive" data-testid="not-found">
            <h1>{ "Signal lost" }</h1>
            <p>{ "There is nothing to decode at this address." }</p>
            <button type="button" onclick={go_home}>
                { "Back to the Ark" }
            </button>
        </section>
    }
}
