use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub test_id: Option<AttrValue>,
    #[prop_or_default]
    pub on_press: Callback<()>,
}

#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let onclick = {
        let on_press = p.on_press.clone();
        Callback::from(move |_: MouseEvent| on_press.emit(()))
    };
    html! {
        <button
            type="button"
            class={classes!("ark-button", p.class.clone())}
            data-testid={p.test_id.clone()}
            {onclick}
        >
            { p.label.clone() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn button_renders_label() {
        let props = Props {
            label: AttrValue::from("Return"),
            class: Classes::new(),
            test_id: Some(AttrValue::from("back-btn")),
            on_press: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Button>::with_props(props).render());
        assert!(html.contains("Return"));
        assert!(html.contains("back-btn"));
    }
}
