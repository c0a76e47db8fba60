use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub value: AttrValue,
    #[prop_or_default]
    pub solved: bool,
    pub on_input: Callback<String>,
}

/// Translation box. Locked once the puzzle is solved.
#[function_component(AnswerInput)]
pub fn answer_input(p: &Props) -> Html {
    let oninput = {
        let on_input = p.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };
    let feedback = if p.solved {
        html! { <p class="answer__feedback answer__feedback--correct" data-testid="answer-correct" aria-live="polite">{ "Translation confirmed." }</p> }
    } else {
        Html::default()
    };

    html! {
        <div class={classes!("answer", p.solved.then_some("answer--solved"))}>
            <label class="answer__label" for="answer-input">{ "Your translation" }</label>
            <input
                id="answer-input"
                class="answer__input"
                type="text"
                autocomplete="off"
                spellcheck="false"
                value={p.value.clone()}
                readonly={p.solved}
                {oninput}
            />
            { feedback }
        </div>
    }
}
