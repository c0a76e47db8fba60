use yew::prelude::*;

use crate::content::VocabularyEntry;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub vocabulary: Vec<VocabularyEntry>,
    pub on_open: Callback<()>,
    pub on_close: Callback<()>,
}

/// Slide-out sheet of known signs. Each open is counted by the caller.
#[function_component(ReferenceDrawer)]
pub fn reference_drawer(p: &Props) -> Html {
    let open = {
        let cb = p.on_open.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    if !p.open {
        return html! {
            <button type="button" class="reference__toggle" data-testid="reference-open" onclick={open}>
                { "Reference sheet" }
            </button>
        };
    }

    html! {
        <aside class="reference" role="dialog" aria-label="Reference sheet" data-testid="reference-drawer">
            <header class="reference__header">
                <h2>{ "Reference sheet" }</h2>
                <button type="button" class="reference__close" data-testid="reference-close" onclick={close}>
                    { "Close" }
                </button>
            </header>
            <table class="reference__table">
                <tbody>
                    { for p.vocabulary.iter().map(|entry| html! {
                        <tr>
                            <td class="reference__sign">{ entry.sign.clone() }</td>
                            <td class="reference__meaning">{ entry.meaning.clone() }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </aside>
    }
}
