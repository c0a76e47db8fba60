use ark_game::{PuzzleId, format_clock};
use yew::prelude::*;

use crate::content::PuzzleEntry;
use crate::paths::asset_path;

/// Home-screen card for one alien.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub entry: PuzzleEntry,
    #[prop_or_default]
    pub completed: bool,
    #[prop_or_default]
    pub completion_time: u32,
    pub on_select: Callback<PuzzleId>,
}

#[function_component(AlienCard)]
pub fn alien_card(p: &Props) -> Html {
    let puzzle = p.entry.id;
    let onclick = {
        let on_select = p.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(puzzle))
    };
    let status = if p.completed {
        html! {
            <span class="alien-card__badge" data-testid={format!("{}-solved", puzzle.name())}>
                { format!("Decoded in {}", format_clock(u64::from(p.completion_time))) }
            </span>
        }
    } else {
        html! { <span class="alien-card__badge alien-card__badge--open">{ "Undeciphered" }</span> }
    };

    html! {
        <button
            type="button"
            class={classes!("alien-card", p.completed.then_some("alien-card--solved"))}
            data-testid={format!("card-{}", puzzle.name())}
            aria-label={format!("Open {}", puzzle.title())}
            {onclick}
        >
            <img class="alien-card__image" src={asset_path(&p.entry.image)} alt={puzzle.title()} />
            <div class="alien-card__body">
                <span class="alien-card__designation">{ p.entry.designation.clone() }</span>
                <h2 class="alien-card__title">{ puzzle.title() }</h2>
                <p class="alien-card__blurb">{ p.entry.blurb.clone() }</p>
                { status }
            </div>
        </button>
    }
}
