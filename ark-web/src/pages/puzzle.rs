use ark_game::format_clock;
use yew::prelude::*;

use crate::components::answer_input::AnswerInput;
use crate::components::button::Button;
use crate::components::reference_drawer::ReferenceDrawer;
use crate::content::{MediaItem, MediaKind, PuzzleEntry};
use crate::paths::asset_path;

#[derive(Properties, Clone, PartialEq)]
pub struct PuzzlePageProps {
    pub entry: PuzzleEntry,
    pub draft: AttrValue,
    #[prop_or_default]
    pub solved: bool,
    #[prop_or_default]
    pub completion_time: u32,
    #[prop_or_default]
    pub reference_open: bool,
    pub on_input: Callback<String>,
    pub on_open_reference: Callback<()>,
    pub on_close_reference: Callback<()>,
    pub on_back: Callback<()>,
}

fn render_media(item: &MediaItem) -> Html {
    let src = asset_path(&item.src);
    match item.kind {
        MediaKind::Audio => html! {
            <figure class="media media--audio">
                <audio controls={true} preload="none" src={src} />
                <figcaption>{ item.label.clone() }</figcaption>
            </figure>
        },
        MediaKind::Image | MediaKind::Symbol => html! {
            <figure class="media media--image">
                <img src={src} alt={item.label.clone()} />
                <figcaption>{ item.label.clone() }</figcaption>
            </figure>
        },
    }
}

#[function_component(PuzzlePage)]
pub fn puzzle_page(props: &PuzzlePageProps) -> Html {
    let puzzle = props.entry.id;
    let solved_banner = if props.solved {
        html! {
            <p class="puzzle__solved" data-testid="solved-banner">
                { format!("Decoded in {}", format_clock(u64::from(props.completion_time))) }
            </p>
        }
    } else {
        Html::default()
    };

    html! {
        <main class="puzzle" data-testid={format!("{}-screen", puzzle.name())}>
            <header class="puzzle__header">
                <Button label="Return to the Ark" test_id={AttrValue::from("back-btn")} on_press={props.on_back.clone()} />
                <span class="puzzle__designation">{ props.entry.designation.clone() }</span>
                <h1>{ puzzle.title() }</h1>
            </header>
            <section class="puzzle__media">
                { for props.entry.media.iter().map(render_media) }
            </section>
            <ReferenceDrawer
                open={props.reference_open}
                vocabulary={props.entry.vocabulary.clone()}
                on_open={props.on_open_reference.clone()}
                on_close={props.on_close_reference.clone()}
            />
            <AnswerInput value={props.draft.clone()} solved={props.solved} on_input={props.on_input.clone()} />
            { solved_banner }
        </main>
    }
}
