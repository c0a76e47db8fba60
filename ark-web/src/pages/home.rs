use std::rc::Rc;

use ark_game::{GameSummary, PuzzleId};
use yew::prelude::*;

use crate::components::alien_card::AlienCard;
use crate::components::button::Button;
use crate::content::PuzzleCatalog;

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    pub catalog: Rc<PuzzleCatalog>,
    pub summary: GameSummary,
    pub on_select: Callback<PuzzleId>,
    pub on_reset: Callback<()>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let solved = props.summary.puzzles.iter().filter(|p| p.completed).count();
    let cards = PuzzleId::ALL.iter().filter_map(|&puzzle| {
        let entry = props.catalog.entry(puzzle)?.clone();
        let summary = props.summary.puzzle(puzzle);
        Some(html! {
            <AlienCard
                key={puzzle.name()}
                {entry}
                completed={summary.is_some_and(|s| s.completed)}
                completion_time={summary.map_or(0, |s| s.completion_time)}
                on_select={props.on_select.clone()}
            />
        })
    });

    let footer = if props.summary.all_completed {
        html! {
            <div class="home__complete" data-testid="all-complete">
                <p>{ format!("All four languages decoded in {}.", props.summary.total_clock()) }</p>
                <Button
                    label="Play again"
                    test_id={AttrValue::from("reset-btn")}
                    on_press={props.on_reset.clone()}
                />
            </div>
        }
    } else {
        html! {
            <p class="home__progress" data-testid="progress">
                { format!("{solved} of {} decoded", PuzzleId::ALL.len()) }
            </p>
        }
    };

    html! {
        <main class="home" data-testid="home-screen">
            <header class="home__header">
                <h1>{ "Ark" }</h1>
                <p class="home__subtitle">{ "Four aliens are waiting to be understood." }</p>
            </header>
            <section class="home__cards">
                { for cards }
            </section>
            { footer }
        </main>
    }
}
