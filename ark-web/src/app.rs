use ark_game::PuzzleId;

use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use crate::{content::PuzzleCatalog, session::SessionHandle};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

/// What to render for a matched route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    Puzzle(PuzzleId),
    NotFound,
}

#[must_use]
pub fn screen_for(route: Option<&Route>) -> Screen {
    match route {
        Some(Route::Home) => Screen::Home,
        Some(route) => route.puzzle().map_or(Screen::NotFound, Screen::Puzzle),
        None => Screen::NotFound,
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let session = use_memo((), |_| SessionHandle::start());
    let catalog = use_memo((), |_| PuzzleCatalog::embedded());
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let session = (*session).clone();
    let catalog = Rc::clone(&catalog);
    match screen_for(route.as_ref()) {
        Screen::Home => html! { <HomeScreen {session} {catalog} /> },
        Screen::Puzzle(puzzle) => html! { <PuzzleScreen key={puzzle.name()} {session} {catalog} {puzzle} /> },
        Screen::NotFound => {
            let on_go_home = Callback::from(move |()| {
                if let Some(nav) = navigator.as_ref() {
                    nav.push(&Route::Home);
                }
            });
            html! { <crate::pages::not_found::NotFound {on_go_home} /> }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Properties, Clone, PartialEq)]
struct HomeScreenProps {
    session: SessionHandle,
    catalog: Rc<PuzzleCatalog>,
}

#[cfg(target_arch = "wasm32")]
#[function_component(HomeScreen)]
fn home_screen(props: &HomeScreenProps) -> Html {
    let navigator = use_navigator();
    let refresh = use_force_update();

    let on_select = Callback::from(move |puzzle: PuzzleId| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::for_puzzle(puzzle));
        }
    });
    let on_reset = {
        let session = props.session.clone();
        Callback::from(move |()| {
            session.session().reset();
            refresh.force_update();
        })
    };

    html! {
        <crate::pages::home::HomePage
            catalog={Rc::clone(&props.catalog)}
            summary={props.session.session().summary()}
            {on_select}
            {on_reset}
        />
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Properties, Clone, PartialEq)]
struct PuzzleScreenProps {
    session: SessionHandle,
    catalog: Rc<PuzzleCatalog>,
    puzzle: PuzzleId,
}

#[cfg(target_arch = "wasm32")]
#[function_component(PuzzleScreen)]
fn puzzle_screen(props: &PuzzleScreenProps) -> Html {
    use crate::session::WebPuzzleController;
    use crate::timer::IntervalScheduler;
    use ark_game::PuzzleController;

    let controller = use_mut_ref(|| None::<WebPuzzleController>);
    let reference_open = use_state(|| false);
    let navigator = use_navigator();
    let refresh = use_force_update();

    {
        let controller = controller.clone();
        let session = props.session.clone();
        let accepted = props.catalog.accepted(props.puzzle);
        let refresh = refresh.clone();
        use_effect_with(props.puzzle, move |&puzzle| {
            let on_tick = Callback::from(move |()| refresh.force_update());
            *controller.borrow_mut() = Some(PuzzleController::mount(
                session.session().clone(),
                puzzle,
                accepted,
                IntervalScheduler::notifying(on_tick),
            ));
            move || {
                if let Some(mut mounted) = controller.borrow_mut().take() {
                    mounted.teardown();
                }
            }
        });
    }

    let Some(entry) = props.catalog.entry(props.puzzle).cloned() else {
        log::error!("no content for {}", props.puzzle);
        return html! { <crate::pages::not_found::NotFound on_go_home={Callback::from(move |()| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Home);
            }
        })} /> };
    };

    let on_input = {
        let controller = controller.clone();
        let refresh = refresh.clone();
        Callback::from(move |text: String| {
            if let Some(mounted) = controller.borrow_mut().as_mut() {
                mounted.on_answer_input(&text);
            }
            refresh.force_update();
        })
    };
    let on_open_reference = {
        let controller = controller.clone();
        let reference_open = reference_open.clone();
        Callback::from(move |()| {
            if let Some(mounted) = controller.borrow().as_ref() {
                mounted.open_reference_sheet();
            }
            reference_open.set(true);
        })
    };
    let on_close_reference = {
        let reference_open = reference_open.clone();
        Callback::from(move |()| reference_open.set(false))
    };
    let on_back = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    });

    let progress = props
        .session
        .session()
        .repository()
        .with_state(|state| state.progress(props.puzzle).clone());

    html! {
        <crate::pages::puzzle::PuzzlePage
            {entry}
            draft={AttrValue::from(progress.user_answer)}
            solved={progress.completed}
            completion_time={progress.completion_time}
            reference_open={*reference_open}
            {on_input}
            {on_open_reference}
            {on_close_reference}
            {on_back}
        />
    }
}
