mod handlers;

pub use handlers::AppHandlers;

use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::pages::booking::BookingPage;
use crate::pages::confirmation::ConfirmationPage;
use crate::pages::not_found::NotFoundPage;
use crate::router::Route;
use yew::prelude::*;

pub fn render_app(state: &AppState, route: Option<&Route>) -> Html {
    let handlers = AppHandlers::new(state);
    let main_view = render_main_view(state, &handlers, route);

    let go_booking = {
        let phase = state.phase.clone();
        Callback::from(move |()| phase.set(Phase::Booking))
    };
    let go_confirmation = {
        let phase = state.phase.clone();
        Callback::from(move |()| phase.set(Phase::Confirmation))
    };

    html! {
        <>
            <crate::components::header::Header
                on_book={go_booking}
                on_confirmation={go_confirmation}
                on_lang_change={handlers.lang_change.clone()}
                current_lang={(*state.current_language).clone()}
            />
            <main id="main" role="main">
                { main_view }
            </main>
            <crate::components::footer::Footer />
        </>
    }
}

fn render_main_view(state: &AppState, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    match route {
        Some(Route::Confirmation) => html! {
            <ConfirmationPage
                confirmation={(*state.confirmation).clone()}
                on_new_booking={handlers.new_booking.clone()}
            />
        },
        Some(Route::NotFound) => html! {
            <NotFoundPage on_back={handlers.new_booking.clone()} />
        },
        Some(Route::Booking) | None => html! {
            <BookingPage
                when={(*state.when).clone()}
                time={(*state.time).clone()}
                people={(*state.people).clone()}
                lanes={(*state.lanes).clone()}
                shoes={(*state.shoes).clone()}
                error={*state.error}
                in_flight={*state.in_flight}
                quote={state.quoted_price()}
                on_when_change={handlers.when_change.clone()}
                on_time_change={handlers.time_change.clone()}
                on_people_change={handlers.people_change.clone()}
                on_lanes_change={handlers.lanes_change.clone()}
                on_shoe_change={handlers.shoe_change.clone()}
                on_add_shoe={handlers.add_shoe.clone()}
                on_remove_shoe={handlers.remove_shoe.clone()}
                on_submit={handlers.submit.clone()}
            />
        },
    }
}
