//! User management: the users table and the games aggregate it affects.
//!
//! Both tables read one `UsersState` seeded from the page bootstrap, so a
//! deletion can update game aggregates in place.

use leptos::prelude::*;

use crate::components::games_table::GamesTable;
use crate::components::user_table::UserTable;
use crate::config::ClientConfig;
use crate::state::users::UsersState;

#[component]
pub fn UsersPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    provide_context(RwSignal::new(UsersState::new(config.users, config.games)));

    view! {
        <div class="users-page">
            <section>
                <h2>"Users"</h2>
                <UserTable/>
            </section>
            <section>
                <h2>"Games"</h2>
                <GamesTable/>
            </section>
        </div>
    }
}
