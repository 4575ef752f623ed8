//! Games aggregate table; rows flash when a user deletion changes them.

use leptos::prelude::*;

use crate::state::users::UsersState;

#[component]
pub fn GamesTable() -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();

    view! {
        <table class="admin-table games-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Total play time"</th>
                    <th>"Unique players"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let games = users.get().games;
                    if games.is_empty() {
                        return view! {
                            <tr class="admin-table__empty">
                                <td colspan="3">"No games found"</td>
                            </tr>
                        }
                            .into_any();
                    }
                    games
                        .into_iter()
                        .map(|game| {
                            let class = if game.highlighted { "game-row game-row--updated" } else { "game-row" };
                            view! {
                                <tr class=class data-game-id=game.id>
                                    <td>{game.title}</td>
                                    <td>{game.play_time}</td>
                                    <td>{game.unique_players}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </tbody>
        </table>
    }
}
