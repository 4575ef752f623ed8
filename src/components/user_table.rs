//! Users table with per-row asynchronous deletion.

#[cfg(test)]
#[path = "user_table_test.rs"]
mod user_table_test;

use leptos::prelude::*;

use crate::state::users::{RemovalStage, RowPhase, UserRow, UsersState};

/// CSS classes for a row in `phase`.
pub(crate) fn row_class(phase: RowPhase) -> &'static str {
    match phase {
        RowPhase::Idle | RowPhase::Restored => "user-row",
        RowPhase::Confirming => "user-row user-row--confirming",
        RowPhase::InFlight => "user-row user-row--busy",
        RowPhase::Removing(RemovalStage::Highlight) => "user-row user-row--removed",
        RowPhase::Removing(RemovalStage::Fade) => "user-row user-row--removed user-row--fading",
    }
}

pub(crate) fn delete_label(phase: RowPhase) -> &'static str {
    match phase {
        RowPhase::InFlight => "Deleting...",
        RowPhase::Removing(_) => "Deleted",
        _ => "Delete",
    }
}

#[component]
pub fn UserTable() -> impl IntoView {
    #[cfg(feature = "csr")]
    let config = StoredValue::new(expect_context::<crate::config::ClientConfig>());
    #[cfg(feature = "csr")]
    let notifier = expect_context::<crate::util::notify::ToastNotifier>();
    let users = expect_context::<RwSignal<UsersState>>();

    let on_delete = move |id: String| {
        #[cfg(feature = "csr")]
        {
            let service = config.with_value(|c| crate::services::users::UserDeletionService::browser(c, notifier));
            leptos::task::spawn_local(async move {
                let outcome = service.delete(&users, &id).await;
                log::debug!("delete {id}: {outcome:?}");
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = id;
    };

    let render_row = move |row: UserRow| {
        let id = row.id.clone();
        let phase = row.phase;
        let on_submit = move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            on_delete(id.clone());
        };
        view! {
            <tr class=row_class(phase)>
                <td>{row.name}</td>
                <td>{row.email}</td>
                <td>{row.role}</td>
                <td>
                    <form class="user-row__delete" action=row.delete_url method="post" on:submit=on_submit>
                        <button class="btn btn--danger" type="submit" disabled=!phase.accepts_delete()>
                            {(phase == RowPhase::InFlight).then(|| view! { <span class="spinner"></span> })}
                            {delete_label(phase)}
                        </button>
                    </form>
                </td>
            </tr>
        }
    };

    view! {
        <table class="admin-table users-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let rows = users.get().users;
                    if rows.is_empty() {
                        return view! {
                            <tr class="admin-table__empty">
                                <td colspan="4">"No users found"</td>
                            </tr>
                        }
                            .into_any();
                    }
                    rows.into_iter().map(render_row).collect::<Vec<_>>().into_any()
                }}
            </tbody>
        </table>
    }
}
