use leptos::prelude::*;

use crate::api::Record;

/// Presentational card for one user record: thumbnail on the left, name,
/// phone and email on the right. Stateless — the list keys cards by email, so
/// an unchanged record is never re-rendered.
#[component]
pub fn UserCard(record: Record) -> impl IntoView {
    let alt = format!("{}'s portrait", record.display_name);

    view! {
        <div class="user-card">
            <div class="user-card-image">
                <img src=record.thumbnail_url alt=alt />
            </div>
            <div class="user-card-info">
                <h2 class="user-card-name">{record.display_name}</h2>
                <p class="user-card-phone">{record.phone}</p>
                <p class="user-card-email">{record.email}</p>
            </div>
        </div>
    }
}
