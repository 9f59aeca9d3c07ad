use crate::auth::use_app;
use crate::components::icons::{Search, ShieldCheck, User as UserIcon};
use crate::components::modal::use_notifier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pharmaboard_shared::Role;
use pharmaboard_shared::models::User;
use pharmaboard_shared::screens::users::{
    LOAD_FAILED, display_created_at, display_phone, filter_users,
};
use pharmaboard_shared::screens::{
    NOT_AUTHENTICATED_TEXT, NOT_AUTHENTICATED_TITLE, result_count_label,
};

fn role_icon(role: Role) -> impl IntoView {
    match role {
        Role::Admin => view! {
            <span class="tooltip" data-tip={Role::Admin.label()}>
                <ShieldCheck attr:class="h-5 w-5 text-primary" />
            </span>
        }
        .into_any(),
        other => view! {
            <span class="tooltip" data-tip={other.label()}>
                <UserIcon attr:class="h-5 w-5 text-secondary" />
            </span>
        }
        .into_any(),
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let app = use_app();
    let notifier = use_notifier();

    let users = RwSignal::new(Vec::<User>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());

    match app.session.credential() {
        None => {
            notifier.error(NOT_AUTHENTICATED_TITLE, NOT_AUTHENTICATED_TEXT);
            set_loading.set(false);
        }
        Some(credential) => {
            let api = app.api.clone();
            spawn_local(async move {
                match api.users(&credential).await {
                    Ok(list) => users.set(list),
                    Err(e) => notifier.api_error(&e, LOAD_FAILED),
                }
                set_loading.set(false);
            });
        }
    }

    let visible = Memo::new(move |_| {
        let query = search.get();
        users.with(|list| filter_users(list, &query).into_iter().cloned().collect::<Vec<_>>())
    });

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|user| {
                view! {
                    <tr class="hover">
                        <td class="font-mono">{user.id}</td>
                        <td>{role_icon(user.role_id)}</td>
                        <td>{user.name.clone()}</td>
                        <td>{user.email.clone()}</td>
                        <td>{display_phone(&user)}</td>
                        <td>{display_created_at(&user)}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Utilisateurs"</h1>

            <label class="input input-bordered flex items-center gap-2">
                <Search attr:class="h-4 w-4 opacity-60" />
                <input
                    type="text"
                    class="grow"
                    placeholder="Rechercher par ID, nom ou email..."
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                    prop:value=search
                />
            </label>

            <p class="text-sm opacity-70">{move || result_count_label(visible.with(Vec::len))}</p>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="flex justify-center p-8"><span class="loading loading-spinner loading-lg"></span></div> }
            >
                <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Rôle"</th>
                                <th>"Nom"</th>
                                <th>"Email"</th>
                                <th>"Téléphone"</th>
                                <th>"Créé le"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
