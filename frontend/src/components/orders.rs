use crate::auth::use_app;
use crate::components::icons::{ArrowUpDown, Calendar, Search};
use crate::components::modal::use_notifier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pharmaboard_shared::date::{DateRange, format_timestamp_short};
use pharmaboard_shared::models::Order;
use pharmaboard_shared::screens::orders::{OrderQuery, SortOrder};
use pharmaboard_shared::screens::{
    NOT_AUTHENTICATED_TEXT, NOT_AUTHENTICATED_TITLE, format_amount, result_count_label,
};

const LOAD_FAILED: &str = "Impossible de récupérer les commandes";

fn status_class(order: &Order) -> &'static str {
    if order.is_completed() {
        "badge badge-success"
    } else {
        "badge badge-warning"
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let app = use_app();
    let notifier = use_notifier();

    let orders = RwSignal::new(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);

    let (search, set_search) = signal(String::new());
    let (start, set_start) = signal(String::new());
    let (end, set_end) = signal(String::new());
    let (sort, set_sort) = signal(SortOrder::default());

    match app.session.credential() {
        None => {
            notifier.error(NOT_AUTHENTICATED_TITLE, NOT_AUTHENTICATED_TEXT);
            set_loading.set(false);
        }
        Some(credential) => {
            let api = app.api.clone();
            spawn_local(async move {
                match api.orders(&credential).await {
                    Ok(list) => orders.set(list),
                    Err(e) => notifier.api_error(&e, LOAD_FAILED),
                }
                set_loading.set(false);
            });
        }
    }

    let query = Memo::new(move |_| OrderQuery {
        search: search.get(),
        range: DateRange::from_inputs(&start.get(), &end.get()),
        sort: sort.get(),
    });

    let visible = Memo::new(move |_| {
        let query = query.get();
        orders.with(|list| query.apply(list).into_iter().cloned().collect::<Vec<_>>())
    });

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|order| {
                let seller = order.seller_name().unwrap_or("-").to_string();
                let total = order.total.map(format_amount).unwrap_or_else(|| "-".into());
                view! {
                    <tr class="hover">
                        <td class="font-mono">{order.id}</td>
                        <td>{seller}</td>
                        <td><span class=status_class(&order)>{order.status.clone()}</span></td>
                        <td>{total}</td>
                        <td>{format_timestamp_short(order.created_at)}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Commandes"</h1>
                <p class="opacity-70">"Visualisez les commandes passées à la pharmacie."</p>
            </div>

            <div class="flex flex-col lg:flex-row gap-3 lg:items-end">
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <Search attr:class="h-4 w-4 opacity-60" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Recherchez par ID, client ou statut..."
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                        prop:value=search
                    />
                </label>
                <label class="form-control">
                    <span class="label-text flex items-center gap-1">
                        <Calendar attr:class="h-4 w-4" /> "Du"
                    </span>
                    <input
                        type="date"
                        class="input input-bordered"
                        on:input=move |ev| set_start.set(event_target_value(&ev))
                        prop:value=start
                    />
                </label>
                <label class="form-control">
                    <span class="label-text flex items-center gap-1">
                        <Calendar attr:class="h-4 w-4" /> "Au"
                    </span>
                    <input
                        type="date"
                        class="input input-bordered"
                        on:input=move |ev| set_end.set(event_target_value(&ev))
                        prop:value=end
                    />
                </label>
                <button class="btn btn-outline" on:click=move |_| set_sort.update(|s| *s = s.toggled())>
                    <ArrowUpDown attr:class="h-4 w-4" />
                    {move || sort.get().label()}
                </button>
            </div>

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
                                <th>"Vendeur"</th>
                                <th>"Statut"</th>
                                <th>"Total (Ar)"</th>
                                <th>"Date"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
