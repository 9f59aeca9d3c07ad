//! 销售员面板：录入销售与个人订单

use crate::auth::use_app;
use crate::components::icons::{LogOut, Pill, ShoppingCart};
use crate::components::modal::use_notifier;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pharmaboard_shared::auth;
use pharmaboard_shared::date::format_timestamp_short;
use pharmaboard_shared::models::{Order, Product, UserProfile};
use pharmaboard_shared::screens::seller::{
    LOAD_FAILED, SALE_FAILED, SALE_RECORDED_TEXT, SALE_RECORDED_TITLE, order_amount,
    product_option_label, seller_orders, validate_sale,
};
use pharmaboard_shared::screens::{NOT_AUTHENTICATED_TEXT, NOT_AUTHENTICATED_TITLE, format_amount};

#[component]
pub fn SellerPage() -> impl IntoView {
    let app = use_app();
    let router = use_router();
    let notifier = use_notifier();
    let session = app.session;
    let api = StoredValue::new(app.api.clone());

    let me = RwSignal::new(None::<UserProfile>);
    let products = RwSignal::new(Vec::<Product>::new());
    let orders = RwSignal::new(Vec::<Order>::new());
    let (product_id, set_product_id) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    match session.credential() {
        None => notifier.error(NOT_AUTHENTICATED_TITLE, NOT_AUTHENTICATED_TEXT),
        Some(credential) => {
            let api = api.get_value();
            spawn_local(async move {
                match api.seller_overview(&credential).await {
                    Ok((profile, p, o)) => {
                        me.set(Some(profile));
                        products.set(p);
                        orders.set(o);
                    }
                    Err(e) => notifier.api_error(&e, LOAD_FAILED),
                }
            });
        }
    }

    let on_sale = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let line = match products.with_untracked(|list| {
            validate_sale(list, &product_id.get_untracked(), &quantity.get_untracked())
        }) {
            Ok(line) => line,
            Err(e) => {
                notifier.error(e.title(), &e.to_string());
                return;
            }
        };
        let Some(credential) = session.credential() else {
            notifier.error(NOT_AUTHENTICATED_TITLE, NOT_AUTHENTICATED_TEXT);
            return;
        };

        set_is_submitting.set(true);
        let api = api.get_value();
        spawn_local(async move {
            match api.create_order(&credential, vec![line]).await {
                Ok(()) => {
                    notifier.success(SALE_RECORDED_TITLE, SALE_RECORDED_TEXT);
                    set_product_id.set(String::new());
                    set_quantity.set(String::new());
                    match api.refresh_stock_and_orders(&credential).await {
                        Ok((p, o)) => {
                            products.set(p);
                            orders.set(o);
                        }
                        Err(e) => notifier.api_error(&e, LOAD_FAILED),
                    }
                }
                Err(e) => notifier.api_error(&e, SALE_FAILED),
            }
            set_is_submitting.set(false);
        });
    };

    let on_logout = move |_| {
        let target = auth::logout(&session);
        router.go(target);
    };

    let my_orders = move || {
        let Some(seller_id) = me.with(|m| m.as_ref().map(|m| m.id)) else {
            return Vec::new();
        };
        orders.with(|list| {
            seller_orders(list, seller_id)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let order_rows = move || {
        my_orders()
            .into_iter()
            .map(|order| {
                let amount = order_amount(&order)
                    .map(format_amount)
                    .unwrap_or_else(|| "-".into());
                let status_class = if order.is_completed() {
                    "badge badge-success"
                } else {
                    "badge badge-warning"
                };
                view! {
                    <tr class="hover">
                        <td class="font-mono">{order.id}</td>
                        <td>{amount}</td>
                        <td><span class=status_class>{order.status.clone()}</span></td>
                        <td>{format_timestamp_short(order.created_at)}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    let product_options = move || {
        products.with(|list| {
            list.iter()
                .map(|p| {
                    let value = p.id.to_string();
                    view! { <option value=value>{product_option_label(p)}</option> }
                })
                .collect_view()
        })
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-neutral text-neutral-content shadow">
                <div class="flex-1 gap-2 text-xl font-bold">
                    <Pill attr:class="h-6 w-6 text-info" /> "Dashboard Vendeur"
                </div>
                <div class="flex-none gap-3">
                    <span class="hidden sm:inline text-sm">
                        {move || me.with(|m| m.as_ref().map(|m| m.name.clone()).unwrap_or_default())}
                    </span>
                    <button class="btn btn-ghost btn-sm" title="Déconnexion" on:click=on_logout>
                        <LogOut attr:class="h-5 w-5 text-error" />
                        "Déconnexion"
                    </button>
                </div>
            </div>

            <div class="p-4 grid grid-cols-1 lg:grid-cols-3 gap-6">
                <form class="card bg-base-100 shadow" on:submit=on_sale>
                    <div class="card-body gap-4">
                        <h2 class="card-title">
                            <ShoppingCart attr:class="h-5 w-5" /> "Nouvelle vente"
                        </h2>
                        <select
                            class="select select-bordered w-full"
                            on:change=move |ev| set_product_id.set(event_target_value(&ev))
                            prop:value=product_id
                        >
                            <option value="">"Sélectionnez un produit"</option>
                            {product_options}
                        </select>
                        <input
                            type="number"
                            min="1"
                            class="input input-bordered w-full"
                            placeholder="Quantité"
                            on:input=move |ev| set_quantity.set(event_target_value(&ev))
                            prop:value=quantity
                        />
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> }.into_any()
                            } else {
                                "Enregistrer la vente".into_any()
                            }}
                        </button>
                    </div>
                </form>

                <div class="card bg-base-100 shadow lg:col-span-2">
                    <div class="card-body">
                        <h2 class="card-title">"Mes ventes"</h2>
                        <div class="overflow-x-auto">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Montant"</th>
                                        <th>"Statut"</th>
                                        <th>"Date"</th>
                                    </tr>
                                </thead>
                                <tbody>{order_rows}</tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
