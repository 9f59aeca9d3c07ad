//! 库存与预警：商品列表、增删改、数量调整

use crate::auth::use_app;
use crate::components::icons::{Minus, Pencil, Plus, Search, Trash2, TriangleAlert};
use crate::components::modal::{confirm, use_notifier};
use leptos::prelude::*;
use leptos::task::spawn_local;
use pharmaboard_shared::Credential;
use pharmaboard_shared::models::{Product, ProductId};
use pharmaboard_shared::screens::stock::{
    ProductForm, QuantityOperation, adjust_quantity, filter_products, needs_alert,
};
use pharmaboard_shared::screens::{
    NOT_AUTHENTICATED_TEXT, NOT_AUTHENTICATED_TITLE, format_amount, result_count_label,
};

const LOAD_FAILED: &str = "Impossible de récupérer les produits";
const DELETE_CONFIRM: &str = "Êtes-vous sûr de vouloir supprimer ce produit ?";

/// 弹窗状态：新建或编辑某个商品
#[derive(Debug, Clone, PartialEq)]
enum Editor {
    Create,
    Edit(ProductId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Name,
    Category,
    Reference,
    Price,
    Quantity,
    Supplier,
}

impl FormField {
    const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Category,
        FormField::Reference,
        FormField::Price,
        FormField::Quantity,
        FormField::Supplier,
    ];

    fn label(self) -> &'static str {
        match self {
            FormField::Name => "Nom",
            FormField::Category => "Catégorie",
            FormField::Reference => "Référence",
            FormField::Price => "Prix (Ar)",
            FormField::Quantity => "Quantité",
            FormField::Supplier => "Fournisseur",
        }
    }

    fn read(self, form: &ProductForm) -> &str {
        match self {
            FormField::Name => &form.name,
            FormField::Category => &form.category,
            FormField::Reference => &form.reference,
            FormField::Price => &form.price,
            FormField::Quantity => &form.quantity,
            FormField::Supplier => &form.supplier,
        }
    }

    fn slot(self, form: &mut ProductForm) -> &mut String {
        match self {
            FormField::Name => &mut form.name,
            FormField::Category => &mut form.category,
            FormField::Reference => &mut form.reference,
            FormField::Price => &mut form.price,
            FormField::Quantity => &mut form.quantity,
            FormField::Supplier => &mut form.supplier,
        }
    }
}

#[component]
pub fn StockAlertsPage() -> impl IntoView {
    let app = use_app();
    let notifier = use_notifier();
    let session = app.session;
    let api = StoredValue::new(app.api.clone());

    let products = RwSignal::new(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    // 每次增加都会重新拉取列表
    let version = RwSignal::new(0u32);

    let editor = RwSignal::new(None::<Editor>);
    let form = RwSignal::new(ProductForm::default());
    let adjusting = RwSignal::new(None::<(Product, QuantityOperation)>);
    let (amount, set_amount) = signal(String::new());

    let credential = move || -> Option<Credential> {
        let credential = session.credential();
        if credential.is_none() {
            notifier.error(NOT_AUTHENTICATED_TITLE, NOT_AUTHENTICATED_TEXT);
        }
        credential
    };
    let refresh = move || version.update(|v| *v += 1);

    Effect::new(move |_| {
        version.track();
        let Some(credential) = credential() else {
            set_loading.set(false);
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            match api.products(&credential).await {
                Ok(list) => products.set(list),
                Err(e) => notifier.api_error(&e, LOAD_FAILED),
            }
            set_loading.set(false);
        });
    });

    // ---------------- 新建 / 编辑 ----------------

    let open_create = move |_| {
        form.set(ProductForm::default());
        editor.set(Some(Editor::Create));
    };
    let open_edit = move |product: &Product| {
        form.set(ProductForm::from_product(product));
        editor.set(Some(Editor::Edit(product.id.clone())));
    };

    let on_save = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mode) = editor.get_untracked() else {
            return;
        };
        let input = match form.with_untracked(ProductForm::to_input) {
            Ok(input) => input,
            Err(e) => {
                notifier.error("Opération échouée", &e.to_string());
                return;
            }
        };
        let Some(credential) = credential() else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            let (result, done) = match mode {
                Editor::Create => (
                    api.create_product(&credential, input).await,
                    "Le produit a été ajouté avec succès.",
                ),
                Editor::Edit(id) => (
                    api.update_product(&credential, id, input).await,
                    "Le produit a été modifié avec succès.",
                ),
            };
            match result {
                Ok(()) => {
                    editor.set(None);
                    notifier.success("Opération réussie", done);
                    refresh();
                }
                Err(e) => notifier.api_error(&e, "Opération échouée"),
            }
        });
    };

    // ---------------- 删除 ----------------

    let on_delete = move |id: ProductId| {
        if !confirm(DELETE_CONFIRM) {
            return;
        }
        let Some(credential) = credential() else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            match api.delete_product(&credential, id).await {
                Ok(()) => {
                    notifier.success("Supprimé", "Le produit a été supprimé.");
                    refresh();
                }
                Err(e) => notifier.api_error(&e, "Suppression échouée"),
            }
        });
    };

    // ---------------- 数量调整 ----------------

    let open_adjust = move |product: &Product, op: QuantityOperation| {
        set_amount.set(String::new());
        adjusting.set(Some((product.clone(), op)));
    };

    let on_adjust = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some((product, op)) = adjusting.get_untracked() else {
            return;
        };
        let quantity = match adjust_quantity(product.quantity, op, &amount.get_untracked()) {
            Ok(q) => q,
            Err(e) => {
                notifier.error("Erreur", &e.to_string());
                return;
            }
        };
        let Some(credential) = credential() else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            match api.set_product_quantity(&credential, product.id, quantity).await {
                Ok(()) => {
                    adjusting.set(None);
                    notifier.success(
                        "Quantité mise à jour",
                        &format!("Nouvelle quantité : {quantity}"),
                    );
                    refresh();
                }
                Err(e) => notifier.api_error(&e, "Echec de la mise à jour"),
            }
        });
    };

    // ---------------- 视图 ----------------

    let visible = Memo::new(move |_| {
        let query = search.get();
        products.with(|list| {
            filter_products(list, &query)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|product| {
                let alert = needs_alert(&product);
                let id = product.id.clone();
                let edit_target = product.clone();
                let inc_target = product.clone();
                let dec_target = product.clone();
                view! {
                    <tr class="hover">
                        <td>
                            <div class="flex items-center gap-2">
                                {product.name.clone()}
                                <Show when=move || alert>
                                    <span class="badge badge-error gap-1" title="Niveau critique">
                                        <TriangleAlert attr:class="h-3 w-3" />
                                    </span>
                                </Show>
                            </div>
                        </td>
                        <td>{product.category.clone()}</td>
                        <td>{product.reference.clone().unwrap_or_default()}</td>
                        <td>{format_amount(product.price)}</td>
                        <td class={if alert { "font-bold text-error" } else { "" }}>{product.quantity}</td>
                        <td>{product.supplier.clone()}</td>
                        <td>
                            <div class="flex gap-1">
                                <button
                                    class="btn btn-ghost btn-xs"
                                    title={QuantityOperation::Increment.title()}
                                    on:click=move |_| open_adjust(&inc_target, QuantityOperation::Increment)
                                >
                                    <Plus attr:class="h-4 w-4 text-success" />
                                </button>
                                <button
                                    class="btn btn-ghost btn-xs"
                                    title={QuantityOperation::Decrement.title()}
                                    on:click=move |_| open_adjust(&dec_target, QuantityOperation::Decrement)
                                >
                                    <Minus attr:class="h-4 w-4 text-warning" />
                                </button>
                                <button class="btn btn-ghost btn-xs" title="Modifier" on:click=move |_| open_edit(&edit_target)>
                                    <Pencil attr:class="h-4 w-4 text-info" />
                                </button>
                                <button class="btn btn-ghost btn-xs" title="Supprimer" on:click=move |_| on_delete(id.clone())>
                                    <Trash2 attr:class="h-4 w-4 text-error" />
                                </button>
                            </div>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    let form_fields = FormField::ALL
        .into_iter()
        .map(|field| {
            let input_type = match field {
                FormField::Quantity => "number",
                _ => "text",
            };
            view! {
                <label class="form-control w-full">
                    <span class="label-text">{field.label()}</span>
                    <input
                        type=input_type
                        class="input input-bordered w-full"
                        required={field == FormField::Name}
                        prop:value=move || form.with(|f| field.read(f).to_string())
                        on:input=move |ev| form.update(|f| *field.slot(f) = event_target_value(&ev))
                    />
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-2">
                <h1 class="text-3xl font-bold">"Stock & Alertes"</h1>
                <button class="btn btn-primary" on:click=open_create>
                    <Plus attr:class="h-4 w-4" /> "Ajouter un produit"
                </button>
            </div>

            <label class="input input-bordered flex items-center gap-2">
                <Search attr:class="h-4 w-4 opacity-60" />
                <input
                    type="text"
                    class="grow"
                    placeholder="Rechercher par nom, catégorie ou fournisseur..."
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
                                <th>"Nom"</th>
                                <th>"Catégorie"</th>
                                <th>"Référence"</th>
                                <th>"Prix"</th>
                                <th>"Quantité"</th>
                                <th>"Fournisseur"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </Show>

            <div class=move || if editor.with(Option::is_some) { "modal modal-open" } else { "modal" }>
                <form class="modal-box space-y-3" on:submit=on_save>
                    <h3 class="font-bold text-lg">
                        {move || match editor.get() {
                            Some(Editor::Edit(_)) => "Modifier le produit",
                            _ => "Nouveau produit",
                        }}
                    </h3>
                    {form_fields}
                    <div class="modal-action">
                        <button type="button" class="btn" on:click=move |_| editor.set(None)>"Annuler"</button>
                        <button type="submit" class="btn btn-primary">"Enregistrer"</button>
                    </div>
                </form>
            </div>

            <div class=move || if adjusting.with(Option::is_some) { "modal modal-open" } else { "modal" }>
                <form class="modal-box space-y-3" on:submit=on_adjust>
                    <h3 class="font-bold text-lg">
                        {move || adjusting.with(|a| a.as_ref().map(|(_, op)| op.title()).unwrap_or_default())}
                    </h3>
                    <p class="text-sm opacity-70">
                        {move || adjusting.with(|a| {
                            a.as_ref()
                                .map(|(p, _)| format!("{} (stock actuel : {})", p.name, p.quantity))
                                .unwrap_or_default()
                        })}
                    </p>
                    <input
                        type="number"
                        min="1"
                        class="input input-bordered w-full"
                        placeholder="Quantité"
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                        prop:value=amount
                    />
                    <div class="modal-action">
                        <button type="button" class="btn" on:click=move |_| adjusting.set(None)>"Annuler"</button>
                        <button type="submit" class="btn btn-primary">"Valider"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
