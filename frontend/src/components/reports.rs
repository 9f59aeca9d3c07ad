//! 报表页：畅销商品、周转率、销售趋势与临界库存

use crate::auth::use_app;
use crate::components::charts::{BarChart, LineChart};
use crate::components::icons::{RefreshCw, Star, TriangleAlert};
use crate::components::modal::use_notifier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pharmaboard_shared::models::{BestSeller, Product, RotationEntry, SalesEntry, SalesPeriod};
use pharmaboard_shared::screens::reports::{
    ROTATION_LOADING, SeriesPoint, best_seller_name, period_option_label, rotation_card,
    sales_chart_title, sales_point_title, sales_series,
};
use pharmaboard_shared::screens::stock::critical_products;
use pharmaboard_shared::screens::{NOT_AUTHENTICATED_TEXT, NOT_AUTHENTICATED_TITLE};

const OVERVIEW_FAILED: &str = "Impossible de charger les rapports";
const SALES_FAILED: &str = "Impossible de charger les ventes";

#[component]
pub fn ReportsPage() -> impl IntoView {
    let app = use_app();
    let notifier = use_notifier();
    let credential = app.session.credential();

    let best = RwSignal::new(Vec::<BestSeller>::new());
    let products = RwSignal::new(Vec::<Product>::new());
    let rotation = RwSignal::new(Vec::<RotationEntry>::new());
    let sales = RwSignal::new(Vec::<SalesEntry>::new());
    let (period, set_period) = signal(SalesPeriod::default());

    let Some(credential) = credential else {
        notifier.error(NOT_AUTHENTICATED_TITLE, NOT_AUTHENTICATED_TEXT);
        return ().into_any();
    };

    {
        let api = app.api.clone();
        let credential = credential.clone();
        spawn_local(async move {
            match api.report_overview(&credential).await {
                Ok((b, p)) => {
                    best.set(b);
                    products.set(p);
                }
                Err(e) => notifier.api_error(&e, OVERVIEW_FAILED),
            }
            // 周转率失败时卡片显示为不可用
            match api.stock_rotation(&credential).await {
                Ok(r) => rotation.set(r),
                Err(e) => tracing::warn!(error = %e, "stock rotation unavailable"),
            }
        });
    }

    // 切换周期时重新获取销售数据
    let api = app.api.clone();
    Effect::new(move |_| {
        let period = period.get();
        let api = api.clone();
        let credential = credential.clone();
        spawn_local(async move {
            match api.sales_report(&credential, period).await {
                Ok(entries) => sales.set(entries),
                Err(e) => {
                    sales.set(Vec::new());
                    notifier.api_error(&e, SALES_FAILED);
                }
            }
        });
    });

    let best_name = move || {
        best.with(|b| best_seller_name(b).map(str::to_string))
            .unwrap_or_else(|| ROTATION_LOADING.to_string())
    };
    let rotation_text = move || {
        best.with(|b| rotation.with(|r| rotation_card(best_seller_name(b), r)))
    };

    let sales_chart = move || {
        let period = period.get();
        let points = sales.with(|s| sales_series(period, s));
        view! {
            <LineChart
                points=points
                y_label="Montant des ventes (Ar)"
                point_title=Box::new(move |p: &SeriesPoint| sales_point_title(period, &p.label))
            />
        }
    };

    let critical_chart = move || {
        let points = products.with(|list| {
            critical_products(list)
                .into_iter()
                .map(|p| SeriesPoint {
                    label: p.name.clone(),
                    value: p.quantity as f64,
                })
                .collect::<Vec<_>>()
        });
        view! { <BarChart points=points /> }
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Rapports"</h1>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div class="stat bg-base-100 rounded-box shadow">
                    <div class="stat-figure text-warning"><Star attr:class="h-8 w-8" /></div>
                    <div class="stat-title">"Produit le plus vendu"</div>
                    <div class="stat-value text-2xl">{best_name}</div>
                </div>
                <div class="stat bg-base-100 rounded-box shadow">
                    <div class="stat-figure text-info"><RefreshCw attr:class="h-8 w-8" /></div>
                    <div class="stat-title">"Rotation du stock"</div>
                    <div class="stat-value text-2xl">{rotation_text}</div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex flex-wrap items-center justify-between gap-2">
                        <h2 class="card-title">{move || sales_chart_title(period.get())}</h2>
                        <select
                            class="select select-bordered select-sm"
                            on:change=move |ev| {
                                if let Some(p) = SalesPeriod::parse(&event_target_value(&ev)) {
                                    set_period.set(p);
                                }
                            }
                        >
                            {SalesPeriod::ALL
                                .into_iter()
                                .map(|p| view! {
                                    <option value=p.as_str() selected=move || period.get() == p>
                                        {period_option_label(p)}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    {sales_chart}
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">
                        <TriangleAlert attr:class="h-5 w-5 text-error" /> "Stocks Critiques"
                    </h2>
                    {critical_chart}
                </div>
            </div>
        </div>
    }
    .into_any()
}
