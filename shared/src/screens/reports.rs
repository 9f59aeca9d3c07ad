//! 报表页：畅销商品、周转率、销售趋势

use crate::date::report_label;
use crate::models::{BestSeller, RotationEntry, SalesEntry, SalesPeriod};

pub const ROTATION_LOADING: &str = "Chargement...";
pub const ROTATION_UNAVAILABLE: &str = "Non disponible";

/// 图表的一个数据点
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

pub fn best_seller_name(best: &[BestSeller]) -> Option<&str> {
    best.first().map(|b| b.product.name.as_str())
}

/// 畅销商品的周转率卡片文本
pub fn rotation_card(best_seller: Option<&str>, rotation: &[RotationEntry]) -> String {
    let Some(name) = best_seller else {
        return ROTATION_LOADING.to_string();
    };
    rotation
        .iter()
        .find(|r| r.product.name == name)
        .map(|r| format!("{}x/mois", r.rotation_ratio))
        .unwrap_or_else(|| ROTATION_UNAVAILABLE.to_string())
}

/// 按日时标签为法语长日期；按周/月使用后端给出的 `week` / `month`
pub fn sales_series(period: SalesPeriod, entries: &[SalesEntry]) -> Vec<SeriesPoint> {
    entries
        .iter()
        .map(|e| {
            let label = match period {
                SalesPeriod::Daily => e.date.as_deref().map(report_label),
                SalesPeriod::Weekly | SalesPeriod::Monthly => {
                    e.week.clone().or_else(|| e.month.clone())
                }
            };
            SeriesPoint {
                label: label.unwrap_or_default(),
                value: e.total_sales,
            }
        })
        .collect()
}

pub fn sales_chart_title(period: SalesPeriod) -> String {
    format!("Tendances des ventes ({})", period.label())
}

/// 数据点悬停提示
pub fn sales_point_title(period: SalesPeriod, label: &str) -> String {
    match period {
        SalesPeriod::Daily => format!("Ventes du {label}"),
        SalesPeriod::Weekly => format!("Ventes semaine {label}"),
        SalesPeriod::Monthly => format!("Ventes mois {label}"),
    }
}

/// 下拉框选项文本
pub fn period_option_label(period: SalesPeriod) -> &'static str {
    match period {
        SalesPeriod::Daily => "Journalier",
        SalesPeriod::Weekly => "Hebdomadaire",
        SalesPeriod::Monthly => "Mensuel",
    }
}

// =========================================================
// 图表几何
// =========================================================

/// SVG 绘图区
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Plot {
    /// 纵轴上限：最大值，全为 0 或空时取 1
    pub fn y_max(values: &[f64]) -> f64 {
        let max = values.iter().copied().fold(0.0_f64, f64::max);
        if max > 0.0 { max } else { 1.0 }
    }

    fn y(&self, value: f64, max: f64) -> f64 {
        let inner = self.height - 2.0 * self.padding;
        self.height - self.padding - (value.max(0.0) / max) * inner
    }

    /// 折线图各点坐标，横向均匀分布
    pub fn line_points(&self, values: &[f64]) -> Vec<(f64, f64)> {
        let max = Self::y_max(values);
        let inner = self.width - 2.0 * self.padding;
        let step = if values.len() > 1 {
            inner / (values.len() - 1) as f64
        } else {
            0.0
        };
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let x = if values.len() > 1 {
                    self.padding + step * i as f64
                } else {
                    self.width / 2.0
                };
                (x, self.y(*v, max))
            })
            .collect()
    }

    /// 柱状图：每根柱子的 `(x, y, 宽, 高)`
    pub fn bars(&self, values: &[f64]) -> Vec<(f64, f64, f64, f64)> {
        if values.is_empty() {
            return Vec::new();
        }
        let max = Self::y_max(values);
        let slot = (self.width - 2.0 * self.padding) / values.len() as f64;
        let bar_width = slot * 0.6;
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let top = self.y(*v, max);
                let x = self.padding + slot * i as f64 + (slot - bar_width) / 2.0;
                (x, top, bar_width, self.height - self.padding - top)
            })
            .collect()
    }
}

/// SVG `points` 属性
pub fn svg_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductRef;

    fn rotation(name: &str, ratio: f64) -> RotationEntry {
        RotationEntry {
            product: ProductRef { name: name.into() },
            rotation_ratio: ratio,
        }
    }

    fn entry(date: Option<&str>, week: Option<&str>, month: Option<&str>, total: f64) -> SalesEntry {
        SalesEntry {
            date: date.map(Into::into),
            week: week.map(Into::into),
            month: month.map(Into::into),
            total_sales: total,
        }
    }

    #[test]
    fn test_rotation_card_states() {
        let list = vec![rotation("Doliprane", 2.5), rotation("Efferalgan", 1.0)];
        assert_eq!(rotation_card(None, &list), "Chargement...");
        assert_eq!(rotation_card(Some("Doliprane"), &list), "2.5x/mois");
        assert_eq!(rotation_card(Some("Efferalgan"), &list), "1x/mois");
        assert_eq!(rotation_card(Some("Aspirine"), &list), "Non disponible");
    }

    #[test]
    fn test_best_seller_is_first_entry() {
        let best = vec![
            BestSeller {
                product: ProductRef { name: "Doliprane".into() },
            },
            BestSeller {
                product: ProductRef { name: "Smecta".into() },
            },
        ];
        assert_eq!(best_seller_name(&best), Some("Doliprane"));
        assert_eq!(best_seller_name(&[]), None);
    }

    #[test]
    fn test_series_labels_per_period() {
        let daily = sales_series(
            SalesPeriod::Daily,
            &[entry(Some("2025-01-05"), None, None, 1200.0)],
        );
        assert_eq!(daily[0].label, "05 janvier 2025");
        assert_eq!(daily[0].value, 1200.0);

        let weekly = sales_series(SalesPeriod::Weekly, &[entry(None, Some("2025-02"), None, 5.0)]);
        assert_eq!(weekly[0].label, "2025-02");

        let monthly = sales_series(SalesPeriod::Monthly, &[entry(None, None, Some("2025-01"), 9.0)]);
        assert_eq!(monthly[0].label, "2025-01");
    }

    #[test]
    fn test_titles() {
        assert_eq!(
            sales_chart_title(SalesPeriod::Weekly),
            "Tendances des ventes (Hebdomadaires)"
        );
        assert_eq!(sales_point_title(SalesPeriod::Daily, "05 janvier 2025"), "Ventes du 05 janvier 2025");
        assert_eq!(sales_point_title(SalesPeriod::Monthly, "2025-01"), "Ventes mois 2025-01");
    }

    #[test]
    fn test_plot_geometry() {
        let plot = Plot {
            width: 200.0,
            height: 100.0,
            padding: 10.0,
        };
        let pts = plot.line_points(&[0.0, 50.0, 100.0]);
        assert_eq!(pts, vec![(10.0, 90.0), (100.0, 50.0), (190.0, 10.0)]);
        assert_eq!(svg_points(&pts[..1]), "10.0,90.0");

        assert_eq!(plot.line_points(&[5.0]), vec![(100.0, 10.0)]);
        assert!(plot.bars(&[]).is_empty());

        let bars = plot.bars(&[10.0, 5.0]);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].3, 80.0);
        assert_eq!(bars[1].3, 40.0);
        assert_eq!(Plot::y_max(&[0.0, 0.0]), 1.0);
    }
}
