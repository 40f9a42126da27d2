//! Plain-text notification bodies.
//!
//! The full report groups products under every configured category whose
//! label appears in the product name; the change report lists only products
//! whose count moved since the previous snapshot.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use stockwatch_core::{Changes, Direction, Inventory};

pub(crate) const NOTHING_PARSED_MESSAGE: &str =
    "⚠️ 库存监控没有解析到任何库存，请检查页面结构或脚本。";

const FIRST_RUN_MARKER: &str = "(首次采集)";

pub(crate) fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

pub(crate) fn fetch_failure_message(error: &impl Display) -> String {
    format!("⚠️ 库存监控抓取失败：{error}")
}

/// Products listed under one category label.
pub(crate) type CategoryGroup<'a> = (&'a str, Vec<(&'a str, u64)>);

/// Groups products by substring match against each category, in configured
/// order. A product matching several labels is listed under each of them,
/// and categories with no match are kept with an empty list.
pub(crate) fn group_by_category<'a>(
    inventory: &'a Inventory,
    categories: &'a [String],
) -> Vec<CategoryGroup<'a>> {
    categories
        .iter()
        .map(|category| {
            let products = inventory
                .iter()
                .filter(|(name, _)| name.contains(category.as_str()))
                .map(|(name, count)| (name.as_str(), *count))
                .collect();
            (category.as_str(), products)
        })
        .collect()
}

/// Region tags carried in a product name: the dash-separated segments after
/// the second one, keeping only purely alphanumeric segments.
///
/// `"香港-CN2-HKG-01"` yields `["HKG", "01"]`.
pub(crate) fn region_tags(name: &str) -> Vec<&str> {
    name.split('-')
        .skip(2)
        .filter(|part| !part.is_empty() && part.chars().all(char::is_alphanumeric))
        .collect()
}

fn product_line(name: &str, count: u64, unit: &str) -> String {
    let regions = region_tags(name);
    if regions.is_empty() {
        format!("{name}: {count} {unit}")
    } else {
        format!("{name}: {count} {unit} ({})", regions.join(", "))
    }
}

pub(crate) fn build_full_message(
    inventory: &Inventory,
    categories: &[String],
    unit: &str,
    mode: &str,
    timestamp: &str,
) -> String {
    let mut lines = vec![format!("📊 {mode} 库存汇总"), String::new()];

    for (category, products) in group_by_category(inventory, categories) {
        lines.push(format!("【{category}】"));
        lines.extend(
            products
                .into_iter()
                .map(|(name, count)| product_line(name, count, unit)),
        );
        lines.push(String::new());
    }

    lines.push(format!("更新时间：{timestamp}"));
    lines.join("\n")
}

pub(crate) fn build_first_run_message(
    inventory: &Inventory,
    categories: &[String],
    unit: &str,
    mode: &str,
    timestamp: &str,
) -> String {
    let full = build_full_message(inventory, categories, unit, mode, timestamp);
    format!("{full}\n\n{FIRST_RUN_MARKER}")
}

fn render_count(count: Option<u64>) -> String {
    count.map_or_else(|| "-".to_string(), |c| c.to_string())
}

fn glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Increase => "↗️",
        Direction::Decrease => "↘️",
    }
}

pub(crate) fn build_change_message(changes: &Changes, mode: &str, timestamp: &str) -> String {
    let mut lines = vec![format!("🔔 {mode} 库存变动提醒"), String::new()];

    for (name, change) in changes {
        lines.push(format!(
            "{name}: {} -> {} {}",
            render_count(change.previous),
            render_count(change.current),
            glyph(change.direction())
        ));
    }

    lines.push(format!("更新时间：{timestamp}"));
    lines.join("\n")
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
