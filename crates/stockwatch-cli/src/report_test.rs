use chrono::TimeZone;
use stockwatch_core::{diff_inventory, StockChange};

use super::*;

const TS: &str = "2026-10-19 08:30:00 UTC";

fn inv(entries: &[(&str, u64)]) -> Inventory {
    entries
        .iter()
        .map(|(name, count)| ((*name).to_string(), *count))
        .collect()
}

fn cats(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|l| (*l).to_string()).collect()
}

#[test]
fn timestamp_format() {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
    assert_eq!(format_timestamp(now), TS);
}

#[test]
fn region_tags_skip_first_two_segments() {
    assert_eq!(region_tags("香港-CN2-HKG-01"), vec!["HKG", "01"]);
    assert_eq!(region_tags("A-x-1"), vec!["1"]);
    assert!(region_tags("Plain").is_empty());
    assert!(region_tags("A-B").is_empty());
}

#[test]
fn region_tags_drop_non_alphanumeric_segments() {
    assert_eq!(region_tags("VPS-1-LA (CN2)-東京-"), vec!["東京"]);
}

#[test]
fn grouping_lists_product_under_every_matching_category() {
    let inventory = inv(&[("香港 Tokyo 双栈", 1), ("Tokyo-Lite", 2), ("洛杉矶", 3)]);
    let categories = cats(&["Tokyo", "香港", "Frankfurt"]);
    let groups = group_by_category(&inventory, &categories);

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].0, "Tokyo");
    assert_eq!(groups[0].1, vec![("Tokyo-Lite", 2), ("香港 Tokyo 双栈", 1)]);
    assert_eq!(groups[1].0, "香港");
    assert_eq!(groups[1].1, vec![("香港 Tokyo 双栈", 1)]);
    assert_eq!(groups[2].0, "Frankfurt");
    assert!(groups[2].1.is_empty());
}

#[test]
fn full_message_layout() {
    let inventory = inv(&[("香港-CN2-HKG", 5), ("东京-IIJ", 0)]);
    let categories = cats(&["香港", "东京", "首尔"]);
    let message = build_full_message(&inventory, &categories, "台", "realtime", TS);

    let expected = "📊 realtime 库存汇总\n\
                    \n\
                    【香港】\n\
                    香港-CN2-HKG: 5 台 (HKG)\n\
                    \n\
                    【东京】\n\
                    东京-IIJ: 0 台\n\
                    \n\
                    【首尔】\n\
                    \n\
                    更新时间：2026-10-19 08:30:00 UTC";
    assert_eq!(message, expected);
}

#[test]
fn full_message_with_no_categories_has_header_and_timestamp_only() {
    let message = build_full_message(&inv(&[("A", 1)]), &[], "台", "daily", TS);
    assert_eq!(message, format!("📊 daily 库存汇总\n\n更新时间：{TS}"));
}

#[test]
fn first_run_message_appends_marker() {
    let message = build_first_run_message(&inv(&[("A-x-1", 5)]), &cats(&["A"]), "台", "realtime", TS);
    assert!(message.starts_with("📊 realtime 库存汇总"));
    assert!(message.contains("A-x-1: 5 台 (1)"));
    assert!(message.ends_with("\n\n(首次采集)"));
}

#[test]
fn change_message_lists_sorted_changes_with_glyphs() {
    let previous = inv(&[("B", 9), ("A", 3)]);
    let current = inv(&[("B", 4), ("A", 7)]);
    let message = build_change_message(&diff_inventory(&previous, &current), "realtime", TS);

    let expected = "🔔 realtime 库存变动提醒\n\
                    \n\
                    A: 3 -> 7 ↗️\n\
                    B: 9 -> 4 ↘️\n\
                    更新时间：2026-10-19 08:30:00 UTC";
    assert_eq!(message, expected);
}

#[test]
fn change_message_renders_absent_side_as_dash() {
    let mut changes = Changes::new();
    changes.insert(
        "new".to_string(),
        StockChange {
            previous: None,
            current: Some(0),
        },
    );
    changes.insert(
        "gone".to_string(),
        StockChange {
            previous: Some(2),
            current: None,
        },
    );
    let message = build_change_message(&changes, "daily", TS);
    assert!(message.contains("gone: 2 -> - ↘️"), "message was: {message}");
    assert!(message.contains("new: - -> 0 ↗️"), "message was: {message}");
}

#[test]
fn fetch_failure_message_includes_error() {
    let msg = fetch_failure_message(&"unexpected HTTP status 502 from https://x");
    assert_eq!(msg, "⚠️ 库存监控抓取失败：unexpected HTTP status 502 from https://x");
}
